//! # clinform-widgets
//!
//! Date entry widgets for clinical form rendering.
//!
//! This crate provides:
//! - A calendar [`DateWidget`] that renders view/edit markup and parses
//!   submitted values
//! - Date-pattern translation between the server-side dialect, the client
//!   date picker's dialect, and chrono's strftime dialect
//! - A render context and settings abstraction so widgets stay free of
//!   ambient global state
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use clinform_widgets::{
//!     DateWidget, FormRenderContext, Mode, StaticSettings, Widget,
//! };
//!
//! let settings = StaticSettings::new();
//! let mut ctx = FormRenderContext::new(Mode::Edit, &settings);
//! let field = ctx.register_field();
//!
//! let mut widget = DateWidget::new();
//! widget.set_initial_value(NaiveDate::from_ymd_opt(2024, 3, 14));
//!
//! // Edit mode: a display input, a hidden ISO-valued input, and the
//! // picker setup script.
//! let html = widget.render(&ctx, &field);
//! assert!(html.contains(r#"name="w1""#));
//! assert!(html.contains("setupDatePicker"));
//!
//! // Submitted values come back through the hidden input in ISO form.
//! let parsed = widget.parse(&field, "2024-03-14").unwrap();
//! assert_eq!(parsed, NaiveDate::from_ymd_opt(2024, 3, 14).unwrap());
//! ```
//!
//! ## Pattern translation
//!
//! ```rust
//! use clinform_widgets::pattern;
//!
//! // Server-side dialect in, client picker dialect out.
//! assert_eq!(pattern::to_picker_pattern("MM/dd/yyyy"), "mm/dd/yy");
//! // Server-side dialect in, chrono strftime out.
//! assert_eq!(pattern::to_strftime("MM/dd/yyyy"), "%m/%d/%Y");
//! ```

mod context;
mod error;
pub mod pattern;
mod settings;
pub mod widgets;

pub use context::{FieldName, FormRenderContext, Mode};
pub use error::{FormError, Result};
pub use settings::{
    FormSettings, Locale, StaticSettings, DATE_FORMAT_SETTING, DEFAULT_DATE_PATTERN,
    DEFAULT_YEARS_RANGE, SHOW_DATE_FORMAT_SETTING, YEARS_RANGE_SETTING,
};
pub use widgets::{DateWidget, Widget};
