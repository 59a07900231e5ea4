//! Form widgets for rendering HTML inputs.

mod date;

pub use date::DateWidget;

use crate::context::{FieldName, FormRenderContext};

/// Trait for form widgets that render HTML.
///
/// A widget holds its own configuration and initial value; the context
/// supplies the mode, the field name, and the configuration collaborators.
pub trait Widget: Send + Sync {
    /// Renders the widget markup appropriate to the context's mode.
    fn render(&self, ctx: &FormRenderContext<'_>, field: &FieldName) -> String;
}

/// Wraps a recorded value for view-mode display.
pub fn display_value(text: &str) -> String {
    format!(r#"<span class="value">{}</span>"#, html_escape(text))
}

/// Wraps the placeholder shown in view mode when no value is recorded.
pub fn display_empty_value(placeholder: &str) -> String {
    format!(r#"<span class="empty-value">{}</span>"#, html_escape(placeholder))
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
