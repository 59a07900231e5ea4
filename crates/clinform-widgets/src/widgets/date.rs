//! Calendar date entry widget.

use chrono::NaiveDate;
use tracing::debug;

use super::{display_empty_value, display_value, html_escape, Widget};
use crate::context::{FieldName, FormRenderContext, Mode};
use crate::error::{FormError, Result};
use crate::pattern;
use crate::settings::{
    FormSettings, DATE_FORMAT_SETTING, DEFAULT_YEARS_RANGE, SHOW_DATE_FORMAT_SETTING,
    YEARS_RANGE_SETTING,
};

/// Canonical wire format carried by the hidden input.
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Placeholder printed in view mode when no value is recorded.
const EMPTY_DATE_PLACEHOLDER: &str = "________";

/// A widget for selecting a specific day, month, and year.
///
/// In edit mode it renders a visible display input paired with a hidden
/// input that carries the canonical ISO (`yyyy-MM-dd`) value, plus a script
/// that wires a calendar picker to the pair. In view mode it renders the
/// recorded value formatted with the resolved date pattern.
///
/// The display pattern is resolved fresh on every render: the field-level
/// override if set, else the `forms.dateFormat` global setting, else the
/// locale-default pattern.
#[derive(Debug, Clone, Default)]
pub struct DateWidget {
    initial_value: Option<NaiveDate>,
    on_change: Option<String>,
    date_format: Option<String>,
    hidden: bool,
}

impl DateWidget {
    /// Creates an unconfigured date widget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the initial value.
    pub fn initial_value(&self) -> Option<NaiveDate> {
        self.initial_value
    }

    /// Sets the initial value.
    pub fn set_initial_value(&mut self, value: Option<NaiveDate>) {
        self.initial_value = value;
    }

    /// Returns the `onChange` handler emitted on the hidden input.
    pub fn on_change(&self) -> Option<&str> {
        self.on_change.as_deref()
    }

    /// Sets the `onChange` handler.
    pub fn set_on_change(&mut self, handler: Option<String>) {
        self.on_change = handler;
    }

    /// Returns the field-level date pattern override.
    pub fn date_format(&self) -> Option<&str> {
        self.date_format.as_deref()
    }

    /// Sets the field-level date pattern override.
    pub fn set_date_format(&mut self, pattern: Option<String>) {
        self.date_format = pattern;
    }

    /// Returns whether the widget renders without a visible input.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Hides or shows the visible input. A hidden widget still emits the
    /// hidden input so the field round-trips on submit.
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Resolves the date pattern for this render: override, else the
    /// configured global, else the locale default. Never cached.
    pub fn resolved_pattern(&self, settings: &dyn FormSettings) -> String {
        if let Some(pattern) = &self.date_format {
            return pattern.clone();
        }
        match settings.global_setting(DATE_FORMAT_SETTING) {
            Some(pattern) if !pattern.trim().is_empty() => pattern,
            _ => settings.default_date_pattern(),
        }
    }

    /// Returns the year-selection range offered by the picker, as a
    /// `back,forward` offset pair.
    pub fn years_range(&self, settings: &dyn FormSettings) -> String {
        settings
            .global_setting(YEARS_RANGE_SETTING)
            .unwrap_or_else(|| DEFAULT_YEARS_RANGE.to_string())
    }

    /// Returns the locale tag handed to the picker.
    pub fn locale_tag(&self, settings: &dyn FormSettings) -> String {
        settings.locale().tag()
    }

    /// Formats a date for display with the resolved pattern.
    pub fn format_for_display(&self, settings: &dyn FormSettings, value: NaiveDate) -> String {
        let fmt = pattern::to_strftime(&self.resolved_pattern(settings));
        value.format(&fmt).to_string()
    }

    /// Coerces the submitted hidden-field value into a date.
    ///
    /// The hidden input always carries the ISO form, so anything else is a
    /// malformed submission and fails with
    /// [`FormError::InvalidArgument`]. The error propagates to the
    /// enclosing form-validation layer; the widget never retries.
    pub fn parse(&self, field: &FieldName, raw: &str) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(raw.trim(), ISO_DATE_FORMAT).map_err(|err| {
            debug!(field = %field, raw, "date coercion failed");
            FormError::InvalidArgument {
                field: field.to_string(),
                message: format!("not a valid date: {err}"),
            }
        })
    }

    fn render_view(&self, settings: &dyn FormSettings) -> String {
        self.initial_value.map_or_else(
            || display_empty_value(EMPTY_DATE_PLACEHOLDER),
            |value| display_value(&self.format_for_display(settings, value)),
        )
    }

    fn render_edit(&self, settings: &dyn FormSettings, field: &FieldName) -> String {
        let mut html = String::new();

        if !self.hidden {
            html.push_str(&format!(
                r#"<input type="text" size="10" id="{}"/>"#,
                field.display_id()
            ));
        }

        html.push_str(&format!(
            r#"<input type="hidden" name="{field}" id="{field}""#
        ));
        if let Some(handler) = &self.on_change {
            html.push_str(&format!(r#" onChange="{}""#, html_escape(handler)));
        }
        if self.hidden {
            // No picker will fill the hidden input in, so seed the
            // canonical value here.
            if let Some(value) = self.initial_value {
                html.push_str(&format!(r#" value="{}""#, value.format(ISO_DATE_FORMAT)));
            }
        }
        html.push_str("/>");

        if !self.hidden {
            let resolved = self.resolved_pattern(settings);

            if settings.global_setting(SHOW_DATE_FORMAT_SETTING).as_deref() == Some("true") {
                html.push_str(&format!(" ({})", resolved.to_lowercase()));
            }

            html.push_str(&format!(
                "<script>setupDatePicker('{}', '{}', '{}', '#{}', '#{field}'",
                pattern::to_picker_pattern(&resolved),
                self.years_range(settings),
                self.locale_tag(settings),
                field.display_id()
            ));
            if let Some(value) = self.initial_value {
                html.push_str(&format!(", '{}'", value.format(ISO_DATE_FORMAT)));
            }
            html.push_str(")</script>");
        }

        html
    }
}

impl Widget for DateWidget {
    fn render(&self, ctx: &FormRenderContext<'_>, field: &FieldName) -> String {
        match ctx.mode() {
            Mode::View => self.render_view(ctx.settings()),
            Mode::Edit => self.render_edit(ctx.settings(), field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{Locale, StaticSettings};

    fn march_14() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()
    }

    fn edit_field(settings: &StaticSettings) -> (FormRenderContext<'_>, FieldName) {
        let mut ctx = FormRenderContext::new(Mode::Edit, settings);
        let field = ctx.register_field();
        (ctx, field)
    }

    #[test]
    fn test_view_mode_formats_value() {
        let settings = StaticSettings::new();
        let mut ctx = FormRenderContext::new(Mode::View, &settings);
        let field = ctx.register_field();

        let mut widget = DateWidget::new();
        widget.set_initial_value(Some(march_14()));

        let html = widget.render(&ctx, &field);
        assert_eq!(html, r#"<span class="value">14/03/2024</span>"#);
    }

    #[test]
    fn test_view_mode_blank_is_placeholder_not_empty() {
        let settings = StaticSettings::new();
        let mut ctx = FormRenderContext::new(Mode::View, &settings);
        let field = ctx.register_field();

        let html = DateWidget::new().render(&ctx, &field);
        assert!(!html.is_empty());
        assert!(html.contains("________"));
        assert!(html.contains("empty-value"));
    }

    #[test]
    fn test_edit_mode_emits_input_pair_and_script() {
        let settings = StaticSettings::new()
            .with_locale(Locale::new("en").with_country("GB"))
            .with_setting(YEARS_RANGE_SETTING, "90,10");
        let (ctx, field) = edit_field(&settings);

        let mut widget = DateWidget::new();
        widget.set_initial_value(Some(march_14()));

        let html = widget.render(&ctx, &field);
        assert!(html.contains(r#"<input type="text" size="10" id="w1-display"/>"#));
        assert!(html.contains(r#"<input type="hidden" name="w1" id="w1"/>"#));
        assert!(html.contains(
            "<script>setupDatePicker('dd/mm/yy', '90,10', 'en-GB', '#w1-display', '#w1', '2024-03-14')</script>"
        ));
    }

    #[test]
    fn test_edit_mode_without_initial_value_omits_script_date() {
        let settings = StaticSettings::new();
        let (ctx, field) = edit_field(&settings);

        let html = DateWidget::new().render(&ctx, &field);
        assert!(html.contains("setupDatePicker('dd/mm/yy', '110,20', 'en', '#w1-display', '#w1')"));
    }

    #[test]
    fn test_hidden_edit_mode_seeds_single_input() {
        let settings = StaticSettings::new();
        let (ctx, field) = edit_field(&settings);

        let mut widget = DateWidget::new();
        widget.set_hidden(true);
        widget.set_initial_value(Some(march_14()));

        let html = widget.render(&ctx, &field);
        assert_eq!(html.matches("<input").count(), 1);
        assert!(html.contains(r#"type="hidden""#));
        assert!(html.contains(r#"value="2024-03-14""#));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_on_change_attribute() {
        let settings = StaticSettings::new();
        let (ctx, field) = edit_field(&settings);

        let mut widget = DateWidget::new();
        widget.set_on_change(Some("recalculate()".to_string()));

        let html = widget.render(&ctx, &field);
        assert!(html.contains(r#"onChange="recalculate()""#));
    }

    #[test]
    fn test_format_hint_gated_on_flag() {
        let mut widget = DateWidget::new();
        widget.set_date_format(Some("dd-MMM-yyyy".to_string()));

        let settings = StaticSettings::new();
        let (ctx, field) = edit_field(&settings);
        assert!(!widget.render(&ctx, &field).contains("(dd-mmm-yyyy)"));

        let settings = StaticSettings::new().with_setting(SHOW_DATE_FORMAT_SETTING, "true");
        let (ctx, field) = edit_field(&settings);
        assert!(widget.render(&ctx, &field).contains("(dd-mmm-yyyy)"));
    }

    #[test]
    fn test_pattern_resolution_order() {
        let settings = StaticSettings::new().with_setting(DATE_FORMAT_SETTING, "MM/dd/yyyy");

        let mut widget = DateWidget::new();
        assert_eq!(widget.resolved_pattern(&settings), "MM/dd/yyyy");

        widget.set_date_format(Some("dd.MM.yyyy".to_string()));
        assert_eq!(widget.resolved_pattern(&settings), "dd.MM.yyyy");

        let unconfigured = StaticSettings::new();
        widget.set_date_format(None);
        assert_eq!(widget.resolved_pattern(&unconfigured), "dd/MM/yyyy");
    }

    #[test]
    fn test_blank_global_pattern_falls_through() {
        let settings = StaticSettings::new().with_setting(DATE_FORMAT_SETTING, "  ");
        assert_eq!(DateWidget::new().resolved_pattern(&settings), "dd/MM/yyyy");
    }

    #[test]
    fn test_years_range_default() {
        let settings = StaticSettings::new();
        assert_eq!(DateWidget::new().years_range(&settings), "110,20");
    }

    #[test]
    fn test_clone_is_independent() {
        let mut widget = DateWidget::new();
        widget.set_initial_value(Some(march_14()));
        widget.set_on_change(Some("flag()".to_string()));
        widget.set_hidden(true);
        widget.set_date_format(Some("M/d/yy".to_string()));

        let mut copy = widget.clone();
        assert_eq!(copy.initial_value(), widget.initial_value());
        assert_eq!(copy.on_change(), widget.on_change());
        assert_eq!(copy.is_hidden(), widget.is_hidden());
        assert_eq!(copy.date_format(), widget.date_format());

        copy.set_initial_value(None);
        copy.set_date_format(None);
        assert_eq!(widget.initial_value(), Some(march_14()));
        assert_eq!(widget.date_format(), Some("M/d/yy"));
    }

    #[test]
    fn test_parse_iso_value() {
        let settings = StaticSettings::new();
        let (_, field) = edit_field(&settings);

        let widget = DateWidget::new();
        assert_eq!(widget.parse(&field, "2024-03-14").unwrap(), march_14());
        assert_eq!(widget.parse(&field, " 2024-03-14 ").unwrap(), march_14());
    }

    #[test]
    fn test_parse_rejects_malformed_value() {
        let settings = StaticSettings::new();
        let (_, field) = edit_field(&settings);

        let widget = DateWidget::new();
        for raw in ["", "14/03/2024", "2024-13-01", "not a date"] {
            let err = widget.parse(&field, raw).unwrap_err();
            assert!(matches!(err, FormError::InvalidArgument { .. }), "{raw}");
        }
    }

    #[test]
    fn test_display_format_follows_override() {
        let settings = StaticSettings::new();
        let mut widget = DateWidget::new();
        widget.set_date_format(Some("MMMM d, yyyy".to_string()));
        assert_eq!(
            widget.format_for_display(&settings, march_14()),
            "March 14, 2024"
        );
    }
}
