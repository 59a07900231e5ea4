//! Administration and locale settings consumed by widgets.
//!
//! Widgets never reach for ambient global state: everything configurable
//! comes in through a [`FormSettings`] implementation carried by the render
//! context, which keeps rendering deterministic and testable.

use std::collections::HashMap;

use serde::Deserialize;

/// Setting key for the globally configured date pattern.
pub const DATE_FORMAT_SETTING: &str = "forms.dateFormat";

/// Setting key for the year-selection range offered by the date picker.
pub const YEARS_RANGE_SETTING: &str = "forms.yearsRange";

/// Setting key for the "show format hint next to date fields" flag
/// (`"true"` enables it, anything else disables it).
pub const SHOW_DATE_FORMAT_SETTING: &str = "forms.showDateFormat";

/// Year range used when `forms.yearsRange` is not configured: 110 years
/// back, 20 years forward.
pub const DEFAULT_YEARS_RANGE: &str = "110,20";

/// Date pattern used when neither a field override nor `forms.dateFormat`
/// is configured.
pub const DEFAULT_DATE_PATTERN: &str = "dd/MM/yyyy";

/// A language with an optional country refinement.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Locale {
    /// ISO 639 language code, e.g. `en`.
    pub language: String,
    /// ISO 3166 country code, e.g. `GB`.
    pub country: Option<String>,
}

impl Locale {
    /// Creates a locale from a language code.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            country: None,
        }
    }

    /// Sets the country code.
    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Returns the tag the client picker expects: `en`, or `en-GB` when a
    /// country is set.
    pub fn tag(&self) -> String {
        match self.country.as_deref() {
            Some(country) if !country.is_empty() => format!("{}-{country}", self.language),
            _ => self.language.clone(),
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::new("en")
    }
}

/// Configuration collaborators a widget needs while rendering: global
/// administration settings, the current locale, and the locale-default date
/// pattern.
pub trait FormSettings {
    /// Looks up a global setting by key.
    fn global_setting(&self, key: &str) -> Option<String>;

    /// Returns the current locale.
    fn locale(&self) -> Locale;

    /// Returns the date pattern to fall back to when no explicit format is
    /// configured.
    fn default_date_pattern(&self) -> String {
        DEFAULT_DATE_PATTERN.to_string()
    }
}

/// In-memory [`FormSettings`] backed by a key/value map.
///
/// This is what tests use, and what a host application populates from its
/// administration store.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StaticSettings {
    /// Global settings keyed by name.
    #[serde(default)]
    pub settings: HashMap<String, String>,
    /// The current locale.
    #[serde(default)]
    pub locale: Locale,
    /// Locale-default date pattern, when it differs from the crate default.
    #[serde(default)]
    pub default_pattern: Option<String>,
}

impl StaticSettings {
    /// Creates empty settings with the default locale.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads settings from a JSON administration blob.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Sets a global setting.
    #[must_use]
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }

    /// Sets the locale.
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Sets the locale-default date pattern.
    #[must_use]
    pub fn with_default_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.default_pattern = Some(pattern.into());
        self
    }
}

impl FormSettings for StaticSettings {
    fn global_setting(&self, key: &str) -> Option<String> {
        self.settings.get(key).cloned()
    }

    fn locale(&self) -> Locale {
        self.locale.clone()
    }

    fn default_date_pattern(&self) -> String {
        self.default_pattern
            .clone()
            .unwrap_or_else(|| DEFAULT_DATE_PATTERN.to_string())
    }
}
