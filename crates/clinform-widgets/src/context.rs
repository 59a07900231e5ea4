//! Render context shared by the widgets of one form.

use std::fmt;

use crate::settings::FormSettings;

/// Whether a form is being displayed read-only or edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Read-only display of recorded values.
    View,
    /// Interactive entry or correction of values.
    Edit,
}

/// The stable identifier of a form field.
///
/// Doubles as the `name` of the submitted parameter and the `id` of the
/// hidden input, so the same form definition addresses the same fields on
/// render and on submit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldName(String);

impl FieldName {
    /// Returns the field name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the element id of the field's visible display input.
    pub fn display_id(&self) -> String {
        format!("{}-display", self.0)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-render state for one form: the mode, the configuration collaborators,
/// and the field-name sequence.
pub struct FormRenderContext<'s> {
    mode: Mode,
    settings: &'s dyn FormSettings,
    next_field: usize,
}

impl fmt::Debug for FormRenderContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormRenderContext")
            .field("mode", &self.mode)
            .field("next_field", &self.next_field)
            .finish_non_exhaustive()
    }
}

impl<'s> FormRenderContext<'s> {
    /// Creates a context for the given mode.
    pub fn new(mode: Mode, settings: &'s dyn FormSettings) -> Self {
        Self {
            mode,
            settings,
            next_field: 1,
        }
    }

    /// Returns the current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the configuration collaborators.
    pub fn settings(&self) -> &dyn FormSettings {
        self.settings
    }

    /// Registers a field and returns its name (`w1`, `w2`, ...).
    ///
    /// Names are assigned in registration order, so registering the fields
    /// of a form definition in a fixed order yields the same names every
    /// time.
    pub fn register_field(&mut self) -> FieldName {
        let name = FieldName(format!("w{}", self.next_field));
        self.next_field += 1;
        name
    }
}
