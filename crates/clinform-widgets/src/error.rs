//! Error types for widgets.

use thiserror::Error;

/// Widget-specific errors.
#[derive(Debug, Error)]
pub enum FormError {
    /// A submitted value could not be coerced to the field's type. The
    /// enclosing form-validation layer decides what to do with it; widgets
    /// never retry or recover.
    #[error("invalid value for field {field}: {message}")]
    InvalidArgument { field: String, message: String },
}

/// Result type alias for widget operations.
pub type Result<T> = std::result::Result<T, FormError>;
