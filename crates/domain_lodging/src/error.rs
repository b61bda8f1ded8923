//! Lodging domain errors

use thiserror::Error;

/// Errors that can occur in the lodging domain
#[derive(Debug, Error)]
pub enum LodgingError {
    /// Room type label is not one of the recognized spellings
    #[error("Unknown room type: {0}")]
    UnknownRoomType(String),

    /// A form date failed to parse
    #[error("Invalid {field}: '{value}' is not a valid date (expected YYYY-MM-DD)")]
    InvalidDate { field: String, value: String },

    /// Field-level validation failure
    #[error("Validation error: {0}")]
    Validation(String),
}

impl LodgingError {
    /// Creates a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        LodgingError::Validation(message.into())
    }
}

impl From<validator::ValidationErrors> for LodgingError {
    fn from(errors: validator::ValidationErrors) -> Self {
        LodgingError::Validation(errors.to_string())
    }
}
