//! Shared Error Types
//!
//! Errors raised while turning a raw request body into a validated command.
//! The backend maps every one of them to `400 Bad Request`.
use thiserror::Error;

/// Errors produced by the shared request layer
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// A required field was missing or malformed
    ///
    /// `message` is the exact text returned to the client.
    #[error("{message}")]
    ValidationError {
        /// The field that failed validation
        field: &'static str,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field,
            message: message.into(),
        }
    }

    /// The field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            Self::ValidationError { field, .. } => field,
        }
    }
}
