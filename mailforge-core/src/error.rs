//! Error types for template operations
//!
//! This module defines the error taxonomy shared by every backend and the
//! template manager. The manager never introduces kinds of its own; backend
//! failures propagate to the caller unmodified.

use uuid::Uuid;

/// Errors that can occur during template operations.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// Malformed input, detected before or by the backend.
    #[error("validation failed for field '{field}': {reason}")]
    Validation {
        /// Name of the offending field.
        field: String,
        /// Human-readable reason the value was rejected.
        reason: String,
    },

    /// The referenced template does not exist.
    #[error("template not found: {0}")]
    NotFound(Uuid),

    /// Network or backend unavailable, or a non-success response.
    #[error("transport error: {0}")]
    Transport(String),
}

impl TemplateError {
    /// Creates a validation error for the given field.
    #[must_use]
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns true if this error is a validation failure.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Returns true if this error is a not-found failure.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Returns true if this error is a transport failure.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// Result type for template operations
pub type TemplateResult<T> = Result<T, TemplateError>;
