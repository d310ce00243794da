//! CLI error types and exit codes.

use mailforge_core::TemplateError;

/// Exit codes for CLI operations
pub mod exit_codes {
    /// General error - configuration, validation, or transport failures
    pub const GENERAL_ERROR: i32 = 1;
    /// The referenced template does not exist
    pub const NOT_FOUND: i32 = 2;
}

/// CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Template not found
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Transport error
    #[error("Transport error: {0}")]
    Transport(String),

    /// Async runtime error
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<TemplateError> for CliError {
    fn from(err: TemplateError) -> Self {
        match err {
            TemplateError::Validation { .. } => Self::Validation(err.to_string()),
            TemplateError::NotFound(id) => Self::TemplateNotFound(id.to_string()),
            TemplateError::Transport(reason) => Self::Transport(reason),
        }
    }
}

impl CliError {
    /// Returns the appropriate exit code for this error type.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: General error (configuration, validation, transport, IO)
    /// - 2: Template not found
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::TemplateNotFound(_) => exit_codes::NOT_FOUND,
            Self::Config(_)
            | Self::Validation(_)
            | Self::Transport(_)
            | Self::Runtime(_)
            | Self::Io(_) => exit_codes::GENERAL_ERROR,
        }
    }
}
