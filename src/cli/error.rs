//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::{ApplicationError, OutputFormat};
use crate::domain::DomainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(ApplicationError),

    #[error("{message}")]
    Usage { message: String, hint: String },

    #[error("{message}")]
    FormatResolution { message: String, hint: String },
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl From<DomainError> for CliError {
    fn from(e: DomainError) -> Self {
        CliError::Usage {
            message: e.to_string(),
            hint: e.hint().to_string(),
        }
    }
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::Domain(domain) => domain.into(),
            format_err @ (ApplicationError::UnknownOutputFormat { .. }
            | ApplicationError::ConflictingOutputFormats { .. }) => CliError::FormatResolution {
                message: format_err.to_string(),
                hint: format!("--output must be one of: {}", OutputFormat::NAMES.join(", ")),
            },
            other => CliError::Application(other),
        }
    }
}

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage { .. } | CliError::FormatResolution { .. } => crate::exitcode::USAGE,
            CliError::Application(e) => match e {
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::Io { .. } => crate::exitcode::IOERR,
                _ => crate::exitcode::SOFTWARE,
            },
        }
    }

    /// Remediation hint, if the error carries one.
    pub fn hint(&self) -> Option<&str> {
        match self {
            CliError::Usage { hint, .. } | CliError::FormatResolution { hint, .. } => Some(hint),
            CliError::Application(_) => None,
        }
    }
}
