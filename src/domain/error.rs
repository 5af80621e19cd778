//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violated request invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{message}")]
    MissingSource { message: String, hint: String },
}

impl DomainError {
    /// Error for a fetch request without `--url` or `--playlist`.
    pub fn missing_source() -> Self {
        Self::MissingSource {
            message: "provide --url or --playlist".into(),
            hint: "blog fetch requires at least one source".into(),
        }
    }

    /// Remediation hint shown below the error message.
    pub fn hint(&self) -> &str {
        match self {
            DomainError::MissingSource { hint, .. } => hint,
        }
    }
}
