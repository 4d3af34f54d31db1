//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the configuration model.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid configuration text at position {position}: {message}")]
    Parse { position: usize, message: String },

    #[error("invalid level: {0} (must be non-negative)")]
    InvalidLevel(i64),
}

impl DomainError {
    pub(crate) fn parse(position: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            position,
            message: message.into(),
        }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
