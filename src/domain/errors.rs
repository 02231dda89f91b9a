//! Domain errors for the idsync system.

use std::path::PathBuf;

use thiserror::Error;

/// Domain-level errors that can occur in the idsync system.
///
/// Source and validation errors are fatal to a run; remote-operation
/// errors are isolated at the record boundary by the reconciler and
/// converted into outcomes instead of propagating.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Roster not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Roster contains a header but no data rows: {}", .0.display())]
    SourceEmpty(PathBuf),

    #[error("Roster is invalid: {0}")]
    SourceInvalid(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Remote operation failed: {0}")]
    RemoteOperationFailed(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::SerializationError(err.to_string())
    }
}
