use thiserror::Error;

use crate::storage::StorageError;

/// Errors returned by the domain core.
///
/// Storage failures never cross this boundary as-is: a missing entry becomes
/// [`CoreError::EntryNotFound`] and everything else is wrapped in
/// [`CoreError::Internal`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Entry not found: {name}")]
    EntryNotFound { name: String },
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Internal error: {0}")]
    Internal(#[source] StorageError),
}

impl From<StorageError> for CoreError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::EntryNotFound { name } => Self::EntryNotFound { name },
            other => Self::Internal(other),
        }
    }
}

/// Result type for domain operations.
pub type Result<T> = std::result::Result<T, CoreError>;
