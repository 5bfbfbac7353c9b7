use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Entry not found: {name}")]
    EntryNotFound { name: String },
    /// The backing datastore could not be reached.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    /// Any other low-level failure (constraint, driver, decoding).
    #[error("Storage operation failed: {0}")]
    Failed(String),
}

impl StorageError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::EntryNotFound { name: name.into() }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_not_found_display() {
        let error = StorageError::not_found("python");
        assert_eq!(error.to_string(), "Entry not found: python");
    }

    #[test]
    fn test_unavailable_display() {
        let error = StorageError::Unavailable("pool timed out".to_string());
        assert_eq!(error.to_string(), "Storage unavailable: pool timed out");
    }

    #[test]
    fn test_failed_display() {
        let error = StorageError::Failed("UNIQUE constraint failed: entries.name".to_string());
        assert_eq!(
            error.to_string(),
            "Storage operation failed: UNIQUE constraint failed: entries.name"
        );
    }
}
