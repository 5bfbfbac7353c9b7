//! Pure functions for mapping domain errors to HTTP status codes.

use super::CoreError;

/// Maps a [`CoreError`] to an HTTP status code.
///
/// - `EntryNotFound` -> 404 (Not Found)
/// - `InvalidRequest` -> 400 (Bad Request)
/// - `Internal` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use ratings_core::rating::{core_error_to_status_code, CoreError};
///
/// let error = CoreError::EntryNotFound {
///     name: "python".to_string(),
/// };
/// assert_eq!(core_error_to_status_code(&error), 404);
/// ```
pub fn core_error_to_status_code(error: &CoreError) -> u16 {
    match error {
        CoreError::EntryNotFound { .. } => 404,
        CoreError::InvalidRequest(_) => 400,
        CoreError::Internal(_) => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StorageError;

    #[test]
    fn test_not_found_maps_to_404() {
        let error = CoreError::EntryNotFound {
            name: "python".to_string(),
        };
        assert_eq!(core_error_to_status_code(&error), 404);
    }

    #[test]
    fn test_invalid_request_maps_to_400() {
        let error = CoreError::InvalidRequest("cassandra cannot be rated above 1".to_string());
        assert_eq!(core_error_to_status_code(&error), 400);
    }

    #[test]
    fn test_unavailable_storage_maps_to_500() {
        let error = CoreError::Internal(StorageError::Unavailable("timeout".to_string()));
        assert_eq!(core_error_to_status_code(&error), 500);
    }

    #[test]
    fn test_failed_storage_maps_to_500() {
        let error = CoreError::Internal(StorageError::Failed("constraint".to_string()));
        assert_eq!(core_error_to_status_code(&error), 500);
    }
}
