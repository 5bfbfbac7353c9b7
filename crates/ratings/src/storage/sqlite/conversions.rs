//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.

use chrono::{DateTime, SecondsFormat, Utc};

use ratings_core::storage::{StorageError, StoredEntry};

/// Column tuple returned by the entry queries: `(name, rating, created, modified)`.
pub type EntryRow = (String, i64, String, String);

/// Formats a timestamp for storage as RFC 3339 text with microsecond precision.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parses a stored RFC 3339 timestamp.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, StorageError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StorageError::Failed(format!("Invalid timestamp '{value}': {e}")))
}

/// Converts an entry row into a [`StoredEntry`].
pub fn row_to_entry((name, rating, created, modified): EntryRow) -> Result<StoredEntry, StorageError> {
    Ok(StoredEntry {
        name,
        rating,
        created: parse_timestamp(&created)?,
        modified: parse_timestamp(&modified)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp_uses_micros_and_z() {
        let ts = Utc.with_ymd_and_hms(2020, 3, 23, 13, 15, 4).unwrap();
        assert_eq!(format_timestamp(&ts), "2020-03-23T13:15:04.000000Z");
    }

    #[test]
    fn test_timestamp_survives_storage_format() {
        let ts = Utc::now();
        let parsed = parse_timestamp(&format_timestamp(&ts)).unwrap();
        assert_eq!(parsed.timestamp_micros(), ts.timestamp_micros());
    }

    #[test]
    fn test_parse_accepts_offsets() {
        let parsed = parse_timestamp("2020-03-23T15:15:04+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2020, 3, 23, 13, 15, 4).unwrap());
    }

    #[test]
    fn test_row_to_entry() {
        let row = (
            "python".to_string(),
            5,
            "2020-03-23T13:15:04.000000Z".to_string(),
            "2020-03-24T08:00:00.000000Z".to_string(),
        );

        let entry = row_to_entry(row).unwrap();

        assert_eq!(entry.name, "python");
        assert_eq!(entry.rating, 5);
        assert!(entry.modified > entry.created);
    }

    #[test]
    fn test_row_with_bad_timestamp_fails() {
        let row = (
            "python".to_string(),
            5,
            "yesterday".to_string(),
            "2020-03-24T08:00:00Z".to_string(),
        );

        assert!(matches!(row_to_entry(row), Err(StorageError::Failed(_))));
    }
}
