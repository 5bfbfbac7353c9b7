use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted entry, as owned by the storage layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredEntry {
    pub name: String,
    pub rating: i64,
    /// Set once when the row is inserted.
    pub created: DateTime<Utc>,
    /// Refreshed on every write.
    pub modified: DateTime<Utc>,
}

impl StoredEntry {
    /// Creates a fresh entry with `created == modified == now`.
    pub fn new(name: impl Into<String>, rating: i64) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            rating,
            created: now,
            modified: now,
        }
    }

    /// Applies a new rating and advances `modified`, leaving `created` untouched.
    pub fn rerate(&mut self, rating: i64) {
        self.rating = rating;
        self.modified = Utc::now().max(self.modified);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_has_matching_timestamps() {
        let entry = StoredEntry::new("python", 5);
        assert_eq!(entry.name, "python");
        assert_eq!(entry.rating, 5);
        assert_eq!(entry.created, entry.modified);
    }

    #[test]
    fn test_rerate_keeps_created() {
        let mut entry = StoredEntry::new("python", 5);
        let created = entry.created;

        entry.rerate(6);

        assert_eq!(entry.rating, 6);
        assert_eq!(entry.created, created);
        assert!(entry.modified >= created);
    }
}
