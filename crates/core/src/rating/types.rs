use serde::{Deserialize, Serialize};

use crate::storage::StoredEntry;

/// Read projection of a stored entry, without timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatedEntry {
    pub name: String,
    pub rating: i64,
}

impl From<StoredEntry> for RatedEntry {
    fn from(entry: StoredEntry) -> Self {
        Self {
            name: entry.name,
            rating: entry.rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_drops_timestamps() {
        let stored = StoredEntry::new("python", 5);
        let rated = RatedEntry::from(stored);

        assert_eq!(
            rated,
            RatedEntry {
                name: "python".to_string(),
                rating: 5
            }
        );
        assert_eq!(
            serde_json::to_value(&rated).unwrap(),
            serde_json::json!({"name": "python", "rating": 5})
        );
    }
}
