//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use ratings_core::storage::{EntryRepository, Result, StorageError, StoredEntry};

/// In-memory storage backend.
///
/// Each operation holds the lock for its whole duration, which gives the same
/// all-or-nothing behavior as a transaction.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    entries: Arc<RwLock<HashMap<String, StoredEntry>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EntryRepository for InMemoryRepository {
    async fn get_entry(&self, name: &str) -> Result<StoredEntry> {
        let entries = self.entries.read().await;
        entries
            .get(name)
            .cloned()
            .ok_or_else(|| StorageError::not_found(name))
    }

    async fn set_entry_rating(&self, name: &str, rating: i64) -> Result<bool> {
        let mut entries = self.entries.write().await;
        match entries.get_mut(name) {
            Some(entry) => {
                entry.rerate(rating);
                Ok(false)
            }
            None => {
                entries.insert(name.to_string(), StoredEntry::new(name, rating));
                Ok(true)
            }
        }
    }

    async fn delete_entry(&self, name: &str) -> Result<bool> {
        let mut entries = self.entries.write().await;
        Ok(entries.remove(name).is_some())
    }

    async fn get_entries(&self) -> Result<Vec<StoredEntry>> {
        let entries = self.entries.read().await;
        Ok(entries.values().cloned().collect())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
