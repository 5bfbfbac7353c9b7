use async_trait::async_trait;

use super::{Result, StoredEntry};

/// Repository for rated entries.
///
/// Every call is one unit of work: implementations commit on success and
/// roll back on any failure before returning the error.
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Gets an entry by name. Fails with `StorageError::EntryNotFound` if absent.
    async fn get_entry(&self, name: &str) -> Result<StoredEntry>;

    /// Updates the rating of an existing entry or inserts a new one.
    ///
    /// Returns `true` if a new entry was inserted.
    async fn set_entry_rating(&self, name: &str, rating: i64) -> Result<bool>;

    /// Deletes an entry by name. Returns `true` if it existed.
    async fn delete_entry(&self, name: &str) -> Result<bool>;

    /// Gets all entries, in no particular order.
    async fn get_entries(&self) -> Result<Vec<StoredEntry>>;

    /// Round-trips to the datastore without touching any entry.
    async fn ping(&self) -> Result<()>;
}
