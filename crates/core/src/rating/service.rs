//! Domain core.
//!
//! [`RatingService`] sits between the HTTP handlers and an [`EntryRepository`].
//! It holds no state of its own, applies the business rules, and translates
//! [`StorageError`] into [`CoreError`].

use std::sync::Arc;

use crate::storage::{EntryRepository, StorageError};

use super::error::{CoreError, Result};
use super::types::RatedEntry;
use super::validation::validate_rating;

/// Stateless business-rule layer over a storage backend.
#[derive(Clone)]
pub struct RatingService {
    repo: Arc<dyn EntryRepository>,
}

impl RatingService {
    pub fn new(repo: Arc<dyn EntryRepository>) -> Self {
        Self { repo }
    }

    /// Returns the rating of the named entry.
    pub async fn get_rating(&self, name: &str) -> Result<i64> {
        Ok(self.get_entry(name).await?.rating)
    }

    /// Returns the named entry without its timestamps.
    pub async fn get_entry(&self, name: &str) -> Result<RatedEntry> {
        self.repo
            .get_entry(name)
            .await
            .map(RatedEntry::from)
            .map_err(|e| translate("get_entry", e))
    }

    /// Sets the rating of an entry, creating it if needed.
    ///
    /// Returns `true` when the entry did not exist before.
    pub async fn set_entry_rating(&self, name: &str, rating: i64) -> Result<bool> {
        if let Err(err) = validate_rating(name, rating) {
            tracing::info!(name = %name, rating, error = %err, "Rejected rating");
            return Err(err);
        }

        let created = self
            .repo
            .set_entry_rating(name, rating)
            .await
            .map_err(|e| translate("set_entry_rating", e))?;

        tracing::debug!(name = %name, rating, created, "Stored rating");
        Ok(created)
    }

    /// Deletes the named entry. Fails with [`CoreError::EntryNotFound`] if it does not exist.
    pub async fn delete_entry(&self, name: &str) -> Result<()> {
        let existed = self
            .repo
            .delete_entry(name)
            .await
            .map_err(|e| translate("delete_entry", e))?;

        if !existed {
            return Err(CoreError::EntryNotFound {
                name: name.to_string(),
            });
        }

        tracing::debug!(name = %name, "Deleted entry");
        Ok(())
    }

    /// Lists every entry.
    pub async fn get_entries(&self) -> Result<Vec<RatedEntry>> {
        let entries = self
            .repo
            .get_entries()
            .await
            .map_err(|e| translate("get_entries", e))?;

        Ok(entries.into_iter().map(RatedEntry::from).collect())
    }

    /// Checks that storage is reachable.
    pub async fn ping(&self) -> Result<()> {
        self.repo.ping().await.map_err(|e| translate("ping", e))
    }
}

/// Maps a storage failure into the domain taxonomy, logging anything internal.
fn translate(operation: &'static str, err: StorageError) -> CoreError {
    let err = CoreError::from(err);
    if let CoreError::Internal(cause) = &err {
        tracing::error!(operation, error = %cause, "Internal error");
    }
    err
}
