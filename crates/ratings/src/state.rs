//! Application state.
//!
//! Shared by every request handler. Holds the domain core, which in turn holds
//! the storage backend selected by feature flags.

use std::{sync::Arc, time::Duration};

use ratings_core::rating::RatingService;
use ratings_core::storage::EntryRepository;

use crate::config::Config;

/// Request timeout used when no configuration is supplied.
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Shared application state.
///
/// Cheap to clone: the service only wraps an `Arc` to the repository.
#[derive(Clone)]
pub struct AppState {
    /// Domain core.
    pub ratings: RatingService,
    /// How long a request may run before it is answered with 408.
    pub request_timeout: Duration,
}

impl AppState {
    /// Creates an AppState over the given repository.
    pub fn with_repository(repo: Arc<dyn EntryRepository>) -> Self {
        Self {
            ratings: RatingService::new(repo),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Overrides the request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Creates AppState with in-memory storage.
    #[cfg(any(test, not(feature = "sqlite")))]
    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(crate::storage::InMemoryRepository::new()))
    }
}

#[cfg(feature = "sqlite")]
impl AppState {
    /// Creates AppState with SQLite storage.
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        let repo = crate::storage::SqliteRepository::new(
            &config.database_url,
            config.database_pool_size,
            config.database_pool_timeout(),
        )
        .await?;

        Ok(Self::with_repository(Arc::new(repo)).with_request_timeout(config.request_timeout()))
    }
}

#[cfg(not(feature = "sqlite"))]
impl AppState {
    /// Creates AppState with in-memory storage.
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        tracing::warn!("SQLite backend disabled, entries are kept in memory only");
        Ok(Self::in_memory().with_request_timeout(config.request_timeout()))
    }
}
