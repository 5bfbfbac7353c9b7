//! Storage backend implementations.
//!
//! This module provides concrete implementations of `EntryRepository` from
//! `ratings_core::storage`. The backend is selected at compile time.
//!
//! # Feature Flags
//!
//! - `sqlite` (default): SQLite storage backend using `sqlx`
//! - without `sqlite`: in-memory storage, nothing is persisted
//!
//! # Examples
//!
//! Build with SQLite (default):
//! ```bash
//! cargo build -p ratings
//! ```
//!
//! Build with in-memory storage:
//! ```bash
//! cargo build -p ratings --no-default-features
//! ```

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(any(test, not(feature = "sqlite")))]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;

#[cfg(any(test, not(feature = "sqlite")))]
pub use inmemory::InMemoryRepository;
