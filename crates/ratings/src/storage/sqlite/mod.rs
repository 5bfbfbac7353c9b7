//! SQLite storage backend implementation.
//!
//! Uses a `sqlx::SqlitePool` for bounded, concurrent connection checkouts and
//! one transaction per repository call.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
