//! In-memory storage backend.
//!
//! Stores entries in a HashMap wrapped in `Arc<RwLock<_>>`. Used when the
//! `sqlite` feature is disabled and as a stand-in for tests. Data is lost
//! when the repository is dropped.

mod repository;

pub use repository::InMemoryRepository;
