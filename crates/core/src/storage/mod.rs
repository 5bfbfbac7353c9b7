mod error;
mod traits;
mod types;

pub use error::{Result, StorageError};
pub use traits::EntryRepository;
pub use types::StoredEntry;
