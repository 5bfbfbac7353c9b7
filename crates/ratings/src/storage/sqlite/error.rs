//! SQLite error mapping.
//!
//! Maps `sqlx::Error` to `StorageError` from `ratings_core::storage`.
//! Anything that means "the database could not be reached" becomes
//! `Unavailable`; everything else is `Failed`.

use ratings_core::storage::StorageError;

/// Primary SQLite result codes that mean the database can't be used right now.
const SQLITE_BUSY: i32 = 5;
const SQLITE_LOCKED: i32 = 6;
const SQLITE_CANTOPEN: i32 = 14;

/// Returns true if a (possibly extended) SQLite result code signals unavailability.
fn is_unavailable_code(code: &str) -> bool {
    code.parse::<i32>()
        .map(|code| matches!(code & 0xff, SQLITE_BUSY | SQLITE_LOCKED | SQLITE_CANTOPEN))
        .unwrap_or(false)
}

/// Maps a sqlx error to a StorageError.
///
/// # Error Mapping
///
/// - Pool timeout, closed pool, crashed worker, I/O, TLS → `StorageError::Unavailable`
/// - `SQLITE_BUSY`, `SQLITE_LOCKED`, `SQLITE_CANTOPEN` → `StorageError::Unavailable`
/// - All other errors → `StorageError::Failed`
pub fn map_sqlx_error(err: sqlx::Error) -> StorageError {
    match &err {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StorageError::Unavailable(err.to_string()),

        sqlx::Error::Database(db_err)
            if db_err.code().as_deref().is_some_and(is_unavailable_code) =>
        {
            StorageError::Unavailable(err.to_string())
        }

        _ => StorageError::Failed(err.to_string()),
    }
}
