//! SQLite repository implementation.
//!
//! Implements `EntryRepository` from `ratings_core::storage` on top of a
//! `sqlx::SqlitePool`. Each operation runs in its own transaction; returning
//! early with `?` drops the `Transaction`, which rolls it back.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Sqlite, SqlitePool, Transaction};

use ratings_core::storage::{EntryRepository, Result, StorageError, StoredEntry};

use super::conversions::{format_timestamp, row_to_entry, EntryRow};
use super::error::map_sqlx_error;
use super::schema;

/// SQLite-based repository implementation backed by a bounded connection pool.
pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    /// Opens a pool against `url` and creates the schema.
    ///
    /// The database file is created if it doesn't exist. Checkouts that wait
    /// longer than `acquire_timeout` fail with `StorageError::Unavailable`.
    pub async fn new(url: &str, max_connections: u32, acquire_timeout: Duration) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(map_sqlx_error)?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(acquire_timeout)
            .connect_with(options)
            .await
            .map_err(map_sqlx_error)?;

        tracing::info!(url, max_connections, "Opened SQLite pool");

        Self::from_pool(pool).await
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the pool is dropped. The pool
    /// keeps exactly one connection alive since every connection to
    /// `sqlite::memory:` is a separate database.
    pub async fn new_in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .map_err(map_sqlx_error)?;

        Self::from_pool(pool).await
    }

    /// Wraps an existing pool and creates the schema.
    pub async fn from_pool(pool: SqlitePool) -> Result<Self> {
        let repo = Self { pool };
        repo.migrate().await?;
        Ok(repo)
    }

    /// Runs the schema statements.
    async fn migrate(&self) -> Result<()> {
        for statement in schema::SCHEMA {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(map_sqlx_error)?;
        }
        Ok(())
    }

    async fn begin(&self) -> Result<Transaction<'static, Sqlite>> {
        self.pool.begin().await.map_err(map_sqlx_error)
    }
}

#[async_trait]
impl EntryRepository for SqliteRepository {
    async fn get_entry(&self, name: &str) -> Result<StoredEntry> {
        let mut tx = self.begin().await?;

        let row = sqlx::query_as::<_, EntryRow>(schema::SELECT_ENTRY_BY_NAME)
            .bind(name)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        tx.commit().await.map_err(map_sqlx_error)?;

        match row {
            Some(row) => row_to_entry(row),
            None => Err(StorageError::not_found(name)),
        }
    }

    async fn set_entry_rating(&self, name: &str, rating: i64) -> Result<bool> {
        let now = format_timestamp(&Utc::now());
        let mut tx = self.begin().await?;

        // UPDATE first so the write lock is held before deciding to insert.
        let updated = sqlx::query(schema::UPDATE_ENTRY_RATING)
            .bind(rating)
            .bind(&now)
            .bind(name)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?
            .rows_affected();

        let created = updated == 0;
        if created {
            sqlx::query(schema::INSERT_ENTRY)
                .bind(name)
                .bind(rating)
                .bind(&now)
                .bind(&now)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx_error)?;
        }

        tx.commit().await.map_err(map_sqlx_error)?;

        tracing::debug!(name = %name, rating, created, "Wrote entry");
        Ok(created)
    }

    async fn delete_entry(&self, name: &str) -> Result<bool> {
        let mut tx = self.begin().await?;

        let deleted = sqlx::query(schema::DELETE_ENTRY_BY_NAME)
            .bind(name)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?
            .rows_affected();

        tx.commit().await.map_err(map_sqlx_error)?;

        Ok(deleted > 0)
    }

    async fn get_entries(&self) -> Result<Vec<StoredEntry>> {
        let mut tx = self.begin().await?;

        let rows = sqlx::query_as::<_, EntryRow>(schema::SELECT_ALL_ENTRIES)
            .fetch_all(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        tx.commit().await.map_err(map_sqlx_error)?;

        rows.into_iter().map(row_to_entry).collect()
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query(schema::PING)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }
}
