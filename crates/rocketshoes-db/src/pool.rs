//! # Database Pool Management
//!
//! Opens the SQLite file that holds the cart's storage slots.
//!
//! ## Startup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Opening the Cart Database                          │
//! │                                                                         │
//! │  DbConfig::new(path)                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Database::new(config).await                                            │
//! │       │   filename(path), create if missing, WAL                        │
//! │       ▼                                                                 │
//! │  SqlitePool (small: one writer, one spare)                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  embedded migrations ──► storage_slots                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  db.slots() ──► SlotRepository (get / put)                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! WAL keeps the previous snapshot readable if the process dies mid-write.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use crate::error::{DbError, DbResult};
use crate::migrations;
use crate::repository::slot::SlotRepository;

const IN_MEMORY: &str = ":memory:";

// =============================================================================
// Configuration
// =============================================================================

/// Where the cart database lives and how many connections it may use.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Path to the SQLite file. Created on first open.
    pub database_path: PathBuf,

    /// Default: 2. In-memory databases use 1 so every query sees the same data.
    pub max_connections: u32,

    /// Default: 30 seconds
    pub acquire_timeout: Duration,
}

impl DbConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            database_path: path.into(),
            max_connections: 2,
            acquire_timeout: Duration::from_secs(30),
        }
    }

    /// Private in-memory database (for tests).
    pub fn in_memory() -> Self {
        DbConfig {
            database_path: PathBuf::from(IN_MEMORY),
            max_connections: 1,
            acquire_timeout: Duration::from_secs(5),
        }
    }

    fn is_in_memory(&self) -> bool {
        self.database_path.as_os_str() == IN_MEMORY
    }

    fn connect_options(&self) -> SqliteConnectOptions {
        let options = if self.is_in_memory() {
            SqliteConnectOptions::new().in_memory(true)
        } else {
            // Passed as a filename, never parsed as a URL.
            SqliteConnectOptions::new()
                .filename(&self.database_path)
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
        };
        options.synchronous(SqliteSynchronous::Normal)
    }
}

// =============================================================================
// Database
// =============================================================================

/// Database handle providing repository access.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens (creating if needed) the database and applies migrations.
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        info!(path = %config.database_path.display(), "Opening cart database");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(1)
            .acquire_timeout(config.acquire_timeout)
            .connect_with(config.connect_options())
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        migrations::run_migrations(&pool).await?;

        Ok(Database { pool })
    }

    /// Returns the storage slot repository.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let snapshot = db.slots().get("@RocketShoes:cart").await?;
    /// ```
    pub fn slots(&self) -> SlotRepository {
        SlotRepository::new(self.pool.clone())
    }

    /// Closes the pool. Later repository calls fail.
    pub async fn close(&self) {
        info!("Closing cart database");
        self.pool.close().await;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("rocketshoes-db-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn test_in_memory_database_is_migrated() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        db.slots().put("k", "[]").await.unwrap();
        assert_eq!(db.slots().get("k").await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_file_database_keeps_data_across_opens() {
        let dir = scratch_dir("reopen");
        let path = dir.join("cart.db");

        let db = Database::new(DbConfig::new(&path)).await.unwrap();
        db.slots().put("k", "[1]").await.unwrap();
        db.close().await;

        let db = Database::new(DbConfig::new(&path)).await.unwrap();
        assert_eq!(db.slots().get("k").await.unwrap().as_deref(), Some("[1]"));
        db.close().await;

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_path_with_url_characters_opens_that_file() {
        let dir = scratch_dir("url-chars");
        let path = dir.join("cart 100%?v=1#a.db");

        let db = Database::new(DbConfig::new(&path)).await.unwrap();
        db.slots().put("k", "[]").await.unwrap();
        db.close().await;

        assert!(path.exists());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_closed_database_rejects_queries() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.close().await;

        assert!(db.slots().get("k").await.is_err());
    }
}
