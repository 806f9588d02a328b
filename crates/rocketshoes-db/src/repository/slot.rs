//! # Storage Slot Repository
//!
//! A tiny key-value store over the `storage_slots` table.
//!
//! ## Slot Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How a Slot Is Used                                   │
//! │                                                                         │
//! │  Session start                                                         │
//! │       │  get("@RocketShoes:cart") ──► Some("[...]") | None             │
//! │       ▼                                                                 │
//! │  Every successful mutation                                             │
//! │       │  put("@RocketShoes:cart", "[...]")                             │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │ storage_slots                           │                           │
//! │  │ key               | value  | updated_at │                           │
//! │  │ @RocketShoes:cart | [...]  | 2026-...   │ ← overwritten wholesale   │
//! │  └─────────────────────────────────────────┘                           │
//! │                                                                         │
//! │  The value is opaque here; the snapshot format belongs to the caller.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;

/// Repository for named storage slots.
#[derive(Debug, Clone)]
pub struct SlotRepository {
    pool: SqlitePool,
}

impl SlotRepository {
    /// Creates a new SlotRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SlotRepository { pool }
    }

    /// Reads a slot.
    ///
    /// ## Returns
    /// * `Ok(Some(value))` - Slot has been written before
    /// * `Ok(None)` - Slot was never written
    pub async fn get(&self, key: &str) -> DbResult<Option<String>> {
        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM storage_slots WHERE key = ?1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        debug!(key = %key, found = value.is_some(), "Read storage slot");
        Ok(value)
    }

    /// Writes a slot, replacing any previous value.
    pub async fn put(&self, key: &str, value: &str) -> DbResult<()> {
        debug!(key = %key, bytes = value.len(), "Writing storage slot");

        sqlx::query(
            r#"
            INSERT INTO storage_slots (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::pool::{Database, DbConfig};

    const KEY: &str = "@RocketShoes:cart";

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_missing_slot_is_none() {
        let db = test_db().await;
        assert_eq!(db.slots().get(KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let db = test_db().await;
        let slots = db.slots();

        slots.put(KEY, r#"[{"id":5,"amount":1}]"#).await.unwrap();

        assert_eq!(
            slots.get(KEY).await.unwrap().as_deref(),
            Some(r#"[{"id":5,"amount":1}]"#)
        );
    }

    #[tokio::test]
    async fn test_put_overwrites_wholesale() {
        let db = test_db().await;
        let slots = db.slots();

        slots.put(KEY, r#"[{"id":5,"amount":1}]"#).await.unwrap();
        slots.put(KEY, "[]").await.unwrap();

        assert_eq!(slots.get(KEY).await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_slots_are_independent() {
        let db = test_db().await;
        let slots = db.slots();

        slots.put(KEY, "[1]").await.unwrap();
        slots.put("other", "[2]").await.unwrap();

        slots.put("other", "[3]").await.unwrap();

        assert_eq!(slots.get(KEY).await.unwrap().as_deref(), Some("[1]"));
        assert_eq!(slots.get("other").await.unwrap().as_deref(), Some("[3]"));
    }
}
