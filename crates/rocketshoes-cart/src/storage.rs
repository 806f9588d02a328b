//! # Cart Storage
//!
//! Durable home for the cart between sessions.
//!
//! ## Snapshot Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Snapshot Lifecycle                               │
//! │                                                                         │
//! │  CartStore::initialize                                                 │
//! │       │  storage.load() ──► Some("[...]") → Cart::from_snapshot        │
//! │       │                     None          → Cart::new()                │
//! │       ▼                                                                 │
//! │  every successful mutation                                             │
//! │       │  storage.save(&candidate) ── ok ──► commit in memory           │
//! │       │                           └─ err ─► cart unchanged + notice    │
//! │       ▼                                                                 │
//! │  one slot, overwritten wholesale with the JSON array                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `load` hands back the raw text so the store decides what a corrupt
//! snapshot means.

use async_trait::async_trait;
use rocketshoes_core::Cart;
use rocketshoes_db::{Database, SlotRepository};
use std::sync::Mutex;
use tracing::debug;

use crate::error::{StorageError, StorageResult};

/// Key-value persistence for the serialized cart.
#[async_trait]
pub trait CartStorage: Send + Sync {
    /// Reads the raw snapshot, if one was ever written.
    async fn load(&self) -> StorageResult<Option<String>>;

    /// Replaces the snapshot with `cart`.
    async fn save(&self, cart: &Cart) -> StorageResult<()>;
}

// =============================================================================
// SQLite Storage
// =============================================================================

/// Stores the cart in one `storage_slots` row.
#[derive(Debug, Clone)]
pub struct SqliteCartStorage {
    slots: SlotRepository,
    key: String,
}

impl SqliteCartStorage {
    /// Creates storage over `db`, writing to the slot named `key`.
    pub fn new(db: &Database, key: impl Into<String>) -> Self {
        SqliteCartStorage {
            slots: db.slots(),
            key: key.into(),
        }
    }

    /// Returns the slot key.
    pub fn key(&self) -> &str {
        &self.key
    }
}

#[async_trait]
impl CartStorage for SqliteCartStorage {
    async fn load(&self) -> StorageResult<Option<String>> {
        Ok(self.slots.get(&self.key).await?)
    }

    async fn save(&self, cart: &Cart) -> StorageResult<()> {
        let snapshot = cart.to_snapshot()?;
        self.slots.put(&self.key, &snapshot).await?;
        debug!(key = %self.key, items = cart.len(), "Cart snapshot saved");
        Ok(())
    }
}

// =============================================================================
// In-Memory Storage
// =============================================================================

/// Process-local storage for ephemeral sessions and tests.
#[derive(Debug, Default)]
pub struct MemoryCartStorage {
    snapshot: Mutex<Option<String>>,
}

impl MemoryCartStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with a raw snapshot already stored.
    pub fn with_snapshot(snapshot: impl Into<String>) -> Self {
        MemoryCartStorage {
            snapshot: Mutex::new(Some(snapshot.into())),
        }
    }

    /// Returns the stored snapshot.
    pub fn snapshot(&self) -> Option<String> {
        self.snapshot
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

#[async_trait]
impl CartStorage for MemoryCartStorage {
    async fn load(&self) -> StorageResult<Option<String>> {
        Ok(self.snapshot())
    }

    async fn save(&self, cart: &Cart) -> StorageResult<()> {
        let snapshot = cart.to_snapshot()?;
        let mut guard = self
            .snapshot
            .lock()
            .map_err(|_| StorageError::Unavailable("memory storage lock poisoned".into()))?;
        *guard = Some(snapshot);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rocketshoes_core::{LineItem, Product};
    use rocketshoes_db::DbConfig;

    fn sample_cart() -> Cart {
        let walking = Product::new(5, "Tênis de Caminhada", 179.9);
        let vr = Product::new(2, "Tênis VR Caminhada", 139.9);

        let mut cart = Cart::new();
        cart.push(LineItem::from_product(walking)).unwrap();
        cart.push(LineItem::from_product(vr).with_amount(3)).unwrap();
        cart
    }

    #[tokio::test]
    async fn test_sqlite_round_trip() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let storage = SqliteCartStorage::new(&db, "@RocketShoes:cart");

        assert_eq!(storage.load().await.unwrap(), None);

        let cart = sample_cart();
        storage.save(&cart).await.unwrap();

        let snapshot = storage.load().await.unwrap().unwrap();
        assert_eq!(Cart::from_snapshot(&snapshot).unwrap(), cart);
    }

    #[tokio::test]
    async fn test_sqlite_overwrites_previous_snapshot() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let storage = SqliteCartStorage::new(&db, "@RocketShoes:cart");

        storage.save(&sample_cart()).await.unwrap();
        storage.save(&Cart::new()).await.unwrap();

        assert_eq!(storage.load().await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_sqlite_closed_database_fails() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let storage = SqliteCartStorage::new(&db, "@RocketShoes:cart");
        db.close().await;

        assert!(matches!(
            storage.save(&sample_cart()).await,
            Err(StorageError::Db(_))
        ));
    }

    #[tokio::test]
    async fn test_memory_round_trip() {
        let storage = MemoryCartStorage::new();
        assert_eq!(storage.load().await.unwrap(), None);

        let cart = sample_cart();
        storage.save(&cart).await.unwrap();

        let snapshot = storage.snapshot().unwrap();
        assert_eq!(Cart::from_snapshot(&snapshot).unwrap(), cart);
    }
}
