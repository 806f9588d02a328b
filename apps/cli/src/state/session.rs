//! # Session State
//!
//! Opens storage, builds the cart store and collects its toasts.

use std::sync::Arc;

use rocketshoes_cart::{
    CartConfig, CartStore, ChannelNotifier, HttpShopApi, SqliteCartStorage, Toast,
};
use rocketshoes_db::{Database, DbConfig};
use tokio::sync::mpsc;
use tracing::info;

use crate::error::{CliError, ErrorCode};

/// One invocation's cart store and the resources behind it.
pub struct Session {
    store: Arc<CartStore>,
    toasts: mpsc::UnboundedReceiver<Toast>,
    db: Option<Database>,
}

impl Session {
    /// Opens the configured database and restores the cart.
    pub async fn open(config: &CartConfig) -> Result<Self, CliError> {
        let db_path = config.database_path();
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                CliError::new(
                    ErrorCode::StorageError,
                    format!("Cannot create {}: {}", parent.display(), e),
                )
            })?;
        }
        info!(?db_path, "Opening cart storage");

        let db = Database::new(DbConfig::new(db_path)).await?;
        let api = Arc::new(HttpShopApi::from_settings(&config.api)?);
        let storage = Arc::new(SqliteCartStorage::new(&db, config.slot_key()));
        let (notifier, toasts) = ChannelNotifier::new(config.locale());

        let store = CartStore::initialize(api.clone(), api, storage, Arc::new(notifier)).await;

        Ok(Session {
            store: Arc::new(store),
            toasts,
            db: Some(db),
        })
    }

    /// Wraps an already-built store; used when the caller owns the resources.
    pub fn from_store(store: Arc<CartStore>, toasts: mpsc::UnboundedReceiver<Toast>) -> Self {
        Session {
            store,
            toasts,
            db: None,
        }
    }

    pub fn store(&self) -> &CartStore {
        &self.store
    }

    /// Takes every toast emitted so far.
    pub fn drain_toasts(&mut self) -> Vec<Toast> {
        let mut toasts = Vec::new();
        while let Ok(toast) = self.toasts.try_recv() {
            toasts.push(toast);
        }
        toasts
    }

    /// Closes the database pool, if this session opened one.
    pub async fn close(self) {
        if let Some(db) = self.db {
            db.close().await;
        }
    }
}
