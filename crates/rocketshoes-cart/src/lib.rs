//! # rocketshoes-cart: Cart State Manager for RocketShoes
//!
//! This crate owns the shopping cart of one storefront session: it keeps the
//! line-items in memory, checks every quantity change against the stock
//! service, and mirrors the cart to durable storage after each change.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cart Store Architecture                          │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                     CartStore (store.rs)                         │  │
//! │  │                                                                  │  │
//! │  │  Built once per session, shared as Arc<CartStore>               │  │
//! │  │  add_product / remove_product / update_product_amount           │  │
//! │  │  cart() / summary() / subscribe()                               │  │
//! │  └────────────────────────────┬─────────────────────────────────────┘  │
//! │                               │                                         │
//! │         ┌─────────────────────┼─────────────────────┐                  │
//! │         ▼                     ▼                     ▼                   │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────┐    │
//! │  │ StockApi /     │  │  CartStorage   │  │  Notifier              │    │
//! │  │ CatalogApi     │  │                │  │                        │    │
//! │  │                │  │ SqliteCart-    │  │ LogNotifier            │    │
//! │  │ HttpShopApi    │  │ Storage        │  │ ChannelNotifier        │    │
//! │  │ (reqwest)      │  │ MemoryCart-    │  │ (toasts for the UI)    │    │
//! │  │                │  │ Storage        │  │                        │    │
//! │  └────────────────┘  └────────────────┘  └────────────────────────┘    │
//! │                                                                         │
//! │  CartConfig (config.rs): cart.toml + ROCKETSHOES_* env overrides       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,ignore
//! use rocketshoes_cart::{CartConfig, CartStore, HttpShopApi, LogNotifier, SqliteCartStorage};
//! use rocketshoes_db::{Database, DbConfig};
//!
//! let config = CartConfig::load_or_default(None);
//! let db = Database::new(DbConfig::new(config.database_path())).await?;
//!
//! let api = Arc::new(HttpShopApi::from_settings(&config.api)?);
//! let storage = Arc::new(SqliteCartStorage::new(&db, config.slot_key()));
//! let notifier = Arc::new(LogNotifier::new(config.locale()));
//!
//! let store = CartStore::initialize(api.clone(), api, storage, notifier).await;
//! store.add_product(5).await?;
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod notify;
pub mod storage;
pub mod store;

#[cfg(test)]
mod testing;

pub use api::{CatalogApi, HttpShopApi, StockApi};
pub use config::{ApiSettings, CartConfig, NotificationSettings, StorageSettings};
pub use error::{
    ApiError, ApiResult, ConfigError, ConfigResult, StorageError, StorageResult, StoreError,
    StoreResult,
};
pub use notify::{ChannelNotifier, LogNotifier, Notifier, Toast};
pub use storage::{CartStorage, MemoryCartStorage, SqliteCartStorage};
pub use store::CartStore;
