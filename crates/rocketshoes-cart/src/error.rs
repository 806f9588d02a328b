//! # Cart Store Error Types
//!
//! Error types for the cart store and its collaborators.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Store Error Types                            │
//! │                                                                         │
//! │  StoreError (returned by every CartStore operation)                    │
//! │  ├── Cart(CartError)       ← rules in rocketshoes-core                 │
//! │  │     NotInCart, InvalidAmount, StockExceeded, ...                    │
//! │  ├── Api(ApiError)         ← stock / catalog lookups                   │
//! │  │     Http, Status, NotFound, Parse                                   │
//! │  └── Storage(StorageError) ← snapshot persistence                      │
//! │        Db, Serialize, Unavailable                                      │
//! │                                                                         │
//! │  ConfigError (loading cart.toml, never seen by operations)             │
//! │                                                                         │
//! │  Notice selection:                                                     │
//! │    Cart(StockExceeded)  → Notice::StockExceeded                        │
//! │    anything else        → Notice::failed(operation)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rocketshoes_core::{CartError, Notice, Operation, ProductId};
use rocketshoes_db::DbError;
use thiserror::Error;

// =============================================================================
// API Errors
// =============================================================================

/// Errors from the stock and catalog endpoints.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connect, timeout, TLS, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// The server has no such record.
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: ProductId },

    /// The response body was not the expected JSON shape.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl ApiError {
    /// Returns true if the request failed before any response arrived.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Http(_))
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors from reading or writing the persisted cart.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing database failed.
    #[error("Storage database error: {0}")]
    Db(#[from] DbError),

    /// The cart could not be encoded.
    #[error("Failed to serialize cart: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The storage is not accepting writes.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

// =============================================================================
// Store Errors
// =============================================================================

/// Error returned by a [`CartStore`](crate::CartStore) operation.
///
/// By the time a caller sees one of these the user has already been
/// notified, and the cart is unchanged.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A cart rule rejected the change.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// A stock or catalog lookup failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The new cart could not be persisted.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl StoreError {
    /// Picks the user-facing notice for a failed operation.
    ///
    /// Only a stock shortfall gets its own message; transport, lookup,
    /// storage and rule failures all show the operation's generic notice.
    pub fn notice(&self, operation: Operation) -> Notice {
        match self {
            StoreError::Cart(err) if err.is_stock_exceeded() => Notice::StockExceeded,
            _ => Notice::failed(operation),
        }
    }

    /// Returns true if this error came from the stock check.
    pub fn is_stock_exceeded(&self) -> bool {
        matches!(self, StoreError::Cart(err) if err.is_stock_exceeded())
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors from loading `cart.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A setting has an unusable value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The API base URL is not http(s).
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The config file could not be read or parsed.
    #[error("Failed to load config: {0}")]
    LoadFailed(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::LoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::LoadFailed(err.to_string())
    }
}

// =============================================================================
// Result Aliases
// =============================================================================

/// Result type for API lookups.
pub type ApiResult<T> = Result<T, ApiError>;

/// Result type for storage access.
pub type StorageResult<T> = Result<T, StorageError>;

/// Result type for cart store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type for configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;
