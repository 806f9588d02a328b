//! # CLI Error Type
//!
//! Unified error type for CLI commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the CLI                                │
//! │                                                                         │
//! │  rocketshoes add 5                                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<CartResponse, CliError>                                  │  │
//! │  │         │                                                        │  │
//! │  │  StoreError::Cart ──── NotInCart / InvalidAmount / Stock ──┐    │  │
//! │  │  StoreError::Api ───── Http / Status / NotFound / Parse ───┤    │  │
//! │  │  StoreError::Storage ─ Db / Serialize ─────────────────────┼──► │  │
//! │  │  ConfigError / DbError (startup) ──────────────────────────┘    │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  stderr: the notice the user saw (pt-BR or en)                         │
//! │  stderr: [CODE] detailed message                                       │
//! │  exit status 1                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rocketshoes_cart::{ApiError, ConfigError, StoreError};
use rocketshoes_core::CartError;
use rocketshoes_db::DbError;
use serde::Serialize;

/// Error returned from CLI commands.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CliError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable detail
    pub message: String,
}

/// Error codes for failed commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product not in the cart or not in the catalog
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Requested amount is more than the stock holds
    StockExceeded,

    /// Stock or catalog service failed
    LookupFailed,

    /// Cart could not be persisted
    StorageError,

    /// Config file unusable
    ConfigError,

    /// Anything else
    Internal,
}

impl CliError {
    /// Creates a new CLI error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CliError {
            code,
            message: message.into(),
        }
    }
}

/// Converts cart store errors.
impl From<StoreError> for CliError {
    fn from(err: StoreError) -> Self {
        let code = match &err {
            StoreError::Cart(CartError::NotInCart { .. }) => ErrorCode::NotFound,
            StoreError::Cart(CartError::StockExceeded { .. }) => ErrorCode::StockExceeded,
            StoreError::Cart(_) => ErrorCode::ValidationError,
            StoreError::Api(ApiError::NotFound { .. }) => ErrorCode::NotFound,
            StoreError::Api(_) => ErrorCode::LookupFailed,
            StoreError::Storage(_) => ErrorCode::StorageError,
        };
        CliError::new(code, err.to_string())
    }
}

/// Converts API client construction errors.
impl From<ApiError> for CliError {
    fn from(err: ApiError) -> Self {
        CliError::new(ErrorCode::Internal, format!("Failed to build API client: {}", err))
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<DbError> for CliError {
    fn from(err: DbError) -> Self {
        tracing::error!("Storage database failed: {}", err);
        CliError::new(ErrorCode::StorageError, err.to_string())
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for CliError {}
