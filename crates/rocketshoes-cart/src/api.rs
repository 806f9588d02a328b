//! # Stock & Catalog API
//!
//! Lookups the cart store makes before admitting a change.
//!
//! ## Endpoints
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront API                                   │
//! │                                                                         │
//! │  GET {base_url}/stock/{id}     → { "id": 5, "amount": 3 }              │
//! │  GET {base_url}/products/{id}  → { "id": 5, "title": ..., "price": ..., │
//! │                                    "image": ..., ...extra }            │
//! │                                                                         │
//! │  Response mapping:                                                     │
//! │    2xx + valid JSON   → Ok(T)                                          │
//! │    2xx + bad body     → ApiError::Parse                                │
//! │    404                → ApiError::NotFound                             │
//! │    other non-2xx      → ApiError::Status                               │
//! │    no response        → ApiError::Http                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Stock is fetched fresh for every check; nothing here caches.

use async_trait::async_trait;
use rocketshoes_core::{Product, ProductId, StockInfo};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::config::ApiSettings;
use crate::error::{ApiError, ApiResult};

// =============================================================================
// Collaborator Traits
// =============================================================================

/// Source of available-quantity figures.
#[async_trait]
pub trait StockApi: Send + Sync {
    /// Fetches the current stock for a product.
    async fn fetch_stock(&self, id: ProductId) -> ApiResult<StockInfo>;
}

/// Source of full product records.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetches the catalog record for a product.
    async fn fetch_product(&self, id: ProductId) -> ApiResult<Product>;
}

// =============================================================================
// HTTP Client
// =============================================================================

/// reqwest-backed client for the storefront API.
#[derive(Debug, Clone)]
pub struct HttpShopApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpShopApi {
    /// Creates a client for `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ApiResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(HttpShopApi { client, base_url })
    }

    /// Creates a client from the `[api]` config section.
    pub fn from_settings(settings: &ApiSettings) -> ApiResult<Self> {
        Self::new(settings.base_url.clone(), settings.timeout())
    }

    /// Returns the base URL requests are made against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T: DeserializeOwned>(
        &self,
        resource: &'static str,
        path: &str,
        id: ProductId,
    ) -> ApiResult<T> {
        let url = format!("{}/{}/{}", self.base_url, path, id);
        debug!(url = %url, "GET");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status.is_success() {
            return response
                .json()
                .await
                .map_err(|e| ApiError::Parse(format!("{resource} {id}: {e}")));
        }

        if status.as_u16() == 404 {
            return Err(ApiError::NotFound { resource, id });
        }

        Err(ApiError::Status {
            status: status.as_u16(),
            url,
        })
    }
}

#[async_trait]
impl StockApi for HttpShopApi {
    async fn fetch_stock(&self, id: ProductId) -> ApiResult<StockInfo> {
        self.get("stock", "stock", id).await
    }
}

#[async_trait]
impl CatalogApi for HttpShopApi {
    async fn fetch_product(&self, id: ProductId) -> ApiResult<Product> {
        self.get("product", "products", id).await
    }
}
