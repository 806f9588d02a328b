//! In-process session for command tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use rocketshoes_cart::{
    ApiError, ApiResult, CartStore, CatalogApi, ChannelNotifier, MemoryCartStorage, StockApi,
};
use rocketshoes_core::{Locale, Product, ProductId, StockInfo};

use crate::state::Session;

/// Catalog where every stocked id is also a product.
struct Shelf(HashMap<ProductId, i64>);

#[async_trait]
impl StockApi for Shelf {
    async fn fetch_stock(&self, id: ProductId) -> ApiResult<StockInfo> {
        self.0
            .get(&id)
            .map(|&amount| StockInfo { id, amount })
            .ok_or(ApiError::NotFound {
                resource: "stock",
                id,
            })
    }
}

#[async_trait]
impl CatalogApi for Shelf {
    async fn fetch_product(&self, id: ProductId) -> ApiResult<Product> {
        if self.0.contains_key(&id) {
            Ok(Product::new(id, format!("Tênis {id}"), 199.9))
        } else {
            Err(ApiError::NotFound {
                resource: "product",
                id,
            })
        }
    }
}

pub async fn session(stock: &[(ProductId, i64)]) -> Session {
    let shelf = Arc::new(Shelf(stock.iter().copied().collect()));
    let (notifier, toasts) = ChannelNotifier::new(Locale::PtBr);

    let store = CartStore::initialize(
        shelf.clone(),
        shelf,
        Arc::new(MemoryCartStorage::new()),
        Arc::new(notifier),
    )
    .await;

    Session::from_store(Arc::new(store), toasts)
}
