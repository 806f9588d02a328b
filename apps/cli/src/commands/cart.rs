//! # Cart Commands
//!
//! CLI commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐   add (new id)   ┌──────────┐                            │
//! │  │  Empty   │─────────────────►│ In Cart  │◄──┐ add (same id: +1)      │
//! │  │  Cart    │                  │ amount n │───┘ update (n ≤ stock)     │
//! │  └──────────┘◄─────────────────└──────────┘                            │
//! │                remove (last id)                                         │
//! │                                                                         │
//! │  Every arrow is checked against fresh stock (except remove) and        │
//! │  written to the storage slot before it takes effect.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rocketshoes_cart::CartStore;
use rocketshoes_core::{Cart, CartSummary, ProductId, UpdateProductAmount};
use serde::Serialize;
use tracing::debug;

use crate::error::CliError;

/// Cart output including items and counts.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Cart,
    pub summary: CartSummary,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        let summary = cart.summary();
        CartResponse {
            items: cart,
            summary,
        }
    }
}

/// Gets the current cart contents.
pub fn show(store: &CartStore) -> CartResponse {
    debug!("show command");
    CartResponse::from(store.cart())
}

/// Adds one unit of a product.
///
/// ## Behavior
/// - Product not in cart: fetched from the catalog, added with amount 1
/// - Product already in cart: amount goes up by one
/// - Either way the stock must cover the new amount
pub async fn add(store: &CartStore, id: ProductId) -> Result<CartResponse, CliError> {
    debug!(product_id = id, "add command");
    store.add_product(id).await?;
    Ok(show(store))
}

/// Removes a product from the cart.
pub async fn remove(store: &CartStore, id: ProductId) -> Result<CartResponse, CliError> {
    debug!(product_id = id, "remove command");
    store.remove_product(id).await?;
    Ok(show(store))
}

/// Sets the amount of a product already in the cart.
///
/// ## Behavior
/// - Amount 0: rejected (use `remove`)
/// - Amount above stock: rejected, cart unchanged
pub async fn update_amount(
    store: &CartStore,
    id: ProductId,
    amount: u32,
) -> Result<CartResponse, CliError> {
    debug!(product_id = id, amount, "update command");
    store
        .update_product_amount(UpdateProductAmount::new(id, amount))
        .await?;
    Ok(show(store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::testing::session;
    use rocketshoes_core::Notice;

    #[tokio::test]
    async fn test_add_then_update() {
        let mut s = session(&[(5, 3)]).await;

        let response = add(s.store(), 5).await.unwrap();
        assert_eq!(response.summary.item_count, 1);

        let response = update_amount(s.store(), 5, 3).await.unwrap();
        assert_eq!(response.summary.total_quantity, 3);
        assert!(s.drain_toasts().is_empty());
    }

    #[tokio::test]
    async fn test_rejections_map_to_codes_and_toasts() {
        let mut s = session(&[(5, 1)]).await;
        add(s.store(), 5).await.unwrap();

        let err = update_amount(s.store(), 5, 2).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::StockExceeded);

        let err = remove(s.store(), 8).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err = add(s.store(), 8).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let toasts = s.drain_toasts();
        let notices: Vec<Notice> = toasts.iter().map(|t| t.notice).collect();
        assert_eq!(
            notices,
            vec![Notice::StockExceeded, Notice::RemoveFailed, Notice::AddFailed]
        );
        assert_eq!(toasts[0].message, "Quantidade solicitada fora de estoque");

        assert_eq!(show(s.store()).summary.total_quantity, 1);
    }

    #[tokio::test]
    async fn test_response_json_shape() {
        let s = session(&[(5, 3)]).await;
        add(s.store(), 5).await.unwrap();

        let json = serde_json::to_value(show(s.store())).unwrap();
        assert_eq!(json["items"][0]["id"], 5);
        assert_eq!(json["items"][0]["amount"], 1);
        assert_eq!(json["summary"]["itemCount"], 1);
    }
}
