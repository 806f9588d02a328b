//! # Domain Types
//!
//! Core domain types used throughout the RocketShoes cart.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    LineItem     │   │   StockInfo     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │──►│  id             │   │  id             │       │
//! │  │  title          │   │  title, price,  │   │  amount         │       │
//! │  │  price          │   │  image (copied) │   │  (available)    │       │
//! │  │  image          │   │  amount (≥ 1)   │   │                 │       │
//! │  │  ...extra       │   │  ...extra       │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │    catalog record        cart entry            read-only, per call     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Catalog Fields
//! The catalog may return fields this crate does not know about. They are kept
//! in `extra` and written back verbatim, so a stored cart keeps whatever the
//! catalog sent when the product was added.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use ts_rs::TS;

use crate::INITIAL_AMOUNT;

/// Catalog identifier of a product.
pub type ProductId = u64;

// =============================================================================
// Product
// =============================================================================

/// A product record as returned by the catalog (`GET /products/{id}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Catalog identifier.
    pub id: ProductId,

    /// Display name.
    #[serde(default)]
    pub title: String,

    /// Display price. Copied for rendering only; the cart never prices.
    #[serde(default)]
    pub price: f64,

    /// Image URL.
    #[serde(default)]
    pub image: String,

    /// Any other catalog fields, kept verbatim.
    #[serde(flatten)]
    #[ts(skip)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// Creates a product with no extra catalog fields.
    pub fn new(id: ProductId, title: impl Into<String>, price: f64) -> Self {
        Product {
            id,
            title: title.into(),
            price,
            image: String::new(),
            extra: Map::new(),
        }
    }

    /// Sets the image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One entry of the cart: a product plus the chosen amount.
///
/// ## Design Notes
/// - `id` is unique within a cart (enforced by [`Cart`](crate::Cart))
/// - `amount` is at least 1 while the item is present
/// - Product fields are a frozen copy taken when the product was added
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// Catalog identifier.
    pub id: ProductId,

    /// Display name at time of adding.
    #[serde(default)]
    pub title: String,

    /// Display price at time of adding.
    #[serde(default)]
    pub price: f64,

    /// Image URL at time of adding.
    #[serde(default)]
    pub image: String,

    /// Quantity in the cart.
    pub amount: u32,

    /// Remaining catalog fields, kept verbatim.
    #[serde(flatten)]
    #[ts(skip)]
    pub extra: Map<String, Value>,
}

impl LineItem {
    /// Creates a cart entry from a catalog record with the initial amount.
    pub fn from_product(product: Product) -> Self {
        let Product {
            id,
            title,
            price,
            image,
            mut extra,
        } = product;

        // A stray catalog "amount" would collide with ours on serialization
        extra.remove("amount");

        LineItem {
            id,
            title,
            price,
            image,
            amount: INITIAL_AMOUNT,
            extra,
        }
    }

    /// Returns a copy with a different amount.
    pub fn with_amount(mut self, amount: u32) -> Self {
        self.amount = amount;
        self
    }
}

// =============================================================================
// Stock
// =============================================================================

/// Available quantity for a product (`GET /stock/{id}`).
///
/// Read-only and fetched per request; never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StockInfo {
    /// Catalog identifier.
    pub id: ProductId,

    /// Units available. Signed because the stock service owns this number.
    pub amount: i64,
}

impl StockInfo {
    /// Returns true if stock covers `requested` units.
    pub fn covers(&self, requested: u32) -> bool {
        self.amount >= i64::from(requested)
    }
}

// =============================================================================
// Operation Input
// =============================================================================

/// Input of an amount update, shaped the way the UI sends it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UpdateProductAmount {
    /// Product whose amount changes.
    pub product_id: ProductId,

    /// New absolute amount (not a delta).
    pub amount: u32,
}

impl UpdateProductAmount {
    pub fn new(product_id: ProductId, amount: u32) -> Self {
        UpdateProductAmount { product_id, amount }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
