//! # rocketshoes-core: Pure Cart Logic for RocketShoes
//!
//! This crate is the **heart** of the RocketShoes cart. It contains the cart
//! data model and every admission rule as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      RocketShoes Cart Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Storefront UI / CLI                          │   │
//! │  │    Product list ──► Cart page ──► Header badge                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 rocketshoes-cart (CartStore)                    │   │
//! │  │    add_product, remove_product, update_product_amount         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ rocketshoes-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   cart    │  │  notice   │  │ validation│  │   │
//! │  │   │ LineItem  │  │   Cart    │  │  Notice   │  │  amounts  │  │   │
//! │  │   │ StockInfo │  │  Summary  │  │  Locale   │  │  stock    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, LineItem, StockInfo)
//! - [`cart`] - The ordered cart collection
//! - [`error`] - Domain error types
//! - [`notice`] - User-facing notifications and their messages
//! - [`validation`] - Amount and stock admission rules
//!
//! ## Example Usage
//!
//! ```rust
//! use rocketshoes_core::{Cart, LineItem, Product};
//!
//! let mut cart = Cart::new();
//! cart.push(LineItem::from_product(Product::new(5, "Tênis de Caminhada", 179.9)))
//!     .unwrap();
//!
//! cart.set_amount(5, 3).unwrap();
//! assert_eq!(cart.total_quantity(), 3);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod notice;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartSummary};
pub use error::{CartError, CartResult, ValidationError};
pub use notice::{Locale, Notice, Operation};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Storage slot the storefront has always used for the serialized cart.
pub const DEFAULT_SLOT_KEY: &str = "@RocketShoes:cart";

/// Amount given to a product the first time it enters the cart.
pub const INITIAL_AMOUNT: u32 = 1;
