//! # Error Types
//!
//! Domain-specific error types for rocketshoes-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  rocketshoes-core errors (this file)                                   │
//! │  ├── CartError        - Cart rule violations                           │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  rocketshoes-db errors (separate crate)                                │
//! │  └── DbError          - Storage slot failures                          │
//! │                                                                         │
//! │  rocketshoes-cart errors                                               │
//! │  ├── ApiError         - Stock/catalog lookup failures                  │
//! │  └── StoreError       - What a store operation returns                 │
//! │                                                                         │
//! │  Flow: CartError → StoreError → Notice → UI                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, amounts)
//! 3. Errors are enum variants, never String
//! 4. Stock exhaustion is its own variant because it has its own notice

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Cart Error
// =============================================================================

/// Cart rule violations.
///
/// These are the local checks a cart operation performs before and after
/// consulting the stock service. None of them are fatal; the store turns
/// each one into a [`Notice`](crate::Notice) and leaves the cart unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// The product is not in the cart.
    ///
    /// ## When This Occurs
    /// - Removing a product that was never added
    /// - [`Cart::set_amount`](crate::Cart::set_amount) on an absent id (the
    ///   store checks membership first and never hits this)
    #[error("Product {id} is not in the cart")]
    NotInCart { id: ProductId },

    /// The product is already in the cart.
    ///
    /// Raised by [`Cart::push`](crate::Cart::push); the store never reaches
    /// it because adding an existing product becomes an amount update.
    #[error("Product {id} is already in the cart")]
    AlreadyInCart { id: ProductId },

    /// The requested amount is not allowed.
    ///
    /// Zero is rejected rather than treated as a removal.
    #[error("Invalid amount {amount} for product {id}")]
    InvalidAmount { id: ProductId, amount: u32 },

    /// The stock service cannot cover the requested amount.
    ///
    /// ## User Workflow
    /// ```text
    /// Change amount to 10
    ///      │
    ///      ▼
    /// Stock lookup: available=3
    ///      │
    ///      ▼
    /// StockExceeded { id: 5, available: 3, requested: 10 }
    ///      │
    ///      ▼
    /// UI shows: "Quantidade solicitada fora de estoque"
    /// ```
    #[error("Insufficient stock for product {id}: available {available}, requested {requested}")]
    StockExceeded {
        id: ProductId,
        available: i64,
        requested: u32,
    },
}

impl CartError {
    /// Returns true for the one business condition that has its own notice.
    pub fn is_stock_exceeded(&self) -> bool {
        matches!(self, CartError::StockExceeded { .. })
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when an operation's input is malformed, before any cart rule
/// runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Field value is malformed.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CartError.
pub type CartResult<T> = Result<T, CartError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CartError::StockExceeded {
            id: 5,
            available: 3,
            requested: 10,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for product 5: available 3, requested 10"
        );

        let err = CartError::NotInCart { id: 7 };
        assert_eq!(err.to_string(), "Product 7 is not in the cart");
    }

    #[test]
    fn test_only_stock_exceeded_is_flagged() {
        assert!(CartError::StockExceeded {
            id: 1,
            available: 0,
            requested: 1
        }
        .is_stock_exceeded());
        assert!(!CartError::InvalidAmount { id: 1, amount: 0 }.is_stock_exceeded());
        assert!(!CartError::NotInCart { id: 1 }.is_stock_exceeded());
    }
}
