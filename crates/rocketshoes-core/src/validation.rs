//! # Validation Module
//!
//! Admission rules for cart operations.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Local (THIS MODULE, before any lookup)                       │
//! │  ├── validate_amount: zero is never a valid amount                     │
//! │  └── validate_product_id: parse ids typed by a user                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Stock (THIS MODULE, after the stock lookup)                  │
//! │  └── check_stock: available ≥ requested                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart invariants (cart.rs)                                    │
//! │  ├── one item per id                                                   │
//! │  └── update/remove require presence                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rocketshoes_core::validation::{check_stock, validate_amount};
//! use rocketshoes_core::StockInfo;
//!
//! validate_amount(5, 2).unwrap();
//! check_stock(&StockInfo { id: 5, amount: 3 }, 2).unwrap();
//! assert!(check_stock(&StockInfo { id: 5, amount: 3 }, 4).is_err());
//! ```

use crate::error::{CartError, CartResult, ValidationError};
use crate::types::{ProductId, StockInfo};

/// Validates a requested amount.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Zero is an error, not a removal request
pub fn validate_amount(id: ProductId, amount: u32) -> CartResult<()> {
    if amount == 0 {
        return Err(CartError::InvalidAmount { id, amount });
    }

    Ok(())
}

/// Checks that the stock service covers `requested` units.
///
/// ## Returns
/// - `Ok(())` when `available ≥ requested`
/// - `Err(StockExceeded)` otherwise, carrying both numbers for the logs
pub fn check_stock(stock: &StockInfo, requested: u32) -> CartResult<()> {
    if stock.covers(requested) {
        return Ok(());
    }

    Err(CartError::StockExceeded {
        id: stock.id,
        available: stock.amount,
        requested,
    })
}

/// Parses a product id typed by a user (CLI arguments, query strings).
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Must be a non-negative integer
/// - Zero is not a catalog id
pub fn validate_product_id(raw: &str) -> Result<ProductId, ValidationError> {
    let raw = raw.trim();

    let id: ProductId = raw.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "product id".to_string(),
        reason: format!("'{}' is not a number", raw),
    })?;

    if id == 0 {
        return Err(ValidationError::MustBePositive {
            field: "product id".to_string(),
        });
    }

    Ok(id)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount(1, 1).is_ok());
        assert!(validate_amount(1, 999).is_ok());

        assert_eq!(
            validate_amount(1, 0).unwrap_err(),
            CartError::InvalidAmount { id: 1, amount: 0 }
        );
    }

    #[test]
    fn test_check_stock() {
        let stock = StockInfo { id: 5, amount: 3 };
        assert!(check_stock(&stock, 3).is_ok());

        assert_eq!(
            check_stock(&stock, 10).unwrap_err(),
            CartError::StockExceeded {
                id: 5,
                available: 3,
                requested: 10
            }
        );
    }

    #[test]
    fn test_validate_product_id() {
        assert_eq!(validate_product_id("5").unwrap(), 5);
        assert_eq!(validate_product_id(" 42 ").unwrap(), 42);

        assert!(validate_product_id("").is_err());
        assert!(validate_product_id("-1").is_err());
        assert!(validate_product_id("abc").is_err());
        assert!(matches!(
            validate_product_id("0"),
            Err(ValidationError::MustBePositive { .. })
        ));
    }
}
