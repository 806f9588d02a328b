//! # Cart
//!
//! The ordered collection of line items behind the cart store.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Mutations                                       │
//! │                                                                         │
//! │  Store Operation             Cart Method          Cart Change           │
//! │  ───────────────             ───────────          ───────────           │
//! │                                                                         │
//! │  add_product (new) ────────► push(item) ────────► items.push(item)     │
//! │                                                                         │
//! │  add_product (existing) ──┐                                             │
//! │  update_product_amount ───┴► set_amount() ──────► items[i].amount = n  │
//! │                                                                         │
//! │  remove_product ───────────► remove(id) ────────► items.retain(..)     │
//! │                                                                         │
//! │  NOTE: The store calls these on a clone and only commits the clone     │
//! │        once the snapshot is persisted.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialized Form
//! A cart serializes as a bare JSON array of line items, the format kept in
//! the storage slot:
//! ```json
//! [{ "id": 5, "title": "Tênis", "price": 179.9, "image": "...", "amount": 2 }]
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CartError, CartResult};
use crate::types::{LineItem, ProductId};
use crate::validation::validate_amount;

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by `id`
/// - Every amount is ≥ 1 (zero is rejected, never stored)
/// - Order is insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart(Vec<LineItem>);

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart(Vec::new())
    }

    /// Parses a stored snapshot.
    ///
    /// The snapshot is trusted: it was written by this crate, so no shape
    /// checks beyond deserialization are made.
    pub fn from_snapshot(snapshot: &str) -> serde_json::Result<Self> {
        serde_json::from_str(snapshot)
    }

    /// Serializes the cart into the flat snapshot format.
    pub fn to_snapshot(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Returns the item for `id`, if present.
    pub fn find(&self, id: ProductId) -> Option<&LineItem> {
        self.0.iter().find(|item| item.id == id)
    }

    /// Returns true if `id` is in the cart.
    pub fn contains(&self, id: ProductId) -> bool {
        self.find(id).is_some()
    }

    /// Appends a new item.
    ///
    /// ## Returns
    /// - `Err(AlreadyInCart)` if the id is present (callers update instead)
    /// - `Err(InvalidAmount)` if the item carries amount 0
    pub fn push(&mut self, item: LineItem) -> CartResult<()> {
        if self.contains(item.id) {
            return Err(CartError::AlreadyInCart { id: item.id });
        }
        validate_amount(item.id, item.amount)?;

        self.0.push(item);
        Ok(())
    }

    /// Sets the amount of an existing item. Other items are untouched.
    pub fn set_amount(&mut self, id: ProductId, amount: u32) -> CartResult<()> {
        validate_amount(id, amount)?;

        let item = self
            .0
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(CartError::NotInCart { id })?;
        item.amount = amount;
        Ok(())
    }

    /// Removes the item for `id`, whatever its amount.
    pub fn remove(&mut self, id: ProductId) -> CartResult<LineItem> {
        let position = self
            .0
            .iter()
            .position(|item| item.id == id)
            .ok_or(CartError::NotInCart { id })?;
        Ok(self.0.remove(position))
    }

    /// Returns the items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LineItem> {
        self.0.iter()
    }

    /// Returns the number of distinct products.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the sum of all amounts.
    pub fn total_quantity(&self) -> u64 {
        self.0.iter().map(|item| u64::from(item.amount)).sum()
    }

    /// Returns the counts shown in the storefront header.
    pub fn summary(&self) -> CartSummary {
        CartSummary::from(self)
    }
}

impl From<Vec<LineItem>> for Cart {
    fn from(items: Vec<LineItem>) -> Self {
        Cart(items)
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a LineItem;
    type IntoIter = std::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Cart counts for badges and headers. No pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartSummary {
    pub item_count: usize,
    pub total_quantity: u64,
}

impl From<&Cart> for CartSummary {
    fn from(cart: &Cart) -> Self {
        CartSummary {
            item_count: cart.len(),
            total_quantity: cart.total_quantity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Product;

    fn item(id: ProductId, amount: u32) -> LineItem {
        LineItem::from_product(Product::new(id, format!("Tênis {}", id), 100.0)).with_amount(amount)
    }

    #[test]
    fn test_push_keeps_insertion_order() {
        let mut cart = Cart::new();
        cart.push(item(3, 1)).unwrap();
        cart.push(item(1, 1)).unwrap();
        cart.push(item(2, 1)).unwrap();

        let ids: Vec<_> = cart.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_push_rejects_duplicate_id() {
        let mut cart = Cart::new();
        cart.push(item(1, 1)).unwrap();

        let err = cart.push(item(1, 2)).unwrap_err();
        assert_eq!(err, CartError::AlreadyInCart { id: 1 });
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.find(1).unwrap().amount, 1);
    }

    #[test]
    fn test_push_rejects_zero_amount() {
        let mut cart = Cart::new();
        let err = cart.push(item(1, 0)).unwrap_err();
        assert_eq!(err, CartError::InvalidAmount { id: 1, amount: 0 });
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_amount_touches_only_target() {
        let mut cart = Cart::from(vec![item(1, 1), item(2, 5), item(3, 2)]);

        cart.set_amount(2, 4).unwrap();

        let amounts: Vec<_> = cart.iter().map(|i| (i.id, i.amount)).collect();
        assert_eq!(amounts, vec![(1, 1), (2, 4), (3, 2)]);
    }

    #[test]
    fn test_set_amount_zero_is_rejected_not_removed() {
        let mut cart = Cart::from(vec![item(1, 3)]);

        let err = cart.set_amount(1, 0).unwrap_err();
        assert_eq!(err, CartError::InvalidAmount { id: 1, amount: 0 });
        assert_eq!(cart.find(1).unwrap().amount, 3);
    }

    #[test]
    fn test_set_amount_absent_item() {
        let mut cart = Cart::new();
        assert_eq!(
            cart.set_amount(9, 2).unwrap_err(),
            CartError::NotInCart { id: 9 }
        );
    }

    #[test]
    fn test_remove_keeps_others_in_order() {
        let mut cart = Cart::from(vec![item(1, 1), item(2, 7), item(3, 2)]);

        let removed = cart.remove(2).unwrap();
        assert_eq!(removed.amount, 7);

        let ids: Vec<_> = cart.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(cart.remove(2).unwrap_err(), CartError::NotInCart { id: 2 });
    }

    #[test]
    fn test_snapshot_round_trip() {
        let cart = Cart::from(vec![item(5, 2), item(1, 1)]);

        let snapshot = cart.to_snapshot().unwrap();
        assert!(snapshot.starts_with('['));

        let restored = Cart::from_snapshot(&snapshot).unwrap();
        assert_eq!(restored, cart);
    }

    #[test]
    fn test_snapshot_rejects_garbage() {
        assert!(Cart::from_snapshot("not json").is_err());
        assert!(Cart::from_snapshot("{\"id\": 1}").is_err());
    }

    #[test]
    fn test_summary() {
        let cart = Cart::from(vec![item(1, 2), item(2, 3)]);
        assert_eq!(
            cart.summary(),
            CartSummary {
                item_count: 2,
                total_quantity: 5
            }
        );
        assert_eq!(Cart::new().summary().total_quantity, 0);
    }
}
