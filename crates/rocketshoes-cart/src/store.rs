//! # Cart Store
//!
//! The single owner of the live cart for a session.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       CartStore Operation Flow                          │
//! │                                                                         │
//! │  add_product / remove_product / update_product_amount                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  lock cart (tokio Mutex, held until the operation ends)                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  build candidate ── validate amount ── fetch stock ── check stock      │
//! │       │                  │                 │              │             │
//! │       │                  └────── any Err ──┴──────────────┘             │
//! │       │                                 │                               │
//! │       ▼                                 ▼                               │
//! │  storage.save(candidate)          notify(StoreError::notice(op))       │
//! │       │        │                  cart unchanged, Err returned          │
//! │       │        └─ Err ────────────────► ▲                               │
//! │       ▼                                                                 │
//! │  commit in memory + publish on watch channel                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialized Writers
//! Each operation holds the lock across its lookups and its write, so two
//! overlapping `add_product(5)` calls end with amount 2, never 1.
//!
//! ## Cancellation
//! Dropping an operation's future releases the lock. The in-memory cart is
//! only replaced after the write returns, so a dropped operation leaves it as
//! it was.

use rocketshoes_core::validation::{check_stock, validate_amount};
use rocketshoes_core::{
    Cart, CartSummary, LineItem, Operation, ProductId, UpdateProductAmount,
    INITIAL_AMOUNT,
};
use std::sync::Arc;
use tokio::sync::{watch, Mutex};
use tracing::{debug, error, info, warn};

use crate::api::{CatalogApi, StockApi};
use crate::error::{StoreError, StoreResult};
use crate::notify::Notifier;
use crate::storage::CartStorage;

/// Cart state manager.
///
/// Built once per session and shared as `Arc<CartStore>`.
///
/// ## Example
/// ```rust,ignore
/// let api = Arc::new(HttpShopApi::from_settings(&config.api)?);
/// let store = CartStore::initialize(api.clone(), api, storage, notifier).await;
///
/// store.add_product(5).await?;
/// store.update_product_amount(UpdateProductAmount::new(5, 3)).await?;
/// println!("{} pairs", store.summary().total_quantity);
/// ```
pub struct CartStore {
    cart: Mutex<Cart>,
    updates: watch::Sender<Cart>,
    stock: Arc<dyn StockApi>,
    catalog: Arc<dyn CatalogApi>,
    storage: Arc<dyn CartStorage>,
    notifier: Arc<dyn Notifier>,
}

impl CartStore {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates the store, restoring the persisted cart if there is one.
    ///
    /// Never fails: an unreadable or missing snapshot starts an empty cart.
    pub async fn initialize(
        stock: Arc<dyn StockApi>,
        catalog: Arc<dyn CatalogApi>,
        storage: Arc<dyn CartStorage>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let cart = match storage.load().await {
            Ok(Some(snapshot)) => match Cart::from_snapshot(&snapshot) {
                Ok(cart) => {
                    info!(items = cart.len(), "Restored cart from storage");
                    cart
                }
                Err(e) => {
                    warn!(error = %e, "Stored cart is unreadable, starting empty");
                    Cart::new()
                }
            },
            Ok(None) => {
                info!("No stored cart, starting empty");
                Cart::new()
            }
            Err(e) => {
                warn!(error = %e, "Failed to read stored cart, starting empty");
                Cart::new()
            }
        };

        let (updates, _) = watch::channel(cart.clone());

        CartStore {
            cart: Mutex::new(cart),
            updates,
            stock,
            catalog,
            storage,
            notifier,
        }
    }

    // =========================================================================
    // Read Surface
    // =========================================================================

    /// Returns a copy of the committed cart.
    pub fn cart(&self) -> Cart {
        self.updates.borrow().clone()
    }

    /// Returns item and pair counts for badges.
    pub fn summary(&self) -> CartSummary {
        self.updates.borrow().summary()
    }

    /// Subscribes to committed carts. Rejected operations publish nothing.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.updates.subscribe()
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Adds one unit of a product.
    ///
    /// A product already in the cart goes through the amount update with
    /// `current + 1`, and any failure is reported as that update.
    pub async fn add_product(&self, id: ProductId) -> StoreResult<()> {
        debug!(product_id = id, "add_product");
        let mut cart = self.cart.lock().await;

        let (operation, result) = match cart.find(id).map(|item| item.amount) {
            Some(current) => {
                let update = UpdateProductAmount::new(id, current.saturating_add(1));
                (Operation::UpdateAmount, self.updated(&cart, update).await)
            }
            None => (Operation::Add, self.added(&cart, id).await),
        };

        self.settle(&mut cart, operation, result).await?;
        info!(product_id = id, "Product added to cart");
        Ok(())
    }

    /// Removes a product, whatever its amount.
    pub async fn remove_product(&self, id: ProductId) -> StoreResult<()> {
        debug!(product_id = id, "remove_product");
        let mut cart = self.cart.lock().await;

        let result = Self::removed(&cart, id);

        self.settle(&mut cart, Operation::Remove, result).await?;
        info!(product_id = id, "Product removed from cart");
        Ok(())
    }

    /// Sets a product's amount to an absolute value.
    ///
    /// An id that is not in the cart still goes through the stock check; if
    /// stock covers the amount the cart is saved unchanged and nothing is
    /// reported.
    pub async fn update_product_amount(&self, update: UpdateProductAmount) -> StoreResult<()> {
        debug!(product_id = update.product_id, amount = update.amount, "update_product_amount");
        let mut cart = self.cart.lock().await;

        let result = self.updated(&cart, update).await;

        self.settle(&mut cart, Operation::UpdateAmount, result).await?;
        info!(
            product_id = update.product_id,
            amount = update.amount,
            "Product amount updated"
        );
        Ok(())
    }

    // =========================================================================
    // Candidates
    // =========================================================================

    async fn added(&self, cart: &Cart, id: ProductId) -> StoreResult<Cart> {
        let stock = self.stock.fetch_stock(id).await?;
        check_stock(&stock, INITIAL_AMOUNT)?;

        let product = self.catalog.fetch_product(id).await?;

        let mut candidate = cart.clone();
        candidate.push(LineItem::from_product(product))?;
        Ok(candidate)
    }

    fn removed(cart: &Cart, id: ProductId) -> StoreResult<Cart> {
        let mut candidate = cart.clone();
        candidate.remove(id)?;
        Ok(candidate)
    }

    async fn updated(&self, cart: &Cart, update: UpdateProductAmount) -> StoreResult<Cart> {
        let UpdateProductAmount { product_id: id, amount } = update;

        validate_amount(id, amount)?;

        let stock = self.stock.fetch_stock(id).await?;
        check_stock(&stock, amount)?;

        let mut candidate = cart.clone();
        if candidate.contains(id) {
            candidate.set_amount(id, amount)?;
        } else {
            debug!(product_id = id, "Not in cart, nothing to update");
        }
        Ok(candidate)
    }

    // =========================================================================
    // Commit / Report
    // =========================================================================

    /// Commits a candidate or reports why there is none.
    async fn settle(
        &self,
        cart: &mut Cart,
        operation: Operation,
        result: StoreResult<Cart>,
    ) -> StoreResult<()> {
        let outcome = match result {
            Ok(candidate) => self.commit(cart, candidate).await,
            Err(err) => Err(err),
        };

        outcome.map_err(|err| self.report(operation, err))
    }

    /// Persists the candidate, then makes it the live cart.
    async fn commit(&self, cart: &mut Cart, candidate: Cart) -> StoreResult<()> {
        self.persist(&candidate).await?;

        *cart = candidate;
        self.updates.send_replace(cart.clone());
        debug!(items = cart.len(), "Cart committed");
        Ok(())
    }

    async fn persist(&self, cart: &Cart) -> StoreResult<()> {
        self.storage.save(cart).await.map_err(|e| {
            error!(error = %e, "Failed to persist cart");
            StoreError::from(e)
        })
    }

    fn report(&self, operation: Operation, err: StoreError) -> StoreError {
        let notice = err.notice(operation);

        match &err {
            StoreError::Cart(_) => warn!(%operation, error = %err, "Cart change rejected"),
            StoreError::Api(_) => error!(%operation, error = %err, "Lookup failed"),
            // already logged by persist
            StoreError::Storage(_) => {}
        }

        self.notifier.notify(notice);
        err
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &*self.updates.borrow())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
