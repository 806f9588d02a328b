//! Fake collaborators for store tests.

use async_trait::async_trait;
use rocketshoes_core::{Cart, Notice, Product, ProductId, StockInfo};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::api::{CatalogApi, StockApi};
use crate::error::{ApiError, ApiResult, StorageError, StorageResult};
use crate::notify::Notifier;
use crate::storage::{CartStorage, MemoryCartStorage};
use crate::store::CartStore;

// =============================================================================
// Shop
// =============================================================================

/// Programmable stock + catalog.
#[derive(Default)]
pub struct FakeShop {
    stock: Mutex<HashMap<ProductId, i64>>,
    products: Mutex<HashMap<ProductId, Product>>,
    broken: Mutex<HashSet<ProductId>>,
    hanging: Mutex<HashSet<ProductId>>,
    stock_calls: AtomicUsize,
}

impl FakeShop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a product with the given stock.
    pub fn with(self, id: ProductId, title: &str, available: i64) -> Self {
        self.products
            .lock()
            .unwrap()
            .insert(id, Product::new(id, title, 100.0 + id as f64));
        self.set_stock(id, available);
        self
    }

    /// Registers stock with no catalog record behind it.
    pub fn with_stock_only(self, id: ProductId, available: i64) -> Self {
        self.set_stock(id, available);
        self
    }

    pub fn set_stock(&self, id: ProductId, available: i64) {
        self.stock.lock().unwrap().insert(id, available);
    }

    /// Makes stock lookups for `id` answer 503.
    pub fn break_stock(&self, id: ProductId) {
        self.broken.lock().unwrap().insert(id);
    }

    /// Makes stock lookups for `id` never complete.
    pub fn hang_stock(&self, id: ProductId) {
        self.hanging.lock().unwrap().insert(id);
    }

    pub fn stock_calls(&self) -> usize {
        self.stock_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StockApi for FakeShop {
    async fn fetch_stock(&self, id: ProductId) -> ApiResult<StockInfo> {
        self.stock_calls.fetch_add(1, Ordering::SeqCst);
        // Give overlapping operations a chance to interleave.
        tokio::task::yield_now().await;

        let hangs = self.hanging.lock().unwrap().contains(&id);
        if hangs {
            std::future::pending::<()>().await;
        }
        let broken = self.broken.lock().unwrap().contains(&id);
        if broken {
            return Err(ApiError::Status {
                status: 503,
                url: format!("http://fake/stock/{id}"),
            });
        }

        let amount = self.stock.lock().unwrap().get(&id).copied();
        amount
            .map(|amount| StockInfo { id, amount })
            .ok_or(ApiError::NotFound {
                resource: "stock",
                id,
            })
    }
}

#[async_trait]
impl CatalogApi for FakeShop {
    async fn fetch_product(&self, id: ProductId) -> ApiResult<Product> {
        tokio::task::yield_now().await;

        let product = self.products.lock().unwrap().get(&id).cloned();
        product.ok_or(ApiError::NotFound {
            resource: "product",
            id,
        })
    }
}

// =============================================================================
// Storage
// =============================================================================

/// Memory storage whose reads and writes can be switched off.
#[derive(Default)]
pub struct FlakyStorage {
    inner: MemoryCartStorage,
    reads_failing: AtomicBool,
    writes_failing: AtomicBool,
    saves: AtomicUsize,
}

impl FlakyStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: &str) -> Self {
        FlakyStorage {
            inner: MemoryCartStorage::with_snapshot(snapshot),
            ..Self::default()
        }
    }

    pub fn fail_reads(&self, failing: bool) {
        self.reads_failing.store(failing, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, failing: bool) {
        self.writes_failing.store(failing, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> Option<String> {
        self.inner.snapshot()
    }

    /// Parses what is stored, treating "nothing yet" as an empty cart.
    pub fn stored_cart(&self) -> Cart {
        self.snapshot()
            .map(|s| Cart::from_snapshot(&s).unwrap())
            .unwrap_or_default()
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CartStorage for FlakyStorage {
    async fn load(&self) -> StorageResult<Option<String>> {
        if self.reads_failing.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("storage locked".into()));
        }
        self.inner.load().await
    }

    async fn save(&self, cart: &Cart) -> StorageResult<()> {
        if self.writes_failing.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("quota exceeded".into()));
        }
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.inner.save(cart).await
    }
}

// =============================================================================
// Notifier
// =============================================================================

/// Remembers every notice in order.
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

// =============================================================================
// Harness
// =============================================================================

pub struct Harness {
    pub store: Arc<CartStore>,
    pub shop: Arc<FakeShop>,
    pub storage: Arc<FlakyStorage>,
    pub notifier: Arc<RecordingNotifier>,
}

impl Harness {
    pub async fn new(shop: FakeShop) -> Self {
        Self::with_storage(shop, FlakyStorage::new()).await
    }

    pub async fn with_storage(shop: FakeShop, storage: FlakyStorage) -> Self {
        let shop = Arc::new(shop);
        let storage = Arc::new(storage);
        let notifier = Arc::new(RecordingNotifier::default());

        let store = CartStore::initialize(
            shop.clone(),
            shop.clone(),
            storage.clone(),
            notifier.clone(),
        )
        .await;

        Harness {
            store: Arc::new(store),
            shop,
            storage,
            notifier,
        }
    }

    /// `(id, amount)` pairs of the in-memory cart, in order.
    pub fn lines(&self) -> Vec<(ProductId, u32)> {
        self.store
            .cart()
            .iter()
            .map(|item| (item.id, item.amount))
            .collect()
    }

    /// `(id, amount)` pairs of the persisted cart, in order.
    pub fn stored_lines(&self) -> Vec<(ProductId, u32)> {
        self.storage
            .stored_cart()
            .iter()
            .map(|item| (item.id, item.amount))
            .collect()
    }
}
