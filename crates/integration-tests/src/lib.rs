//! Integration tests for Cartside.
//!
//! Drives the cart container end to end against an in-memory catalog and an
//! in-memory store. No network, no filesystem.
//!
//! # Test Categories
//!
//! - `cart_mutations` - add/remove/update semantics and stock validation
//! - `cart_persistence` - durable slot mirroring and restore-on-start

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::unwrap_used)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;

use cartside_cart::cart::CartState;
use cartside_cart::catalog::{CatalogApi, CatalogError};
use cartside_cart::store::{LocalStore, MemoryStore};
use cartside_cart::types::{Product, Stock};
use cartside_core::{Price, ProductId};

/// In-memory catalog with adjustable stock and a failure switch.
#[derive(Default)]
pub struct FakeCatalog {
    products: Mutex<HashMap<ProductId, Product>>,
    stock: Mutex<HashMap<ProductId, u32>>,
    failing: AtomicBool,
}

impl FakeCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a product with an initial stock amount.
    #[must_use]
    pub fn with_product(self, product: Product, stock: u32) -> Self {
        let id = product.id;
        self.products
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, product);
        self.stock
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, stock);
        self
    }

    /// Change the available stock for a product.
    pub fn set_stock(&self, id: ProductId, amount: u32) {
        self.stock
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, amount);
    }

    /// Make every catalog call fail until switched back.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check_failing(&self) -> Result<(), CatalogError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(CatalogError::Status {
                status: 500,
                body: "catalog unavailable".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogApi for FakeCatalog {
    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.check_failing()?;
        self.products
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(format!("products/{id}")))
    }

    async fn get_stock(&self, id: ProductId) -> Result<Stock, CatalogError> {
        self.check_failing()?;
        self.stock
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .map(|amount| Stock { id, amount: *amount })
            .ok_or_else(|| CatalogError::NotFound(format!("stock/{id}")))
    }
}

/// Build a product with the given id and a price in cents.
#[must_use]
pub fn product(id: i64, title: &str, price_cents: i64) -> Product {
    Product {
        id: ProductId::new(id),
        title: title.to_string(),
        price: Price::from_cents(price_cents),
        image: format!("https://cdn.example.com/{id}.jpg"),
    }
}

/// A cart wired to the given catalog and a fresh in-memory store.
#[must_use]
pub fn cart_with(catalog: Arc<FakeCatalog>) -> (CartState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let cart = CartState::new(catalog, store.clone()).expect("empty store always loads");
    (cart, store)
}

/// Typed contents of the durable cart slot, if any.
#[must_use]
pub fn stored_items(store: &MemoryStore) -> Option<Vec<cartside_cart::types::CartItem>> {
    store
        .load(cartside_cart::cart::CART_STORAGE_KEY)
        .unwrap()
        .map(|json| serde_json::from_str(&json).expect("slot holds valid cart JSON"))
}
