//! The cart state container.
//!
//! Holds the ordered collection of line items in memory, mirrors it to the
//! durable local slot on every successful mutation, and validates every
//! mutation against a fresh stock snapshot from the catalog.
//!
//! Operations are serialized: the collection mutex is held across the remote
//! stock lookup, so two rapid invocations cannot interleave on the
//! "is this product already in the cart" check.

use std::sync::Arc;

use cartside_core::{ProductId, append, remove_by_key, replace_by_key};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::instrument;

use crate::catalog::{CatalogApi, CatalogError};
use crate::store::{LocalStore, StoreError};
use crate::types::CartItem;

/// Storage slot holding the serialized cart collection.
pub const CART_STORAGE_KEY: &str = "cartside:cart";

/// An ordered copy of the cart's line items.
pub type CartSnapshot = Vec<CartItem>;

/// Errors surfaced by cart operations.
///
/// All three operations report failures the same way; nothing is silently
/// swallowed. Consumers map these to user-facing notifications.
#[derive(Debug, Error)]
pub enum CartError {
    /// Catalog lookup failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Durable storage failed.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Requested quantity exceeds the available stock.
    #[error("Requested quantity exceeds stock for product {id} ({available} available)")]
    OutOfStock { id: ProductId, available: u32 },

    /// The product is not in the cart.
    #[error("Product {0} is not in the cart")]
    NotInCart(ProductId),
}

/// Shopping-cart state container.
///
/// Cheaply cloneable via `Arc`; all clones share the same collection and
/// storage slot. Construct one at application startup and hand it to
/// whatever needs cart access.
#[derive(Clone)]
pub struct CartState {
    inner: Arc<CartStateInner>,
}

struct CartStateInner {
    catalog: Arc<dyn CatalogApi>,
    store: Arc<dyn LocalStore>,
    items: Mutex<Vec<CartItem>>,
}

impl CartState {
    /// Create a cart container, restoring the collection from the durable
    /// slot if one exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be read or holds invalid JSON.
    pub fn new(
        catalog: Arc<dyn CatalogApi>,
        store: Arc<dyn LocalStore>,
    ) -> Result<Self, CartError> {
        let items = match store.load(CART_STORAGE_KEY)? {
            Some(json) => serde_json::from_str(&json).map_err(StoreError::Serialize)?,
            None => Vec::new(),
        };

        Ok(Self {
            inner: Arc::new(CartStateInner {
                catalog,
                store,
                items: Mutex::new(items),
            }),
        })
    }

    /// Current ordered collection of line items.
    pub async fn snapshot(&self) -> CartSnapshot {
        self.inner.items.lock().await.clone()
    }

    /// Add one unit of a product to the cart.
    ///
    /// A product not yet in the cart enters with quantity 1; a product
    /// already present has its quantity bumped by 1, but only if the fresh
    /// stock snapshot strictly exceeds the current quantity.
    ///
    /// # Errors
    ///
    /// Returns `OutOfStock` when stock does not cover the bump, or a catalog
    /// or storage error. The collection is unchanged on any error.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn add_product(&self, id: ProductId) -> Result<CartSnapshot, CartError> {
        let mut items = self.inner.items.lock().await;

        let stock = self.inner.catalog.get_stock(id).await?;
        let current = items.iter().find(|item| item.id == id).cloned();

        let next = match current {
            None => {
                let product = self.inner.catalog.get_product(id).await?;
                append(items.clone(), CartItem::new(product))
            }
            Some(item) => {
                if stock.amount > item.quantity {
                    let bumped = item.with_quantity(item.quantity + 1);
                    replace_by_key(items.clone(), bumped)
                } else {
                    return Err(CartError::OutOfStock {
                        id,
                        available: stock.amount,
                    });
                }
            }
        };

        self.persist(&next)?;
        *items = next;
        Ok(items.clone())
    }

    /// Remove a product's line item from the cart.
    ///
    /// # Errors
    ///
    /// Returns `NotInCart` if the product has no line item, or a storage
    /// error. The collection is unchanged on any error.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn remove_product(&self, id: ProductId) -> Result<CartSnapshot, CartError> {
        let mut items = self.inner.items.lock().await;

        let (next, removed) = remove_by_key(items.clone(), &id);
        if !removed {
            return Err(CartError::NotInCart(id));
        }

        self.persist(&next)?;
        *items = next;
        Ok(items.clone())
    }

    /// Set a line item's quantity to exactly `quantity`.
    ///
    /// A quantity of zero is ignored and returns the current snapshot
    /// unchanged. Other fields of the line item are untouched.
    ///
    /// # Errors
    ///
    /// Returns `NotInCart` if the product has no line item, `OutOfStock` if
    /// the fresh stock snapshot cannot cover `quantity`, or a catalog or
    /// storage error. The collection is unchanged on any error.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn update_product_quantity(
        &self,
        id: ProductId,
        quantity: u32,
    ) -> Result<CartSnapshot, CartError> {
        let mut items = self.inner.items.lock().await;

        if quantity == 0 {
            return Ok(items.clone());
        }

        let Some(current) = items.iter().find(|item| item.id == id).cloned() else {
            return Err(CartError::NotInCart(id));
        };

        let stock = self.inner.catalog.get_stock(id).await?;
        if stock.amount < quantity {
            return Err(CartError::OutOfStock {
                id,
                available: stock.amount,
            });
        }

        let next = replace_by_key(items.clone(), current.with_quantity(quantity));

        self.persist(&next)?;
        *items = next;
        Ok(items.clone())
    }

    /// Empty the cart and its durable slot.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the slot cannot be cleared.
    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<(), CartError> {
        let mut items = self.inner.items.lock().await;
        self.inner.store.remove(CART_STORAGE_KEY)?;
        items.clear();
        Ok(())
    }

    /// Mirror the collection to the durable slot.
    fn persist(&self, items: &[CartItem]) -> Result<(), CartError> {
        let json = serde_json::to_string(items).map_err(StoreError::Serialize)?;
        self.inner.store.save(CART_STORAGE_KEY, &json)?;
        Ok(())
    }
}
