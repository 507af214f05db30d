//! Domain types for the cart and the catalog API.
//!
//! These mirror the catalog's REST payloads (`/products/{id}` and
//! `/stock/{id}`) plus the cart's own line-item type.

use cartside_core::{Keyed, Price, ProductId};
use serde::{Deserialize, Serialize};

/// Product metadata from `GET /products/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: Price,
    /// Image URL for display.
    pub image: String,
}

/// Point-in-time available quantity from `GET /stock/{id}`.
///
/// Transient: fetched per operation, never cached, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    pub id: ProductId,
    pub amount: u32,
}

/// One product entry in the cart with its quantity.
///
/// Invariant: `quantity >= 1`. Items enter the cart with quantity 1 and are
/// removed rather than ever reaching zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ProductId,
    pub title: String,
    pub price: Price,
    pub image: String,
    #[serde(rename = "amount")]
    pub quantity: u32,
}

impl CartItem {
    /// Create a line item for a product entering the cart.
    #[must_use]
    pub fn new(product: Product) -> Self {
        Self {
            id: product.id,
            title: product.title,
            price: product.price,
            image: product.image,
            quantity: 1,
        }
    }

    /// Copy of this line with a different quantity.
    #[must_use]
    pub fn with_quantity(&self, quantity: u32) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }

    /// Total price for this line (unit price times quantity).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

impl Keyed for CartItem {
    type Key = ProductId;

    fn key(&self) -> ProductId {
        self.id
    }
}
