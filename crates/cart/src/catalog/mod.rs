//! Catalog REST API client.
//!
//! # Architecture
//!
//! - Catalog is source of truth for products and stock - NO local sync,
//!   direct API calls
//! - Product metadata cached in memory via `moka` (TTL from config)
//! - Stock is NEVER cached: every mutation validates against a fresh
//!   point-in-time stock snapshot
//!
//! # Endpoints
//!
//! - `GET /products/{id}` - product metadata (`id`, `title`, `price`, `image`)
//! - `GET /stock/{id}` - available quantity (`id`, `amount`)

mod client;

pub use client::CatalogClient;

use async_trait::async_trait;
use cartside_core::ProductId;
use thiserror::Error;

use crate::types::{Product, Stock};

/// Errors that can occur when talking to the catalog API.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// URL construction failed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rate limited by the catalog.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Catalog returned a non-success status.
    #[error("Catalog returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

/// Read access to the remote catalog.
///
/// The cart container depends on this trait rather than on the HTTP client
/// directly, so tests can substitute an in-memory catalog.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch product metadata for `id`.
    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError>;

    /// Fetch a fresh stock snapshot for `id`.
    async fn get_stock(&self, id: ProductId) -> Result<Stock, CatalogError>;
}
