//! HTTP implementation of the catalog API.
//!
//! Uses `reqwest` with an in-memory `moka` cache for product metadata.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use cartside_core::ProductId;
use moka::future::Cache;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use crate::catalog::{CatalogApi, CatalogError};
use crate::config::CatalogConfig;
use crate::types::{Product, Stock};

/// Client for the catalog REST API.
///
/// Product metadata is cached for the configured TTL; stock lookups always
/// hit the network.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: Url,
    access_token: Option<SecretString>,
    products: Cache<ProductId, Product>,
}

impl CatalogClient {
    /// Create a new catalog client.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let products = Cache::builder()
            .max_capacity(1000)
            .time_to_live(Duration::from_secs(config.cache_ttl_secs))
            .build();

        // Relative joins drop the last path segment unless the base ends
        // with a slash.
        let mut base_url = config.base_url.clone();
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            inner: Arc::new(CatalogClientInner {
                client,
                base_url,
                access_token: config.access_token.clone(),
                products,
            }),
        })
    }

    /// Execute a GET request against the catalog and decode the JSON body.
    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let url = self.inner.base_url.join(path)?;

        let mut request = self.inner.client.get(url);
        if let Some(token) = &self.inner.access_token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await?;
        let status = response.status();

        // Check for rate limiting
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(CatalogError::RateLimited(retry_after));
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(path.to_string()));
        }

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %response_text.chars().take(500).collect::<String>(),
                "Catalog API returned non-success status"
            );
            return Err(CatalogError::Status {
                status: status.as_u16(),
                body: response_text.chars().take(200).collect(),
            });
        }

        serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %response_text.chars().take(500).collect::<String>(),
                "Failed to parse catalog response"
            );
            CatalogError::Parse(e)
        })
    }

    /// Invalidate a cached product.
    pub async fn invalidate_product(&self, id: ProductId) {
        self.inner.products.invalidate(&id).await;
    }

    /// Invalidate all cached products.
    pub async fn invalidate_all(&self) {
        self.inner.products.invalidate_all();
        self.inner.products.run_pending_tasks().await;
    }
}

#[async_trait]
impl CatalogApi for CatalogClient {
    /// Get a product by its ID. Cached for the configured TTL.
    #[instrument(skip(self), fields(product_id = %id))]
    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        if let Some(product) = self.inner.products.get(&id).await {
            debug!("Cache hit for product");
            return Ok(product);
        }

        let product: Product = self.fetch(&format!("products/{id}")).await?;

        self.inner.products.insert(id, product.clone()).await;

        Ok(product)
    }

    /// Get the stock snapshot for a product. Always fetched fresh.
    #[instrument(skip(self), fields(product_id = %id))]
    async fn get_stock(&self, id: ProductId) -> Result<Stock, CatalogError> {
        self.fetch(&format!("stock/{id}")).await
    }
}
