//! Catalog endpoint client.
//!
//! One `reqwest::Client` behind an `Arc`, with a `moka` cache in front of
//! the endpoint so repeated fetches within the TTL reuse the decoded list.

use std::sync::Arc;
use std::time::Duration;

use bramble_core::Product;
use moka::future::Cache;
use tracing::{debug, instrument};

use super::CatalogError;
use crate::config::CatalogConfig;

/// Cache key for catalog responses.
///
/// The catalog is a single unpaginated list, so there is one entry; the
/// enum keeps the key shape ready for per-category queries if the endpoint
/// ever grows them.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
enum CacheKey {
    Products,
}

/// Client for the remote catalog endpoint.
///
/// Cheaply cloneable. Successful responses are cached for the configured
/// TTL; a fetch failure is never cached.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    endpoint: String,
    request_timeout: Duration,
    cache: Cache<CacheKey, Arc<Vec<Product>>>,
}

impl CatalogClient {
    /// Create a new catalog client.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(8)
            .time_to_live(config.cache_ttl)
            .build();

        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                endpoint: config.endpoint.clone(),
                request_timeout: config.request_timeout,
                cache,
            }),
        }
    }

    /// Fetch the full product list.
    ///
    /// Single attempt, no retry. Overlapping calls race benignly: each
    /// completion inserts the list it decoded, so the cache holds whichever
    /// response finished last (last-write-wins).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the endpoint answers with a
    /// non-success status, or the body is not a JSON array of products.
    #[instrument(skip(self))]
    pub async fn fetch_products(&self) -> Result<Arc<Vec<Product>>, CatalogError> {
        if let Some(products) = self.inner.cache.get(&CacheKey::Products).await {
            debug!(count = products.len(), "Catalog cache hit");
            return Ok(products);
        }

        let products = Arc::new(self.fetch_uncached().await?);
        self.inner
            .cache
            .insert(CacheKey::Products, Arc::clone(&products))
            .await;
        Ok(products)
    }

    /// Perform the actual GET against the endpoint.
    async fn fetch_uncached(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self
            .inner
            .client
            .get(&self.inner.endpoint)
            .timeout(self.inner.request_timeout)
            .send()
            .await?;

        let status = response.status();

        // Read the body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "Catalog endpoint returned non-success status"
            );
            return Err(CatalogError::Status(status.as_u16()));
        }

        let products: Vec<Product> = serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(500).collect::<String>(),
                "Failed to parse catalog response"
            );
            CatalogError::Parse(e)
        })?;

        debug!(count = products.len(), "Fetched catalog");
        Ok(products)
    }
}
