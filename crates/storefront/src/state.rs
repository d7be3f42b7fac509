//! Application state owned by the composition root.

use std::sync::Arc;

use crate::cart::{CartStorage, CartStore, JsonFileStorage};
use crate::catalog::CatalogClient;
use crate::config::{ConfigError, StorefrontConfig};

/// Application state shared with whichever views need it.
///
/// Cheaply cloneable via `Arc`. The presentation layer builds one
/// `AppState`, keeps per-page [`crate::catalog::CatalogViewModel`]s itself,
/// and reaches the catalog client and the cart through this handle.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: CatalogClient,
    cart: CartStore,
}

impl AppState {
    /// Create application state with a file-backed cart slot taken from the
    /// configuration.
    ///
    /// The cart is rehydrated from the slot once, here.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: StorefrontConfig) -> Result<Self, ConfigError> {
        let storage = Arc::new(JsonFileStorage::new(config.cart.storage_path.clone()));
        Self::with_storage(config, storage)
    }

    /// Create application state with an explicit cart slot.
    ///
    /// Useful for session-only carts ([`crate::cart::MemoryStorage`]) and
    /// for tests.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_storage(
        config: StorefrontConfig,
        storage: Arc<dyn CartStorage>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let catalog = CatalogClient::new(&config.catalog);
        let cart = CartStore::load(storage);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                cart,
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog client.
    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.inner.catalog
    }

    /// Get a handle to the cart store.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.inner.cart
    }
}
