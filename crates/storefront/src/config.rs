//! Storefront configuration.
//!
//! The core exposes no environment or config-file surface; the composition
//! root constructs a [`StorefrontConfig`] (usually from [`Default`]) and
//! validates it before wiring up [`crate::state::AppState`].

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default remote catalog endpoint.
pub const DEFAULT_CATALOG_ENDPOINT: &str = "https://fakestoreapi.com/products";

/// Default name of the persisted cart slot.
pub const DEFAULT_CART_SLOT: &str = "cart.json";

/// Configuration errors that can occur during validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid catalog endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
    #[error("unsupported endpoint scheme: {0}")]
    UnsupportedScheme(String),
}

/// Storefront application configuration.
#[derive(Debug, Clone, Default)]
pub struct StorefrontConfig {
    /// Remote catalog configuration.
    pub catalog: CatalogConfig,
    /// Cart persistence configuration.
    pub cart: CartConfig,
}

/// Remote catalog endpoint configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// URL returning the full product list as a JSON array.
    pub endpoint: String,
    /// Timeout for the single catalog request.
    pub request_timeout: Duration,
    /// How long a fetched product list stays cached in the client.
    pub cache_ttl: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CATALOG_ENDPOINT.to_string(),
            request_timeout: Duration::from_secs(10),
            cache_ttl: Duration::from_secs(300), // 5 minutes
        }
    }
}

/// Cart persistence configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Path of the JSON file acting as the persisted cart slot.
    pub storage_path: PathBuf,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from(DEFAULT_CART_SLOT),
        }
    }
}

impl StorefrontConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog endpoint is not a valid http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.catalog.endpoint)?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ConfigError::UnsupportedScheme(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = StorefrontConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.catalog.endpoint, DEFAULT_CATALOG_ENDPOINT);
        assert_eq!(config.cart.storage_path, PathBuf::from(DEFAULT_CART_SLOT));
    }

    #[test]
    fn test_validate_rejects_non_url() {
        let mut config = StorefrontConfig::default();
        config.catalog.endpoint = "not a url".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn test_validate_rejects_non_http_scheme() {
        let mut config = StorefrontConfig::default();
        config.catalog.endpoint = "ftp://example.test/products".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnsupportedScheme(scheme)) if scheme == "ftp"
        ));
    }
}
