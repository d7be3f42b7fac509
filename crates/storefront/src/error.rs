//! Unified error handling.
//!
//! Provides a unified [`StorefrontError`] wrapping the per-concern error
//! types. Nothing in this system is fatal: fetch failures surface as a
//! visible flag on the view-model, persistence failures degrade to
//! in-memory state, and numeric input failures mean "no bound".

use thiserror::Error;

use crate::cart::StorageError;
use crate::catalog::CatalogError;
use crate::config::ConfigError;

/// Application-level error type for the storefront core.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Catalog fetch or decode failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Cart slot read or write failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration is invalid.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
