//! Remote catalog client and view-model.
//!
//! # Architecture
//!
//! - [`CatalogClient`] performs the one network read against the catalog
//!   endpoint and caches the decoded list via `moka` (configurable TTL).
//! - [`CatalogViewModel`] owns the fetched product list, the current
//!   [`FilterCriteria`], and the derived visible sequence. Every setter
//!   eagerly recomputes the visible sequence, so a reader never observes a
//!   partially filtered state.
//!
//! The endpoint is treated as an opaque external collaborator: no schema
//! validation beyond decoding the fields the core reads; unknown fields
//! pass through untouched.

mod client;
mod view_model;

pub use client::CatalogClient;
pub use view_model::{CatalogViewModel, CategoryFilter, FilterCriteria, SortOrder};

use thiserror::Error;

/// Errors that can occur when fetching the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status.
    #[error("HTTP status {0}")]
    Status(u16),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
