//! Catalog product types.
//!
//! The product shape is owned by the remote API. Fields the core logic
//! reads are typed; anything else the endpoint sends is carried in `extra`
//! and round-trips untouched.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;

/// A product record as served by the remote catalog.
///
/// Immutable for the session once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique, stable identifier.
    pub id: ProductId,
    /// Display title, searched as a case-insensitive substring.
    pub title: String,
    /// Unit price.
    pub price: Price,
    /// Category name, drawn from an open-ended set.
    pub category: String,
    /// Long-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Aggregate review rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    /// Unrecognized fields, passed through unused.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Aggregate product rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average rating value (e.g., 4.5).
    pub rate: f64,
    /// Number of reviews.
    pub count: i64,
}
