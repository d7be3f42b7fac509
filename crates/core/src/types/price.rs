//! Price representation with source-tolerant parsing.
//!
//! The remote catalog serves prices as either a JSON number or a numeric
//! string depending on source fidelity, so [`Price`] deserializes from both.
//! All comparisons are floating-point by policy: user-entered price bounds
//! go through [`Price::parse`], which treats empty or unparseable input as
//! "no bound" rather than zero.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// A product price in the catalog's (single, implicit) currency.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    /// Create a price from a raw amount.
    #[must_use]
    pub const fn new(amount: f64) -> Self {
        Self(amount)
    }

    /// Get the raw amount.
    #[must_use]
    pub const fn amount(&self) -> f64 {
        self.0
    }

    /// Parse a user-entered price bound.
    ///
    /// Returns `None` for empty or non-numeric input - an absent bound,
    /// never a zero bound and never an error.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        trimmed
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite())
            .map(Self)
    }

    /// Total ordering over amounts, for stable sorting.
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Price {
    /// Format for display (e.g., `$19.99`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        /// Raw wire representation: number or numeric string.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(f64),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(amount) => Ok(Self(amount)),
            Repr::Text(text) => text
                .trim()
                .parse::<f64>()
                .map(Self)
                .map_err(|_| serde::de::Error::custom(format!("invalid price: {text:?}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_from_number() {
        let price: Price = serde_json::from_str("19.99").expect("number price");
        assert_eq!(price, Price::new(19.99));
    }

    #[test]
    fn test_deserialize_from_string() {
        let price: Price = serde_json::from_str("\"19.99\"").expect("string price");
        assert_eq!(price, Price::new(19.99));
    }

    #[test]
    fn test_deserialize_rejects_garbage_string() {
        let result: Result<Price, _> = serde_json::from_str("\"not a price\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&Price::new(12.5)).expect("serialize");
        assert_eq!(json, "12.5");
    }

    #[test]
    fn test_parse_empty_is_no_bound() {
        assert_eq!(Price::parse(""), None);
        assert_eq!(Price::parse("   "), None);
    }

    #[test]
    fn test_parse_non_numeric_is_no_bound() {
        assert_eq!(Price::parse("abc"), None);
        assert_eq!(Price::parse("NaN"), None);
    }

    #[test]
    fn test_parse_numeric() {
        assert_eq!(Price::parse("18"), Some(Price::new(18.0)));
        assert_eq!(Price::parse(" 19.99 "), Some(Price::new(19.99)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::new(19.99).to_string(), "$19.99");
        assert_eq!(Price::new(5.0).to_string(), "$5.00");
    }
}
