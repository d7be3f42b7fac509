//! Cart line items.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::product::Product;

/// One product-plus-quantity entry in the cart.
///
/// Identity is the product identifier: the cart holds at most one line per
/// product. The product's fields are flattened in serde, so a persisted
/// line is the product record with a `quantity` field beside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// The product this line holds, fields copied at add time.
    #[serde(flatten)]
    pub product: Product,
    /// Units of the product in the cart. Always at least 1 for a stored line.
    pub quantity: u32,
}

impl CartLine {
    /// Create a line for a freshly added product.
    #[must_use]
    pub const fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// The identifier the line is keyed by.
    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.product.id
    }

    /// Price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.product.price.amount() * f64::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, price: f64) -> Product {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": format!("Product {id}"),
            "price": price,
            "category": "test"
        }))
        .expect("valid product")
    }

    #[test]
    fn test_new_line_has_quantity_one() {
        let line = CartLine::new(product(1, 20.0));
        assert_eq!(line.quantity, 1);
        assert_eq!(line.id(), ProductId::new(1));
    }

    #[test]
    fn test_line_total() {
        let mut line = CartLine::new(product(1, 19.99));
        line.quantity = 3;
        assert!((line.line_total() - 59.97).abs() < f64::EPSILON);
    }

    #[test]
    fn test_persisted_shape_is_flattened() {
        let line = CartLine::new(product(7, 15.0));
        let value = serde_json::to_value(&line).expect("serialize");
        // Product fields sit beside `quantity`, not nested under `product`.
        assert_eq!(value.get("id"), Some(&serde_json::json!(7)));
        assert_eq!(value.get("quantity"), Some(&serde_json::json!(1)));
        assert!(value.get("product").is_none());
    }
}
