//! Cart line items.

use serde::{Deserialize, Serialize};

use super::price::Rupees;
use super::product::Product;

/// A single line in the shopping cart: a product in a chosen size and color.
///
/// The cart invariant is one line per distinct (product id, size, color)
/// triple; a repeated add merges quantities into the existing line rather
/// than appending a duplicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Composite identifier, unique per add-to-cart event prior to merge.
    ///
    /// Format: `{product_id}-{size}-{color}-{unix_millis}`. For human
    /// correlation only; uniqueness relies on the timestamp, not randomness.
    pub line_id: String,
    pub product: Product,
    /// Chosen size, one of the product's size options.
    pub size: String,
    /// Chosen color label.
    pub color: String,
    /// Always >= 1; the update operation refuses to drive it lower.
    pub quantity: u32,
}

impl CartItem {
    /// Build the composite line identifier for an add-to-cart event.
    #[must_use]
    pub fn compose_line_id(product_id: &str, size: &str, color: &str, unix_millis: i64) -> String {
        format!("{product_id}-{size}-{color}-{unix_millis}")
    }

    /// Whether this line matches a (product, size, color) variant triple.
    #[must_use]
    pub fn matches_variant(&self, product_id: &str, size: &str, color: &str) -> bool {
        self.product.id == product_id && self.size == size && self.color == color
    }

    /// Price x quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Rupees {
        self.product.price * self.quantity
    }
}
