//! Catalog product types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::price::Rupees;

/// Top-level product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Men,
    Women,
}

impl Category {
    /// Display label, matching the remote catalog's category strings.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Men => "Men",
            Self::Women => "Women",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A product color option.
///
/// The remote catalog serves colors either as a bare label ("Beige") or as a
/// `{ name, image }` pair with a representative swatch image. This is the
/// canonical shape; the catalog boundary normalizes both wire forms into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    /// Display label, e.g. "Beige".
    pub name: String,
    /// Optional representative image for the swatch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Color {
    /// Create a plain-label color with no swatch image.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: None,
        }
    }
}

/// A catalog product.
///
/// Owned by the catalog client; immutable once fetched. A re-fetch replaces
/// the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Remote catalog identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    pub category: Category,
    /// Sub-category label, e.g. "Cargo Linen Pants".
    pub sub_category: String,
    /// Price in whole rupees, non-negative.
    pub price: Rupees,
    /// Ordered image gallery; the first entry is the primary image.
    pub images: Vec<String>,
    pub description: String,
    /// Available sizes, display order significant.
    pub sizes: Vec<String>,
    /// Available color options.
    pub colors: Vec<Color>,
    /// New-arrival badge.
    pub is_new: bool,
    pub in_stock: bool,
    pub stock_quantity: u32,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// The primary (first) gallery image, if any.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}
