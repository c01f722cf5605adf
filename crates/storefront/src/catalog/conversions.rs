//! Wire-to-domain conversion for catalog records.

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::warn;

use deneth_core::{Category, Color, Product, Rupees};

use super::types::{ApiColor, ApiProduct};

/// A wire record that cannot be mapped into the domain model.
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("unknown category {category:?} on product {id}")]
    UnknownCategory { id: String, category: String },

    #[error("negative price {price} on product {id}")]
    NegativePrice { id: String, price: i64 },
}

/// Convert an API product record into a domain [`Product`].
///
/// # Errors
///
/// Returns an error if the record carries an unknown category or a negative
/// price. Unparseable timestamps are tolerated (logged, mapped to `None`).
pub fn convert_product(record: ApiProduct) -> Result<Product, ConversionError> {
    let category = match record.category.as_str() {
        "Men" => Category::Men,
        "Women" => Category::Women,
        other => {
            return Err(ConversionError::UnknownCategory {
                id: record.id,
                category: other.to_string(),
            });
        }
    };

    if record.price < 0 {
        return Err(ConversionError::NegativePrice {
            id: record.id,
            price: record.price,
        });
    }

    Ok(Product {
        created_at: parse_timestamp(&record.id, record.created_at.as_deref()),
        updated_at: parse_timestamp(&record.id, record.updated_at.as_deref()),
        id: record.id,
        name: record.name,
        category,
        sub_category: record.sub_category,
        price: Rupees::new(record.price),
        images: record.images,
        description: record.description,
        sizes: record.sizes,
        colors: record.colors.into_iter().map(convert_color).collect(),
        is_new: record.is_new,
        in_stock: record.in_stock,
        stock_quantity: record.stock_quantity,
    })
}

/// Normalize either wire color shape into the canonical [`Color`].
pub fn convert_color(color: ApiColor) -> Color {
    match color {
        ApiColor::Label(name) => Color { name, image: None },
        ApiColor::Swatch { name, image } => Color { name, image },
    }
}

fn parse_timestamp(product_id: &str, value: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = value?;
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => Some(parsed.with_timezone(&Utc)),
        Err(e) => {
            warn!(product_id, raw, error = %e, "Unparseable catalog timestamp");
            None
        }
    }
}
