//! Wire types for the remote catalog API.
//!
//! The backend is a Mongo-backed JSON service: records carry `_id`,
//! camelCase field names, and an envelope `{ success, ... }` around every
//! response. These types model the wire shape only; domain conversion lives
//! in [`super::conversions`].

use serde::{Deserialize, Serialize};

/// A product record as served by the catalog API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiProduct {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: i64,
    pub category: String,
    #[serde(default)]
    pub sub_category: String,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub colors: Vec<ApiColor>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default)]
    pub stock_quantity: u32,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

const fn default_in_stock() -> bool {
    true
}

/// A color as served on the wire.
///
/// Older records carry a bare label; newer ones a `{ name, image }` swatch
/// object. Both normalize to [`deneth_core::Color`].
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ApiColor {
    Label(String),
    Swatch {
        name: String,
        #[serde(default)]
        image: Option<String>,
    },
}

/// Envelope for `GET /api/products`.
#[derive(Debug, Deserialize)]
pub struct ProductsResponse {
    pub success: bool,
    #[serde(default)]
    pub products: Vec<ApiProduct>,
}

/// Envelope for `GET /api/products/{id}`.
#[derive(Debug, Deserialize)]
pub struct ProductResponse {
    pub success: bool,
    #[serde(default)]
    pub product: Option<ApiProduct>,
}

/// Envelope for `GET /api/banners/active`.
///
/// Banner records are presentation-only and schemaless from this crate's
/// perspective; they pass through as raw JSON.
#[derive(Debug, Deserialize)]
pub struct BannersResponse {
    pub success: bool,
    #[serde(default)]
    pub banners: Vec<serde_json::Value>,
}

/// Envelope for `GET /api/banners/settings`.
#[derive(Debug, Deserialize)]
pub struct SettingsResponse {
    pub success: bool,
    #[serde(default)]
    pub settings: Option<serde_json::Value>,
}

/// Payload for `POST /api/orders`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub order_number: String,
    pub customer: OrderCustomer,
    pub items: Vec<OrderLine>,
    pub subtotal: i64,
    pub delivery_fee: i64,
    pub total: i64,
    pub payment_method: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCustomer {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub district: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: String,
    pub name: String,
    pub size: String,
    pub color: String,
    pub quantity: u32,
    pub price: i64,
}

/// Response from `POST /api/orders`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    pub success: bool,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_color_accepts_bare_label() {
        let color: ApiColor = serde_json::from_str(r#""Beige""#).expect("deserialize");
        assert!(matches!(color, ApiColor::Label(ref l) if l == "Beige"));
    }

    #[test]
    fn test_api_color_accepts_swatch_object() {
        let color: ApiColor =
            serde_json::from_str(r#"{"name":"Olive","image":"https://cdn/olive.jpg"}"#)
                .expect("deserialize");
        match color {
            ApiColor::Swatch { name, image } => {
                assert_eq!(name, "Olive");
                assert_eq!(image.as_deref(), Some("https://cdn/olive.jpg"));
            }
            ApiColor::Label(_) => panic!("expected swatch"),
        }
    }

    #[test]
    fn test_products_response_defaults_missing_list() {
        let response: ProductsResponse =
            serde_json::from_str(r#"{"success":false}"#).expect("deserialize");
        assert!(!response.success);
        assert!(response.products.is_empty());
    }

    #[test]
    fn test_api_product_minimal_record() {
        let json = r#"{
            "_id": "665f1c2e9b1e8a0012ab34cd",
            "name": "Breezy Soft Linen Pant",
            "price": 2500,
            "category": "Women"
        }"#;
        let product: ApiProduct = serde_json::from_str(json).expect("deserialize");
        assert_eq!(product.id, "665f1c2e9b1e8a0012ab34cd");
        assert!(product.in_stock);
        assert_eq!(product.stock_quantity, 0);
        assert!(product.sizes.is_empty());
    }
}
