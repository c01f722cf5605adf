//! Remote catalog API client.
//!
//! A plain JSON-over-HTTP client for the hosted product service. Every
//! response is wrapped in a `{ success, ... }` envelope; `success: false`
//! surfaces as a [`CatalogError`] and callers decide whether that means an
//! error view or an empty one. Nothing in here is fatal to the storefront -
//! the worst case is a degraded or empty catalog.

mod conversions;
pub mod types;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{instrument, warn};

use deneth_core::{Order, Product};

use crate::config::StorefrontConfig;

pub use conversions::{ConversionError, convert_color, convert_product};
use types::{
    BannersResponse, CreateOrderRequest, CreateOrderResponse, OrderCustomer, OrderLine,
    ProductResponse, ProductsResponse, SettingsResponse,
};

/// Errors that can occur when talking to the catalog API.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status.
    #[error("API returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The service answered `success: false` for a listing.
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A record could not be mapped into the domain model.
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),
}

/// Client for the remote catalog API.
///
/// Cheaply cloneable; all clones share one HTTP connection pool.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new catalog API client.
    #[must_use]
    pub fn new(config: &StorefrontConfig) -> Self {
        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base_url: config.api_base_url.clone(),
            }),
        }
    }

    /// Fetch and decode a JSON endpoint.
    ///
    /// Reads the body as text first so parse failures can be logged with
    /// the offending payload.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let url = format!("{}{path}", self.inner.base_url);
        let response = self.inner.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(
                status = %status,
                body = %body.chars().take(200).collect::<String>(),
                "Catalog API returned non-success status"
            );
            return Err(CatalogError::Status {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            warn!(
                error = %e,
                body = %body.chars().take(200).collect::<String>(),
                "Failed to parse catalog response"
            );
            CatalogError::Parse(e)
        })
    }

    /// Get the full product listing.
    ///
    /// Records that fail domain conversion are skipped with a warning so a
    /// single malformed product cannot blank the whole catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service reports
    /// `success: false`.
    #[instrument(skip(self))]
    pub async fn get_products(&self) -> Result<Vec<Product>, CatalogError> {
        let response: ProductsResponse = self.get_json("/api/products").await?;

        if !response.success {
            return Err(CatalogError::Unavailable("product listing".to_string()));
        }

        Ok(response
            .products
            .into_iter()
            .filter_map(|record| match convert_product(record) {
                Ok(product) => Some(product),
                Err(e) => {
                    warn!(error = %e, "Skipping unconvertible product record");
                    None
                }
            })
            .collect())
    }

    /// Get a single product by its remote identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is missing or the request fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_product(&self, id: &str) -> Result<Product, CatalogError> {
        let response: ProductResponse = self.get_json(&format!("/api/products/{id}")).await?;

        let record = response
            .product
            .filter(|_| response.success)
            .ok_or_else(|| CatalogError::NotFound(format!("Product not found: {id}")))?;

        Ok(convert_product(record)?)
    }

    /// Get the currently active promotional banners.
    ///
    /// Banner records are presentation data; they pass through as raw JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service reports
    /// `success: false`.
    #[instrument(skip(self))]
    pub async fn get_active_banners(&self) -> Result<Vec<serde_json::Value>, CatalogError> {
        let response: BannersResponse = self.get_json("/api/banners/active").await?;

        if !response.success {
            return Err(CatalogError::Unavailable("banners".to_string()));
        }

        Ok(response.banners)
    }

    /// Get store display settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service reports
    /// `success: false`.
    #[instrument(skip(self))]
    pub async fn get_settings(&self) -> Result<Option<serde_json::Value>, CatalogError> {
        let response: SettingsResponse = self.get_json("/api/banners/settings").await?;

        if !response.success {
            return Err(CatalogError::Unavailable("settings".to_string()));
        }

        Ok(response.settings)
    }

    /// Submit a finalized order to the catalog service.
    ///
    /// The primary order channel is the WhatsApp hand-off; this endpoint is
    /// the optional secondary record.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service rejects the
    /// order.
    #[instrument(skip(self, order), fields(order_number = %order.order_number))]
    pub async fn create_order(&self, order: &Order) -> Result<CreateOrderResponse, CatalogError> {
        let payload = build_order_request(order);
        let url = format!("{}/api/orders", self.inner.base_url);

        let response = self.inner.client.post(&url).json(&payload).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        let parsed: CreateOrderResponse = serde_json::from_str(&body)?;
        if !parsed.success {
            return Err(CatalogError::Unavailable(format!(
                "order rejected: {}",
                parsed.message
            )));
        }

        Ok(parsed)
    }
}

/// Map an order snapshot onto the catalog service's order payload.
fn build_order_request(order: &Order) -> CreateOrderRequest {
    CreateOrderRequest {
        order_number: order.order_number.clone(),
        customer: OrderCustomer {
            name: order.customer.full_name(),
            phone: order.customer.phone.clone(),
            address: order.customer.address.clone(),
            city: order.customer.city.clone(),
            district: order.customer.district.clone(),
            email: order.customer.email.clone(),
        },
        items: order
            .items
            .iter()
            .map(|item| OrderLine {
                product_id: item.product.id.clone(),
                name: item.product.name.clone(),
                size: item.size.clone(),
                color: item.color.clone(),
                quantity: item.quantity,
                price: item.product.price.amount(),
            })
            .collect(),
        subtotal: order.subtotal.amount(),
        delivery_fee: order.delivery_fee.amount(),
        total: order.grand_total.amount(),
        payment_method: order.payment.label().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deneth_core::{CartItem, Category, Color, Customer, PaymentMethod, Rupees};

    fn sample_order() -> Order {
        let product = Product {
            id: "w1".to_string(),
            name: "Breezy Soft Linen Pant".to_string(),
            category: Category::Women,
            sub_category: "Soft Linen Pants".to_string(),
            price: Rupees::new(2500),
            images: vec![],
            description: String::new(),
            sizes: vec!["M".to_string()],
            colors: vec![Color::new("Beige")],
            is_new: false,
            in_stock: true,
            stock_quantity: 4,
            created_at: None,
            updated_at: None,
        };
        Order {
            order_number: "ORD-123456".to_string(),
            delivery_date: "Monday, September 1".to_string(),
            items: vec![CartItem {
                line_id: "w1-M-Beige-1".to_string(),
                product,
                size: "M".to_string(),
                color: "Beige".to_string(),
                quantity: 2,
            }],
            subtotal: Rupees::new(5000),
            delivery_fee: Rupees::new(250),
            grand_total: Rupees::new(5250),
            customer: Customer {
                first_name: "Kasun".to_string(),
                last_name: "Perera".to_string(),
                phone: "071 234 5678".to_string(),
                address: "12 Galle Road".to_string(),
                city: "Nugegoda".to_string(),
                district: "Colombo 1-15".to_string(),
                email: None,
            },
            payment: PaymentMethod::CashOnDelivery,
            payment_reference: None,
        }
    }

    #[test]
    fn test_build_order_request() {
        let request = build_order_request(&sample_order());
        assert_eq!(request.order_number, "ORD-123456");
        assert_eq!(request.customer.name, "Kasun Perera");
        assert_eq!(request.items.len(), 1);
        assert_eq!(request.subtotal, 5000);
        assert_eq!(request.delivery_fee, 250);
        assert_eq!(request.total, 5250);
        assert_eq!(request.payment_method, "Cash on Delivery");
    }

    #[tokio::test]
    async fn test_unreachable_service_surfaces_http_error() {
        // port 9 (discard) is closed on loopback, so the connection is refused
        let config = StorefrontConfig {
            api_base_url: "http://127.0.0.1:9".to_string(),
            whatsapp_number: "94740716403".to_string(),
            cart_path: std::path::PathBuf::from("deneth-cart.json"),
            assistant: None,
        };
        let client = CatalogClient::new(&config);
        assert!(matches!(
            client.get_products().await,
            Err(CatalogError::Http(_))
        ));
    }

    #[test]
    fn test_order_request_wire_shape() {
        let json =
            serde_json::to_value(build_order_request(&sample_order())).expect("serialize");
        assert_eq!(json["orderNumber"], "ORD-123456");
        assert_eq!(json["deliveryFee"], 250);
        assert_eq!(json["items"][0]["productId"], "w1");
        assert_eq!(json["items"][0]["quantity"], 2);
        // optional email is omitted, not null
        assert!(json["customer"].get("email").is_none());
    }
}
