//! Integration tests for the Deneth Fashion storefront.
//!
//! Tests in `tests/` drive the storefront crates end to end through the
//! public API: cart persistence across restarts, the checkout flow through
//! to the WhatsApp hand-off, and the SOLO payment detour. Everything runs
//! against in-process stores backed by temp files; nothing here talks to
//! the live catalog service.

use deneth_core::{Category, Color, Product, Rupees};

/// Build a minimal catalog product for test carts.
#[must_use]
pub fn test_product(id: &str, name: &str, price: i64) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category: Category::Women,
        sub_category: "Soft Linen Pants".to_string(),
        price: Rupees::new(price),
        images: vec!["https://cdn.example/front.jpg".to_string()],
        description: "Breathable premium linen.".to_string(),
        sizes: vec!["S".to_string(), "M".to_string(), "L".to_string()],
        colors: vec![Color::new("Beige"), Color::new("Black")],
        is_new: false,
        in_stock: true,
        stock_quantity: 10,
        created_at: None,
        updated_at: None,
    }
}
