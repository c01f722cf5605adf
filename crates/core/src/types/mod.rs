//! Shared domain types for the Deneth Fashion storefront.

pub mod cart;
pub mod order;
pub mod price;
pub mod product;

pub use cart::CartItem;
pub use order::{Customer, Order, PaymentMethod};
pub use price::Rupees;
pub use product::{Category, Color, Product};
