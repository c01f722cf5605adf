//! Unified error handling.
//!
//! Component modules keep their own error enums; this module folds them into
//! one `StorefrontError` for callers that drive the whole storefront and do
//! not care which layer failed.

use thiserror::Error;

use crate::assistant::AssistantError;
use crate::cart::StorageError;
use crate::catalog::CatalogError;
use crate::checkout::CheckoutError;
use crate::config::ConfigError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog API operation failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Cart persistence failed.
    #[error("Cart storage error: {0}")]
    Cart(#[from] StorageError),

    /// Checkout flow operation failed.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Assistant backend failed.
    #[error("Assistant error: {0}")]
    Assistant(#[from] AssistantError),
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StorefrontError::from(CatalogError::NotFound("Product not found: w1".into()));
        assert_eq!(err.to_string(), "Catalog error: Not found: Product not found: w1");

        let err = StorefrontError::from(CheckoutError::EmptyCart);
        assert_eq!(
            err.to_string(),
            "Checkout error: cannot check out an empty cart"
        );
    }

    #[test]
    fn test_storage_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = StorefrontError::from(StorageError::Io(io));
        assert!(matches!(err, StorefrontError::Cart(_)));
    }
}
