//! Application state shared across the storefront.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::assistant::AssistantClient;
use crate::cart::{CartStore, FileStorage};
use crate::catalog::CatalogClient;
use crate::config::StorefrontConfig;

/// Application state shared across all storefront entry points.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration, the API clients, and the shared cart.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: CatalogClient,
    assistant: Option<AssistantClient>,
    cart: Mutex<CartStore>,
}

impl AppState {
    /// Create the application state from configuration.
    ///
    /// The cart is restored from its snapshot file; the assistant client is
    /// only built when an API key is configured.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let catalog = CatalogClient::new(&config);
        let assistant = config.assistant.as_ref().map(AssistantClient::new);
        let cart = Mutex::new(CartStore::open(Box::new(FileStorage::new(
            config.cart_path.clone(),
        ))));

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                assistant,
                cart,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog API client.
    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.inner.catalog
    }

    /// Get a reference to the assistant client, if one is configured.
    #[must_use]
    pub fn assistant(&self) -> Option<&AssistantClient> {
        self.inner.assistant.as_ref()
    }

    /// Lock and access the shared cart.
    ///
    /// A poisoned lock is recovered rather than propagated; the cart's own
    /// persistence keeps it consistent.
    pub fn cart(&self) -> MutexGuard<'_, CartStore> {
        self.inner
            .cart
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use deneth_core::{Category, Color, Product, Rupees};

    fn test_config(dir: &std::path::Path) -> StorefrontConfig {
        StorefrontConfig {
            api_base_url: "https://deneth-fashion-backend.vercel.app".to_string(),
            whatsapp_number: "94740716403".to_string(),
            cart_path: dir.join("deneth-cart.json"),
            assistant: None,
        }
    }

    #[test]
    fn test_state_is_cloneable_and_shares_cart() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(test_config(dir.path()));
        let clone = state.clone();

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
            stock_quantity: 10,
            created_at: None,
            updated_at: None,
        };
        state.cart().add(product, "M", "Beige", 1).unwrap();

        assert_eq!(clone.cart().count(), 1);
        assert!(clone.assistant().is_none());
    }
}
