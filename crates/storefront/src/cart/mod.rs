//! Shopping cart store.
//!
//! Holds the in-memory cart lines and mirrors every mutation to the
//! persistence backend, so the cart a customer builds survives a restart.
//! Merging is by variant: one line per distinct (product id, size, color)
//! triple.

pub mod storage;

use chrono::Utc;
use tracing::{debug, instrument, warn};

use deneth_core::{CartItem, Product, Rupees};

pub use storage::{CartStorage, FileStorage, MemoryStorage, StorageError};

/// The shopping cart: line items plus drawer visibility.
pub struct CartStore {
    storage: Box<dyn CartStorage>,
    items: Vec<CartItem>,
    is_open: bool,
}

impl CartStore {
    /// Open the cart, restoring any persisted snapshot.
    ///
    /// A missing or unreadable snapshot degrades to an empty cart; a broken
    /// snapshot must never block the storefront.
    #[must_use]
    pub fn open(storage: Box<dyn CartStorage>) -> Self {
        let items = match storage.load() {
            Ok(Some(items)) => items,
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Failed to restore cart snapshot, starting empty");
                Vec::new()
            }
        };
        Self {
            storage,
            items,
            is_open: false,
        }
    }

    /// Add a product variant to the cart.
    ///
    /// If a line with the same (product id, size, color) already exists its
    /// quantity is increased; otherwise a new line is appended. Either way
    /// the cart drawer opens. A zero quantity is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated cart cannot be persisted.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add(
        &mut self,
        product: Product,
        size: &str,
        color: &str,
        quantity: u32,
    ) -> Result<(), StorageError> {
        if quantity == 0 {
            debug!("Ignoring zero-quantity add");
            return Ok(());
        }

        if let Some(line) = self
            .items
            .iter_mut()
            .find(|line| line.matches_variant(&product.id, size, color))
        {
            line.quantity += quantity;
        } else {
            let line_id = CartItem::compose_line_id(
                &product.id,
                size,
                color,
                Utc::now().timestamp_millis(),
            );
            self.items.push(CartItem {
                line_id,
                product,
                size: size.to_string(),
                color: color.to_string(),
                quantity,
            });
        }

        self.is_open = true;
        self.persist()
    }

    /// Remove a line by its identifier. Unknown identifiers are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated cart cannot be persisted.
    #[instrument(skip(self))]
    pub fn remove(&mut self, line_id: &str) -> Result<(), StorageError> {
        self.items.retain(|line| line.line_id != line_id);
        self.persist()
    }

    /// Set a line's quantity.
    ///
    /// Quantities below 1 are ignored; removal is always an explicit
    /// [`remove`](Self::remove). Unknown identifiers are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated cart cannot be persisted.
    #[instrument(skip(self))]
    pub fn update_quantity(&mut self, line_id: &str, quantity: u32) -> Result<(), StorageError> {
        if quantity < 1 {
            debug!("Ignoring sub-minimum quantity update");
            return Ok(());
        }
        if let Some(line) = self.items.iter_mut().find(|line| line.line_id == line_id) {
            line.quantity = quantity;
            return self.persist();
        }
        Ok(())
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the emptied cart cannot be persisted.
    #[instrument(skip(self))]
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.items.clear();
        self.persist()
    }

    /// Current cart lines, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Sum of price x quantity across all lines.
    #[must_use]
    pub fn total(&self) -> Rupees {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Total units across all lines, for the cart badge.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the cart drawer is showing.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn toggle_open(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn set_open(&mut self, open: bool) {
        self.is_open = open;
    }

    fn persist(&self) -> Result<(), StorageError> {
        self.storage.save(&self.items)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use deneth_core::{Category, Color};

    fn product(id: &str, price: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {id}"),
            category: Category::Women,
            sub_category: "Soft Linen Pants".to_string(),
            price: Rupees::new(price),
            images: vec![],
            description: String::new(),
            sizes: vec!["S".to_string(), "M".to_string()],
            colors: vec![Color::new("Beige"), Color::new("Stone")],
            is_new: false,
            in_stock: true,
            stock_quantity: 10,
            created_at: None,
            updated_at: None,
        }
    }

    fn empty_store() -> CartStore {
        CartStore::open(Box::new(MemoryStorage::new()))
    }

    #[test]
    fn test_add_appends_new_line_and_opens_drawer() {
        let mut cart = empty_store();
        assert!(!cart.is_open());
        cart.add(product("w1", 2500), "M", "Beige", 1).unwrap();
        assert_eq!(cart.items().len(), 1);
        assert!(cart.is_open());
    }

    #[test]
    fn test_add_merges_same_variant() {
        let mut cart = empty_store();
        cart.add(product("w1", 2500), "M", "Beige", 1).unwrap();
        cart.add(product("w1", 2500), "M", "Beige", 2).unwrap();
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 3);
    }

    #[test]
    fn test_add_distinct_variants_stay_separate() {
        let mut cart = empty_store();
        cart.add(product("w1", 2500), "M", "Beige", 1).unwrap();
        cart.add(product("w1", 2500), "S", "Beige", 1).unwrap();
        cart.add(product("w1", 2500), "M", "Stone", 1).unwrap();
        assert_eq!(cart.items().len(), 3);
    }

    #[test]
    fn test_add_zero_quantity_is_ignored() {
        let mut cart = empty_store();
        cart.add(product("w1", 2500), "M", "Beige", 0).unwrap();
        assert!(cart.is_empty());
        assert!(!cart.is_open());
    }

    #[test]
    fn test_update_quantity_sets_value() {
        let mut cart = empty_store();
        cart.add(product("w1", 2500), "M", "Beige", 1).unwrap();
        let line_id = cart.items()[0].line_id.clone();
        cart.update_quantity(&line_id, 5).unwrap();
        assert_eq!(cart.items()[0].quantity, 5);
    }

    #[test]
    fn test_update_quantity_below_one_is_ignored() {
        let mut cart = empty_store();
        cart.add(product("w1", 2500), "M", "Beige", 2).unwrap();
        let line_id = cart.items()[0].line_id.clone();
        cart.update_quantity(&line_id, 0).unwrap();
        assert_eq!(cart.items()[0].quantity, 2);
    }

    #[test]
    fn test_remove_by_line_id() {
        let mut cart = empty_store();
        cart.add(product("w1", 2500), "M", "Beige", 1).unwrap();
        cart.add(product("m2", 3200), "L", "Stone", 1).unwrap();
        let line_id = cart.items()[0].line_id.clone();
        cart.remove(&line_id).unwrap();
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].product.id, "m2");
    }

    #[test]
    fn test_remove_unknown_line_is_noop() {
        let mut cart = empty_store();
        cart.add(product("w1", 2500), "M", "Beige", 1).unwrap();
        cart.remove("no-such-line").unwrap();
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn test_total_and_count() {
        let mut cart = empty_store();
        cart.add(product("w1", 2500), "M", "Beige", 2).unwrap();
        cart.add(product("m2", 3200), "L", "Stone", 1).unwrap();
        assert_eq!(cart.total(), Rupees::new(8200));
        assert_eq!(cart.count(), 3);
    }

    #[test]
    fn test_clear_empties_cart() {
        let mut cart = empty_store();
        cart.add(product("w1", 2500), "M", "Beige", 2).unwrap();
        cart.clear().unwrap();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Rupees::ZERO);
    }

    #[test]
    fn test_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deneth-cart.json");

        let mut cart = CartStore::open(Box::new(FileStorage::new(path.clone())));
        cart.add(product("w1", 2500), "M", "Beige", 2).unwrap();
        drop(cart);

        let reopened = CartStore::open(Box::new(FileStorage::new(path)));
        assert_eq!(reopened.items().len(), 1);
        assert_eq!(reopened.items()[0].quantity, 2);
        assert_eq!(reopened.total(), Rupees::new(5000));
        // drawer visibility is session state, not persisted
        assert!(!reopened.is_open());
    }

    #[test]
    fn test_corrupt_snapshot_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deneth-cart.json");
        std::fs::write(&path, "not json at all").unwrap();

        let cart = CartStore::open(Box::new(FileStorage::new(path)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_toggle_open() {
        let mut cart = empty_store();
        cart.toggle_open();
        assert!(cart.is_open());
        cart.toggle_open();
        assert!(!cart.is_open());
        cart.set_open(true);
        assert!(cart.is_open());
    }
}
