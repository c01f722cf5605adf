//! Cart persistence backends.
//!
//! The cart survives restarts through a small JSON snapshot. The trait keeps
//! the store testable; production uses [`FileStorage`], tests use
//! [`MemoryStorage`].

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;
use tracing::debug;

use deneth_core::CartItem;

/// Errors from reading or writing the cart snapshot.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Persistence backend for the cart snapshot.
pub trait CartStorage: Send + Sync {
    /// Load the persisted cart, `None` when no snapshot exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot exists but cannot be read or parsed.
    fn load(&self) -> Result<Option<Vec<CartItem>>, StorageError>;

    /// Persist the full cart contents, replacing any previous snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    fn save(&self, items: &[CartItem]) -> Result<(), StorageError>;
}

/// JSON-file-backed cart storage.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl CartStorage for FileStorage {
    fn load(&self) -> Result<Option<Vec<CartItem>>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        let items = serde_json::from_str(&raw)?;
        Ok(Some(items))
    }

    fn save(&self, items: &[CartItem]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string(items)?;
        fs::write(&self.path, raw)?;
        debug!(path = %self.path.display(), count = items.len(), "Saved cart snapshot");
        Ok(())
    }
}

/// In-memory cart storage for tests.
#[derive(Default)]
pub struct MemoryStorage {
    items: Mutex<Option<Vec<CartItem>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self) -> Result<Option<Vec<CartItem>>, StorageError> {
        Ok(self.items.lock().map_or(None, |guard| guard.clone()))
    }

    fn save(&self, items: &[CartItem]) -> Result<(), StorageError> {
        if let Ok(mut guard) = self.items.lock() {
            *guard = Some(items.to_vec());
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use deneth_core::{Category, Color, Product, Rupees};

    fn sample_item() -> CartItem {
        let product = Product {
            id: "w1".to_string(),
            name: "Breezy Soft Linen Pant".to_string(),
            category: Category::Women,
            sub_category: "Soft Linen Pants".to_string(),
            price: Rupees::new(2500),
            images: vec!["https://cdn/front.jpg".to_string()],
            description: String::new(),
            sizes: vec!["S".to_string(), "M".to_string()],
            colors: vec![Color::new("Beige")],
            is_new: true,
            in_stock: true,
            stock_quantity: 10,
            created_at: None,
            updated_at: None,
        };
        CartItem {
            line_id: CartItem::compose_line_id(&product.id, "M", "Beige", 1_700_000_000_000),
            product,
            size: "M".to_string(),
            color: "Beige".to_string(),
            quantity: 2,
        }
    }

    #[test]
    fn test_file_storage_missing_snapshot_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("deneth-cart.json"));
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn test_file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("deneth-cart.json"));
        storage.save(&[sample_item()]).unwrap();

        let loaded = storage.load().unwrap().unwrap();
        assert_eq!(loaded, vec![sample_item()]);
    }

    #[test]
    fn test_file_storage_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nested/state/deneth-cart.json"));
        storage.save(&[sample_item()]).unwrap();
        assert!(storage.load().unwrap().is_some());
    }

    #[test]
    fn test_file_storage_corrupt_snapshot_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deneth-cart.json");
        std::fs::write(&path, "{ not json").unwrap();
        let storage = FileStorage::new(path);
        assert!(matches!(storage.load(), Err(StorageError::Json(_))));
    }

    #[test]
    fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        assert!(storage.load().unwrap().is_none());
        storage.save(&[sample_item()]).unwrap();
        assert_eq!(storage.load().unwrap().unwrap().len(), 1);
    }
}
