//! The wishlist.

use crate::model::{Product, WishlistItem};
use crate::storage::{JsonStore, StorageError, keys};

use super::list::PersistedList;

/// Persisted wishlist, at most one entry per product id.
pub struct Wishlist {
    items: PersistedList<WishlistItem>,
}

impl Wishlist {
    pub fn new(store: JsonStore) -> Self {
        Self {
            items: PersistedList::new(store, keys::WISHLIST),
        }
    }

    pub fn items(&self) -> Vec<WishlistItem> {
        self.items.load()
    }

    pub fn len(&self) -> usize {
        self.items.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.items.load().iter().any(|i| i.product_id == product_id)
    }

    /// Add `product`. Returns `false` if it was already present.
    pub fn add(&self, product: &Product) -> Result<bool, StorageError> {
        self.add_item(WishlistItem::from(product))
    }

    /// Add a prepared entry. Returns `false` if its product was already present.
    pub fn add_item(&self, item: WishlistItem) -> Result<bool, StorageError> {
        self.items.update(|items| {
            if items.iter().any(|i| i.product_id == item.product_id) {
                (false, false)
            } else {
                items.push(item);
                (true, true)
            }
        })
    }

    /// Remove the entry for `product_id`, if any.
    pub fn remove(&self, product_id: &str) -> Result<(), StorageError> {
        self.items.update(|items| {
            let before = items.len();
            items.retain(|i| i.product_id != product_id);
            ((), items.len() != before)
        })
    }

    /// Add `product` if absent, remove it if present. Returns the new membership.
    pub fn toggle(&self, product: &Product) -> Result<bool, StorageError> {
        self.items.update(|items| {
            let before = items.len();
            items.retain(|i| i.product_id != product.id);
            if items.len() == before {
                items.push(WishlistItem::from(product));
                (true, true)
            } else {
                (false, true)
            }
        })
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.items.clear()
    }
}
