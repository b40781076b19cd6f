//! Recently viewed products.

use crate::model::Product;
use crate::storage::{JsonStore, StorageError, keys};

use super::list::PersistedList;

/// Maximum number of recently viewed products kept.
pub const RECENTLY_VIEWED_CAPACITY: usize = 10;

/// Persisted most-recent-first history of viewed products.
///
/// Viewing a product already in the history moves it to the front.
/// Past [`RECENTLY_VIEWED_CAPACITY`] the oldest entries are evicted.
pub struct RecentlyViewed {
    items: PersistedList<Product>,
}

impl RecentlyViewed {
    pub fn new(store: JsonStore) -> Self {
        Self {
            items: PersistedList::new(store, keys::RECENTLY_VIEWED),
        }
    }

    /// Products, most recent first.
    pub fn items(&self) -> Vec<Product> {
        self.items.load()
    }

    pub fn len(&self) -> usize {
        self.items.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.items.load().iter().any(|p| p.id == product_id)
    }

    /// Record a view of `product`. Always succeeds.
    pub fn add(&self, product: Product) -> Result<(), StorageError> {
        self.items.update(|items| {
            items.retain(|p| p.id != product.id);
            items.insert(0, product);
            items.truncate(RECENTLY_VIEWED_CAPACITY);
            ((), true)
        })
    }

    pub fn remove(&self, product_id: &str) -> Result<(), StorageError> {
        self.items.update(|items| {
            let before = items.len();
            items.retain(|p| p.id != product_id);
            ((), items.len() != before)
        })
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.items.clear()
    }
}
