//! Product comparison list.

use crate::logging::debug;
use crate::model::Product;
use crate::storage::{JsonStore, StorageError, keys};

use super::list::PersistedList;

/// Maximum number of products compared side by side.
pub const COMPARISON_CAPACITY: usize = 4;

/// Result of [`Comparison::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// The product is already being compared.
    Duplicate,
    /// The list already holds [`COMPARISON_CAPACITY`] products.
    Full,
}

impl AddOutcome {
    pub fn is_added(self) -> bool {
        self == Self::Added
    }
}

/// Persisted comparison list.
///
/// Unlike [`RecentlyViewed`](super::RecentlyViewed), a full list rejects new
/// products instead of evicting old ones: the user has to remove one first.
pub struct Comparison {
    items: PersistedList<Product>,
}

impl Comparison {
    pub fn new(store: JsonStore) -> Self {
        Self {
            items: PersistedList::new(store, keys::COMPARISON),
        }
    }

    pub fn items(&self) -> Vec<Product> {
        self.items.load()
    }

    pub fn len(&self) -> usize {
        self.items.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() >= COMPARISON_CAPACITY
    }

    /// Free slots left.
    pub fn remaining(&self) -> usize {
        COMPARISON_CAPACITY.saturating_sub(self.len())
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.items.load().iter().any(|p| p.id == product_id)
    }

    /// Append `product` unless it is already present or the list is full.
    pub fn add(&self, product: Product) -> Result<AddOutcome, StorageError> {
        let outcome = self.items.update(|items| {
            if items.iter().any(|p| p.id == product.id) {
                (AddOutcome::Duplicate, false)
            } else if items.len() >= COMPARISON_CAPACITY {
                (AddOutcome::Full, false)
            } else {
                items.push(product);
                (AddOutcome::Added, true)
            }
        })?;

        if !outcome.is_added() {
            debug!(outcome = ?outcome, "comparison add rejected");
        }
        Ok(outcome)
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

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> Result<Comparison, StorageError> {
        let comparison = Comparison::new(JsonStore::in_memory());
        for id in ["a", "b", "c", "d"] {
            comparison.add(Product::new(id, id, 1.0))?;
        }
        Ok(comparison)
    }

    #[test]
    fn test_fifth_product_is_rejected() -> Result<(), StorageError> {
        let comparison = filled()?;
        let before = comparison.items();

        assert_eq!(comparison.add(Product::new("e", "e", 1.0))?, AddOutcome::Full);
        assert_eq!(comparison.items(), before);
        assert!(comparison.is_full());
        assert_eq!(comparison.remaining(), 0);
        Ok(())
    }

    #[test]
    fn test_duplicate_is_rejected() -> Result<(), StorageError> {
        let comparison = Comparison::new(JsonStore::in_memory());
        assert!(comparison.add(Product::new("a", "a", 1.0))?.is_added());
        assert_eq!(comparison.add(Product::new("a", "a", 1.0))?, AddOutcome::Duplicate);
        assert_eq!(comparison.len(), 1);
        Ok(())
    }

    #[test]
    fn test_duplicate_reported_before_full() -> Result<(), StorageError> {
        let comparison = filled()?;
        assert_eq!(comparison.add(Product::new("a", "a", 1.0))?, AddOutcome::Duplicate);
        Ok(())
    }

    #[test]
    fn test_remove_frees_a_slot() -> Result<(), StorageError> {
        let comparison = filled()?;
        comparison.remove("b")?;
        assert_eq!(comparison.remaining(), 1);
        assert!(comparison.add(Product::new("e", "e", 1.0))?.is_added());
        let ids: Vec<String> = comparison.items().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["a", "c", "d", "e"]);
        Ok(())
    }
}
