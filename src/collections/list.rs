//! Read-modify-write helper shared by the collections.

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::storage::{JsonStore, StorageError};

/// A `Vec<T>` persisted as one JSON array under a fixed key.
pub(crate) struct PersistedList<T> {
    store: JsonStore,
    key: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Serialize + DeserializeOwned> PersistedList<T> {
    pub(crate) fn new(store: JsonStore, key: &'static str) -> Self {
        Self {
            store,
            key,
            _marker: PhantomData,
        }
    }

    /// Current contents; empty when nothing (or nothing readable) is stored.
    pub(crate) fn load(&self) -> Vec<T> {
        self.store.read(self.key, Vec::new())
    }

    /// Apply `f` to the current contents.
    ///
    /// `f` returns its result and whether it changed the list; the list is
    /// written back only when it did.
    pub(crate) fn update<R>(
        &self,
        f: impl FnOnce(&mut Vec<T>) -> (R, bool),
    ) -> Result<R, StorageError> {
        let mut items = self.load();
        let (result, dirty) = f(&mut items);
        if dirty {
            self.store.write(self.key, &items)?;
        }
        Ok(result)
    }

    pub(crate) fn clear(&self) -> Result<(), StorageError> {
        self.store.write(self.key, &Vec::<T>::new())
    }
}
