//! JSON adapter over a [`Backend`].

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::logging::{error, trace, warn};

use super::{Backend, MemoryBackend, StorageError};

/// Typed JSON view over a string-keyed backend.
///
/// Cloning is cheap: all clones share the same backend.
#[derive(Clone)]
pub struct JsonStore {
    backend: Arc<dyn Backend>,
}

impl JsonStore {
    pub fn new(backend: impl Backend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    pub fn from_arc(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// A store backed by a fresh [`MemoryBackend`].
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    /// Read the value stored under `key`.
    ///
    /// Returns `default` when the key is absent, when the backend fails, or
    /// when the stored text does not decode as `T`. Failures are logged and
    /// never reach the caller.
    pub fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.backend.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return default,
            Err(e) => {
                error!(key = key, error = %e, "backend read failed, using default");
                return default;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(key = key, error = %e, "discarding unreadable value, using default");
                default
            }
        }
    }

    /// Serialize `value` and store it under `key`, replacing any prior value.
    pub fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value).map_err(|source| StorageError::Encode {
            key: key.to_string(),
            source,
        })?;
        trace!(key = key, bytes = raw.len(), "writing json value");
        self.backend.set(key, &raw)
    }

    /// Delete the value under `key`.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.backend.remove(key)
    }

    /// Whether any raw value is stored under `key`, readable or not.
    pub fn contains(&self, key: &str) -> bool {
        matches!(self.backend.get(key), Ok(Some(_)))
    }

    /// Store a raw string without JSON encoding.
    pub fn write_raw(&self, key: &str, raw: &str) -> Result<(), StorageError> {
        self.backend.set(key, raw)
    }
}

impl fmt::Debug for JsonStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonStore").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_missing_key_returns_default() {
        let store = JsonStore::in_memory();
        assert_eq!(store.read("nope", 7u32), 7);
        assert!(!store.contains("nope"));
    }

    #[test]
    fn test_round_trip() -> Result<(), StorageError> {
        let store = JsonStore::in_memory();
        let mut value = BTreeMap::new();
        value.insert("a".to_string(), vec![1, 2, 3]);
        store.write("k", &value)?;
        assert_eq!(store.read("k", BTreeMap::new()), value);
        Ok(())
    }

    #[test]
    fn test_corrupt_value_falls_back_to_default() -> Result<(), StorageError> {
        let store = JsonStore::in_memory();
        store.write_raw("k", "{not json")?;
        assert!(store.contains("k"));
        assert_eq!(store.read("k", vec![42u8]), vec![42u8]);
        Ok(())
    }

    #[test]
    fn test_incompatible_shape_falls_back_to_default() -> Result<(), StorageError> {
        let store = JsonStore::in_memory();
        store.write("k", "a string")?;
        assert_eq!(store.read::<Vec<u32>>("k", Vec::new()), Vec::<u32>::new());
        Ok(())
    }

    #[test]
    fn test_write_overwrites_and_remove() -> Result<(), StorageError> {
        let store = JsonStore::in_memory();
        store.write("k", &1)?;
        store.write("k", &2)?;
        assert_eq!(store.read("k", 0), 2);
        store.remove("k")?;
        assert_eq!(store.read("k", 0), 0);
        Ok(())
    }

    struct Unreadable;

    impl Backend for Unreadable {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::LockPoisoned("get"))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::LockPoisoned("set"))
        }

        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::LockPoisoned("remove"))
        }
    }

    #[test]
    fn test_backend_failure_reads_default_and_fails_writes() {
        let store = JsonStore::new(Unreadable);
        assert_eq!(store.read("k", 5u8), 5);
        assert!(!store.contains("k"));
        assert!(matches!(
            store.write("k", &1),
            Err(StorageError::LockPoisoned("set"))
        ));
    }
}
