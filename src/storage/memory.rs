//! In-memory backend.

use std::collections::HashMap;
use std::sync::RwLock;

use super::{Backend, StorageError};

/// Backend holding everything in a `HashMap`. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Backend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StorageError::LockPoisoned("read"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StorageError::LockPoisoned("write"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StorageError::LockPoisoned("remove"))?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() -> Result<(), StorageError> {
        let backend = MemoryBackend::new();
        assert!(backend.is_empty());

        backend.set("a", "1")?;
        backend.set("a", "2")?;
        assert_eq!(backend.get("a")?.as_deref(), Some("2"));
        assert_eq!(backend.len(), 1);

        backend.remove("a")?;
        backend.remove("a")?;
        assert_eq!(backend.get("a")?, None);
        Ok(())
    }
}
