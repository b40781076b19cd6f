//! File-backed backend using fjall.

use std::path::Path;

use fjall::{Keyspace, KeyspaceCreateOptions, PersistMode};

use crate::logging::{debug, info};

use super::{Backend, StorageError};

/// Keyspace holding the storefront values.
const DATA_KEYSPACE: &str = "storefront";

/// Keyspace holding the on-disk format marker.
const META_KEYSPACE: &str = "_meta";
const META_FORMAT_KEY: &str = "format";

/// Current on-disk format version.
const FORMAT_VERSION: u32 = 1;

/// Backend persisting every key into a fjall database directory.
///
/// Each write is followed by a synchronous persist so state survives a
/// crash right after the call returns.
pub struct FjallBackend {
    db: fjall::Database,
    data: Keyspace,
}

impl FjallBackend {
    /// Open the database at `path`, creating it on first use.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        let db = fjall::Database::builder(path).open()?;
        let meta = db.keyspace(META_KEYSPACE, KeyspaceCreateOptions::default)?;

        match meta.get(META_FORMAT_KEY)? {
            Some(raw) => {
                let version = u32::from_le_bytes(raw.as_ref().try_into().map_err(|_| {
                    StorageError::Io(std::io::Error::new(
                        std::io::ErrorKind::InvalidData,
                        "invalid format marker",
                    ))
                })?);
                if version != FORMAT_VERSION {
                    return Err(StorageError::Io(std::io::Error::new(
                        std::io::ErrorKind::InvalidData,
                        format!(
                            "store format mismatch: expected {}, got {}",
                            FORMAT_VERSION, version
                        ),
                    )));
                }
            }
            None => {
                info!(path = %path.display(), "initializing storefront store");
                meta.insert(META_FORMAT_KEY, FORMAT_VERSION.to_le_bytes())?;
                db.persist(PersistMode::SyncAll)?;
            }
        }

        let data = db.keyspace(DATA_KEYSPACE, KeyspaceCreateOptions::default)?;
        Ok(Self { db, data })
    }
}

impl Backend for FjallBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let Some(raw) = self.data.get(key)? else {
            return Ok(None);
        };
        String::from_utf8(raw.to_vec())
            .map(Some)
            .map_err(|_| StorageError::InvalidUtf8(key.to_string()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        debug!(key = key, bytes = value.len(), "writing value");
        self.data.insert(key, value.as_bytes())?;
        self.db.persist(PersistMode::SyncAll)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.data.remove(key)?;
        self.db.persist(PersistMode::SyncAll)?;
        Ok(())
    }
}
