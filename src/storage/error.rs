//! Error types for the storage module.

use thiserror::Error;

/// Errors raised while writing to (or opening) a persistence backend.
///
/// Reads never surface these: [`JsonStore::read`](super::JsonStore::read)
/// falls back to the caller's default instead.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "kv")]
    #[error("Fjall error: {0}")]
    Fjall(#[from] fjall::Error),

    #[error("Failed to encode value for key '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Storage lock poisoned during {0}")]
    LockPoisoned(&'static str),

    #[error("Stored value for key '{0}' is not valid UTF-8")]
    InvalidUtf8(String),
}
