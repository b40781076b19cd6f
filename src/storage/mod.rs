//! Key-value persistence for the storefront collections.
//!
//! Collections never talk to a storage medium directly. They go through a
//! [`JsonStore`], which serializes values to JSON strings and hands them to
//! a [`Backend`]. Backends only move strings around, so the same collection
//! logic runs against memory in tests and against a fjall database on disk.

mod error;
#[cfg(feature = "kv")]
mod disk;
mod json;
pub mod keys;
mod memory;

pub use error::StorageError;
#[cfg(feature = "kv")]
pub use disk::FjallBackend;
pub use json::JsonStore;
pub use memory::MemoryBackend;

/// A durable, synchronous, string-keyed storage medium.
///
/// Implementations overwrite on `set` and treat `remove` of an absent key as
/// a no-op. Concurrent writers get last-write-wins.
pub trait Backend: Send + Sync {
    /// Fetch the raw string stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value stored under `key`.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
