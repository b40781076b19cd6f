//! Unified error type for the storefront-state library.
//!
//! This module provides a single [`Error`] type that encompasses all errors
//! that can occur in the library, making it easier to handle errors in
//! application code.

use thiserror::Error;

use crate::i18n::I18nError;
use crate::storage::StorageError;

/// Unified error type for all storefront-state operations.
///
/// # Example
///
/// ```ignore
/// use storefront_state::{Result, Storefront, NewCartLine};
///
/// fn add(storefront: &Storefront, line: NewCartLine) -> Result<()> {
///     storefront.cart().add_line(line)?;
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// Error writing to or opening a persistence backend.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Error loading translations or selecting a language.
    #[error(transparent)]
    I18n(#[from] I18nError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A [`Result`] type alias using the unified [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns `true` if this is a storage error.
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }

    /// Returns `true` if this is an i18n error.
    pub fn is_i18n(&self) -> bool {
        matches!(self, Self::I18n(_))
    }
}
