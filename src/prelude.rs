//! Convenient re-exports for common usage patterns.
//!
//! # Example
//!
//! ```ignore
//! use storefront_state::prelude::*;
//!
//! let storefront = Storefront::in_memory();
//! storefront.wishlist().add(&Product::new("p1", "Lamp", 24.0))?;
//!
//! let localizer = Localizer::new(Catalog::bundled()?);
//! let text = localizer.resolve("wishlist.added", &Params::new().with("name", "Lamp"));
//! ```

// Unified error handling
pub use crate::error::{Error, Result};

// Persistence
pub use crate::storage::{Backend, JsonStore, MemoryBackend, StorageError};
#[cfg(feature = "kv")]
pub use crate::storage::FjallBackend;

// Collections
pub use crate::clock::{Clock, ManualClock, SystemClock};
pub use crate::collections::{
    AddOutcome, Cart, CartTotals, Comparison, RecentlyViewed, Wishlist, format_amount,
};
pub use crate::model::{CartLine, NewCartLine, Product, WishlistItem};
pub use crate::pending::{PendingAction, PendingActions, PendingIntent};
pub use crate::storefront::Storefront;

// i18n
pub use crate::i18n::{
    Catalog, ConsistencyReport, Direction, Language, LanguageChange, Localizer, Lookup, Params,
    TranslationTable, check_consistency,
};
