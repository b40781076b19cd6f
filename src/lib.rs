//! Persisted storefront state and translation lookup.
//!
//! This library holds the client-side state of a retail storefront: the
//! cart, wishlist, recently viewed products, comparison list and a buffered
//! action to replay after sign-in, all persisted through a pluggable
//! key-value backend. It also resolves dotted translation keys against
//! nested per-language tables and checks those tables for consistency.
//!
//! # Quick Start
//!
//! ```ignore
//! use storefront_state::prelude::*;
//!
//! // Open (or create) a store on disk
//! let storefront = Storefront::open(".storefront".as_ref())?;
//!
//! // Add the same product twice: two independent lines
//! let mug = Product::new("mug", "Mug", 12.5);
//! storefront.cart().add_line(NewCartLine::from_product(&mug, 1))?;
//! storefront.cart().add_line(NewCartLine::from_product(&mug, 1))?;
//! assert_eq!(storefront.cart().total(), 25.0);
//!
//! // Resolve a translated string
//! let localizer = Localizer::restore(Catalog::bundled()?, storefront.store().clone());
//! let label = localizer.resolve("cart.itemCount", &Params::new().with("count", 2));
//! ```
//!
//! # Modules
//!
//! - [`storage`] - Backend trait, in-memory and fjall backends, JSON adapter
//! - [`collections`] - Cart, wishlist, recently viewed and comparison lists
//! - [`pending`] - Single-slot pending action buffer with expiry
//! - [`i18n`] - Translation tables, resolution, language state, consistency check
//!
//! # Feature Flags
//!
//! - `kv` - Enable the fjall file-backed backend (enabled by default)
//! - `logging` - Enable library-level tracing (consumers provide their own subscriber)
//! - `cli` - Enable the command-line interface binary
//! - `full` - Enable all features

#[cfg(feature = "cli")]
pub mod cli;
pub mod clock;
pub mod collections;
mod error;
pub mod i18n;
mod logging;
pub mod model;
pub mod pending;
pub mod prelude;
pub mod storage;
mod storefront;

// Re-export the unified error type
pub use error::{Error, Result};

pub use clock::{Clock, ManualClock, SystemClock};
pub use collections::{
    AddOutcome, COMPARISON_CAPACITY, Cart, CartTotals, Comparison, LineTotal,
    RECENTLY_VIEWED_CAPACITY, RecentlyViewed, Wishlist, format_amount,
};
pub use i18n::{
    Catalog, ConsistencyReport, Direction, I18nError, Language, LanguageChange, LanguageInfo,
    Localizer, Lookup, Params, SubscriptionId, TranslationTable, Violation, check_consistency,
    interpolate, placeholders,
};
pub use model::{CartLine, NewCartLine, Product, WishlistItem};
pub use pending::{PENDING_ACTION_TTL, PendingAction, PendingActions, PendingIntent};
#[cfg(feature = "kv")]
pub use storage::FjallBackend;
pub use storage::{Backend, JsonStore, MemoryBackend, StorageError};
pub use storefront::Storefront;
