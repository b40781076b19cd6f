//! Persisted ordered collections.
//!
//! Every public mutation reads the whole list, computes the new list and
//! writes it back within the same call. There is no cross-process locking:
//! two writers sharing a backend get last-write-wins.
//!
//! | Collection        | Key                          | Overflow policy        |
//! |-------------------|------------------------------|------------------------|
//! | [`Cart`]          | `storefront.cart`            | unbounded, no dedup    |
//! | [`Wishlist`]      | `storefront.wishlist`        | unbounded, one per id  |
//! | [`RecentlyViewed`]| `storefront.recently_viewed` | evict oldest past 10   |
//! | [`Comparison`]    | `storefront.comparison`      | reject past 4          |

mod cart;
mod comparison;
mod list;
mod recently_viewed;
pub mod totals;
mod wishlist;

pub use cart::Cart;
pub use comparison::{AddOutcome, COMPARISON_CAPACITY, Comparison};
pub use recently_viewed::{RECENTLY_VIEWED_CAPACITY, RecentlyViewed};
pub use totals::{CartTotals, LineTotal, format_amount};
pub use wishlist::Wishlist;
