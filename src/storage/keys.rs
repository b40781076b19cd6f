//! Reserved storage keys.
//!
//! These address durable user state and must stay stable across releases.

pub const CART: &str = "storefront.cart";
pub const WISHLIST: &str = "storefront.wishlist";
pub const RECENTLY_VIEWED: &str = "storefront.recently_viewed";
pub const COMPARISON: &str = "storefront.comparison";
pub const PENDING_ACTION: &str = "storefront.pending_action";
pub const LANGUAGE: &str = "storefront.language";

/// Every reserved key, in a fixed order.
pub const ALL: [&str; 6] = [
    CART,
    WISHLIST,
    RECENTLY_VIEWED,
    COMPARISON,
    PENDING_ACTION,
    LANGUAGE,
];
