//! Integration tests for the persisted collections and the pending-action
//! buffer, driven through the `Storefront` entry point.

use std::sync::Arc;

use storefront_state::storage::keys;
use storefront_state::{
    AddOutcome, COMPARISON_CAPACITY, JsonStore, ManualClock, NewCartLine, PendingIntent, Product,
    RECENTLY_VIEWED_CAPACITY, StorageError, Storefront,
};

fn product(id: &str, price: f64) -> Product {
    Product::new(id, format!("Product {}", id), price)
}

fn storefront_at(millis: u64) -> (Storefront, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(millis));
    let storefront = Storefront::with_clock(JsonStore::in_memory(), clock.clone());
    (storefront, clock)
}

#[test]
fn test_recently_viewed_cap_and_move_to_front() -> Result<(), StorageError> {
    let storefront = Storefront::in_memory();
    let recent = storefront.recently_viewed();

    for id in ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K"] {
        recent.add(product(id, 1.0))?;
    }
    let ids: Vec<String> = recent.items().into_iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), RECENTLY_VIEWED_CAPACITY);
    assert_eq!(ids.first().map(String::as_str), Some("K"));
    assert!(!recent.contains("A"));

    recent.add(product("B", 1.0))?;
    let ids: Vec<String> = recent.items().into_iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), RECENTLY_VIEWED_CAPACITY);
    assert_eq!(ids.first().map(String::as_str), Some("B"));
    assert_eq!(ids.iter().filter(|id| *id == "B").count(), 1);
    Ok(())
}

#[test]
fn test_comparison_blocks_instead_of_evicting() -> Result<(), StorageError> {
    let storefront = Storefront::in_memory();
    let comparison = storefront.comparison();

    for id in ["a", "b", "c", "d"] {
        assert_eq!(comparison.add(product(id, 5.0))?, AddOutcome::Added);
    }
    let before = comparison.items();

    assert_eq!(comparison.add(product("e", 5.0))?, AddOutcome::Full);
    assert_eq!(comparison.add(product("a", 5.0))?, AddOutcome::Duplicate);
    assert_eq!(comparison.items(), before);
    assert_eq!(comparison.len(), COMPARISON_CAPACITY);
    Ok(())
}

#[test]
fn test_wishlist_holds_one_entry_per_product() -> Result<(), StorageError> {
    let storefront = Storefront::in_memory();
    let wishlist = storefront.wishlist();
    let p = product("p", 9.99);

    wishlist.add(&p)?;
    wishlist.add(&p)?;
    assert_eq!(
        wishlist
            .items()
            .iter()
            .filter(|i| i.product_id == p.id)
            .count(),
        1
    );
    Ok(())
}

#[test]
fn test_cart_lines_are_independent() -> Result<(), StorageError> {
    let storefront = Storefront::in_memory();
    let cart = storefront.cart();
    let x = product("X", 7.25);

    let first = cart.add_line(NewCartLine::from_product(&x, 1))?;
    let second = cart.add_line(NewCartLine::from_product(&x, 1))?;
    assert_ne!(first.id, second.id);
    assert_eq!(cart.lines().len(), 2);
    assert_eq!(cart.total(), 2.0 * x.price);

    cart.remove_line(&second.id)?;
    assert_eq!(cart.total(), x.price);

    let totals = cart.totals();
    assert_eq!(totals.subtotal, x.price);
    assert_eq!(totals.item_count, 1);
    Ok(())
}

#[test]
fn test_cart_is_cleared_after_order() -> Result<(), StorageError> {
    let storefront = Storefront::in_memory();
    let cart = storefront.cart();
    cart.add_line(NewCartLine::from_product(&product("a", 1.0), 3))?;
    cart.add_line(NewCartLine::from_product(&product("b", 2.0), 1))?;
    assert_eq!(cart.item_count(), 4);

    cart.clear()?;
    assert!(storefront.cart().is_empty());
    assert_eq!(storefront.cart().totals().subtotal, 0.0);
    Ok(())
}

#[test]
fn test_pending_action_expires_after_one_hour() -> Result<(), StorageError> {
    let t = 1_700_000_000_000;
    let (storefront, clock) = storefront_at(t);
    let pending = storefront.pending_actions();

    pending.save(PendingIntent::AddToWishlist {
        product: product("p", 3.0),
        return_url: Some("/p/p".to_string()),
    })?;
    assert!(pending.peek().is_some());

    clock.set(t + 3_600_001);
    assert_eq!(pending.peek(), None);
    assert_eq!(pending.peek(), None);
    assert!(!storefront.store().contains(keys::PENDING_ACTION));
    Ok(())
}

#[test]
fn test_replay_after_login() -> anyhow::Result<()> {
    let (storefront, clock) = storefront_at(0);
    let p = product("kettle", 30.0);

    storefront.pending_actions().save(PendingIntent::AddToCart {
        product: p.clone(),
        quantity: 2,
        return_url: Some("/products/kettle".to_string()),
    })?;
    clock.advance(60_000);

    let action = storefront
        .pending_actions()
        .take()?
        .ok_or_else(|| anyhow::anyhow!("pending action missing"))?;
    if let PendingIntent::AddToCart {
        product, quantity, ..
    } = &action.intent
    {
        storefront
            .cart()
            .add_line(NewCartLine::from_product(product, *quantity))?;
    }

    assert_eq!(action.intent.return_url(), Some("/products/kettle"));
    assert_eq!(storefront.cart().total(), 60.0);
    assert_eq!(storefront.pending_actions().peek(), None);
    Ok(())
}

#[test]
fn test_corrupt_collection_reads_as_empty_and_recovers() -> Result<(), StorageError> {
    let storefront = Storefront::in_memory();
    storefront.store().write_raw(keys::WISHLIST, "[{broken")?;

    let wishlist = storefront.wishlist();
    assert!(wishlist.is_empty());
    assert!(wishlist.add(&product("p", 1.0))?);
    assert_eq!(wishlist.len(), 1);
    Ok(())
}

#[test]
fn test_collections_use_distinct_keys() -> Result<(), StorageError> {
    let storefront = Storefront::in_memory();
    let p = product("p", 1.0);

    storefront.cart().add_line(NewCartLine::from_product(&p, 1))?;
    storefront.wishlist().add(&p)?;
    storefront.recently_viewed().add(p.clone())?;
    storefront.comparison().add(p)?;

    for key in [keys::CART, keys::WISHLIST, keys::RECENTLY_VIEWED, keys::COMPARISON] {
        assert!(storefront.store().contains(key), "{} not written", key);
    }

    storefront.comparison().clear()?;
    assert_eq!(storefront.wishlist().len(), 1);
    assert_eq!(storefront.recently_viewed().len(), 1);
    Ok(())
}
