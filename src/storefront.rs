//! Entry point tying the collections to one store and one clock.

use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::collections::{Cart, Comparison, RecentlyViewed, Wishlist};
#[cfg(feature = "kv")]
use crate::i18n::{Catalog, Localizer};
use crate::pending::PendingActions;
use crate::storage::JsonStore;

/// Hands out the persisted collections, all sharing one [`JsonStore`].
///
/// Handles are cheap to create and hold no cached state, so create them
/// per use.
#[derive(Clone)]
pub struct Storefront {
    store: JsonStore,
    clock: Arc<dyn Clock>,
}

impl Storefront {
    pub fn new(store: JsonStore) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    pub fn with_clock(store: JsonStore, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// A storefront over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(JsonStore::in_memory())
    }

    /// A storefront persisted in the fjall database at `path`.
    #[cfg(feature = "kv")]
    pub fn open(path: &std::path::Path) -> Result<Self, crate::storage::StorageError> {
        let backend = crate::storage::FjallBackend::open(path)?;
        Ok(Self::new(JsonStore::new(backend)))
    }

    /// Open the store at `path` and restore the saved language against the
    /// tables in `locales`, or the bundled tables when `None`.
    ///
    /// The store directory is created if it does not exist yet.
    #[cfg(feature = "kv")]
    pub fn bootstrap(
        path: &std::path::Path,
        locales: Option<&std::path::Path>,
    ) -> crate::Result<(Self, Localizer)> {
        std::fs::create_dir_all(path)?;
        let catalog = match locales {
            Some(dir) => Catalog::from_dir(dir)?,
            None => Catalog::bundled()?,
        };
        let storefront = Self::open(path)?;
        let localizer = Localizer::restore(catalog, storefront.store.clone());
        Ok((storefront, localizer))
    }

    pub fn store(&self) -> &JsonStore {
        &self.store
    }

    pub fn cart(&self) -> Cart {
        Cart::new(self.store.clone(), self.clock.clone())
    }

    pub fn wishlist(&self) -> Wishlist {
        Wishlist::new(self.store.clone())
    }

    pub fn recently_viewed(&self) -> RecentlyViewed {
        RecentlyViewed::new(self.store.clone())
    }

    pub fn comparison(&self) -> Comparison {
        Comparison::new(self.store.clone())
    }

    pub fn pending_actions(&self) -> PendingActions {
        PendingActions::new(self.store.clone(), self.clock.clone())
    }
}

impl std::fmt::Debug for Storefront {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storefront")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NewCartLine, Product};
    use crate::storage::StorageError;

    #[test]
    fn test_handles_share_state() -> Result<(), StorageError> {
        let storefront = Storefront::in_memory();
        let product = Product::new("p", "Pen", 2.0);

        storefront
            .cart()
            .add_line(NewCartLine::from_product(&product, 3))?;
        assert_eq!(storefront.cart().total(), 6.0);

        storefront.wishlist().add(&product)?;
        assert!(storefront.wishlist().contains("p"));
        assert!(storefront.comparison().is_empty());
        Ok(())
    }

    #[cfg(feature = "kv")]
    mod bootstrap {
        use super::*;
        use crate::i18n::Language;

        #[test]
        fn test_restores_language_and_state() -> crate::Result<()> {
            let dir = tempfile::tempdir()?;
            let path = dir.path().join("nested").join("store");
            {
                let (storefront, mut localizer) = Storefront::bootstrap(&path, None)?;
                assert_eq!(localizer.language(), Language::English);
                localizer.set_language(Language::French)?;
                storefront.wishlist().add(&Product::new("p", "Pen", 2.0))?;
            }

            let (storefront, localizer) = Storefront::bootstrap(&path, None)?;
            assert_eq!(localizer.language(), Language::French);
            assert_eq!(localizer.t("nav.cart"), "Panier");
            assert!(storefront.wishlist().contains("p"));
            Ok(())
        }

        #[test]
        fn test_missing_locales_is_an_i18n_error() -> crate::Result<()> {
            let dir = tempfile::tempdir()?;
            let missing = dir.path().join("no-locales");
            let err = Storefront::bootstrap(&dir.path().join("store"), Some(&missing)).err();
            assert!(err.as_ref().is_some_and(crate::Error::is_i18n));
            assert!(!err.as_ref().is_some_and(crate::Error::is_storage));
            Ok(())
        }

        #[test]
        fn test_store_path_on_a_file_is_an_io_error() -> crate::Result<()> {
            let dir = tempfile::tempdir()?;
            let file = dir.path().join("plain-file");
            std::fs::write(&file, "x")?;
            let err = Storefront::bootstrap(&file, None).err();
            assert!(matches!(err, Some(crate::Error::Io(_))));
            Ok(())
        }
    }
}
