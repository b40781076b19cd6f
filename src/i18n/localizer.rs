//! Current-language state and string resolution.

use crate::logging::{info, warn};
use crate::storage::{JsonStore, StorageError, keys};

use super::{Catalog, Direction, Language, Lookup, Params};

/// Handle returned by [`Localizer::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Passed to subscribers after the language changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageChange {
    pub previous: Language,
    pub current: Language,
}

impl LanguageChange {
    /// Value for the document's `lang` attribute.
    pub fn lang(&self) -> &'static str {
        self.current.code()
    }

    /// Value for the document's `dir` attribute.
    pub fn direction(&self) -> Direction {
        self.current.direction()
    }
}

type Listener = Box<dyn FnMut(&LanguageChange) + Send>;

/// Resolves dotted keys against the current language's table.
///
/// Rendering surfaces subscribe to be told when the language changes so
/// they can re-resolve their strings; the document shell subscribes to
/// update its `lang` and `dir` attributes.
pub struct Localizer {
    catalog: Catalog,
    current: Language,
    preferences: Option<JsonStore>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl Localizer {
    /// A localizer starting in the default language, without persistence.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            current: Language::default(),
            preferences: None,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// A localizer that loads the saved language from `store` and saves
    /// every later change back to it.
    ///
    /// A missing or unsupported saved code starts in the default language.
    pub fn restore(catalog: Catalog, store: JsonStore) -> Self {
        let saved: Option<String> = store.read(keys::LANGUAGE, None);
        let current = match saved.as_deref() {
            None => Language::default(),
            Some(code) => Language::from_code(code).unwrap_or_else(|| {
                warn!(code = code, "ignoring unsupported saved language");
                Language::default()
            }),
        };

        Self {
            current,
            preferences: Some(store),
            ..Self::new(catalog)
        }
    }

    pub fn language(&self) -> Language {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.current.direction()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Switch to `language`, persist it, and notify subscribers.
    ///
    /// Selecting the current language again does nothing.
    pub fn set_language(&mut self, language: Language) -> Result<(), StorageError> {
        if language == self.current {
            return Ok(());
        }

        if let Some(store) = &self.preferences {
            store.write(keys::LANGUAGE, language.code())?;
        }

        let change = LanguageChange {
            previous: self.current,
            current: language,
        };
        self.current = language;
        info!(from = %change.previous, to = %change.current, "language changed");

        for (_, listener) in &mut self.listeners {
            listener(&change);
        }
        Ok(())
    }

    /// Register `listener` to run after every language change.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&LanguageChange) + Send + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Resolve `key` in the current language with `params` substituted.
    ///
    /// Falls back to `key` itself when it cannot be resolved.
    pub fn resolve(&self, key: &str, params: &Params) -> String {
        match self.catalog.table(self.current) {
            Some(table) => table.resolve(key, params),
            None => {
                warn!(language = %self.current, key = key, "no translation table loaded");
                key.to_string()
            }
        }
    }

    /// Resolve `key` without parameters.
    pub fn t(&self, key: &str) -> String {
        self.resolve(key, &Params::new())
    }

    /// Walk `key` in the current language without logging or fallback.
    pub fn lookup(&self, key: &str) -> Lookup<'_> {
        self.catalog
            .table(self.current)
            .map_or(Lookup::NotFound, |table| table.lookup(key))
    }

    pub fn has_key(&self, key: &str) -> bool {
        matches!(self.lookup(key), Lookup::Found(_))
    }
}

impl std::fmt::Debug for Localizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Localizer")
            .field("current", &self.current)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_resolves_in_current_language() -> Result<(), Box<dyn std::error::Error>> {
        let mut localizer = Localizer::new(Catalog::bundled()?);
        assert_eq!(localizer.t("nav.cart"), "Cart");

        localizer.set_language(Language::French)?;
        assert_eq!(localizer.t("nav.cart"), "Panier");
        assert_eq!(localizer.t("nav.nope"), "nav.nope");
        Ok(())
    }

    #[test]
    fn test_subscribers_see_direction() -> Result<(), Box<dyn std::error::Error>> {
        let mut localizer = Localizer::new(Catalog::bundled()?);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let id = localizer.subscribe(move |change| {
            if let Ok(mut seen) = sink.lock() {
                seen.push((change.lang(), change.direction()));
            }
        });

        localizer.set_language(Language::Arabic)?;
        localizer.set_language(Language::Arabic)?;
        assert!(localizer.unsubscribe(id));
        localizer.set_language(Language::English)?;

        let seen = seen.lock().map_err(|e| e.to_string())?;
        assert_eq!(*seen, vec![("ar", Direction::Rtl)]);
        assert!(!localizer.unsubscribe(id));
        Ok(())
    }

    #[test]
    fn test_language_is_persisted() -> Result<(), Box<dyn std::error::Error>> {
        let store = JsonStore::in_memory();
        let mut localizer = Localizer::restore(Catalog::bundled()?, store.clone());
        assert_eq!(localizer.language(), Language::English);

        localizer.set_language(Language::French)?;
        let restored = Localizer::restore(Catalog::bundled()?, store);
        assert_eq!(restored.language(), Language::French);
        Ok(())
    }

    #[test]
    fn test_unsupported_saved_language_uses_default() -> Result<(), Box<dyn std::error::Error>> {
        let store = JsonStore::in_memory();
        store.write(keys::LANGUAGE, "klingon")?;
        let localizer = Localizer::restore(Catalog::bundled()?, store);
        assert_eq!(localizer.language(), Language::English);
        Ok(())
    }

    #[test]
    fn test_missing_table_falls_back_to_key() {
        let localizer = Localizer::new(Catalog::new());
        assert_eq!(localizer.t("nav.cart"), "nav.cart");
        assert!(!localizer.has_key("nav.cart"));
    }
}
