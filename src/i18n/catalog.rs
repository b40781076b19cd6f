//! The set of translation tables, one per supported language.

use std::collections::HashMap;
use std::path::Path;

use crate::logging::debug;

use super::consistency::{ConsistencyReport, check_consistency};
use super::{I18nError, Language, TranslationTable};

const BUNDLED_EN: &str = include_str!("../../locales/en.json");
const BUNDLED_AR: &str = include_str!("../../locales/ar.json");
const BUNDLED_FR: &str = include_str!("../../locales/fr.json");

/// Translation tables keyed by language.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tables: HashMap<Language, TranslationTable>,
}

impl Catalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The tables compiled into the crate.
    pub fn bundled() -> Result<Self, I18nError> {
        let mut catalog = Self::new();
        for language in Language::all() {
            let json = match language {
                Language::English => BUNDLED_EN,
                Language::Arabic => BUNDLED_AR,
                Language::French => BUNDLED_FR,
            };
            catalog.insert(
                *language,
                TranslationTable::from_json_str(language.code(), json)?,
            );
        }
        Ok(catalog)
    }

    /// Load `<code>.json` for every supported language from `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self, I18nError> {
        let mut catalog = Self::new();
        for language in Language::all() {
            let path = dir.join(format!("{}.json", language.code()));
            debug!(path = %path.display(), "loading translations");
            let json = std::fs::read_to_string(&path)
                .map_err(|source| I18nError::Read { path, source })?;
            catalog.insert(
                *language,
                TranslationTable::from_json_str(language.code(), &json)?,
            );
        }
        Ok(catalog)
    }

    /// Add or replace the table for `language`.
    pub fn insert(&mut self, language: Language, table: TranslationTable) {
        self.tables.insert(language, table);
    }

    pub fn table(&self, language: Language) -> Option<&TranslationTable> {
        self.tables.get(&language)
    }

    /// Present tables in [`Language::ALL`] order, reference language first.
    pub fn tables(&self) -> Vec<(&'static str, &TranslationTable)> {
        Language::all()
            .iter()
            .filter_map(|l| self.tables.get(l).map(|t| (l.code(), t)))
            .collect()
    }

    /// Run the key-consistency check over every table in the catalog.
    pub fn check_consistency(&self) -> ConsistencyReport {
        check_consistency(&self.tables())
    }
}
