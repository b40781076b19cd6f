//! Error types for the i18n module.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading translation tables or selecting a language.
///
/// Resolving a key never produces one of these.
#[derive(Error, Debug)]
pub enum I18nError {
    #[error("Unsupported language: {0}")]
    UnknownLanguage(String),

    #[error("Invalid translation table for '{language}': {reason}")]
    InvalidTable { language: String, reason: String },

    #[error("Failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse translations for '{language}': {source}")]
    Parse {
        language: String,
        #[source]
        source: serde_json::Error,
    },
}
