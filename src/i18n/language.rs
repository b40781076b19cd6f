//! Supported languages and their display metadata.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::I18nError;

/// Text direction of a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// The value for an HTML `dir` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display metadata for a language switcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
    pub direction: Direction,
    pub flag: &'static str,
}

/// A supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Language {
    #[default]
    English,
    Arabic,
    French,
}

impl Language {
    /// Every supported language. The first one is the reference language for
    /// consistency checks.
    pub const ALL: [Language; 3] = [Language::English, Language::Arabic, Language::French];

    pub fn all() -> &'static [Language] {
        &Self::ALL
    }

    pub fn code(self) -> &'static str {
        self.info().code
    }

    pub fn direction(self) -> Direction {
        self.info().direction
    }

    pub fn info(self) -> LanguageInfo {
        match self {
            Self::English => LanguageInfo {
                code: "en",
                name: "English",
                native_name: "English",
                direction: Direction::Ltr,
                flag: "🇺🇸",
            },
            Self::Arabic => LanguageInfo {
                code: "ar",
                name: "Arabic",
                native_name: "العربية",
                direction: Direction::Rtl,
                flag: "🇸🇦",
            },
            Self::French => LanguageInfo {
                code: "fr",
                name: "French",
                native_name: "Français",
                direction: Direction::Ltr,
                flag: "🇫🇷",
            },
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| I18nError::UnknownLanguage(s.to_string()))
    }
}
