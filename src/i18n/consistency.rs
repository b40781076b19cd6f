//! Cross-language key-consistency check.
//!
//! Run offline (in tests or via the CLI), never while resolving strings.
//! The check collects every violation instead of stopping at the first one,
//! so a single run lists all the work a translator has left.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

use super::TranslationTable;
use super::interpolate::placeholders;
use super::table::{Leaf, kind};

/// One problem found by [`check_consistency`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// The reference language has `key`, `language` does not.
    MissingKey { language: String, key: String },
    /// `language` has `key`, the reference language does not.
    ExtraKey { language: String, key: String },
    /// The leaf at `key` is not a string.
    NotAString {
        language: String,
        key: String,
        found: &'static str,
    },
    /// The string at `key` is empty or whitespace.
    EmptyValue { language: String, key: String },
    /// A segment of `key` is empty or contains a `.`, so lookups never reach it.
    UnreachableKey { language: String, key: String },
    /// `language` uses different placeholders at `key` than the reference.
    PlaceholderMismatch {
        language: String,
        key: String,
        expected: BTreeMap<String, usize>,
        found: BTreeMap<String, usize>,
    },
}

impl Violation {
    pub fn language(&self) -> &str {
        match self {
            Self::MissingKey { language, .. }
            | Self::ExtraKey { language, .. }
            | Self::NotAString { language, .. }
            | Self::EmptyValue { language, .. }
            | Self::UnreachableKey { language, .. }
            | Self::PlaceholderMismatch { language, .. } => language,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Self::MissingKey { key, .. }
            | Self::ExtraKey { key, .. }
            | Self::NotAString { key, .. }
            | Self::EmptyValue { key, .. }
            | Self::UnreachableKey { key, .. }
            | Self::PlaceholderMismatch { key, .. } => key,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingKey { language, key } => write!(f, "[{}] missing key '{}'", language, key),
            Self::ExtraKey { language, key } => {
                write!(f, "[{}] extra key '{}' (not in reference)", language, key)
            }
            Self::NotAString {
                language,
                key,
                found,
            } => write!(f, "[{}] '{}' is {}, expected a string", language, key, found),
            Self::EmptyValue { language, key } => write!(f, "[{}] '{}' is empty", language, key),
            Self::UnreachableKey { language, key } => write!(
                f,
                "[{}] '{}' has an empty or dotted segment and cannot be looked up",
                language, key
            ),
            Self::PlaceholderMismatch {
                language,
                key,
                expected,
                found,
            } => write!(
                f,
                "[{}] '{}' placeholders {} differ from reference {}",
                language,
                key,
                format_counts(found),
                format_counts(expected)
            ),
        }
    }
}

fn format_counts(counts: &BTreeMap<String, usize>) -> String {
    let names: Vec<String> = counts
        .iter()
        .map(|(name, n)| {
            if *n == 1 {
                format!("{{{{{}}}}}", name)
            } else {
                format!("{{{{{}}}}}x{}", name, n)
            }
        })
        .collect();
    format!("[{}]", names.join(", "))
}

/// Result of [`check_consistency`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConsistencyReport {
    /// Code of the language every other one is compared against.
    pub reference: Option<String>,
    /// Codes of all checked languages, reference first.
    pub languages: Vec<String>,
    /// Number of leaf keys in the reference table.
    pub reference_keys: usize,
    pub violations: Vec<Violation>,
}

impl ConsistencyReport {
    pub fn is_consistent(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violations reported for `language`.
    pub fn for_language<'a>(&'a self, language: &'a str) -> impl Iterator<Item = &'a Violation> {
        self.violations
            .iter()
            .filter(move |v| v.language() == language)
    }

    pub fn missing_keys(&self) -> impl Iterator<Item = &Violation> {
        self.violations
            .iter()
            .filter(|v| matches!(v, Violation::MissingKey { .. }))
    }

    pub fn extra_keys(&self) -> impl Iterator<Item = &Violation> {
        self.violations
            .iter()
            .filter(|v| matches!(v, Violation::ExtraKey { .. }))
    }
}

impl fmt::Display for ConsistencyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_consistent() {
            return write!(
                f,
                "{} languages, {} keys each: consistent",
                self.languages.len(),
                self.reference_keys
            );
        }
        writeln!(
            f,
            "{} violation(s) across {} languages:",
            self.violations.len(),
            self.languages.len()
        )?;
        for violation in &self.violations {
            writeln!(f, "  {}", violation)?;
        }
        Ok(())
    }
}

/// Compare every table against the first one.
///
/// Checks that all tables have the same leaf keys, that every leaf is a
/// non-blank string, and that each key uses the same multiset of
/// `{{placeholder}}` names in every language.
pub fn check_consistency(tables: &[(&str, &TranslationTable)]) -> ConsistencyReport {
    let mut report = ConsistencyReport {
        languages: tables.iter().map(|(code, _)| code.to_string()).collect(),
        ..ConsistencyReport::default()
    };

    let Some(((reference_code, reference), others)) = tables.split_first() else {
        return report;
    };
    report.reference = Some(reference_code.to_string());

    let reference_leaves = reference.leaves();
    report.reference_keys = reference_leaves.len();
    check_leaves(reference_code, &reference_leaves, &mut report.violations);

    for (code, table) in others {
        let leaves = table.leaves();

        for key in reference_leaves.keys().filter(|k| !leaves.contains_key(*k)) {
            report.violations.push(Violation::MissingKey {
                language: code.to_string(),
                key: key.clone(),
            });
        }
        for key in leaves.keys().filter(|k| !reference_leaves.contains_key(*k)) {
            report.violations.push(Violation::ExtraKey {
                language: code.to_string(),
                key: key.clone(),
            });
        }

        check_leaves(code, &leaves, &mut report.violations);

        for (key, leaf) in &leaves {
            let Some(reference_leaf) = reference_leaves.get(key) else {
                continue;
            };
            let (Value::String(expected), Value::String(found)) =
                (reference_leaf.value, leaf.value)
            else {
                continue;
            };
            let expected = placeholders(expected);
            let found = placeholders(found);
            if expected != found {
                report.violations.push(Violation::PlaceholderMismatch {
                    language: code.to_string(),
                    key: key.clone(),
                    expected,
                    found,
                });
            }
        }
    }

    report
}

fn check_leaves(
    code: &str,
    leaves: &BTreeMap<String, Leaf<'_>>,
    violations: &mut Vec<Violation>,
) {
    for (key, leaf) in leaves {
        if !leaf.reachable {
            violations.push(Violation::UnreachableKey {
                language: code.to_string(),
                key: key.clone(),
            });
        }
        match leaf.value {
            Value::String(s) if s.trim().is_empty() => {
                violations.push(Violation::EmptyValue {
                    language: code.to_string(),
                    key: key.clone(),
                });
            }
            Value::String(_) => {}
            other => violations.push(Violation::NotAString {
                language: code.to_string(),
                key: key.clone(),
                found: kind(other),
            }),
        }
    }
}
