//! A single language's nested translation table.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::{Map, Value};

use crate::logging::warn;

use super::I18nError;
use super::interpolate::{Params, interpolate};

/// Outcome of walking a dotted path through a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// The path ends at a string leaf.
    Found(&'a str),
    /// The path exists but ends at an object, array, number, bool or null.
    NotString,
    /// Some segment of the path is missing.
    NotFound,
}

/// Nested mapping from dotted key paths to template strings.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationTable {
    root: Map<String, Value>,
}

impl TranslationTable {
    /// Build a table from a JSON value, which must be an object.
    pub fn from_value(language: &str, value: Value) -> Result<Self, I18nError> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(I18nError::InvalidTable {
                language: language.to_string(),
                reason: format!("expected a JSON object at the root, found {}", kind(&other)),
            }),
        }
    }

    /// Parse a table from JSON text.
    pub fn from_json_str(language: &str, json: &str) -> Result<Self, I18nError> {
        let value = serde_json::from_str(json).map_err(|source| I18nError::Parse {
            language: language.to_string(),
            source,
        })?;
        Self::from_value(language, value)
    }

    pub fn root(&self) -> &Map<String, Value> {
        &self.root
    }

    /// Walk `path` one `.`-separated segment at a time.
    pub fn lookup(&self, path: &str) -> Lookup<'_> {
        match self.value_at(path) {
            Some(Value::String(s)) => Lookup::Found(s),
            Some(_) => Lookup::NotString,
            None => Lookup::NotFound,
        }
    }

    /// The raw value at `path`, if every segment exists. Empty segments
    /// never match.
    pub fn value_at(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let first = segments.next().filter(|s| !s.is_empty())?;
        let mut current = self.root.get(first)?;
        for segment in segments {
            if segment.is_empty() {
                return None;
            }
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    pub fn contains(&self, path: &str) -> bool {
        matches!(self.lookup(path), Lookup::Found(_))
    }

    /// Resolve `key` to display text.
    ///
    /// Returns the template with `params` substituted, or `key` itself when
    /// the key is empty, missing, or does not end at a string.
    pub fn resolve(&self, key: &str, params: &Params) -> String {
        if key.is_empty() {
            warn!("translation requested with an empty key");
            return String::new();
        }

        match self.lookup(key) {
            Lookup::Found(template) => interpolate(template, params),
            Lookup::NotString => {
                warn!(key = key, "translation key does not resolve to a string");
                key.to_string()
            }
            Lookup::NotFound => {
                warn!(key = key, "missing translation key");
                key.to_string()
            }
        }
    }

    /// Every dotted path that ends at a non-object value, sorted.
    ///
    /// Objects are walked depth first; arrays and scalars are leaves. Empty
    /// objects contribute no keys.
    pub fn leaf_keys(&self) -> BTreeSet<String> {
        self.leaves().into_keys().collect()
    }

    /// Every leaf with the value found there during the walk.
    ///
    /// A leaf is unreachable when one of its raw segments is empty or itself
    /// contains a `.`, since [`lookup`](Self::lookup) splits on dots and can
    /// never arrive at it. When such a leaf flattens to the same path as a
    /// reachable one, the reachable leaf wins.
    pub(crate) fn leaves(&self) -> BTreeMap<String, Leaf<'_>> {
        let mut out = BTreeMap::new();
        collect_leaves(&self.root, "", true, &mut out);
        out
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Leaf<'a> {
    pub value: &'a Value,
    pub reachable: bool,
}

fn collect_leaves<'a>(
    map: &'a Map<String, Value>,
    prefix: &str,
    reachable: bool,
    out: &mut BTreeMap<String, Leaf<'a>>,
) {
    for (key, value) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        let reachable = reachable && !key.is_empty() && !key.contains('.');
        match value {
            Value::Object(child) => collect_leaves(child, &path, reachable, out),
            _ => {
                let leaf = Leaf { value, reachable };
                match out.get(&path) {
                    Some(existing) if existing.reachable => {}
                    _ => {
                        out.insert(path, leaf);
                    }
                }
            }
        }
    }
}

pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
