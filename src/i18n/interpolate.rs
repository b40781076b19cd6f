//! `{{name}}` placeholder scanning and substitution.

use std::collections::BTreeMap;
use std::fmt::Display;

/// Named parameters for [`interpolate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    values: BTreeMap<String, String>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, formatting `value` with `Display`.
    pub fn with(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Display) {
        self.values.insert(name.into(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

/// A piece of a template string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    /// The name inside a `{{name}}` token.
    Placeholder(&'a str),
}

/// Splits a template into text and placeholders.
///
/// A placeholder is `{{` followed by one or more ASCII letters, digits or
/// underscores and `}}`. Anything else, including `{{ name }}`, is text.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Segments<'a> {
    pub fn new(template: &'a str) -> Self {
        Self { rest: template }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        if self.rest.is_empty() {
            return None;
        }

        let mut search_from = 0;
        loop {
            let Some(offset) = self.rest.get(search_from..).and_then(|s| s.find("{{")) else {
                let text = self.rest;
                self.rest = "";
                return Some(Segment::Text(text));
            };
            let open = search_from + offset;

            if let Some(name) = self.rest.get(open + 2..).and_then(placeholder_name) {
                if open > 0 {
                    let (text, rest) = self.rest.split_at(open);
                    self.rest = rest;
                    return Some(Segment::Text(text));
                }
                self.rest = self.rest.get(name.len() + 4..).unwrap_or("");
                return Some(Segment::Placeholder(name));
            }

            // `{` is one byte, so the next byte starts a char.
            search_from = open + 1;
        }
    }
}

/// The placeholder name at the start of `s`, which directly follows `{{`.
fn placeholder_name(s: &str) -> Option<&str> {
    let end = s.find("}}")?;
    let name = s.get(..end)?;
    let valid = !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_');
    valid.then_some(name)
}

/// Replace every `{{name}}` in `template` with its value from `params`.
///
/// Placeholders without a matching parameter are left as written.
pub fn interpolate(template: &str, params: &Params) -> String {
    if params.is_empty() {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len());
    for segment in Segments::new(template) {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Placeholder(name) => match params.get(name) {
                Some(value) => out.push_str(value),
                None => {
                    out.push_str("{{");
                    out.push_str(name);
                    out.push_str("}}");
                }
            },
        }
    }
    out
}

/// Placeholder names in `template` with their occurrence counts.
pub fn placeholders(template: &str) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for segment in Segments::new(template) {
        if let Segment::Placeholder(name) = segment {
            *counts.entry(name.to_string()).or_insert(0) += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitutes_named_params() {
        let params = Params::new().with("name", "Sam");
        assert_eq!(interpolate("hello {{name}}", &params), "hello Sam");
    }

    #[test]
    fn test_missing_param_left_in_place() {
        assert_eq!(interpolate("hello {{name}}", &Params::new()), "hello {{name}}");
        let params = Params::new().with("other", 1);
        assert_eq!(interpolate("hello {{name}}", &params), "hello {{name}}");
    }

    #[test]
    fn test_repeated_and_numeric_params() {
        let params = Params::new().with("n", 3).with("x", 2.5);
        assert_eq!(interpolate("{{n}}/{{n}} at {{x}}", &params), "3/3 at 2.5");
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let params = Params::new().with("a", "{{b}}").with("b", "no");
        assert_eq!(interpolate("{{a}}", &params), "{{b}}");
    }

    #[test]
    fn test_malformed_tokens_are_text() {
        let params = Params::new().with("name", "Sam");
        assert_eq!(interpolate("{{ name }} {{}} {{name", &params), "{{ name }} {{}} {{name");
        assert_eq!(interpolate("{{{name}}}", &params), "{Sam}");
    }

    #[test]
    fn test_non_ascii_text_around_tokens() {
        let params = Params::new().with("name", "سام");
        assert_eq!(interpolate("مرحبًا، {{name}}!", &params), "مرحبًا، سام!");
    }

    #[test]
    fn test_segments() {
        let segments: Vec<Segment<'_>> = Segments::new("a {{b}} c").collect();
        assert_eq!(
            segments,
            vec![
                Segment::Text("a "),
                Segment::Placeholder("b"),
                Segment::Text(" c"),
            ]
        );
    }

    #[test]
    fn test_placeholder_counts() {
        let counts = placeholders("{{a}} {{b}} {{a}} {{ c }}");
        assert_eq!(counts.get("a"), Some(&2));
        assert_eq!(counts.get("b"), Some(&1));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_params_from_iter() {
        let params: Params = [("count", 4)].into_iter().collect();
        assert_eq!(params.get("count"), Some("4"));
    }
}
