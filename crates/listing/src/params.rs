//! Query-string handling for catalog URLs.
//!
//! The catalog addresses every filter through `?key=value` parameters, so
//! this module models an ordered multimap with form-urlencoded text on the
//! wire. Mutations mirror what browsers do: replacing a parameter keeps its
//! position, removing one drops every occurrence.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An ordered list of query parameters.
///
/// Duplicate keys are kept on parse; [`QueryString::get`] reads the first
/// occurrence, matching how servers resolve repeated parameters here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryString(Vec<(String, String)>);

impl QueryString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses form-urlencoded text (without the leading `?`).
    ///
    /// `+` decodes to a space and `%XX` escapes to their bytes. Segments
    /// without `=` become parameters with an empty value. Malformed escapes
    /// are kept verbatim rather than rejected.
    pub fn parse(raw: &str) -> Self {
        let pairs = raw
            .split('&')
            .filter(|segment| !segment.is_empty())
            .map(|segment| match segment.split_once('=') {
                Some((key, value)) => (decode_component(key), decode_component(value)),
                None => (decode_component(segment), String::new()),
            })
            .collect();

        Self(pairs)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// First value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Sets `key` to `value`, keeping the position of the first existing
    /// occurrence and dropping any later duplicates. Absent keys append.
    pub fn set(&mut self, key: &str, value: &str) {
        let mut replaced = false;
        self.0.retain_mut(|(k, v)| {
            if k != key {
                return true;
            }
            if replaced {
                return false;
            }
            *v = value.to_owned();
            replaced = true;
            true
        });

        if !replaced {
            self.0.push((key.to_owned(), value.to_owned()));
        }
    }

    /// Removes every occurrence of `key`.
    pub fn remove(&mut self, key: &str) {
        self.0.retain(|(k, _)| k != key);
    }

    /// Appends a parameter without touching existing occurrences.
    pub fn append(&mut self, key: &str, value: &str) {
        self.0.push((key.to_owned(), value.to_owned()));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for QueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, value) in &self.0 {
            if !first {
                f.write_str("&")?;
            }
            first = false;
            write!(
                f,
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )?;
        }
        Ok(())
    }
}

fn decode_component(component: &str) -> String {
    let unplussed = component.replace('+', " ");
    match urlencoding::decode(&unplussed) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => unplussed,
    }
}

/// A catalog page address: path plus query, no origin.
///
/// This is the unit the redirecting widget rewrites and hands to its
/// navigator. Fragments are not part of the address and are dropped on
/// parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLocation {
    pub path: String,
    pub query: QueryString,
}

impl PageLocation {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: QueryString::new(),
        }
    }

    pub fn parse(raw: &str) -> Self {
        let without_fragment = match raw.split_once('#') {
            Some((head, _)) => head,
            None => raw,
        };

        match without_fragment.split_once('?') {
            Some((path, query)) => Self {
                path: path.to_owned(),
                query: QueryString::parse(query),
            },
            None => Self {
                path: without_fragment.to_owned(),
                query: QueryString::new(),
            },
        }
    }
}

impl FromStr for PageLocation {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for PageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.query.is_empty() {
            f.write_str(&self.path)
        } else {
            write!(f, "{}?{}", self.path, self.query)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_parameter_order() {
        let query = QueryString::parse("b=2&a=1&c=3");

        let keys: Vec<&str> = query.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn get_reads_first_occurrence() {
        let query = QueryString::parse("cat=livros&cat=jogos");

        assert_eq!(query.get("cat"), Some("livros"));
    }

    #[test]
    fn parse_decodes_plus_and_percent_escapes() {
        let query = QueryString::parse("q=caf%C3%A9+com+leite");

        assert_eq!(query.get("q"), Some("café com leite"));
    }

    #[test]
    fn parse_keeps_malformed_escape_verbatim() {
        let query = QueryString::parse("q=50%ZZ");

        assert_eq!(query.get("q"), Some("50%ZZ"));
    }

    #[test]
    fn bare_key_parses_with_empty_value() {
        let query = QueryString::parse("featured&x=1");

        assert_eq!(query.get("featured"), Some(""));
        assert_eq!(query.get("x"), Some("1"));
    }

    #[test]
    fn set_replaces_in_place() {
        let mut query = QueryString::parse("a=1&sort=price&b=2");

        query.set("sort", "-price");

        assert_eq!(query.to_string(), "a=1&sort=-price&b=2");
    }

    #[test]
    fn set_drops_later_duplicates() {
        let mut query = QueryString::parse("cat=a&x=1&cat=b");

        query.set("cat", "livros");

        assert_eq!(query.to_string(), "cat=livros&x=1");
    }

    #[test]
    fn set_appends_when_absent() {
        let mut query = QueryString::parse("x=1");

        query.set("sort", "-price");

        assert_eq!(query.to_string(), "x=1&sort=-price");
    }

    #[test]
    fn remove_drops_every_occurrence() {
        let mut query = QueryString::parse("cat=a&x=1&cat=b");

        query.remove("cat");

        assert_eq!(query.to_string(), "x=1");
    }

    #[test]
    fn display_percent_encodes_values() {
        let mut query = QueryString::new();

        query.set("q", "café com leite");

        assert_eq!(query.to_string(), "q=caf%C3%A9%20com%20leite");
    }

    #[test]
    fn location_without_query_has_no_question_mark() {
        let location = PageLocation::parse("/catalog");

        assert_eq!(location.to_string(), "/catalog");
    }

    #[test]
    fn location_splits_path_and_query() {
        let location = PageLocation::parse("/catalog?x=1&sort=price");

        assert_eq!(location.path, "/catalog");
        assert_eq!(location.query.get("sort"), Some("price"));
        assert_eq!(location.to_string(), "/catalog?x=1&sort=price");
    }

    #[test]
    fn location_drops_fragment() {
        let location = PageLocation::parse("/catalog?x=1#top");

        assert_eq!(location.to_string(), "/catalog?x=1");
    }
}
