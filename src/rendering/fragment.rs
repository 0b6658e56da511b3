//! Rendered outer output and marker substitution.

use regex::Captures;
use std::collections::HashMap;

use crate::key::{MARKER_PATTERN, extract_keys};

/// The output of one outer render, before and after substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    text: String,
}

impl Fragment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Keys of the markers currently present, in order of appearance.
    pub fn marker_keys(&self) -> Vec<String> {
        extract_keys(&self.text)
    }

    /// Replace every occurrence of `key`'s marker with `value`.
    ///
    /// Returns the number of occurrences replaced. A key with no marker in the
    /// fragment leaves it unchanged.
    pub fn replace(&mut self, key: &str, value: &str) -> usize {
        self.replace_all([(key, value)])
    }

    /// Apply a whole substitution table in one pass over the fragment.
    ///
    /// Only markers present before the call are substituted: a value that
    /// contains another key's marker is inserted verbatim, whatever the table
    /// order. Markers without a table entry are left in place. Returns the
    /// number of markers replaced.
    pub fn replace_all<K, V>(&mut self, table: impl IntoIterator<Item = (K, V)>) -> usize
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let table: HashMap<String, V> =
            table.into_iter().map(|(key, value)| (key.as_ref().to_string(), value)).collect();

        let mut counts: HashMap<&str, usize> = HashMap::new();
        let replaced = MARKER_PATTERN.replace_all(&self.text, |caps: &Captures<'_>| {
            let key = caps.get(1).map_or("", |m| m.as_str());
            match table.get_key_value(key) {
                Some((key, value)) => {
                    *counts.entry(key.as_str()).or_default() += 1;
                    value.as_ref().to_string()
                }
                None => caps[0].to_string(),
            }
        });
        let text = replaced.into_owned();

        for key in table.keys() {
            match counts.get(key.as_str()) {
                Some(count) => tracing::debug!(
                    "Replaced {} occurrence(s) of key '{}' ({} bytes)",
                    count,
                    key,
                    table[key].as_ref().len()
                ),
                None => tracing::trace!("No marker for key '{}' in fragment", key),
            }
        }
        let total = counts.values().sum();
        self.text = text;

        if tracing::enabled!(tracing::Level::TRACE) {
            let leftover = self.marker_keys();
            if !leftover.is_empty() {
                tracing::trace!("Markers left unsubstituted: {:?}", leftover);
            }
        }
        total
    }
}

impl From<String> for Fragment {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
