//! Marker token formatting.
//!
//! A marker token is the textual placeholder an outer template emits where an
//! inner partial or a caller-supplied value should later be spliced in. The
//! format is `<OPEN><key>>`:
//!
//! ```
//! use cache_rocket::key::cache_replace_key;
//!
//! assert_eq!(cache_replace_key("some/thing"), "<cr some/thing>");
//! ```
//!
//! Keys are anything that implements [`Display`]; the displayed form is the
//! canonical key. No validation is performed, so callers must avoid keys that
//! contain `>`.

use regex::Regex;
use std::fmt::Display;
use std::sync::LazyLock;

use crate::constants::{CACHE_REPLACE_KEY_CLOSE, CACHE_REPLACE_KEY_OPEN};

pub(crate) static MARKER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        "{}([^{}]*){}",
        regex::escape(CACHE_REPLACE_KEY_OPEN),
        CACHE_REPLACE_KEY_CLOSE,
        CACHE_REPLACE_KEY_CLOSE
    );
    Regex::new(&pattern).expect("marker pattern is a valid regex")
});

/// Format `key` as a marker token.
///
/// Pure and total: the same key always yields the same token.
pub fn cache_replace_key(key: impl Display) -> String {
    format!("{CACHE_REPLACE_KEY_OPEN}{key}{CACHE_REPLACE_KEY_CLOSE}")
}

/// List the keys of every marker token in `text`, in order of appearance.
///
/// Duplicates are kept, so the result has one entry per occurrence.
///
/// ```
/// use cache_rocket::key::{cache_replace_key, extract_keys};
///
/// let text = format!("{} and {}", cache_replace_key("a"), cache_replace_key("b"));
/// assert_eq!(extract_keys(&text), vec!["a", "b"]);
/// ```
pub fn extract_keys(text: &str) -> Vec<String> {
    MARKER_PATTERN
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
