//! Global constants used throughout the cache-rocket codebase.
//!
//! The marker delimiters are process-wide: every fragment rendered by a host
//! and every substitution performed by [`crate::rendering::CachedRenderer`]
//! must agree on them, so they are defined here and nowhere else.

/// Opening delimiter of a marker token.
///
/// A marker for key `inner` is rendered as `<cr inner>`. The trailing space
/// keeps markers from colliding with real HTML tags such as `<cr>`.
pub const CACHE_REPLACE_KEY_OPEN: &str = "<cr ";

/// Closing delimiter of a marker token.
///
/// Keys must not contain this character, otherwise token boundaries become
/// ambiguous.
pub const CACHE_REPLACE_KEY_CLOSE: char = '>';

/// Option key naming the replacement source. Never forwarded to the host.
pub const REPLACE_OPTION: &str = "replace";

/// Option key naming the collection to iterate. Never forwarded to the host.
pub const COLLECTION_OPTION: &str = "collection";

/// Control keys stripped from render options before they reach the host.
pub const RESERVED_OPTION_KEYS: [&str; 2] = [REPLACE_OPTION, COLLECTION_OPTION];

/// Name of the Tera filter that emits a marker token from a template.
pub const CACHE_REPLACE_KEY_FILTER: &str = "cache_replace_key";
