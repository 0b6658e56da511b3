//! cache-rocket - render outer fragments, then fill in their markers
//!
//! Fragment caches work best when the cached text is the same for every
//! request. cache-rocket lets an outer template mark the parts that vary with
//! placeholder tokens, so the outer output can be cached as-is while the
//! marked regions are filled in on every render, either with other partials
//! or with values supplied by the caller.
//!
//! # Architecture Overview
//!
//! - [`key`] - the marker token format (`<cr name>`) and a scanner for it
//! - [`rendering`] - [`CachedRenderer`](rendering::CachedRenderer), which
//!   renders an outer template through a host [`Render`](rendering::Render)
//!   function, builds a substitution table and replaces every marker
//! - [`config`] - TOML configuration for the bundled Tera host
//! - [`core`] - error types
//!
//! The rendering engine is never owned by this crate: any
//! `Fn(&str, &RenderOptions) -> anyhow::Result<String>` is a host, and
//! [`TeraHost`](rendering::TeraHost) is provided for Tera users.
//!
//! # Example
//!
//! ```
//! use cache_rocket::rendering::{CacheOptions, CachedRenderer, ReplaceMap, TeraHost};
//!
//! let mut host = TeraHost::new();
//! host.add_raw_template("partial", r#"Hi {{ "dog" | cache_replace_key }}."#)?;
//! let renderer = CachedRenderer::new(host);
//!
//! let options = CacheOptions::with_collection(["Snoop", "Boo"])
//!     .replace(ReplaceMap::new().computed("dog", |dog: Option<&&str>| dog.map(|d| d.to_string())));
//! assert_eq!(renderer.render_cached("partial", options)?, "Hi Snoop.Hi Boo.");
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! # Markers
//!
//! The marker for key `k` is `<cr k>`. Keys must not contain `>`. The same key
//! may appear any number of times in one outer render; every occurrence is
//! replaced. Markers without a replacement are left in place, and
//! replacements without a marker are ignored.

pub mod config;
pub mod constants;
pub mod core;
pub mod key;
pub mod rendering;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use key::cache_replace_key;
pub use rendering::{CacheOptions, CachedRenderer, Render, RenderOptions, Replace, ReplaceMap};
