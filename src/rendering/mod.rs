//! Cached rendering: outer templates with substitutable marker tokens.
//!
//! An outer template marks regions with tokens produced by
//! [`cache_replace_key`](crate::key::cache_replace_key). A fragment cache in
//! the host can store the outer output with the markers still in place;
//! [`CachedRenderer`] then fills the markers in on every request.
//!
//! # Replacement sources
//!
//! Exactly one per call:
//!
//! | Source | Substituted text |
//! |--------|------------------|
//! | `replace("inner")` | the host's rendering of `inner` |
//! | `replace(["inner", "other"])` | each partial's rendering, keyed by its name |
//! | `replace(ReplaceMap)` | the map's values, no inner render |
//! | [`render_cached_with`](CachedRenderer::render_cached_with) | a map produced lazily per iteration |
//!
//! # Examples
//!
//! ## Single partial
//!
//! ```
//! use cache_rocket::rendering::{CacheOptions, CachedRenderer};
//!
//! let renderer = CachedRenderer::from_fn(|name, _options| {
//!     Ok(match name {
//!         "container" => "X <cr inner> Y".to_string(),
//!         _ => "Z".to_string(),
//!     })
//! });
//! assert_eq!(renderer.render_cached("container", CacheOptions::new().replace("inner"))?, "X Z Y");
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Literal values, including nil
//!
//! ```
//! use cache_rocket::rendering::{CacheOptions, CachedRenderer, ReplaceMap};
//!
//! let renderer = CachedRenderer::from_fn(|_name, _options| {
//!     Ok("I like <cr beer>, <cr beer> and <cr food>.".to_string())
//! });
//!
//! let map = ReplaceMap::new().literal("beer", "stout").nil("food");
//! assert_eq!(
//!     renderer.render_cached("container", CacheOptions::new().replace(map))?,
//!     "I like stout, stout and ."
//! );
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod fragment;
pub mod host;
pub mod options;
pub mod renderer;
pub mod replace;
pub mod tera_host;


pub use fragment::Fragment;
pub use host::Render;
pub use options::{CacheOptions, RenderOptions};
pub use renderer::{CachedRenderer, MappingProducer};
pub use replace::{ComputeFn, Replace, ReplaceMap, Replacement};
pub use tera_host::TeraHost;
