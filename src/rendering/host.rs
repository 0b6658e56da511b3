//! The seam between [`CachedRenderer`](super::CachedRenderer) and the host view layer.

use anyhow::Result;

use super::options::RenderOptions;

/// A partial-rendering function supplied by the host.
///
/// `render(name, options)` is the only call shape cache-rocket ever issues.
/// It is used for the outer template and for every name-based replacement,
/// always with the same `options`.
///
/// Any closure with the matching signature is a `Render`:
///
/// ```
/// use cache_rocket::rendering::{CachedRenderer, CacheOptions};
///
/// let renderer = CachedRenderer::from_fn(|name, _options| {
///     Ok(match name {
///         "container" => "Fanny pack <cr inner> viral mustache.".to_string(),
///         _ => "quinoa hoodie".to_string(),
///     })
/// });
///
/// let output = renderer.render_cached("container", CacheOptions::new().replace("inner"))?;
/// assert_eq!(output, "Fanny pack quinoa hoodie viral mustache.");
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// Errors returned here reach the caller of `render_cached` unchanged.
pub trait Render {
    /// Render the template called `name` with `options`.
    fn render(&self, name: &str, options: &RenderOptions) -> Result<String>;
}

impl<F> Render for F
where
    F: Fn(&str, &RenderOptions) -> Result<String>,
{
    fn render(&self, name: &str, options: &RenderOptions) -> Result<String> {
        self(name, options)
    }
}
