//! Render an outer template and splice partials or values into its markers.
//!
//! This module provides the [`CachedRenderer`] struct, which wraps a host
//! [`Render`] implementation and runs the render-and-substitute cycle.

use anyhow::Result;

use super::fragment::Fragment;
use super::host::Render;
use super::options::{CacheOptions, RenderOptions};
use super::replace::{Replace, ReplaceMap};
use crate::core::CacheRocketError;

/// Deferred producer of a [`ReplaceMap`], invoked once per iteration.
///
/// Receives the current collection item, or `None` without a collection.
pub type MappingProducer<'p, 'a, T> = dyn Fn(Option<&T>) -> Result<ReplaceMap<'a, T>> + 'p;

/// Renders outer templates through a host and substitutes their markers.
///
/// The host is an explicit dependency: anything implementing [`Render`],
/// including a plain closure via [`CachedRenderer::from_fn`].
///
/// # Algorithm
///
/// For each collection item (or once, without a collection):
///
/// 1. Resolve the replacement source: the producer's mapping for this item if
///    a producer was given, otherwise `options.replace`.
/// 2. Render the outer template with the forwarded options.
/// 3. Build a `key -> text` table. Names are rendered through the host with
///    the same options; mapping values are resolved for the current item.
/// 4. Replace every occurrence of each key's marker.
///
/// Per-item results are concatenated in collection order with no separator.
///
/// # Errors
///
/// Passing both a `replace` option and a producer is rejected with
/// [`CacheRocketError::AmbiguousReplacement`] before the host is called.
/// Errors from the host or the producer are returned unchanged.
#[derive(Debug, Clone)]
pub struct CachedRenderer<R> {
    host: R,
}

impl<F> CachedRenderer<F>
where
    F: Fn(&str, &RenderOptions) -> Result<String>,
{
    /// Wrap a render closure.
    pub fn from_fn(render: F) -> Self {
        Self::new(render)
    }
}

impl<R: Render> CachedRenderer<R> {
    pub fn new(host: R) -> Self {
        Self {
            host,
        }
    }

    pub fn host(&self) -> &R {
        &self.host
    }

    pub fn into_host(self) -> R {
        self.host
    }

    /// Render `name` and substitute markers from `options.replace`.
    ///
    /// Without a `replace` source the outer template is rendered and returned
    /// as-is.
    ///
    /// ```
    /// use cache_rocket::key::cache_replace_key;
    /// use cache_rocket::rendering::{CacheOptions, CachedRenderer, ReplaceMap};
    ///
    /// let renderer = CachedRenderer::from_fn(|_name, _options| {
    ///     Ok(format!("Hi {}.", cache_replace_key("dog")))
    /// });
    ///
    /// let options = CacheOptions::with_collection(["Snoop", "Boo"])
    ///     .replace(ReplaceMap::new().computed("dog", |dog: Option<&&str>| dog.map(|d| d.to_string())));
    /// assert_eq!(renderer.render_cached("partial", options)?, "Hi Snoop.Hi Boo.");
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn render_cached<'a, T>(&self, name: &str, options: CacheOptions<'a, T>) -> Result<String> {
        self.render_collection(name, options, None)
    }

    /// Render `name` and substitute markers from a lazily produced mapping.
    ///
    /// `producer` is called once per collection item with that item, or once
    /// with `None` without a collection, before the outer render of that
    /// iteration. `options` must not carry a `replace` source.
    ///
    /// ```
    /// use cache_rocket::key::cache_replace_key;
    /// use cache_rocket::rendering::{CacheOptions, CachedRenderer, ReplaceMap};
    ///
    /// let renderer = CachedRenderer::from_fn(|_name, _options| {
    ///     Ok(format!("Fanny pack {} viral mustache.", cache_replace_key("inner")))
    /// });
    ///
    /// let output = renderer.render_cached_with("container", CacheOptions::new(), |_| {
    ///     Ok(ReplaceMap::new().literal("inner", "keytar"))
    /// })?;
    /// assert_eq!(output, "Fanny pack keytar viral mustache.");
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn render_cached_with<'a, T, P>(
        &self,
        name: &str,
        options: CacheOptions<'a, T>,
        producer: P,
    ) -> Result<String>
    where
        P: Fn(Option<&T>) -> Result<ReplaceMap<'a, T>>,
    {
        let producer: &MappingProducer<'_, 'a, T> = &producer;
        self.render_collection(name, options, Some(producer))
    }

    fn render_collection<'a, T>(
        &self,
        name: &str,
        options: CacheOptions<'a, T>,
        producer: Option<&MappingProducer<'_, 'a, T>>,
    ) -> Result<String> {
        let CacheOptions {
            replace,
            collection,
            render_options,
        } = options;

        if replace.is_some() && producer.is_some() {
            return Err(CacheRocketError::AmbiguousReplacement {
                template: name.to_string(),
            }
            .into());
        }

        let Some(items) = collection else {
            tracing::debug!("Rendering '{}' once", name);
            return self.render_one(name, &render_options, replace.as_ref(), producer, None);
        };

        tracing::debug!("Rendering '{}' for {} collection item(s)", name, items.len());
        let mut output = String::new();
        for item in &items {
            let rendered =
                self.render_one(name, &render_options, replace.as_ref(), producer, Some(item))?;
            output.push_str(&rendered);
        }
        Ok(output)
    }

    fn render_one<'a, T>(
        &self,
        name: &str,
        render_options: &RenderOptions,
        replace: Option<&Replace<'a, T>>,
        producer: Option<&MappingProducer<'_, 'a, T>>,
        item: Option<&T>,
    ) -> Result<String> {
        let produced = match producer {
            Some(produce) => Some(Replace::Map(produce(item)?)),
            None => None,
        };
        let source = produced.as_ref().or(replace);

        let mut fragment = Fragment::new(self.host.render(name, render_options)?);

        let Some(source) = source else {
            tracing::debug!("No replacement source for '{}', returning it unchanged", name);
            return Ok(fragment.into_string());
        };

        let table = self.substitution_table(source, render_options, item)?;
        fragment.replace_all(table);
        Ok(fragment.into_string())
    }

    fn substitution_table<T>(
        &self,
        source: &Replace<'_, T>,
        render_options: &RenderOptions,
        item: Option<&T>,
    ) -> Result<Vec<(String, String)>> {
        match source {
            Replace::Name(partial) => {
                Ok(vec![(partial.clone(), self.host.render(partial, render_options)?)])
            }
            Replace::Names(partials) => partials
                .iter()
                .map(|partial| Ok((partial.clone(), self.host.render(partial, render_options)?)))
                .collect(),
            Replace::Map(map) => {
                Ok(map.iter().map(|(key, value)| (key.to_string(), value.resolve(item))).collect())
            }
        }
    }
}
