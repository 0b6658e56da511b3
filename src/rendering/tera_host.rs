//! A [`Render`] host backed by Tera.
//!
//! `TeraHost` renders named Tera templates with the forwarded
//! [`RenderOptions`] as the template context. It registers a
//! `cache_replace_key` filter so templates can emit marker tokens themselves:
//!
//! ```text
//! Fanny pack {{ "inner" | cache_replace_key }} viral mustache.
//! ```
//!
//! # Autoescaping
//!
//! Tera escapes expression output in `.html`, `.htm` and `.xml` templates by
//! default, which would turn `<cr inner>` into `&lt;cr inner&gt;`. Either end
//! the expression with `| safe` or build the host with autoescaping disabled
//! (see [`HostConfig::autoescape`](crate::config::HostConfig::autoescape)).

use anyhow::{Context, Result};
use std::collections::HashMap;
use tera::{Context as TeraContext, Tera, Value};

use super::host::Render;
use super::options::RenderOptions;
use crate::config::HostConfig;
use crate::constants::CACHE_REPLACE_KEY_FILTER;
use crate::key::cache_replace_key;

/// Tera-backed host render function.
pub struct TeraHost {
    tera: Tera,
}

impl TeraHost {
    /// Create a host with no templates loaded.
    pub fn new() -> Self {
        Self::from_tera(Tera::default())
    }

    /// Wrap an existing Tera instance and register the marker filter on it.
    pub fn from_tera(mut tera: Tera) -> Self {
        tera.register_filter(CACHE_REPLACE_KEY_FILTER, create_cache_replace_key_filter());
        Self {
            tera,
        }
    }

    /// Build a host from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the `templates` glob cannot be loaded or a template
    /// fails to parse.
    pub fn from_config(config: &HostConfig) -> Result<Self> {
        let mut tera = match &config.templates {
            Some(glob) => Tera::new(glob)
                .map_err(|e| anyhow::anyhow!(format_tera_error(&e)))
                .with_context(|| format!("Failed to load templates from '{}'", glob))?,
            None => Tera::default(),
        };

        if !config.autoescape {
            tera.autoescape_on(vec![]);
        }

        tracing::debug!(
            "Tera host ready with {} template(s), autoescape={}",
            tera.get_template_names().count(),
            config.autoescape
        );
        Ok(Self::from_tera(tera))
    }

    /// Add a template from a string.
    pub fn add_raw_template(&mut self, name: &str, content: &str) -> Result<()> {
        self.tera
            .add_raw_template(name, content)
            .map_err(|e| anyhow::anyhow!(format_tera_error(&e)))
            .with_context(|| format!("Failed to add template '{}'", name))
    }

    pub fn tera(&self) -> &Tera {
        &self.tera
    }

    pub fn tera_mut(&mut self) -> &mut Tera {
        &mut self.tera
    }
}

impl Default for TeraHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for TeraHost {
    fn render(&self, name: &str, options: &RenderOptions) -> Result<String> {
        let context = TeraContext::from_serialize(options.as_map())
            .map_err(|e| anyhow::anyhow!(format_tera_error(&e)))?;

        self.tera
            .render(name, &context)
            .map_err(|e| anyhow::anyhow!(format_tera_error(&e)))
            .with_context(|| format!("Failed to render template '{}'", name))
    }
}

/// Create the `cache_replace_key` filter.
///
/// Accepts a string or a number and returns its marker token.
pub fn create_cache_replace_key_filter() -> impl tera::Filter + 'static {
    |value: &Value, _args: &HashMap<String, Value>| -> tera::Result<Value> {
        let key = match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            other => {
                return Err(tera::Error::msg(format!(
                    "{} filter requires a string or number key, got {}",
                    CACHE_REPLACE_KEY_FILTER, other
                )));
            }
        };
        Ok(Value::String(cache_replace_key(key)))
    }
}

/// Flatten a Tera error and its sources into one readable message.
pub fn format_tera_error(error: &tera::Error) -> String {
    use std::error::Error;

    let mut messages = vec![error.to_string()];
    let mut current: Option<&dyn Error> = error.source();
    while let Some(err) = current {
        messages.push(err.to_string());
        current = err.source();
    }

    messages.retain(|msg| !msg.trim().is_empty());
    messages.dedup();
    messages.join("\n  → ")
}
