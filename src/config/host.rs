//! Configuration for [`TeraHost`](crate::rendering::TeraHost).
//!
//! ```toml
//! # Glob of template files to load
//! templates = "templates/**/*"
//!
//! # Escape expression output in .html/.htm/.xml templates (Tera default)
//! autoescape = true
//! ```

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::parse_config;

const fn default_autoescape() -> bool {
    true
}

/// Settings used to build a Tera-backed host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostConfig {
    /// Glob of template files to load, e.g. `templates/**/*`.
    ///
    /// When absent the host starts empty and templates are added with
    /// [`TeraHost::add_raw_template`](crate::rendering::TeraHost::add_raw_template).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templates: Option<String>,

    /// Whether Tera autoescapes `.html`, `.htm` and `.xml` templates.
    ///
    /// Marker tokens look like tags, so escaping templates must pipe them
    /// through `| safe`. Turning this off avoids that.
    #[serde(default = "default_autoescape")]
    pub autoescape: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            templates: None,
            autoescape: default_autoescape(),
        }
    }
}

impl HostConfig {
    /// Load host configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        parse_config(path)
    }
}
