//! Generic TOML configuration parsing.
//!
//! Works with any configuration structure that implements
//! [`serde::de::DeserializeOwned`]. Read and parse failures are reported as
//! [`CacheRocketError::Config`] with the offending path, so callers see which
//! file broke without digging through the error chain:
//!
//! ```text
//! Invalid configuration in /path/to/rocket.toml: expected `=`, found newline
//! ```

use anyhow::Result;
use std::path::Path;

use crate::core::CacheRocketError;

/// Parse a TOML configuration file into the specified type.
///
/// # Examples
///
/// ```rust,no_run
/// use cache_rocket::config::parse_config;
/// use serde::Deserialize;
/// use std::path::Path;
///
/// #[derive(Deserialize)]
/// struct Config {
///     templates: String,
/// }
///
/// # fn example() -> anyhow::Result<()> {
/// let config: Config = parse_config(Path::new("rocket.toml"))?;
/// println!("Loading templates from {}", config.templates);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns [`CacheRocketError::Config`] if the file cannot be read, is not
/// valid TOML, or does not match `T`.
pub fn parse_config<T>(path: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let content = std::fs::read_to_string(path).map_err(|e| CacheRocketError::Config {
        path: path.to_path_buf(),
        reason: format!("failed to read file: {}", e),
    })?;

    let config: T = toml::from_str(&content).map_err(|e| CacheRocketError::Config {
        path: path.to_path_buf(),
        reason: e.message().to_string(),
    })?;

    tracing::debug!("Loaded configuration from {}", path.display());
    Ok(config)
}
