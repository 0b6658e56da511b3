//! Error handling for cache-rocket
//!
//! The crate's own failure modes are enumerated in [`CacheRocketError`]. Public
//! entry points return [`anyhow::Result`]: typed errors for what this crate
//! detects, opaque pass-through for whatever the host render function or a
//! deferred producer returns.
//!
//! Callers that need to branch on a specific failure can downcast:
//!
//! ```rust,no_run
//! use cache_rocket::core::CacheRocketError;
//!
//! fn is_ambiguous(err: &anyhow::Error) -> bool {
//!     matches!(
//!         err.downcast_ref::<CacheRocketError>(),
//!         Some(CacheRocketError::AmbiguousReplacement { .. })
//!     )
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by cache-rocket itself.
#[derive(Error, Debug)]
pub enum CacheRocketError {
    /// Both an explicit `replace` source and a deferred mapping producer were
    /// supplied for the same call.
    #[error(
        "Ambiguous replacement source for template '{template}': pass either a `replace` option or a mapping producer, not both"
    )]
    AmbiguousReplacement {
        /// Outer template being rendered
        template: String,
    },

    /// A value could not be used as render options.
    #[error("Invalid render options: {reason}")]
    InvalidRenderOptions {
        /// What was wrong with the value
        reason: String,
    },

    /// A configuration file could not be read or parsed.
    #[error("Invalid configuration in {path}: {reason}")]
    Config {
        /// File that failed
        path: PathBuf,
        /// Underlying read or parse failure
        reason: String,
    },
}

impl CacheRocketError {
    /// Short, actionable hint for the error, if there is one.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            CacheRocketError::AmbiguousReplacement {
                ..
            } => Some("Drop the `replace` option when supplying a mapping producer"),
            CacheRocketError::InvalidRenderOptions {
                ..
            } => Some("Render options must be a JSON object"),
            CacheRocketError::Config {
                ..
            } => Some("Check the TOML syntax and the `templates` glob"),
        }
    }
}
