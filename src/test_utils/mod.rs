//! Test utilities for cache-rocket
//!
//! - [`init_test_logging`] installs a `tracing` subscriber once per process.
//! - [`StubHost`] is a recording [`Render`] host with canned output.
//!
//! # Example
//!
//! ```
//! use cache_rocket::rendering::{CacheOptions, CachedRenderer};
//! use cache_rocket::test_utils::StubHost;
//!
//! let host = StubHost::new()
//!     .stub("container", "Fanny pack <cr inner> viral mustache.")
//!     .stub("inner", "quinoa hoodie");
//! let renderer = CachedRenderer::new(host);
//!
//! let output = renderer.render_cached("container", CacheOptions::new().replace("inner"))?;
//! assert_eq!(output, "Fanny pack quinoa hoodie viral mustache.");
//! assert_eq!(renderer.host().calls().len(), 2);
//! # Ok::<(), anyhow::Error>(())
//! ```

use anyhow::{Result, bail};
use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::rendering::{Render, RenderOptions};

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Respects `RUST_LOG` when `level` is `None`; does nothing if neither is set.
///
/// ```bash
/// RUST_LOG=cache_rocket=trace cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .try_init();
    });
}

/// One call received by a [`StubHost`].
#[derive(Debug, Clone, PartialEq)]
pub struct RenderCall {
    pub name: String,
    pub options: RenderOptions,
}

/// A [`Render`] host returning canned output and recording every call.
///
/// Output is looked up by `(name, options)` first, then by `name` alone.
/// Rendering anything else is an error, which also makes the stub a handy way
/// to check that host errors propagate.
#[derive(Debug, Default)]
pub struct StubHost {
    by_name: HashMap<String, String>,
    by_call: Vec<(RenderCall, String)>,
    calls: RefCell<Vec<RenderCall>>,
}

impl StubHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `output` whenever `name` is rendered, whatever the options.
    pub fn stub(mut self, name: &str, output: impl Into<String>) -> Self {
        self.by_name.insert(name.to_string(), output.into());
        self
    }

    /// Return `output` only when `name` is rendered with exactly `options`.
    pub fn stub_with(
        mut self,
        name: &str,
        options: RenderOptions,
        output: impl Into<String>,
    ) -> Self {
        self.by_call.push((
            RenderCall {
                name: name.to_string(),
                options,
            },
            output.into(),
        ));
        self
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<RenderCall> {
        self.calls.borrow().clone()
    }

    /// Names rendered so far, in order.
    pub fn rendered_names(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|call| call.name.clone()).collect()
    }
}

impl Render for StubHost {
    fn render(&self, name: &str, options: &RenderOptions) -> Result<String> {
        let call = RenderCall {
            name: name.to_string(),
            options: options.clone(),
        };
        self.calls.borrow_mut().push(call.clone());

        if let Some((_, output)) = self.by_call.iter().find(|(stubbed, _)| *stubbed == call) {
            return Ok(output.clone());
        }
        match self.by_name.get(name) {
            Some(output) => Ok(output.clone()),
            None => bail!("Template '{}' is not stubbed", name),
        }
    }
}
