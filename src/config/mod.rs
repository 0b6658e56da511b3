//! Configuration loading.
//!
//! - [`parse_config`] reads any TOML file into a `serde` type.
//! - [`HostConfig`] describes how to build a [`TeraHost`](crate::rendering::TeraHost).

mod host;
mod parser;

pub use host::HostConfig;
pub use parser::parse_config;
