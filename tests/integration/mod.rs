//! Integration test suite for cache-rocket
//!
//! End-to-end tests that drive [`cache_rocket::CachedRenderer`] through real
//! hosts: the bundled Tera host, closure hosts, and hosts built from TOML
//! configuration on disk.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **config**: `HostConfig` files and building a Tera host from them
//! - **properties**: marker and substitution properties over many inputs
//! - **tera_host**: outer/inner rendering through Tera templates

mod config;
mod properties;
mod tera_host;
