//! Core types shared across cache-rocket.
//!
//! Currently this is the crate's error type. Host and producer errors are not
//! represented here: they travel through [`anyhow::Error`] untouched.

pub mod error;

pub use error::CacheRocketError;
