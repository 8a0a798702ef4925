//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Config struct definitions and loading
//! - [`defaults`]: serde default values
//! - [`validation`]: startup checks that collect every error found

mod defaults;
mod types;
pub mod validation;

pub use types::{Config, OutputFormat};
