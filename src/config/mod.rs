//! Configuration loading and layering.
//!
//! Handles the global `config.toml`, an explicit `--config` file and
//! environment variable overrides, merged in priority order.

pub mod loader;

pub use loader::{Config, ConfigError, ConfigLayer, OutputConfig, OutputLayer};
