//! App-wide constants.
//!
//! Centralises the tool name, config paths and environment variable names
//! so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "calcli";

/// Crate version, as reported by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Directory name under `~/.config/` for the global config.
pub const CONFIG_DIR: &str = "calcli";

/// Global config filename inside [`CONFIG_DIR`].
pub const CONFIG_FILENAME: &str = "config.toml";

/// Fixed message printed for a zero divisor.
pub const DIVISION_BY_ZERO_MESSAGE: &str = "Cannot divide by zero";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_FORMAT: &str = "CALCLI_FORMAT";
pub const ENV_COLOR: &str = "CALCLI_COLOR";
pub const ENV_LOG: &str = "CALCLI_LOG";

/// Cross-tool convention: any value disables colour.
pub const ENV_NO_COLOR: &str = "NO_COLOR";
