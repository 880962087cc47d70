//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags (applied by the binary)
//! 2. Environment variables
//! 3. `--config <PATH>` file
//! 4. `~/.config/calcli/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::constants::{CONFIG_DIR, CONFIG_FILENAME, ENV_COLOR, ENV_FORMAT, ENV_NO_COLOR};
use crate::env::Env;
use crate::output::OutputFormat;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
}

/// Output-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Colour is still only used when stdout is a terminal.
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

/// One config file as written on disk. Only keys present in the file are
/// `Some`, so a layer can set a value back to its default.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConfigLayer {
    pub output: OutputLayer,
}

/// Output keys of a [`ConfigLayer`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputLayer {
    pub format: Option<OutputFormat>,
    pub color: Option<bool>,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// A missing global config is skipped; a missing explicit config is an
    /// error.
    pub fn load(explicit: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let global = Self::global_config_path().filter(|p| p.exists());
        Self::load_layers(global.as_deref(), explicit, env)
    }

    /// Layer the given files and the environment over the defaults.
    pub fn load_layers(
        global: Option<&Path>,
        explicit: Option<&Path>,
        env: &Env,
    ) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(path) = global {
            debug!(path = %path.display(), "loading global config");
            config.merge(Self::read_layer(path)?);
        }

        // Layer 3: explicit config
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading config");
            config.merge(Self::read_layer(path)?);
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load a config from a specific file, filling absent keys with defaults.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Config::default();
        config.merge(Self::read_layer(path)?);
        Ok(config)
    }

    /// Read a single file layer without applying defaults.
    pub fn read_layer(path: &Path) -> Result<ConfigLayer, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR).join(CONFIG_FILENAME))
    }

    /// Merge a file layer into this config. Every key present in the layer
    /// wins, including keys set to their default value.
    fn merge(&mut self, layer: ConfigLayer) {
        if let Some(format) = layer.output.format {
            self.output.format = format;
        }
        if let Some(color) = layer.output.color {
            self.output.color = color;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Some(val) = env.var(ENV_FORMAT) {
            match val.parse::<OutputFormat>() {
                Ok(format) => self.output.format = format,
                Err(_) => warn!("ignoring invalid {ENV_FORMAT} value: {val}"),
            }
        }

        match env.flag(ENV_COLOR) {
            Some(Ok(enabled)) => self.output.color = enabled,
            Some(Err(val)) => warn!("ignoring invalid {ENV_COLOR} value: {val}"),
            None => {}
        }

        if env.is_set(ENV_NO_COLOR) {
            self.output.color = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env() -> Env {
        Env::from_pairs(Vec::<(&str, &str)>::new())
    }

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.color);
    }

    #[test]
    fn parse_toml_config() {
        let toml_str = r#"
[output]
format = "json"
color = false
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.color);
    }

    #[test]
    fn parse_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("[output]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.color);

        let empty: Config = toml::from_str("").unwrap();
        assert_eq!(empty, Config::default());
    }

    #[test]
    fn merge_applies_present_keys() {
        let mut base = Config::default();
        let layer: ConfigLayer =
            toml::from_str("[output]\nformat = \"json\"\ncolor = false\n").unwrap();

        base.merge(layer);

        assert_eq!(base.output.format, OutputFormat::Json);
        assert!(!base.output.color);
    }

    #[test]
    fn merge_keeps_base_for_absent_keys() {
        let mut base = Config::default();
        base.output.format = OutputFormat::Json;
        base.output.color = false;

        base.merge(ConfigLayer::default());

        assert_eq!(base.output.format, OutputFormat::Json);
        assert!(!base.output.color);
    }

    #[test]
    fn merge_can_restore_default_values() {
        let mut base = Config::default();
        base.output.format = OutputFormat::Json;
        base.output.color = false;

        let layer: ConfigLayer =
            toml::from_str("[output]\nformat = \"text\"\ncolor = true\n").unwrap();
        base.merge(layer);

        assert_eq!(base, Config::default());
    }

    #[test]
    fn read_layer_leaves_absent_keys_unset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calcli.toml");
        std::fs::write(&path, "[output]\ncolor = true\n").unwrap();

        let layer = Config::read_layer(&path).unwrap();
        assert_eq!(layer.output.format, None);
        assert_eq!(layer.output.color, Some(true));
    }

    #[test]
    fn load_file_reads_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calcli.toml");
        std::fs::write(&path, "[output]\nformat = \"json\"\n").unwrap();

        let config = Config::load_file(&path).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn load_file_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "not valid {{ toml").unwrap();

        let result = Config::load_file(&path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("parse"));
    }

    #[test]
    fn load_file_unknown_format_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[output]\nformat = \"yaml\"\n").unwrap();

        assert!(matches!(
            Config::load_file(&path),
            Err(ConfigError::ParseFile { .. })
        ));
    }

    #[test]
    fn load_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load_file(&dir.path().join("missing.toml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("read"));
    }

    #[test]
    fn explicit_layer_overrides_global() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let explicit = dir.path().join("explicit.toml");
        std::fs::write(&global, "[output]\nformat = \"json\"\ncolor = false\n").unwrap();
        std::fs::write(&explicit, "[output]\nformat = \"text\"\ncolor = true\n").unwrap();

        let config =
            Config::load_layers(Some(&global), Some(&explicit), &no_env()).unwrap();
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.color);
    }

    #[test]
    fn explicit_layer_keeps_global_keys_it_omits() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let explicit = dir.path().join("explicit.toml");
        std::fs::write(&global, "[output]\nformat = \"json\"\ncolor = false\n").unwrap();
        std::fs::write(&explicit, "[output]\ncolor = true\n").unwrap();

        let config =
            Config::load_layers(Some(&global), Some(&explicit), &no_env()).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.color);
    }

    #[test]
    fn load_without_any_config_files() {
        let config = Config::load_layers(None, None, &no_env()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let result = Config::load_layers(None, Some(&missing), &no_env());
        assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
    }

    #[test]
    fn global_config_path_returns_some() {
        // May be None in CI with no home dir, but shouldn't panic
        if let Some(p) = Config::global_config_path() {
            assert!(p.to_str().unwrap().contains("calcli"));
        }
    }

    #[test]
    fn env_overrides_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("c.toml");
        std::fs::write(&path, "[output]\nformat = \"text\"\ncolor = false\n").unwrap();

        let env = Env::from_pairs([("CALCLI_FORMAT", "json"), ("CALCLI_COLOR", "on")]);
        let config = Config::load_layers(None, Some(&path), &env).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.color);
    }

    #[test]
    fn no_color_wins_over_calcli_color() {
        let env = Env::from_pairs([("CALCLI_COLOR", "true"), ("NO_COLOR", "1")]);
        let mut config = Config::default();
        config.apply_env_vars(&env);
        assert!(!config.output.color);
    }

    #[test]
    fn invalid_env_values_are_ignored() {
        let env = Env::from_pairs([("CALCLI_FORMAT", "yaml"), ("CALCLI_COLOR", "sometimes")]);
        let mut config = Config::default();
        config.apply_env_vars(&env);
        assert_eq!(config, Config::default());
    }
}
