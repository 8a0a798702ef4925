//! Core configuration types and loading.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use super::defaults::{DEFAULT_CONFIG_PATH, default_true};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Console configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Session state at startup.
    #[serde(default)]
    pub session: SessionConfig,
    /// How produced commands are printed.
    #[serde(default)]
    pub output: OutputConfig,
    /// Custom commands registered at startup.
    #[serde(default)]
    pub commands: Vec<CustomCommandConfig>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load from `path`, or from the default location when no path was given.
    ///
    /// A missing default file yields the built-in defaults; a missing file
    /// that was asked for explicitly is an error.
    pub fn load_or_default(path: Option<&str>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::load(DEFAULT_CONFIG_PATH),
            None => Ok(Self::default()),
        }
    }
}

/// Session state at startup.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Channel or nick plain text is sent to until a JOIN changes it.
    pub destination: Option<String>,
    /// Nickname shown in log fields.
    pub nick: Option<String>,
    /// Make a successfully parsed JOIN the new destination.
    #[serde(default = "default_true")]
    pub follow_joins: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            destination: None,
            nick: None,
            follow_joins: true,
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Rendering of produced commands.
    #[serde(default)]
    pub format: OutputFormat,
}

/// Rendering of produced commands on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One IRC protocol line per command.
    #[default]
    Line,
    /// One JSON object per command.
    Json,
}

/// A custom command declared in the config file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomCommandConfig {
    /// Command name, without the leading `/`.
    pub name: String,
    /// Argument syntax, e.g. `<nick> (<reason>)`.
    #[serde(default)]
    pub syntax: String,
    /// Line the command expands to; `$1`..`$9`, `$*` and `$dest` are substituted.
    pub expand: Option<String>,
}
