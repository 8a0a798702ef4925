//! Default value functions for configuration.

/// Returns `true` (for serde defaults).
pub fn default_true() -> bool {
    true
}

/// Config file read when no path is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "slirc-console.toml";
