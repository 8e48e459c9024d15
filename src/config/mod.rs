//! Configuration for errlines.
//!
//! Settings live in a TOML file, `<config_dir>/errlines/config.toml` by
//! default. Every field has a default, so a partial file (or none at all)
//! is valid.

mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that points at an alternative config file.
pub const CONFIG_ENV: &str = "ERRLINES_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How extracted lines are printed
    pub output: OutputConfig,
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Show the raw input when extraction yields no lines
    pub fallback_on_empty: bool,
    /// Output format
    pub format: OutputFormat,
    /// Prefix printed before every line in plain output
    pub prefix: String,
    /// Colorize plain output on terminals (NO_COLOR always wins)
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            fallback_on_empty: true,
            format: OutputFormat::Plain,
            prefix: String::new(),
            color: true,
        }
    }
}

/// How extracted lines are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per row
    #[default]
    Plain,
    /// One JSON document per input
    Json,
}

impl Config {
    /// Default config file location.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("errlines").join("config.toml"))
    }

    /// Resolve the config file path.
    ///
    /// Precedence: `explicit` (the `--config` flag), then `$ERRLINES_CONFIG`,
    /// then [`Config::default_path`].
    pub fn config_path(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
        match override_path(explicit) {
            Some(path) => Ok(path),
            None => Self::default_path(),
        }
    }

    /// Load the configuration.
    ///
    /// A missing file at the default location means defaults. A missing file
    /// that was asked for explicitly is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match override_path(explicit) {
            Some(path) => Self::load_from(&path),
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    tracing::debug!(path = %path.display(), "no config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load the configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

fn override_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(|| {
        std::env::var_os(CONFIG_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    })
}
