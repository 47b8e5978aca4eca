use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/hexlens/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("hexlens").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields `Config::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        Self::load_from(&path)
    }

    /// Loads, parses and validates the given file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config = Self::parse(&content).map_err(|e| match e {
            ConfigError::ParseError { source, .. } => ConfigError::ParseError {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parses TOML text and validates the result.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: PathBuf::new(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Offset base is a supported radix (2..=36) and width is non-zero
    /// - Cell width, row height and fixed column count are non-zero
    /// - History keeps at least one entry
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(2..=36).contains(&self.offsets.base) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Offset base {} is not supported (expected 2..=36)",
                    self.offsets.base
                ),
            });
        }
        if self.offsets.width == 0 {
            return Err(ConfigError::ValidationError {
                message: "Offset width must be greater than zero".to_string(),
            });
        }
        if self.layout.cell_width_px == 0 || self.layout.row_height_px == 0 {
            return Err(ConfigError::ValidationError {
                message: "Cell width and row height must be greater than zero".to_string(),
            });
        }
        if self.layout.columns == Some(0) {
            return Err(ConfigError::ValidationError {
                message: "Fixed column count must be greater than zero".to_string(),
            });
        }
        if self.history.capacity == 0 {
            return Err(ConfigError::ValidationError {
                message: "History capacity must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
