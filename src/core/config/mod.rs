//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! Searched in order:
//! 1. `$REPOREF_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/reporef/config.toml`
//! 3. `~/.reporef/config.toml` (canonical write location)
//!
//! # Example
//!
//! ```no_run
//! use reporef::core::config::Config;
//!
//! let config = Config::load().unwrap();
//! println!("API: {}", config.api_base());
//! println!("Whitespace: {}", config.parse_options().whitespace.name());
//! ```

pub mod schema;

pub use schema::{GlobalConfig, ParseConfig};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::reference::{ParseOptions, WhitespaceMode};

/// Default REST API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Default web base URL.
pub const DEFAULT_WEB_BASE: &str = "https://github.com";

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "REPOREF_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("unknown config key: {0}")]
    UnknownKey(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Keys accepted by [`Config::get`] and [`Config::set`].
pub const KEYS: &[&str] = &["api_base", "web_base", "parse.whitespace"];

/// Loaded configuration.
///
/// Accessor methods apply defaults for unset values.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
    /// Path to the config file (if loaded)
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed or
    /// fails validation. A missing file is not an error.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Self::locate().as_deref())
    }

    /// Load configuration from an explicit file, or defaults for `None`.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let global = Self::read_config(path)?;
        global.validate()?;

        Ok(Config {
            global,
            path: Some(path.to_path_buf()),
        })
    }

    /// Find the first existing config file.
    fn locate() -> Option<PathBuf> {
        // 1. Check $REPOREF_CONFIG
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        // 2. Check $XDG_CONFIG_HOME/reporef/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("reporef/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. Check ~/.reporef/config.toml
        dirs::home_dir()
            .map(|home| home.join(".reporef/config.toml"))
            .filter(|path| path.exists())
    }

    /// Read and parse a config file.
    fn read_config(path: &Path) -> Result<GlobalConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get the canonical config path.
    ///
    /// Returns `$REPOREF_CONFIG` when set, otherwise `~/.reporef/config.toml`.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".reporef/config.toml"))
    }

    /// Write config atomically to `path`.
    ///
    /// Creates parent directories if needed. Uses atomic write
    /// (write to temp file, then rename) to prevent corruption.
    pub fn write(path: &Path, config: &GlobalConfig) -> Result<(), ConfigError> {
        config.validate()?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents =
            toml::to_string_pretty(config).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        // Write to temp file in same directory (for atomic rename)
        let temp_path = path.with_extension("toml.tmp");
        let mut file = fs::File::create(&temp_path).map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(contents.as_bytes())
            .map_err(|e| ConfigError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Get the REST API base URL.
    ///
    /// Defaults to `https://api.github.com`.
    pub fn api_base(&self) -> &str {
        self.global.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
    }

    /// Get the web base URL.
    ///
    /// Defaults to `https://github.com`.
    pub fn web_base(&self) -> &str {
        self.global.web_base.as_deref().unwrap_or(DEFAULT_WEB_BASE)
    }

    /// Get the whitespace removal mode.
    ///
    /// Defaults to [`WhitespaceMode::First`].
    pub fn whitespace(&self) -> WhitespaceMode {
        self.global
            .parse
            .as_ref()
            .and_then(|p| p.whitespace.as_deref())
            .and_then(WhitespaceMode::parse)
            .unwrap_or_default()
    }

    /// Parser options derived from the configuration.
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            whitespace: self.whitespace(),
        }
    }

    /// Get the effective value of a key.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        match key {
            "api_base" => Ok(self.api_base().to_string()),
            "web_base" => Ok(self.web_base().to_string()),
            "parse.whitespace" => Ok(self.whitespace().name().to_string()),
            _ => Err(ConfigError::UnknownKey(key.to_string())),
        }
    }

    /// Set a key on the global configuration, validating the result.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut updated = self.global.clone();
        match key {
            "api_base" => updated.api_base = Some(value.to_string()),
            "web_base" => updated.web_base = Some(value.to_string()),
            "parse.whitespace" => {
                updated.parse.get_or_insert_with(Default::default).whitespace =
                    Some(value.to_string())
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        updated.validate()?;
        self.global = updated;
        Ok(())
    }

    /// Get the path the configuration was loaded from.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
