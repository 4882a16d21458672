//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Location
//!
//! Searched in order:
//! 1. `$REPOREF_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/reporef/config.toml`
//! 3. `~/.reporef/config.toml` (canonical write location)
//!
//! # Validation
//!
//! Config values are validated after parsing: base URLs must be absolute
//! `http(s)` URLs and the whitespace mode must be a known name.

use serde::{Deserialize, Serialize};
use url::Url;

use super::ConfigError;
use crate::core::reference::WhitespaceMode;

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// api_base = "https://api.github.com"
/// web_base = "https://github.com"
///
/// [parse]
/// whitespace = "first"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// REST API base URL (GitHub Enterprise: `https://host/api/v3`)
    pub api_base: Option<String>,

    /// Web base URL used to build repository links
    pub web_base: Option<String>,

    /// Parser settings
    pub parse: Option<ParseConfig>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(api_base) = &self.api_base {
            validate_base_url("api_base", api_base)?;
        }
        if let Some(web_base) = &self.web_base {
            validate_base_url("web_base", web_base)?;
        }
        if let Some(parse) = &self.parse {
            parse.validate()?;
        }
        Ok(())
    }
}

/// Parser settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ParseConfig {
    /// Whitespace removal mode ("first" or "all")
    pub whitespace: Option<String>,
}

impl ParseConfig {
    /// Validate the parser settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(mode) = &self.whitespace {
            if WhitespaceMode::parse(mode).is_none() {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid whitespace mode '{}', must be one of: {}",
                    mode,
                    WhitespaceMode::NAMES.join(", ")
                )));
            }
        }
        Ok(())
    }
}

/// Check that `value` is an absolute `http(s)` URL.
pub(crate) fn validate_base_url(key: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidValue(format!("invalid {} '{}': {}", key, value, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(ConfigError::InvalidValue(format!(
            "invalid {} '{}': unsupported scheme '{}'",
            key, value, scheme
        ))),
    }
}
