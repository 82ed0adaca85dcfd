//! Configuration: resolved settings plus an optional TOML file layer.
//!
//! All fields in the file are optional; missing values fall back to the
//! hardcoded defaults. A missing file is not an error.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Default minimum content width, in character columns.
pub const DEFAULT_MIN_WIDTH: usize = 48;
/// Default maximum content width, in character columns.
pub const DEFAULT_MAX_WIDTH: usize = 196;
/// Default truncation length for request parameter values.
pub const DEFAULT_MAX_PARAMETER_LENGTH: usize = 256;

/// Errors that can occur while loading a configuration file.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read the config file (permissions, I/O).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for the failure.
        reason: String,
    },

    /// Config file contains invalid TOML.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// Every field is optional; unspecified fields use the defaults from
/// [`Config::default`].
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Whether debug logging is enabled at all.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Minimum content width of rendered blocks.
    #[serde(default)]
    pub minimum_width: Option<usize>,

    /// Maximum content width of rendered blocks.
    #[serde(default)]
    pub maximum_width: Option<usize>,

    /// Length at which request parameter values are truncated.
    #[serde(default)]
    pub maximum_parameter_length: Option<usize>,

    /// Case-insensitive substrings identifying sensitive parameter keys.
    #[serde(default)]
    pub sensitive_keys: Option<Vec<String>>,
}

/// Resolved settings consumed by the renderer and inspector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Whether debug logging is enabled; [`crate::sink::log_block`] is a
    /// no-op when false.
    pub enabled: bool,
    /// Minimum content width; clamped to `maximum_width` at render time.
    pub minimum_width: usize,
    /// Maximum content width used for wrapping and truncation.
    pub maximum_width: usize,
    /// Parameter values longer than this are cut with a ` (…)` suffix.
    pub maximum_parameter_length: usize,
    /// Keys containing any of these substrings (case-insensitive) are
    /// masked in the rendered output.
    pub sensitive_keys: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled: true,
            minimum_width: DEFAULT_MIN_WIDTH,
            maximum_width: DEFAULT_MAX_WIDTH,
            maximum_parameter_length: DEFAULT_MAX_PARAMETER_LENGTH,
            sensitive_keys: vec!["password".to_string()],
        }
    }
}

/// Load a configuration file from `path`.
///
/// Returns `Ok(None)` when the file does not exist (use defaults).
///
/// # Errors
///
/// Returns an error only when the file exists but cannot be read or parsed.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Merge an optional config file over the defaults.
///
/// For each field, `Some(value)` from the file wins; `None` keeps the
/// default.
pub fn merge_config(config_file: Option<ConfigFile>) -> Config {
    let defaults = Config::default();

    let Some(file) = config_file else {
        return defaults;
    };

    Config {
        enabled: file.enabled.unwrap_or(defaults.enabled),
        minimum_width: file.minimum_width.unwrap_or(defaults.minimum_width),
        maximum_width: file.maximum_width.unwrap_or(defaults.maximum_width),
        maximum_parameter_length: file
            .maximum_parameter_length
            .unwrap_or(defaults.maximum_parameter_length),
        sensitive_keys: file.sensitive_keys.unwrap_or(defaults.sensitive_keys),
    }
}
