// crates/alert-json-config/src/config.rs
// ============================================================================
// Module: Alert JSON Configuration
// Description: Option parsing, destination resolution, and config file loading.
// Purpose: Provide strict, fail-closed resolution of sink configuration.
// Dependencies: alert-json-core, serde, thiserror, toml
// ============================================================================

//! ## Overview
//! [`AlertJsonOptions`] holds the raw `path` / `pretty` options with their
//! defaults. [`AlertJsonOptions::resolve`] validates them into a
//! [`SinkConfig`], which is immutable for the lifetime of the sink.
//! Invariants:
//! - `"stdout"` and `"stderr"` select the shared process streams; any other
//!   non-empty value is a file path.
//! - Config files are capped at [`MAX_CONFIG_FILE_SIZE`] and must be UTF-8.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fmt;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use alert_json_core::FormatMode;
use serde::Deserialize;
use thiserror::Error;

use crate::params::DEFAULT_PATH;
use crate::params::DEFAULT_PRETTY;
use crate::params::MODULE_NAME;
use crate::params::ParameterKind;
use crate::params::STDERR_NAME;
use crate::params::STDOUT_NAME;
use crate::params::parameter;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "alert-json.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "ALERT_JSON_CONFIG";
/// Maximum configuration file size in bytes.
pub const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Destination
// ============================================================================

/// Where encoded alerts are written.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Destination {
    /// Process standard output, shared with other components.
    Stdout,
    /// Process standard error, shared with other components.
    Stderr,
    /// File created or truncated on open and owned by the sink.
    File(PathBuf),
}

impl Destination {
    /// Parses the `path` option.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the value is empty or exceeds
    /// path length limits.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value {
            STDOUT_NAME => Ok(Self::Stdout),
            STDERR_NAME => Ok(Self::Stderr),
            _ => {
                validate_path_string(&format!("{MODULE_NAME}.path"), value)?;
                Ok(Self::File(PathBuf::from(value)))
            }
        }
    }

    /// Returns true for the process-wide standard streams.
    #[must_use]
    pub const fn is_shared(&self) -> bool {
        matches!(self, Self::Stdout | Self::Stderr)
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str(STDOUT_NAME),
            Self::Stderr => f.write_str(STDERR_NAME),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

// ============================================================================
// SECTION: Sink Configuration
// ============================================================================

/// Resolved sink configuration.
///
/// # Invariants
/// - Produced only by successful validation; never partially populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkConfig {
    /// Output destination.
    pub destination: Destination,
    /// Indented output when true.
    pub pretty: bool,
}

impl SinkConfig {
    /// Returns the encoder format mode selected by `pretty`.
    #[must_use]
    pub const fn format_mode(&self) -> FormatMode {
        FormatMode::from_pretty(self.pretty)
    }
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            destination: Destination::Stdout,
            pretty: DEFAULT_PRETTY,
        }
    }
}

// ============================================================================
// SECTION: Options
// ============================================================================

/// A single option value supplied by a key-value configuration source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// String value.
    String(String),
    /// Boolean value.
    Bool(bool),
}

impl OptionValue {
    /// Returns the parameter kind carried by this value.
    #[must_use]
    pub const fn kind(&self) -> ParameterKind {
        match self {
            Self::String(_) => ParameterKind::String,
            Self::Bool(_) => ParameterKind::Bool,
        }
    }
}

/// Raw alert JSON options before validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlertJsonOptions {
    /// Destination: `stdout`, `stderr`, or a file path.
    #[serde(default = "default_path")]
    pub path: String,
    /// Indented output when true.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for AlertJsonOptions {
    fn default() -> Self {
        Self {
            path: default_path(),
            pretty: DEFAULT_PRETTY,
        }
    }
}

/// Top-level layout of an alert JSON config file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    /// Options table; defaults apply when absent.
    #[serde(default)]
    alert_json: AlertJsonOptions,
}

impl AlertJsonOptions {
    /// Applies one key-value option.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for unknown keys or values whose type
    /// does not match the parameter table.
    pub fn set(&mut self, key: &str, value: OptionValue) -> Result<(), ConfigError> {
        let Some(spec) = parameter(key) else {
            return Err(ConfigError::Invalid(format!("unknown {MODULE_NAME} option: {key}")));
        };
        if spec.kind != value.kind() {
            return Err(ConfigError::Invalid(format!(
                "{MODULE_NAME}.{key} expects a {} value, got {}",
                spec.kind.as_str(),
                value.kind().as_str()
            )));
        }
        match value {
            OptionValue::String(path) => self.path = path,
            OptionValue::Bool(pretty) => self.pretty = pretty,
        }
        Ok(())
    }

    /// Validates the options into a [`SinkConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the destination is invalid.
    pub fn resolve(&self) -> Result<SinkConfig, ConfigError> {
        Ok(SinkConfig {
            destination: Destination::parse(&self.path)?,
            pretty: self.pretty,
        })
    }

    /// Parses options from TOML text with an `[alert_json]` table.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        Ok(file.alert_json)
    }

    /// Loads options from a TOML config file.
    ///
    /// The path is taken from `path`, then [`CONFIG_ENV_VAR`], then
    /// [`DEFAULT_CONFIG_NAME`]. A missing default file yields the defaults;
    /// a missing explicit file is an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read, exceeds limits,
    /// or fails to parse.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (resolved, explicit) = resolve_path(path)?;
        validate_path(&resolved)?;
        if !explicit && !resolved.exists() {
            return Ok(Self::default());
        }
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::from_toml_str(content)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Serde default for `path`.
fn default_path() -> String {
    DEFAULT_PATH.to_string()
}

/// Serde default for `pretty`.
const fn default_pretty() -> bool {
    DEFAULT_PRETTY
}

/// Resolves the config path, reporting whether it was explicitly requested.
fn resolve_path(path: Option<&Path>) -> Result<(PathBuf, bool), ConfigError> {
    if let Some(path) = path {
        return Ok((path.to_path_buf(), true));
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok((PathBuf::from(env_path), true));
    }
    Ok((PathBuf::from(DEFAULT_CONFIG_NAME), false))
}

/// Validates the resolved path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    if has_long_component(path) {
        return Err(ConfigError::Invalid("config path component too long".to_string()));
    }
    Ok(())
}

/// Validates a path string against emptiness and length constraints.
fn validate_path_string(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if value.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    if has_long_component(Path::new(value)) {
        return Err(ConfigError::Invalid(format!("{field} path component too long")));
    }
    Ok(())
}

/// Returns true when any path component exceeds [`MAX_PATH_COMPONENT_LENGTH`].
fn has_long_component(path: &Path) -> bool {
    path.components().any(|component| component.as_os_str().len() > MAX_PATH_COMPONENT_LENGTH)
}
