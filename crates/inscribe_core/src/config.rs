//! Environment-driven core configuration.
//!
//! # Responsibility
//! - Resolve log level and log directory from `INSCRIBE_*` variables.
//! - Apply the resolved values to the logging bootstrap.
//!
//! # Invariants
//! - An unset log directory disables file logging instead of failing.
//! - Invalid values are reported, never silently replaced.

use crate::logging::{default_log_level, init_logging, normalize_level, normalize_log_dir};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_LOG_LEVEL: &str = "INSCRIBE_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "INSCRIBE_LOG_DIR";

/// Configuration rejected during resolution or application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable holds an unusable value.
    InvalidValue { key: &'static str, message: String },
    /// The logging backend refused to start.
    Logging(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, message } => write!(f, "invalid `{key}`: {message}"),
            Self::Logging(message) => write!(f, "logging setup failed: {message}"),
        }
    }
}

impl Error for ConfigError {}

/// Resolved core configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub log_level: &'static str,
    /// Absolute directory for rolling log files; `None` disables them.
    pub log_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, one call per variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = match non_blank(lookup(ENV_LOG_LEVEL)) {
            Some(value) => normalize_level(&value).map_err(|message| ConfigError::InvalidValue {
                key: ENV_LOG_LEVEL,
                message,
            })?,
            None => default_log_level(),
        };

        let log_dir = match non_blank(lookup(ENV_LOG_DIR)) {
            Some(value) => Some(normalize_log_dir(&value).map_err(|message| {
                ConfigError::InvalidValue {
                    key: ENV_LOG_DIR,
                    message,
                }
            })?),
            None => None,
        };

        Ok(Self { log_level, log_dir })
    }

    /// Starts file logging when a directory is configured.
    ///
    /// Returns `Ok(false)` when logging stays disabled.
    pub fn init_logging(&self) -> Result<bool, ConfigError> {
        let Some(dir) = self.log_dir.as_ref() else {
            return Ok(false);
        };
        let dir = dir.to_str().ok_or_else(|| ConfigError::InvalidValue {
            key: ENV_LOG_DIR,
            message: "log directory is not valid UTF-8".to_string(),
        })?;
        init_logging(self.log_level, dir).map_err(ConfigError::Logging)?;
        Ok(true)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
