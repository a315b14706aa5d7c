//! Task service endpoint configuration.
//!
//! Settings are layered with the following priority (highest first):
//! 1. Environment variables (`TASKDESK_BASE_URL`, `TASKDESK_TASK_PATH`)
//! 2. TOML config file (`[service]` table)
//! 3. Compiled defaults
//!
//! An explicit config path that cannot be read is an error.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Environment variable overriding the service base URL.
pub const BASE_URL_ENV: &str = "TASKDESK_BASE_URL";
/// Environment variable overriding the task endpoint path.
pub const TASK_PATH_ENV: &str = "TASKDESK_TASK_PATH";

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_TASK_PATH: &str = "/task";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),

    /// The base URL is not an `http` or `https` URL.
    #[error("invalid task service base URL '{0}', expected http:// or https://")]
    InvalidBaseUrl(String),
}

/// Top-level TOML config file structure.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    service: ServiceFileConfig,
}

/// `[service]` section of the config file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ServiceFileConfig {
    base_url: Option<String>,
    task_path: Option<String>,
}

/// Resolved task service settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskServiceConfig {
    base_url: String,
    task_path: String,
}

impl Default for TaskServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            task_path: DEFAULT_TASK_PATH.to_owned(),
        }
    }
}

impl TaskServiceConfig {
    /// Creates a configuration for `base_url` with the default task path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] when the URL scheme is not
    /// `http` or `https`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: validate_base_url(base_url.into())?,
            task_path: DEFAULT_TASK_PATH.to_owned(),
        })
    }

    /// Sets the task endpoint path.
    #[must_use]
    pub fn with_task_path(mut self, task_path: impl Into<String>) -> Self {
        self.task_path = normalize_path(&task_path.into());
        self
    }

    /// Parses a TOML document layered over the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the document is malformed or carries an
    /// invalid base URL.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(raw)?;
        let mut config = Self::default();
        if let Some(base_url) = file.service.base_url {
            config.base_url = validate_base_url(base_url)?;
        }
        if let Some(task_path) = file.service.task_path {
            config.task_path = normalize_path(&task_path);
        }
        Ok(config)
    }

    /// Loads configuration from an optional file and the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or parsed, or
    /// when the resolved base URL is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(file) => {
                let raw = std::fs::read_to_string(file).map_err(|source| ConfigError::ReadFile {
                    path: file.to_path_buf(),
                    source,
                })?;
                debug!(path = %file.display(), "loaded task service config file");
                Self::from_toml_str(&raw)?
            }
            None => Self::default(),
        };
        config.with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides looked up by environment variable name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] when the overriding base URL
    /// is invalid.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(base_url) = lookup(BASE_URL_ENV) {
            self.base_url = validate_base_url(base_url)?;
        }
        if let Some(task_path) = lookup(TASK_PATH_ENV) {
            self.task_path = normalize_path(&task_path);
        }
        Ok(self)
    }

    /// Returns the service base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the task endpoint path, always starting with `/`.
    #[must_use]
    pub fn task_path(&self) -> &str {
        &self.task_path
    }

    /// Returns the full task endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, self.task_path)
    }
}

fn validate_base_url(raw: String) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_owned())
    } else {
        Err(ConfigError::InvalidBaseUrl(raw))
    }
}

fn normalize_path(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with('/') {
        trimmed.to_owned()
    } else {
        format!("/{trimmed}")
    }
}
