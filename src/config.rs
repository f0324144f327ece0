//! Configuration loading and management for linksumma.
//!
//! Loads settings from `linksumma.toml` with an environment variable override
//! for the webhook endpoint.

use crate::webhook::WebhookSettings;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const CONFIG_FILE: &str = "linksumma.toml";
pub const ENDPOINT_ENV: &str = "LINKSUMMA_WEBHOOK_URL";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("no webhook endpoint configured (set [webhook].endpoint, LINKSUMMA_WEBHOOK_URL or --endpoint)")]
    MissingEndpoint,
    #[error("invalid webhook endpoint {0:?}: must be an absolute http(s) URL")]
    InvalidEndpoint(String),
    #[error("invalid webhook timeout: must be at least 1 second")]
    InvalidTimeout,
    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),
}

/// Summarization webhook configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookConfig {
    /// Endpoint that receives `{"url": ...}`
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Client-side bound on a request, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Log file configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_path")]
    pub path: PathBuf,
    /// One of off, error, warn, info, debug, trace
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub webhook: WebhookConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location (linksumma.toml in cwd or home).
    ///
    /// A missing file is not an error; defaults are used instead.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::find_config_file() {
            Some(path) => Self::read(&path)?,
            None => Config::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::read(path)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply environment overrides through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup(ENDPOINT_ENV).filter(|value| !value.trim().is_empty()) {
            self.webhook.endpoint = Some(endpoint);
        }
    }

    /// Find the config file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        // Check current directory first
        let local_config = PathBuf::from(CONFIG_FILE);
        if local_config.exists() {
            return Some(local_config);
        }

        // Check home directory
        let home_config = dirs::home_dir()?
            .join(".config")
            .join("linksumma")
            .join(CONFIG_FILE);
        home_config.exists().then_some(home_config)
    }

    /// Resolve the webhook endpoint and timeout
    pub fn webhook_settings(&self) -> Result<WebhookSettings, ConfigError> {
        let raw = self
            .webhook
            .endpoint
            .as_deref()
            .map(str::trim)
            .filter(|endpoint| !endpoint.is_empty())
            .ok_or(ConfigError::MissingEndpoint)?;

        let endpoint = Url::parse(raw)
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https"))
            .ok_or_else(|| ConfigError::InvalidEndpoint(raw.to_string()))?;

        if self.webhook.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }

        Ok(WebhookSettings {
            endpoint,
            timeout: Duration::from_secs(self.webhook.timeout_secs),
        })
    }

    pub fn log_level(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.logging.level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.logging.level.clone()))
    }
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            path: default_log_path(),
            level: default_log_level(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    crate::webhook::DEFAULT_TIMEOUT.as_secs()
}

fn default_log_path() -> PathBuf {
    PathBuf::from("linksumma.log")
}

fn default_log_level() -> String {
    "info".to_string()
}
