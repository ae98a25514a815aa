//! Batch updater configuration loaded from environment variables.

use crate::updater::DEFAULT_HEADER_SENTINEL;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Updater configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Registry API configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Authorization configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// Input file configuration
    #[serde(default)]
    pub input: InputConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Registry base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Client id sent as `x-client-id`
    #[serde(default = "default_client_id")]
    pub client_id: String,

    /// Per-request timeout
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Clone, Deserialize)]
pub struct AuthConfig {
    /// Shared secret sent as `Authorization: Bearer <token>`
    #[serde(default = "default_token")]
    pub token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// CSV file with a MAC address in the first column
    #[serde(default = "default_input_path")]
    pub path: PathBuf,

    /// First-column value of header rows
    #[serde(default = "default_header_sentinel")]
    pub header_sentinel: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            client_id: default_client_id(),
            timeout: default_timeout(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token: default_token(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
            header_sentinel: default_header_sentinel(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5000".into()
}

fn default_client_id() -> String {
    "a1b2c3d4".into()
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_token() -> String {
    "abcd1234".into()
}

fn default_input_path() -> PathBuf {
    PathBuf::from("mac_addresses.csv")
}

fn default_header_sentinel() -> String {
    DEFAULT_HEADER_SENTINEL.into()
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}
