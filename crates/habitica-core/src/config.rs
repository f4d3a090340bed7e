// SPDX-License-Identifier: Apache-2.0

//! Configuration management for the Habitica client.
//!
//! Provides layered configuration from files and environment variables.
//! Uses XDG-compliant paths with environment variable support.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment variables (prefix: `HABITICA_`)
//! 2. Config file: `~/.config/habitica/config.toml`
//! 3. Built-in defaults
//!
//! # Examples
//!
//! ```bash
//! # Override the API url via environment variable
//! HABITICA_AUTH__URL=https://habitica.example.org habitica status
//! ```

use std::path::PathBuf;

use config::{Config, Environment, File};
use secrecy::SecretString;
use serde::Deserialize;

use crate::error::HabiticaError;

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Credentials and server location.
    pub auth: AuthConfig,
    /// API client tuning.
    pub api: ApiConfig,
}

/// Credentials as stored in the config file.
///
/// All fields except `url` are required; validation happens in
/// [`AuthConfig::resolve`] so missing fields produce a readable message
/// instead of a serde error.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct AuthConfig {
    /// Base URL of the Habitica service.
    pub url: Option<String>,
    /// User id (the `x-api-user` header).
    pub user_id: Option<String>,
    /// API key (the `x-api-key` header).
    pub api_key: Option<String>,
}

/// Resolved credentials, ready to hand to the API client.
#[derive(Debug)]
pub struct Credentials {
    /// Base URL of the Habitica service.
    pub url: String,
    /// User id.
    pub user_id: String,
    /// API key.
    pub api_key: SecretString,
}

impl AuthConfig {
    /// Validate the auth section and produce [`Credentials`].
    ///
    /// # Errors
    ///
    /// Returns `HabiticaError::Config` naming the first missing field.
    pub fn resolve(&self) -> Result<Credentials, HabiticaError> {
        let missing = |field: &str| HabiticaError::Config {
            message: format!(
                "missing `auth.{field}` in {}",
                config_file_path().display()
            ),
        };

        let user_id = self.user_id.clone().ok_or_else(|| missing("user_id"))?;
        let api_key = self.api_key.clone().ok_or_else(|| missing("api_key"))?;

        Ok(Credentials {
            url: self
                .url
                .clone()
                .unwrap_or_else(|| DEFAULT_URL.to_string()),
            user_id,
            api_key: SecretString::new(api_key.into()),
        })
    }
}

/// Default service URL when `auth.url` is not configured.
pub const DEFAULT_URL: &str = "https://habitica.com";

/// API client tuning.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
    /// Pause between consecutive per-task mutating calls, in milliseconds.
    pub request_wait_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            request_wait_ms: 500,
        }
    }
}

/// Returns the Habitica configuration directory.
///
/// Respects the `XDG_CONFIG_HOME` environment variable if set,
/// otherwise defaults to `~/.config/habitica`.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        return PathBuf::from(xdg_config).join("habitica");
    }
    dirs::home_dir()
        .expect("Could not determine home directory - is HOME set?")
        .join(".config")
        .join("habitica")
}

/// Returns the path to the configuration file.
#[must_use]
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Returns the path to the persisted quest cache.
///
/// Lives under the platform cache directory (`~/.cache/habitica` on
/// Linux), not the config directory, since it is derived data.
#[must_use]
pub fn quest_cache_path() -> PathBuf {
    dirs::cache_dir()
        .expect("Failed to determine cache directory")
        .join("habitica")
        .join("quest.toml")
}

/// Load application configuration.
///
/// Loads from the config file (if it exists) and environment variables.
/// Environment variables use the prefix `HABITICA_` and double underscore
/// for nested keys (e.g., `HABITICA_AUTH__API_KEY`).
///
/// # Errors
///
/// Returns `HabiticaError::Config` if the config file exists but is invalid.
pub fn load_config() -> Result<AppConfig, HabiticaError> {
    let config_path = config_file_path();

    let config = Config::builder()
        // Load from config file (optional - may not exist)
        .add_source(File::with_name(config_path.to_string_lossy().as_ref()).required(false))
        // Override with environment variables
        .add_source(
            Environment::with_prefix("HABITICA")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    Ok(app_config)
}
