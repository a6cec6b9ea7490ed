//! Configuration management for the `WanderMate` application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::WanderMateError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `WanderMate` application
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WanderMateConfig {
    /// Geocoding API configuration
    #[serde(default)]
    pub geocoding: GeocodingConfig,
    /// Exchange-rate API configuration
    #[serde(default)]
    pub currency: CurrencyConfig,
    /// Travel-tips API configuration
    #[serde(default)]
    pub tips: TipsConfig,
    /// Web server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Geocoding API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Base URL for the geocoding API
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
}

/// Exchange-rate API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyConfig {
    /// Base URL for the exchange-rate API
    #[serde(default = "default_currency_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
}

/// Travel-tips API configuration settings
///
/// The API key lives here and is handed to `TipsClient::new` explicitly,
/// never stored in process-global state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipsConfig {
    /// API key for the completion endpoint
    #[serde(default = "default_tips_api_key")]
    pub api_key: String,
    /// Base URL for the completion API
    #[serde(default = "default_tips_base_url")]
    pub base_url: String,
    /// Model identifier sent with each completion request
    #[serde(default = "default_tips_model")]
    pub model: String,
    /// Request timeout in seconds
    #[serde(default = "default_tips_timeout")]
    pub timeout_seconds: u32,
}

/// Web server configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port the HTTP server binds to
    #[serde(default = "default_server_port")]
    pub port: u16,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_geocoding_base_url() -> String {
    "https://geocoding-api.open-meteo.com/v1".to_string()
}

fn default_currency_base_url() -> String {
    "https://api.frankfurter.app".to_string()
}

fn default_tips_api_key() -> String {
    // Placeholder keeps the no-key path on the graceful-fallback branch
    "sk-your-api-key".to_string()
}

fn default_tips_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_tips_model() -> String {
    "gpt-4".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_tips_timeout() -> u32 {
    30
}

fn default_server_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            base_url: default_currency_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for TipsConfig {
    fn default() -> Self {
        Self {
            api_key: default_tips_api_key(),
            base_url: default_tips_base_url(),
            model: default_tips_model(),
            timeout_seconds: default_tips_timeout(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_server_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl WanderMateConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with WANDERMATE_ prefix
        builder = builder.add_source(
            Environment::with_prefix("WANDERMATE")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: WanderMateConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("wandermate").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        if self.tips.api_key.is_empty() {
            return Err(WanderMateError::config(
                "Tips API key cannot be empty. Remove it to use the placeholder or provide a valid key.",
            )
            .into());
        }

        if self.geocoding.timeout_seconds == 0 || self.geocoding.timeout_seconds > 300 {
            return Err(
                WanderMateError::config("Geocoding timeout must be between 1 and 300 seconds")
                    .into(),
            );
        }

        if self.currency.timeout_seconds == 0 || self.currency.timeout_seconds > 300 {
            return Err(
                WanderMateError::config("Currency timeout must be between 1 and 300 seconds")
                    .into(),
            );
        }

        if self.tips.timeout_seconds == 0 || self.tips.timeout_seconds > 300 {
            return Err(WanderMateError::config(
                "Tips timeout must be between 1 and 300 seconds",
            )
            .into());
        }

        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(WanderMateError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(WanderMateError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        for (name, url) in [
            ("Geocoding", &self.geocoding.base_url),
            ("Currency", &self.currency.base_url),
            ("Tips", &self.tips.base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(WanderMateError::config(format!(
                    "{name} base URL must be a valid HTTP or HTTPS URL"
                ))
                .into());
            }
        }

        Ok(())
    }
}
