//! Application configuration settings
//!
//! Defines all configuration structures and loading logic

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Backend API configuration
    pub api: ApiConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend, origin plus path prefix, without a trailing slash
    pub base_url: String,
    /// Static bearer token attached to every request when present
    pub auth_token: Option<String>,
    /// Request timeout in seconds
    pub timeout: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,
    /// Log format (text/json)
    pub format: String,
}

impl Settings {
    /// Create a new configuration instance
    pub fn new() -> Result<Self> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        let settings = Self {
            api: ApiConfig {
                base_url: get_env_or_default("SCHOOLCORE_BASE_URL", "http://127.0.0.1:8000/core/v1")
                    .trim_end_matches('/')
                    .to_string(),
                auth_token: env::var("SCHOOLCORE_API_TOKEN")
                    .ok()
                    .filter(|token| !token.is_empty()),
                timeout: get_env_or_default("REQUEST_TIMEOUT", "30")
                    .parse()
                    .context("Invalid timeout value")?,
            },
            logging: LoggingConfig {
                level: get_env_or_default("RUST_LOG", "info"),
                format: get_env_or_default("LOG_FORMAT", "text"),
            },
        };

        // Validate configuration
        settings.validate()?;

        Ok(settings)
    }

    /// Validate configuration validity
    fn validate(&self) -> Result<()> {
        // Validate URL format
        if !self.api.base_url.starts_with("http") {
            anyhow::bail!("Invalid base URL format, should start with 'http'");
        }

        // Validate bearer token format when one is configured
        if let Some(token) = &self.api.auth_token {
            if token.contains(char::is_whitespace) {
                anyhow::bail!("API token cannot contain whitespace characters");
            }

            if token.len() < 8 {
                anyhow::bail!("API token must be at least 8 characters long");
            }
        }

        // Validate timeout value
        if self.api.timeout == 0 {
            anyhow::bail!("Timeout value cannot be 0");
        }

        // Validate log level; comma or '=' means a full filter directive, passed through as-is
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        let is_filter_directive = self.logging.level.contains(',') || self.logging.level.contains('=');
        if !is_filter_directive && !valid_levels.contains(&self.logging.level.as_str()) {
            anyhow::bail!("Invalid log level: {}", self.logging.level);
        }

        // Validate log format
        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            anyhow::bail!("Invalid log format: {}", self.logging.format);
        }

        Ok(())
    }
}

/// Get environment variable or default value
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
