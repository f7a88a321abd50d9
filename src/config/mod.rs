//! Configuration management for the cfl client
//!
//! Configuration can come from environment variables, a TOML file, or
//! [`Config::default`]. All values are validated before a client is built.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Default JSON API host
pub const DEFAULT_BASE_URL: &str = "https://echo.pims.cfl.ca";

/// Default public website host (standings pages)
pub const DEFAULT_WEB_URL: &str = "https://www.cfl.ca";

/// Default league leaders page
pub const DEFAULT_LEADERBOARD_URL: &str = "https://www.cfl.ca/league-leaders";

/// Default per-request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// API client configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// API client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Host of the JSON API; endpoints live under `/api/`
    pub base_url: String,

    /// Host of the public website
    pub web_url: String,

    /// League leaders page, queried with `stat_category` and `season`
    pub leaderboard_url: String,

    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,

    /// Fixed user agent; a random browser agent is used when unset
    pub user_agent: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            web_url: String::from(DEFAULT_WEB_URL),
            leaderboard_url: String::from(DEFAULT_LEADERBOARD_URL),
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            format: String::from("text"),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let defaults = ApiConfig::default();

        let base_url = std::env::var("CFL_API_BASE_URL").unwrap_or(defaults.base_url);
        let web_url = std::env::var("CFL_WEB_URL").unwrap_or(defaults.web_url);
        let leaderboard_url =
            std::env::var("CFL_LEADERBOARD_URL").unwrap_or(defaults.leaderboard_url);

        let request_timeout_ms = match std::env::var("CFL_REQUEST_TIMEOUT_MS") {
            Ok(v) => v
                .parse::<u64>()
                .with_context(|| format!("Invalid CFL_REQUEST_TIMEOUT_MS: {v}"))?,
            Err(_) => defaults.request_timeout_ms,
        };

        let user_agent = std::env::var("CFL_USER_AGENT").ok();

        let level = std::env::var("CFL_LOG_LEVEL").unwrap_or_else(|_| String::from("info"));
        let format = std::env::var("CFL_LOG_FORMAT").unwrap_or_else(|_| String::from("text"));

        Ok(Self {
            api: ApiConfig {
                base_url,
                web_url,
                leaderboard_url,
                request_timeout_ms,
                user_agent,
            },
            logging: LoggingConfig { level, format },
        })
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.api.request_timeout_ms == 0 {
            anyhow::bail!("request_timeout_ms must be greater than 0");
        }

        for (name, value) in [
            ("base_url", &self.api.base_url),
            ("web_url", &self.api.web_url),
            ("leaderboard_url", &self.api.leaderboard_url),
        ] {
            Url::parse(value).with_context(|| format!("Invalid {name}: {value}"))?;
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            anyhow::bail!("Unknown log format: {}", self.logging.format);
        }

        Ok(())
    }

    /// Get request timeout as Duration
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.api.request_timeout_ms)
    }
}
