//! Configuration for the quartier TUI client.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the analysis service URL.
pub const SERVER_URL_ENV: &str = "QUARTIER_SERVER_URL";

/// Default service URL when nothing else is configured.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Analysis service URL
    pub server_url: String,

    /// Outbound request configuration
    pub request: RequestConfig,

    /// UI configuration
    pub ui: UiConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Outbound request configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestConfig {
    /// Per-request timeout in seconds. The analysis pipeline is slow for a
    /// cold address, so this is generous by default.
    pub timeout_secs: u64,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Update interval for the loading animation in milliseconds
    pub animation_interval_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            request: RequestConfig::default(),
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self { timeout_secs: 60 }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            animation_interval_ms: 200,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults, then apply command
    /// line overrides.
    pub fn load(config_path: Option<&String>, server_url: &str, log_level: &str) -> Result<Self> {
        let mut config = if let Some(path) = config_path {
            Self::from_file(path)?
        } else {
            Self::default()
        };

        config.server_url = server_url.to_string();
        config.logging.level = log_level.to_string();

        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.server_url)
            .with_context(|| format!("Invalid server URL: {}", self.server_url))?;

        match parsed.scheme() {
            "http" | "https" => {}
            scheme => anyhow::bail!("Unsupported server URL scheme: {}", scheme),
        }

        if self.request.timeout_secs == 0 {
            anyhow::bail!("Request timeout must be greater than 0");
        }

        if self.request.timeout_secs > 600 {
            anyhow::bail!("Request timeout of {}s is too long (max 10 minutes)", self.request.timeout_secs);
        }

        if self.ui.animation_interval_ms == 0 {
            anyhow::bail!("Animation interval must be greater than 0");
        }

        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" | "off" => {}
            level => anyhow::bail!("Unknown log level: {}", level),
        }

        Ok(())
    }
}
