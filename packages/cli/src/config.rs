use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use client::PollConfig;

/// Platform API connection settings.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the platform API. Default: "http://localhost:8080".
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds. Default: 30.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8080".into()
}
fn default_timeout_secs() -> u64 {
    30
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Result polling cadence.
#[derive(Debug, Deserialize, Clone)]
pub struct PollSettings {
    /// Maximum status requests per submission. Default: 30.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Fixed delay between requests in milliseconds. Default: 2000.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

fn default_max_attempts() -> u32 {
    30
}
fn default_interval_ms() -> u64 {
    2000
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            interval_ms: default_interval_ms(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    /// Default tracing filter when RUST_LOG is unset. Default: "warn".
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".into()
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// CLI application configuration.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub poll: PollSettings,
    #[serde(default)]
    pub log: LogSettings,
}

impl AppConfig {
    /// Load configuration: defaults, then the user config file, then
    /// `CAMPUS__`-prefixed environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("CAMPUS_CONFIG").unwrap_or_else(|_| default_config_path());
        Self::load_from(&path)
    }

    fn load_from(path: &str) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(File::with_name(path).required(false))
            // Override from environment (e.g., CAMPUS__API__BASE_URL)
            .add_source(Environment::with_prefix("CAMPUS").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// Poll configuration for the client library.
    pub fn poll_config(&self) -> PollConfig {
        PollConfig {
            max_attempts: self.poll.max_attempts,
            interval: Duration::from_millis(self.poll.interval_ms),
        }
    }
}

/// `<config dir>/campus/config.toml`, without the extension for the config
/// crate's loader.
fn default_config_path() -> String {
    dirs::config_dir()
        .map(|d| d.join("campus").join("config").display().to_string())
        .unwrap_or_else(|| "config/campus".to_string())
}
