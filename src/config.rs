//! Application Configuration
//!
//! Settings are embedded from `config/app.toml` at build time. Every field
//! has a default so a partial file still loads.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const EMBEDDED: &str = include_str!("../config/app.toml");

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Root of the organization API, without trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Extra attempts for failed reads (mutations are never retried)
    #[serde(default = "default_read_retries")]
    pub read_retries: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            read_retries: default_read_retries(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LogConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LogConfig {
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.level
            .trim()
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.level.clone()))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiConfig {
    /// How long a toast stays on screen
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: default_toast_duration_ms(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

fn default_read_retries() -> u32 {
    1
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_toast_duration_ms() -> u32 {
    3000
}

impl AppConfig {
    /// Embedded configuration with the build-time API URL override applied
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_toml(EMBEDDED)?;
        if let Some(url) = option_env!("ORG_ADMIN_API_URL") {
            config.api.base_url = url.to_string();
        }
        config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
