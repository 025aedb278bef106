//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (JOBSCRAPER_*)
//! 2. TOML config file (if JOBSCRAPER_CONFIG_FILE set)
//! 3. Built-in defaults

use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::ConfigError;

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (JOBSCRAPER_*)
/// 2. TOML config file (if JOBSCRAPER_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the jobs aggregation API, e.g. `https://api.example.com/api`.
    ///
    /// Set via JOBSCRAPER_API_BASE_URL environment variable.
    /// Required by the server, which builds its HTTP transport at startup.
    #[serde(default)]
    pub api_base_url: Option<String>,

    /// Path of the job search endpoint, appended to the base URL.
    ///
    /// Set via JOBSCRAPER_JOBS_ENDPOINT environment variable.
    #[serde(default = "default_jobs_endpoint")]
    pub jobs_endpoint: String,

    /// How long a search response stays cached, in seconds.
    ///
    /// Set via JOBSCRAPER_CACHE_TTL_SECS environment variable.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// HTTP request timeout in milliseconds.
    ///
    /// Set via JOBSCRAPER_TIMEOUT_MS environment variable.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// User-Agent string for HTTP requests.
    ///
    /// Set via JOBSCRAPER_USER_AGENT environment variable.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_jobs_endpoint() -> String {
    "/jobs/scrape".into()
}

fn default_cache_ttl_secs() -> u64 {
    600
}

fn default_timeout_ms() -> u64 {
    20_000
}

fn default_user_agent() -> String {
    "jobscraper/0.1".into()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            jobs_endpoint: default_jobs_endpoint(),
            cache_ttl_secs: default_cache_ttl_secs(),
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
        }
    }
}

impl AppConfig {
    /// Timeout as Duration for use with reqwest/tokio.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Cache TTL as Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `JOBSCRAPER_`
    /// 2. TOML file from `JOBSCRAPER_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("JOBSCRAPER_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(
            Env::prefixed("JOBSCRAPER_")
                .ignore(&["CONFIG_FILE"])
                .map(|key| key.as_str().to_lowercase().into())
                .split("__"),
        );

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    /// Check if the API base URL is available (for deferred validation).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if the base URL is not set.
    pub fn require_api_base_url(&self) -> Result<&str, ConfigError> {
        self.api_base_url.as_deref().ok_or_else(|| ConfigError::Missing {
            field: "api_base_url".into(),
            hint: "Set JOBSCRAPER_API_BASE_URL environment variable".into(),
        })
    }
}
