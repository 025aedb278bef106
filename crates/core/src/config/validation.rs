//! Configuration validation rules.
//!
//! This module provides validation logic for `AppConfig` values
//! after they have been loaded from environment, files, or defaults.

use crate::config::AppConfig;
use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },

    #[error("missing required configuration: {field} ({hint})")]
    Missing { field: String, hint: String },
}

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - `cache_ttl_secs` is 0 or exceeds 24 hours
    /// - `timeout_ms` is less than 100ms or exceeds 5 minutes
    /// - `user_agent` is empty
    /// - `jobs_endpoint` does not start with `/`
    /// - `api_base_url` is set but is not an http(s) URL
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache_ttl_secs == 0 {
            return Err(ConfigError::Invalid { field: "cache_ttl_secs".into(), reason: "must be greater than 0".into() });
        }
        if self.cache_ttl_secs > 86_400 {
            return Err(ConfigError::Invalid {
                field: "cache_ttl_secs".into(),
                reason: "must not exceed 24 hours (86400s)".into(),
            });
        }

        if self.timeout_ms < 100 {
            return Err(ConfigError::Invalid { field: "timeout_ms".into(), reason: "must be at least 100ms".into() });
        }
        if self.timeout_ms > 300_000 {
            return Err(ConfigError::Invalid {
                field: "timeout_ms".into(),
                reason: "must not exceed 5 minutes (300000ms)".into(),
            });
        }

        if self.user_agent.is_empty() {
            return Err(ConfigError::Invalid { field: "user_agent".into(), reason: "must not be empty".into() });
        }

        if !self.jobs_endpoint.starts_with('/') {
            return Err(ConfigError::Invalid { field: "jobs_endpoint".into(), reason: "must start with '/'".into() });
        }

        if let Some(base) = &self.api_base_url {
            match url::Url::parse(base) {
                Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
                Ok(parsed) => {
                    return Err(ConfigError::Invalid {
                        field: "api_base_url".into(),
                        reason: format!("unsupported scheme: {}", parsed.scheme()),
                    });
                }
                Err(e) => {
                    return Err(ConfigError::Invalid { field: "api_base_url".into(), reason: e.to_string() });
                }
            }
        }

        if self.timeout_ms > self.cache_ttl_secs.saturating_mul(1000) {
            tracing::warn!(
                timeout_ms = self.timeout_ms,
                cache_ttl_secs = self.cache_ttl_secs,
                "Request timeout is longer than the cache TTL; \
                 responses may expire before they are first read"
            );
        }

        Ok(())
    }
}
