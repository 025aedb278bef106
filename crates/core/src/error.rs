//! Unified error types for jobscraper.
//!
//! These surface to MCP callers with stable numeric codes.

use rmcp::model::{ErrorCode, ErrorData as McpError};

use crate::config::ConfigError;

/// Unified error types for the jobscraper server.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid input parameters (e.g., no keywords and no query).
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    /// The upstream jobs API could not be reached or answered with an error.
    ///
    /// Carries the user-facing message.
    #[error("FETCH_FAILED: {0}")]
    FetchFailed(String),

    /// Configuration is missing or invalid.
    #[error("CONFIG_ERROR: {0}")]
    Config(#[from] ConfigError),
}

impl From<Error> for McpError {
    fn from(err: Error) -> Self {
        let (code, message) = match &err {
            Error::InvalidInput(msg) => (-32602, msg.clone()),
            Error::FetchFailed(msg) => (-32008, msg.clone()),
            Error::Config(e) => (-32013, e.to_string()),
        };

        McpError { code: ErrorCode(code), message: message.into(), data: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::FetchFailed("Failed to fetch jobs. Please try again.".to_string());
        assert!(err.to_string().contains("FETCH_FAILED"));
        assert!(err.to_string().contains("Please try again"));
    }

    #[test]
    fn test_error_to_mcp_error() {
        let err = Error::InvalidInput("Keywords or query are required to fetch jobs.".to_string());
        let mcp_err: McpError = err.into();
        assert_eq!(mcp_err.code.0, -32602);
        assert_eq!(mcp_err.message, "Keywords or query are required to fetch jobs.");
    }

    #[test]
    fn test_config_error_to_mcp_error() {
        let err: Error = ConfigError::Missing { field: "api_base_url".into(), hint: "set it".into() }.into();
        let mcp_err: McpError = err.into();
        assert_eq!(mcp_err.code.0, -32013);
        assert!(mcp_err.message.contains("api_base_url"));
    }
}
