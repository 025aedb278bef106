//! Transport error types.

use serde_json::Value;
use std::sync::Arc;

/// Errors raised while talking to the jobs API.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Non-success HTTP status, with the decoded JSON body if there was one.
    #[error("HTTP error: {status}")]
    Status { status: u16, body: Option<Value> },

    /// Request timeout.
    #[error("request timeout")]
    Timeout,

    /// Network error.
    #[error("network error: {0}")]
    Network(Arc<reqwest::Error>),

    /// Response parse error.
    #[error("parse error: {0}")]
    Parse(String),

    /// The request URL could not be built.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { TransportError::Timeout } else { TransportError::Network(Arc::new(err)) }
    }
}

impl TransportError {
    /// HTTP status code, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Human-readable message embedded in an error body.
    ///
    /// Looks at `message` first, then `error`. Empty strings are skipped.
    pub fn body_message(&self) -> Option<&str> {
        let TransportError::Status { body: Some(body), .. } = self else {
            return None;
        };

        ["message", "error"]
            .iter()
            .filter_map(|field| body.get(field).and_then(Value::as_str))
            .find(|msg| !msg.is_empty())
    }
}
