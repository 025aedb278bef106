//! Outbound transport to the jobs aggregation API.
//!
//! [`Transport`] is the seam between the request client and the network.
//! [`HttpTransport`] is the reqwest-backed implementation:
//!
//! - **Base URL**: supplied by configuration, never hardcoded.
//! - **Body**: JSON, sent when the request carries one.
//! - **Query parameters**: appended to the URL when present.
//! - **Errors**: non-2xx responses keep their decoded JSON body so callers can
//!   surface the server's own message.
//!
//! Timeouts belong to the HTTP client; there are no retries.

pub mod error;

pub use error::TransportError;

use jobscraper_core::{AppConfig, ConfigError};
use reqwest::{Method, header};
use serde_json::{Map, Value};
use std::time::{Duration, Instant};

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Default user agent.
const DEFAULT_USER_AGENT: &str = "jobscraper/0.1";

/// A single outbound API call.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub endpoint: String,
    pub body: Option<Value>,
    pub query: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self { method: Method::GET, endpoint: endpoint.into(), body: None, query: Vec::new() }
    }

    pub fn post(endpoint: impl Into<String>, body: Value) -> Self {
        Self { method: Method::POST, endpoint: endpoint.into(), body: Some(body), query: Vec::new() }
    }

    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Fields that decide whether two requests are the same for caching.
    ///
    /// Only POST requests with a body are cacheable. The identity is the
    /// endpoint plus the body's fields; a non-object body is kept whole under
    /// `body`.
    pub fn identity(&self) -> Option<Map<String, Value>> {
        if self.method != Method::POST {
            return None;
        }
        let body = self.body.as_ref()?;

        let mut identity = Map::new();
        identity.insert("endpoint".into(), Value::String(self.endpoint.clone()));
        match body {
            Value::Object(fields) => identity.extend(fields.clone()),
            other => {
                identity.insert("body".into(), other.clone());
            }
        }
        Some(identity)
    }
}

/// Sends API requests and returns the decoded JSON response.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: &ApiRequest) -> Result<Value, TransportError>;
}

/// HTTP transport configuration.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Base URL that endpoints are appended to.
    pub base_url: String,
    /// Request timeout (default: 20s).
    pub timeout: Duration,
    /// User-agent string (default: jobscraper/0.x).
    pub user_agent: String,
}

impl HttpConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), timeout: DEFAULT_TIMEOUT, user_agent: DEFAULT_USER_AGENT.to_string() }
    }

    /// Build from application config.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if no API base URL is configured.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: config.require_api_base_url()?.to_string(),
            timeout: config.timeout(),
            user_agent: config.user_agent.clone(),
        })
    }
}

/// reqwest-backed [`Transport`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a new transport with the given configuration.
    pub fn new(config: HttpConfig) -> Result<Self, TransportError> {
        url::Url::parse(&config.base_url).map_err(|e| TransportError::InvalidUrl(format!("{}: {e}", config.base_url)))?;

        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .use_rustls_tls()
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()?;

        Ok(Self { http, base_url: config.base_url.trim_end_matches('/').to_string() })
    }

    /// Full URL for an endpoint path.
    pub fn endpoint_url(&self, endpoint: &str) -> Result<url::Url, TransportError> {
        let joined = format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'));
        url::Url::parse(&joined).map_err(|e| TransportError::InvalidUrl(format!("{joined}: {e}")))
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: &ApiRequest) -> Result<Value, TransportError> {
        let start = Instant::now();
        let url = self.endpoint_url(&request.endpoint)?;

        tracing::debug!(method = %request.method, %url, "sending jobs API request");

        let mut builder = self
            .http
            .request(request.method.clone(), url)
            .header(header::ACCEPT, "application/json");

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        tracing::debug!(%status, elapsed = ?start.elapsed(), bytes = bytes.len(), "jobs API responded");

        if !status.is_success() {
            let body = serde_json::from_slice::<Value>(&bytes).ok();
            return Err(TransportError::Status { status: status.as_u16(), body });
        }

        serde_json::from_slice(&bytes).map_err(|e| TransportError::Parse(e.to_string()))
    }
}
