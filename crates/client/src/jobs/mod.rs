//! Job search service.
//!
//! Entry points used by the presentation layer:
//!
//! - [`JobsService::run_search`]: validate, send (cache first), normalize.
//! - [`JobsService::cache_status`]: is this exact search cached, and for how
//!   long, without sending anything.
//! - [`JobsService::clear_cache`]: drop every cached response.

pub mod error;
pub mod request;
pub mod response;

pub use error::JobsError;
pub use request::{MISSING_FIELDS_MESSAGE, SearchRequest};
pub use response::{JobsResponse, SearchOutcome};

use crate::request::{FALLBACK_ERROR_MESSAGE, RequestClient, RequestError, SendOptions};
use crate::transport::{ApiRequest, HttpConfig, HttpTransport, TransportError};
use chrono::{DateTime, Utc};
use jobscraper_core::{AppConfig, CacheStore, Error};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// Default search endpoint path.
pub const DEFAULT_JOBS_ENDPOINT: &str = "/jobs/scrape";

/// Whether a search is cached and how long it has left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStatus {
    pub cached: bool,
    pub expires_in_seconds: u64,
    /// Wall-clock expiry, accurate to the second.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Job search over a cache-aware request client.
#[derive(Clone)]
pub struct JobsService {
    client: RequestClient,
    endpoint: String,
}

impl JobsService {
    pub fn new(client: RequestClient, endpoint: impl Into<String>) -> Self {
        Self { client, endpoint: endpoint.into() }
    }

    /// Build the HTTP transport and a fresh cache from application config.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if no API base URL is configured, or
    /// `Error::InvalidInput` if the base URL cannot be used.
    pub fn from_config(config: &AppConfig) -> Result<Self, Error> {
        let transport = HttpTransport::new(HttpConfig::from_app_config(config)?)
            .map_err(|e| Error::InvalidInput(e.to_string()))?;
        let cache = Arc::new(CacheStore::new(config.cache_ttl()));

        Ok(Self::new(RequestClient::new(Arc::new(transport), cache), config.jobs_endpoint.clone()))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn api_request(&self, params: &SearchRequest) -> ApiRequest {
        ApiRequest::post(self.endpoint.clone(), params.body())
    }

    /// Fetch the raw jobs response.
    ///
    /// Returns the response and whether it came from the cache. A payload
    /// that does not decode as a jobs response is evicted and reported as a
    /// request failure.
    pub async fn fetch_jobs(
        &self, params: &SearchRequest, options: SendOptions,
    ) -> Result<(JobsResponse, bool), JobsError> {
        params.validate()?;

        let request = self.api_request(params);
        let fetched = self.client.send(&request, options).await?;

        match serde_json::from_value::<JobsResponse>(fetched.payload) {
            Ok(response) => Ok((response, fetched.cache_hit)),
            Err(e) => {
                tracing::warn!(error = %e, "discarding undecodable jobs response");
                self.client.invalidate(&request);
                Err(RequestError {
                    user_message: FALLBACK_ERROR_MESSAGE.to_string(),
                    source: TransportError::Parse(e.to_string()),
                }
                .into())
            }
        }
    }

    /// Run a search and normalize every returned job.
    pub async fn run_search(&self, params: &SearchRequest, options: SendOptions) -> Result<SearchOutcome, JobsError> {
        let start = Instant::now();
        let (response, cache_hit) = self.fetch_jobs(params, options).await?;
        let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        tracing::debug!(
            total_jobs = response.total_jobs,
            returned = response.jobs.len(),
            cache_hit,
            elapsed_ms,
            "search completed"
        );

        Ok(SearchOutcome::from_response(&response, cache_hit, elapsed_ms))
    }

    /// Report whether `params` would be served from the cache.
    ///
    /// Has the same lazy-eviction side effect as a cache read.
    pub fn cache_status(&self, params: &SearchRequest) -> CacheStatus {
        let Some(key) = RequestClient::cache_key(&self.api_request(params)) else {
            return CacheStatus::default();
        };

        let expires_in_seconds = self.client.cache().time_remaining(&key);
        if expires_in_seconds == 0 {
            return CacheStatus::default();
        }

        let expires_at = i64::try_from(expires_in_seconds)
            .ok()
            .and_then(chrono::TimeDelta::try_seconds)
            .map(|delta| Utc::now() + delta);

        CacheStatus { cached: true, expires_in_seconds, expires_at }
    }

    /// Invalidate every cached response.
    ///
    /// Returns the number of entries dropped, stale ones included.
    pub fn clear_cache(&self) -> usize {
        self.client.cache().clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockTransport;
    use serde_json::json;
    use std::time::Duration;

    fn service(transport: &Arc<MockTransport>) -> JobsService {
        let cache = Arc::new(CacheStore::new(Duration::from_secs(600)));
        JobsService::new(RequestClient::new(transport.clone(), cache), DEFAULT_JOBS_ENDPOINT)
    }

    fn payload() -> serde_json::Value {
        json!({
            "message": "ok",
            "total_jobs": 2,
            "jobs": [
                {"id": "1", "title": "Engineer", "company_name": "Acme", "job_url": "https://x", "is_remote": true, "source": "linkedin"},
                {"id": "2", "title": "Designer", "source": "indeed"}
            ]
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeat_search_issues_one_call() {
        let transport = Arc::new(MockTransport::responding(payload()));
        let service = service(&transport);
        let params = SearchRequest::keywords(["frontend"]).with_location("Lebanon");

        let first = service.run_search(&params, SendOptions::default()).await.unwrap();
        let second = service.run_search(&params, SendOptions::default()).await.unwrap();

        assert_eq!(transport.calls(), 1);
        assert_eq!(first.jobs, second.jobs);
        assert_eq!(first.total_jobs, 2);
        assert!(!first.cache_hit);
        assert!(second.cache_hit);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sends_post_with_body() {
        let transport = Arc::new(MockTransport::responding(payload()));
        let service = service(&transport);
        let params = SearchRequest::keywords(["frontend"]).with_location("Lebanon");

        service.run_search(&params, SendOptions::default()).await.unwrap();

        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, reqwest::Method::POST);
        assert_eq!(sent[0].endpoint, "/jobs/scrape");
        assert_eq!(sent[0].body, Some(json!({"keywords": ["frontend"], "location": "Lebanon"})));
    }

    #[tokio::test(start_paused = true)]
    async fn test_normalizes_jobs() {
        let transport = Arc::new(MockTransport::responding(payload()));
        let service = service(&transport);

        let outcome = service.run_search(&SearchRequest::query("engineer"), SendOptions::default()).await.unwrap();

        assert_eq!(outcome.jobs[0].company, "Acme");
        assert_eq!(outcome.jobs[0].url, "https://x");
        assert!(outcome.jobs[0].is_remote);
        assert_eq!(outcome.jobs[1].company, "Unknown Company");
        assert_eq!(outcome.jobs[1].url, "#");
    }

    #[tokio::test(start_paused = true)]
    async fn test_validation_before_cache_or_network() {
        let transport = Arc::new(MockTransport::responding(payload()));
        let service = service(&transport);

        let err = service.run_search(&SearchRequest::default(), SendOptions::default()).await.unwrap_err();

        assert!(matches!(err, JobsError::Validation(_)));
        assert_eq!(err.user_message(), MISSING_FIELDS_MESSAGE);
        assert_eq!(transport.calls(), 0);
        assert!(service.client.cache().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_cache_forces_network_call() {
        let transport = Arc::new(MockTransport::responding(payload()));
        let service = service(&transport);
        let params = SearchRequest::query("engineer");

        service.run_search(&params, SendOptions::default()).await.unwrap();
        assert_eq!(service.clear_cache(), 1);
        let outcome = service.run_search(&params, SendOptions::default()).await.unwrap();

        assert!(!outcome.cache_hit);
        assert_eq!(transport.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cache_status() {
        let transport = Arc::new(MockTransport::responding(payload()));
        let service = service(&transport);
        let params = SearchRequest::keywords(["frontend"]).with_location("Lebanon");

        assert_eq!(service.cache_status(&params), CacheStatus::default());

        service.run_search(&params, SendOptions::default()).await.unwrap();
        tokio::time::advance(Duration::from_secs(100)).await;

        let status = service.cache_status(&params);
        assert!(status.cached);
        assert_eq!(status.expires_in_seconds, 500);
        assert!(status.expires_at.is_some());

        let other = SearchRequest::keywords(["frontend"]).with_location("Beirut");
        assert!(!service.cache_status(&other).cached);

        tokio::time::advance(Duration::from_secs(500)).await;
        assert_eq!(service.cache_status(&params), CacheStatus::default());
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_transport_error_message() {
        let transport = Arc::new(MockTransport::failing(503, Some(json!({"error": "Scraper unavailable"}))));
        let service = service(&transport);

        let err = service.run_search(&SearchRequest::query("x"), SendOptions::default()).await.unwrap_err();
        assert_eq!(err.user_message(), "Scraper unavailable");
        assert!(matches!(err, JobsError::Request(ref e) if e.source.status() == Some(503)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_wrong_typed_field_does_not_fail_search() {
        let transport = Arc::new(MockTransport::responding(json!({
            "message": "ok",
            "total_jobs": 2,
            "jobs": [
                {"id": "1", "title": "Engineer", "source": "linkedin"},
                {"id": "2", "title": "Analyst", "min_amount": "50000", "max_amount": 70000, "currency": "USD"}
            ]
        })));
        let service = service(&transport);
        let params = SearchRequest::query("analyst");

        let outcome = service.run_search(&params, SendOptions::default()).await.unwrap();

        assert_eq!(outcome.jobs.len(), 2);
        assert_eq!(outcome.jobs[0].title, "Engineer");
        assert_eq!(outcome.jobs[1].salary.as_deref(), Some("$50,000 – $70,000"));
        assert!(service.cache_status(&params).cached);
    }

    #[tokio::test(start_paused = true)]
    async fn test_undecodable_payload_is_evicted() {
        let transport = Arc::new(MockTransport::responding(json!({"jobs": "not a list"})));
        let service = service(&transport);
        let params = SearchRequest::query("x");

        let err = service.run_search(&params, SendOptions::default()).await.unwrap_err();
        assert_eq!(err.user_message(), FALLBACK_ERROR_MESSAGE);
        assert!(!service.cache_status(&params).cached);

        transport.set_response(payload());
        let outcome = service.run_search(&params, SendOptions::default()).await.unwrap();
        assert!(!outcome.cache_hit);
        assert_eq!(transport.calls(), 2);
    }

    #[test]
    fn test_from_config_requires_base_url() {
        let result = JobsService::from_config(&AppConfig::default());
        assert!(matches!(result, Err(Error::Config(_))));

        let config = AppConfig { api_base_url: Some("http://localhost:3000/api".into()), ..Default::default() };
        let service = JobsService::from_config(&config).unwrap();
        assert_eq!(service.endpoint(), "/jobs/scrape");
    }
}
