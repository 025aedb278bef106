//! Cache-aware request client.
//!
//! Wraps a [`Transport`] with the shared response cache:
//!
//! 1. Cacheable requests (POST with a body) get a key from their identity.
//! 2. Unless the caller bypasses the cache, a live entry is returned without
//!    any network call.
//! 3. Otherwise the call is made once; a successful raw response is stored
//!    under the key before it is returned.
//! 4. Failures are translated into a user-facing message while the underlying
//!    transport error is kept as the source.
//!
//! Concurrent identical requests are not coalesced: both miss, both call out,
//! and the later response overwrites the earlier cache entry.

use crate::transport::{ApiRequest, Transport, TransportError};
use jobscraper_core::{CacheStore, build_key};
use serde_json::Value;
use std::sync::Arc;

/// Message shown when the error response carries none of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to fetch jobs. Please try again.";

/// Per-call options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SendOptions {
    /// Skip the cache lookup. The response is still stored.
    pub bypass_cache: bool,
}

impl SendOptions {
    pub fn bypass() -> Self {
        Self { bypass_cache: true }
    }
}

/// A raw response and where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched {
    pub payload: Value,
    pub cache_hit: bool,
}

/// A failed request: what to show the user, and why it failed.
#[derive(Debug, thiserror::Error)]
#[error("{user_message}")]
pub struct RequestError {
    pub user_message: String,
    #[source]
    pub source: TransportError,
}

impl From<TransportError> for RequestError {
    fn from(source: TransportError) -> Self {
        let user_message = source.body_message().unwrap_or(FALLBACK_ERROR_MESSAGE).to_string();
        Self { user_message, source }
    }
}

/// Request client sharing one cache across every call.
#[derive(Clone)]
pub struct RequestClient {
    transport: Arc<dyn Transport>,
    cache: Arc<CacheStore<Value>>,
}

impl RequestClient {
    pub fn new(transport: Arc<dyn Transport>, cache: Arc<CacheStore<Value>>) -> Self {
        Self { transport, cache }
    }

    pub fn cache(&self) -> &Arc<CacheStore<Value>> {
        &self.cache
    }

    /// Cache key for a request, or `None` if the request is not cacheable.
    pub fn cache_key(request: &ApiRequest) -> Option<String> {
        request.identity().map(build_key)
    }

    /// Send a request, consulting the cache first.
    pub async fn send(&self, request: &ApiRequest, options: SendOptions) -> Result<Fetched, RequestError> {
        let key = Self::cache_key(request);

        if let Some(key) = &key
            && !options.bypass_cache
            && let Some(payload) = self.cache.get(key)
        {
            tracing::debug!(endpoint = %request.endpoint, key = %key, "cache hit");
            return Ok(Fetched { payload, cache_hit: true });
        }

        match self.transport.execute(request).await {
            Ok(payload) => {
                if let Some(key) = key {
                    tracing::debug!(endpoint = %request.endpoint, key = %key, "caching response");
                    self.cache.set(key, payload.clone());
                }
                Ok(Fetched { payload, cache_hit: false })
            }
            Err(err) => {
                if err.status() == Some(404) {
                    tracing::debug!(endpoint = %request.endpoint, "API returned 404");
                } else {
                    tracing::error!(endpoint = %request.endpoint, error = %err, "API error");
                }
                Err(RequestError::from(err))
            }
        }
    }

    /// Drop the cached response for a request, if it has one.
    pub fn invalidate(&self, request: &ApiRequest) {
        if let Some(key) = Self::cache_key(request) {
            self.cache.remove(&key);
        }
    }
}
