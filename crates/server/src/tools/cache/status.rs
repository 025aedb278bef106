//! jobs_cache_status tool implementation.
//!
//! Reports whether a search is cached, without sending it.

use jobscraper_client::{CacheStatus, JobsService, SearchRequest};
use jobscraper_core::Error;
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the jobs_cache_status tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CacheStatusParams {
    /// Keywords of the search, in the order they were submitted.
    #[serde(default)]
    pub keywords: Option<Vec<String>>,

    /// Location of the search.
    #[serde(default)]
    pub location: Option<String>,

    /// Free-text query of the search.
    #[serde(default)]
    pub query: Option<String>,
}

/// Output from the jobs_cache_status tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CacheStatusOutput {
    /// Whether a live cache entry exists for the search.
    pub cached: bool,
    /// Seconds until the entry expires (0 when not cached).
    pub expires_in_seconds: u64,
    /// RFC 3339 expiry time, when cached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

impl From<CacheStatus> for CacheStatusOutput {
    fn from(status: CacheStatus) -> Self {
        Self {
            cached: status.cached,
            expires_in_seconds: status.expires_in_seconds,
            expires_at: status.expires_at.map(|at| at.to_rfc3339()),
        }
    }
}

/// Implementation of the jobs_cache_status tool.
pub async fn status_impl(service: &JobsService, params: CacheStatusParams) -> Result<CallToolResult, McpError> {
    let request = SearchRequest {
        keywords: params.keywords.unwrap_or_default(),
        location: params.location,
        query: params.query,
    };

    let output = CacheStatusOutput::from(service.cache_status(&request));
    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| Error::InvalidInput(format!("Failed to serialize output: {e}")))?;

    Ok(CallToolResult::success(vec![Content::text(json)]))
}
