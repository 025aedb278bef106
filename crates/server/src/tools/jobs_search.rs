//! jobs_search tool implementation.
//!
//! Runs a job search through the cache-aware client and returns normalized
//! jobs.

use jobscraper_client::{JobsService, SearchRequest, SendOptions};
use jobscraper_core::Error;
use jobscraper_core::jobs::{NormalizedJob, SourceCounts, SourceFilter};
use rmcp::{ErrorData as McpError, model::*};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::cache::CacheStatusOutput;

/// Input parameters for jobs_search tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct JobsSearchParams {
    /// Keywords for LinkedIn and Indeed, in order.
    #[serde(default)]
    pub keywords: Option<Vec<String>>,

    /// Location filter. Only used together with keywords.
    #[serde(default)]
    pub location: Option<String>,

    /// Free-text query for Google Jobs.
    #[serde(default)]
    pub query: Option<String>,

    /// Skip the cache lookup and fetch fresh results.
    #[serde(default)]
    pub bypass_cache: bool,

    /// Only return jobs from this source: all (default), linkedin, indeed, google.
    #[serde(default)]
    pub source: Option<SourceFilter>,
}

impl JobsSearchParams {
    pub fn to_request(&self) -> SearchRequest {
        SearchRequest {
            keywords: self.keywords.clone().unwrap_or_default(),
            location: self.location.clone(),
            query: self.query.clone(),
        }
    }
}

/// Output structure for jobs_search tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct JobsSearchOutput {
    /// Message from the jobs API.
    pub message: String,
    /// Total number of jobs the API reported.
    pub total_jobs: u64,
    /// Normalized jobs, after the source filter.
    pub jobs: Vec<NormalizedJob>,
    /// Per-source counts over the unfiltered results.
    pub counts: SourceCounts,
    /// Cache state for this search after it ran.
    pub cache: CacheStatusOutput,
    /// Debug information.
    pub debug: DebugInfo,
}

/// Debug information.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DebugInfo {
    /// Whether the response came from the cache.
    pub cache_hit: bool,
    /// Time spent on the search in milliseconds.
    pub elapsed_ms: u64,
}

/// Implementation of the jobs_search tool.
pub async fn search_impl(service: &JobsService, params: JobsSearchParams) -> Result<CallToolResult, McpError> {
    let request = params.to_request();
    let options = SendOptions { bypass_cache: params.bypass_cache };

    let outcome = service.run_search(&request, options).await.map_err(Error::from)?;

    let counts = outcome.counts();
    let jobs = match params.source {
        Some(filter) => outcome.filtered(filter),
        None => outcome.jobs,
    };

    let output = JobsSearchOutput {
        message: outcome.message,
        total_jobs: outcome.total_jobs,
        jobs,
        counts,
        cache: service.cache_status(&request).into(),
        debug: DebugInfo { cache_hit: outcome.cache_hit, elapsed_ms: outcome.elapsed_ms },
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| Error::InvalidInput(format!("Failed to serialize output: {e}")))?;

    Ok(CallToolResult::success(vec![Content::text(json)]))
}
