//! jobs_cache_clear tool implementation.
//!
//! Drops every cached search response.

use jobscraper_client::JobsService;
use jobscraper_core::Error;
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output from the jobs_cache_clear tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CacheClearOutput {
    /// Number of entries held before clearing, including stale ones.
    pub cleared: usize,
}

/// Implementation of the jobs_cache_clear tool.
pub async fn clear_impl(service: &JobsService) -> Result<CallToolResult, McpError> {
    let cleared = service.clear_cache();

    let output = CacheClearOutput { cleared };
    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| Error::InvalidInput(format!("Failed to serialize output: {e}")))?;

    Ok(CallToolResult::success(vec![Content::text(json)]))
}
