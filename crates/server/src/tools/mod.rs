//! MCP tool implementations.
//!
//! This module contains all tools exposed by the jobscraper server.

pub mod cache;
pub mod jobs_search;

pub use jobs_search::{JobsSearchOutput, JobsSearchParams};

#[cfg(test)]
pub(crate) mod test_support {
    use jobscraper_client::testing::MockTransport;
    use jobscraper_client::{JobsService, RequestClient};
    use jobscraper_core::CacheStore;
    use rmcp::model::CallToolResult;
    use std::sync::Arc;
    use std::time::Duration;

    pub fn service(transport: &Arc<MockTransport>) -> JobsService {
        let cache = Arc::new(CacheStore::new(Duration::from_secs(600)));
        JobsService::new(RequestClient::new(transport.clone(), cache), "/jobs/scrape")
    }

    pub fn output_text(result: &CallToolResult) -> String {
        let content_val = serde_json::to_value(&result.content[0]).unwrap();
        content_val
            .get("text")
            .and_then(|v| v.as_str())
            .expect("Expected text field in content")
            .to_string()
    }
}
