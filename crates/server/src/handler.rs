//! MCP server handler implementation.
//!
//! This module defines the main server handler that
//! routes tool calls to the appropriate implementations.
use crate::tools::cache::{CacheStatusParams, clear_impl, status_impl};
use crate::tools::jobs_search::{JobsSearchParams, search_impl};

use jobscraper_client::JobsService;
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{
        tool::{ToolCallContext, ToolRouter},
        wrapper::Parameters,
    },
    model::{
        CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
        ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_router,
};

/// The main MCP server handler for jobscraper.
#[derive(Clone)]
pub struct JobsMcpServer {
    tool_router: ToolRouter<Self>,
    service: JobsService,
}

/// Tool router implementation using the #[tool_router] macro.
///
/// This macro generates the routing logic that maps tool names to handler methods.
#[tool_router]
impl JobsMcpServer {
    /// Create a new server handler over a jobs service.
    pub fn new(service: JobsService) -> Self {
        Self { tool_router: Self::tool_router(), service }
    }

    /// Search for jobs.
    ///
    /// Identical searches within the cache TTL are answered without contacting the API.
    #[tool(
        description = "Search LinkedIn, Indeed and Google Jobs. Provide keywords (with an optional location) or a free-text query. Results are cached; set bypass_cache to force a fresh fetch."
    )]
    async fn jobs_search(&self, params: Parameters<JobsSearchParams>) -> Result<CallToolResult, McpError> {
        search_impl(&self.service, params.0).await
    }

    /// Report cache state for a search.
    #[tool(description = "Check whether a search is cached and how many seconds remain before it expires.")]
    async fn jobs_cache_status(&self, params: Parameters<CacheStatusParams>) -> Result<CallToolResult, McpError> {
        status_impl(&self.service, params.0).await
    }

    /// Drop every cached search.
    #[tool(description = "Clear all cached job searches.")]
    async fn jobs_cache_clear(&self) -> Result<CallToolResult, McpError> {
        clear_impl(&self.service).await
    }
}

impl ServerHandler for JobsMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "jobscraper".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self, _request: Option<PaginatedRequestParam>, _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, rmcp::model::ErrorData> {
        Ok(ListToolsResult { meta: None, tools: self.tool_router.list_all(), next_cursor: None })
    }

    async fn call_tool(
        &self, request: CallToolRequestParam, context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, rmcp::model::ErrorData> {
        self.tool_router
            .call(ToolCallContext::new(self, request, context))
            .await
    }
}
