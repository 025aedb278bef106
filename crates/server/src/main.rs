//! jobscraper MCP server entry point.
//!
//! Boots the jobs search server on stdio transport.
//! Logging goes to stderr to avoid interfering with the JSON-RPC protocol on stdout.

use anyhow::Result;
use jobscraper_client::JobsService;
use jobscraper_core::AppConfig;
use rmcp::service::serve_server;
use rmcp::transport::io::stdio;
use tracing_subscriber::EnvFilter;

mod handler;
mod tools;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = AppConfig::load()?;
    let service = JobsService::from_config(&config)?;

    tracing::info!(
        endpoint = service.endpoint(),
        cache_ttl_secs = config.cache_ttl_secs,
        "Starting jobscraper server on stdio transport"
    );

    let handler = handler::JobsMcpServer::new(service);
    let transport = stdio();
    let server = serve_server(handler, transport).await?;

    server.waiting().await?;

    Ok(())
}
