//! Postiz MCP Server
//!
//! Model Context Protocol server exposing Postiz social media scheduling
//! (media upload, post scheduling, account listing, post cleanup) to LLM
//! agents over stdio.

use std::sync::Arc;

use clap::Parser;
use postiz_client::{ClientConfig, PostizClient};
use postiz_mcp::server::PostizMcpServer;
use rmcp::ServiceExt;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "postiz-mcp", version, about = "MCP server for Postiz social media scheduling")]
struct Cli {
    /// Postiz API key, sent as the Authorization header.
    #[arg(long, env = "POSTIZ_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Postiz base URL (defaults to the hosted service).
    #[arg(long, env = "POSTIZ_API_URL")]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("postiz_mcp=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::new(cli.api_key.unwrap_or_default(), cli.api_url.as_deref())?;
    tracing::info!(base_url = config.base_url(), "postiz-mcp starting (stdio transport)");

    let client = PostizClient::new(config)?;
    let server = PostizMcpServer::new(Arc::new(client));
    let transport = rmcp::transport::io::stdio();

    let service = server.serve(transport).await?;
    service.waiting().await?;

    Ok(())
}
