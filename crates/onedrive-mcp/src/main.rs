//! OneDrive MCP Server
//!
//! Model Context Protocol server exposing read-only OneDrive search and
//! folder listing to LLM agents over stdio.

use std::path::PathBuf;

use clap::Parser;
use rmcp::ServiceExt;
use tracing_subscriber::EnvFilter;

use onedrive_client::ClientConfig;
use onedrive_mcp::server::OnedriveMcpServer;

#[derive(Debug, Parser)]
#[command(name = "onedrive-mcp", version, about = "OneDrive search tools for MCP clients")]
struct Cli {
    /// TOML config file with an [onedrive] table (access-token, base-url, timeout-ms)
    #[arg(long, env = "ONEDRIVE_MCP_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is not an error.
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("onedrive_mcp=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::load(cli.config.as_deref())?;
    tracing::info!(base_url = %config.base_url, "onedrive-mcp starting (stdio transport)");

    let server = OnedriveMcpServer::from_config(&config)?;
    let transport = rmcp::transport::io::stdio();

    let service = server.serve(transport).await?;
    service.waiting().await?;

    Ok(())
}
