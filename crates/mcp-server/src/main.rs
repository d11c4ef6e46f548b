//! MCP resource server entry point.
//!
//! # Usage
//!
//! Run the server via stdio transport:
//!
//! ```bash
//! mcp-resources --root ./sample-resources
//! ```
//!
//! Or configure in an MCP client:
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "resources": {
//!       "command": "mcp-resources",
//!       "env": { "MCP_RESOURCES_ROOT": "/srv/shared" }
//!     }
//!   }
//! }
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use mcp_resources_core::{ResourceCatalog, SandboxRoot};
use mcp_resources_files::{FsResourceProvider, seed_sample_resources};
use mcp_resources_server::{Cli, Command, LogFormat, OutputFormat, ResourceService};
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.log_format);

    let config = cli.resolve_config()?;
    if config.seed_if_missing {
        seed_sample_resources(&config.root)?;
    }

    let root = SandboxRoot::new(&config.root)
        .with_context(|| format!("Cannot use {} as sandbox root", config.root.display()))?;
    tracing::info!("Sandbox root: {}", root.path().display());

    let provider = FsResourceProvider::new(root);

    match cli.command() {
        Command::Serve => serve(provider).await,
        Command::List { format } => print_listing(&provider, format),
        Command::Read { identifier } => print_content(&provider, &identifier),
    }
}

/// Initializes logging to stderr; stdout carries the MCP protocol.
fn init_logging(verbose: bool, format: LogFormat) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,mcp_resources_server=debug"))
    };

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

async fn serve(provider: FsResourceProvider) -> Result<()> {
    tracing::info!(
        "Starting mcp-resources-server v{}",
        env!("CARGO_PKG_VERSION")
    );

    let service = ResourceService::new(Arc::new(provider))
        .serve(stdio())
        .await?;
    service.waiting().await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

fn print_listing(provider: &FsResourceProvider, format: OutputFormat) -> Result<()> {
    let descriptors = provider.list_resources();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&descriptors)?),
        OutputFormat::Text => {
            for d in &descriptors {
                println!("{}\t{}\t{}", d.identifier, d.content_type, d.description);
            }
        }
    }
    Ok(())
}

fn print_content(provider: &FsResourceProvider, identifier: &str) -> Result<()> {
    let content = provider
        .read_resource(identifier)
        .map_err(|e| anyhow::anyhow!(e.public_message()))?;
    println!("{}", serde_json::to_string_pretty(&content)?);
    Ok(())
}
