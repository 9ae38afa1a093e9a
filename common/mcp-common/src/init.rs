//! Server initialization utilities
//!
//! Tracing setup and the stdio serving loop shared by the MCP servers in
//! this workspace.

use std::str::FromStr;

use rmcp::{transport::stdio, ServerHandler, ServiceExt};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines without ANSI colors
    #[default]
    Text,
    /// One JSON object per event, for log aggregation
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "plain" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{}' (expected text or json)", other)),
        }
    }
}

/// Initialize tracing to stderr
///
/// stdout carries the MCP protocol, so all logging goes to stderr. `RUST_LOG`
/// is honoured; `<crate_name>=info` is added as the default directive.
pub fn init_tracing(crate_name: &str, format: LogFormat) -> anyhow::Result<()> {
    let directive = format!("{}=info", crate_name);
    let filter = EnvFilter::from_default_env().add_directive(directive.parse()?);

    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()?,
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?,
    }

    Ok(())
}

/// Serve an MCP server over stdio until the client disconnects
pub async fn serve_stdio<S: ServerHandler>(server: S) -> anyhow::Result<()> {
    let service = server.serve(stdio()).await?;

    tracing::info!("Server running, waiting for requests...");

    let reason = service.waiting().await?;

    tracing::info!(?reason, "Server shutting down");
    Ok(())
}
