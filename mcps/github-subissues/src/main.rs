//! GitHub Sub-Issues MCP Server
//!
//! Exposes GitHub's sub-issue REST endpoints as MCP tools: list, add,
//! remove and reprioritize the sub-issues of an issue.
//!
//! # Configuration
//!
//! Set `GITHUB_PERSONAL_ACCESS_TOKEN` (or `GITHUB_TOKEN`), or configure
//! `~/.binks/github-subissues.toml`:
//!
//! ```toml
//! [github]
//! api_url = "https://api.github.com"
//! token = "ghp_..."
//!
//! [server]
//! read_only = false
//! ```
//!
//! # Usage
//!
//! Configure in `.mcp.json`:
//! ```json
//! {
//!   "mcpServers": {
//!     "github-subissues": {
//!       "command": "./target/release/github-subissues-mcp",
//!       "env": { "GITHUB_PERSONAL_ACCESS_TOKEN": "ghp_..." }
//!     }
//!   }
//! }
//! ```

use std::path::PathBuf;

use clap::Parser;
use github_subissues_mcp::{Config, SubIssuesMcpServer};
use mcp_common::LogFormat;

#[derive(Parser, Debug)]
#[command(name = "github-subissues-mcp", version, about = "MCP server for GitHub sub-issues")]
struct Args {
    /// Only expose list_sub_issues
    #[arg(long)]
    read_only: bool,

    /// GitHub REST API base URL
    #[arg(long, env = "GITHUB_API_URL")]
    api_url: Option<String>,

    /// Path to a TOML config file
    #[arg(long, env = "SUBISSUES_CONFIG_PATH")]
    config: Option<PathBuf>,

    /// Log output format (text or json)
    #[arg(long, env = "LOG_FORMAT", default_value = "text")]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    mcp_common::init_tracing("github_subissues_mcp", args.log_format)?;

    tracing::info!("Starting GitHub Sub-Issues MCP Server");

    let mut config = match &args.config {
        Some(path) => Config::load_from(Some(path.as_path()))?,
        None => Config::load()?,
    };

    if let Some(api_url) = args.api_url {
        config.github.api_url = api_url;
    }
    if args.read_only {
        config.server.read_only = true;
    }

    tracing::info!(
        api_url = %config.github.api_url,
        read_only = config.server.read_only,
        "configuration loaded"
    );
    if config.github.token.is_none() {
        // Keep serving; every tool call will report the missing token.
        tracing::warn!("No GitHub token configured; tool calls will fail until one is set");
    }

    let server = SubIssuesMcpServer::new(&config);
    mcp_common::serve_stdio(server).await
}
