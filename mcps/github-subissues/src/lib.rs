//! GitHub Sub-Issues MCP Library
//!
//! MCP-compatible tools for managing the sub-issues of GitHub issues over
//! the REST API.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use github_subissues_mcp::{Config, SubIssuesMcpServer};
//! use mcp_common::EmbeddableMcp;
//!
//! let server = SubIssuesMcpServer::new(&Config::load()?);
//! let result = server
//!     .call_tool("list_sub_issues", serde_json::json!({
//!         "owner": "octocat",
//!         "repo": "hello-world",
//!         "issue_number": 42
//!     }))
//!     .await?;
//! ```
//!
//! # Tools
//! - `list_sub_issues`: sub-issues of an issue, in GitHub's order
//! - `add_sub_issue`: attach an existing issue (by id) as a sub-issue
//! - `remove_sub_issue`: detach a sub-issue
//! - `reprioritize_sub_issue`: move a sub-issue within its parent's list
//!
//! # Requirements
//! - A GitHub token in `GITHUB_PERSONAL_ACCESS_TOKEN` or the config file

pub mod config;
pub mod github;
pub mod handlers;
pub mod outcome;
pub mod params;
pub mod server;
pub mod types;

// Re-export main server type
pub use config::Config;
pub use server::SubIssuesMcpServer;

// Re-export parameter types for direct API usage
pub use params::*;
