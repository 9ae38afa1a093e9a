//! MCP Server implementation
//!
//! This module defines the MCP server that exposes the sub-issue tools.
//! Handler implementations are in the handlers/ module.
//!
//! # Tool Groups
//!
//! `list_sub_issues` is always available. The mutating tools
//! (`add_sub_issue`, `remove_sub_issue`, `reprioritize_sub_issue`) are left
//! out entirely when the server runs in read-only mode.

use std::sync::Arc;

use mcp_common::{async_trait, EmbeddableError, EmbeddableMcp, EmbeddableResult};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo, Tool},
    tool, tool_handler, tool_router, ErrorData as McpError,
};
use serde_json::Value;

use crate::config::Config;
use crate::github::{ClientProvider, ConfiguredClientProvider};
use crate::handlers;
use crate::outcome::into_mcp;
use crate::params::*;

const INSTRUCTIONS: &str = "GitHub Sub-Issues MCP Server - provides tools for listing, adding, \
                            removing and reprioritizing sub-issues of GitHub issues through the \
                            REST API. sub_issue_id and after_id are issue ids, not issue numbers.";

/// The GitHub sub-issues MCP Server
#[derive(Clone)]
pub struct SubIssuesMcpServer {
    provider: Arc<dyn ClientProvider>,
    read_only: bool,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Read Tools (always available)
// ============================================================================

#[tool_router(router = read_tool_router)]
impl SubIssuesMcpServer {
    #[tool(
        description = "List sub-issues for a specific issue in a GitHub repository.",
        annotations(title = "List sub-issues", read_only_hint = true, open_world_hint = true)
    )]
    async fn list_sub_issues(
        &self,
        Parameters(params): Parameters<ListSubIssuesParams>,
    ) -> Result<CallToolResult, McpError> {
        into_mcp(handlers::list_sub_issues(self.provider.as_ref(), params).await)
    }
}

// ============================================================================
// Write Tools (omitted in read-only mode)
// ============================================================================

#[tool_router(router = write_tool_router)]
impl SubIssuesMcpServer {
    #[tool(
        description = "Add a sub-issue to a specific issue in a GitHub repository.",
        annotations(
            title = "Add sub-issue",
            read_only_hint = false,
            destructive_hint = false,
            open_world_hint = true
        )
    )]
    async fn add_sub_issue(
        &self,
        Parameters(params): Parameters<AddSubIssueParams>,
    ) -> Result<CallToolResult, McpError> {
        into_mcp(handlers::add_sub_issue(self.provider.as_ref(), params).await)
    }

    #[tool(
        description = "Remove a sub-issue from a specific issue in a GitHub repository.",
        annotations(
            title = "Remove sub-issue",
            read_only_hint = false,
            destructive_hint = true,
            open_world_hint = true
        )
    )]
    async fn remove_sub_issue(
        &self,
        Parameters(params): Parameters<RemoveSubIssueParams>,
    ) -> Result<CallToolResult, McpError> {
        into_mcp(handlers::remove_sub_issue(self.provider.as_ref(), params).await)
    }

    #[tool(
        description = "Reprioritize a sub-issue within a specific issue in a GitHub repository.",
        annotations(
            title = "Reprioritize sub-issue",
            read_only_hint = false,
            destructive_hint = false,
            idempotent_hint = true,
            open_world_hint = true
        )
    )]
    async fn reprioritize_sub_issue(
        &self,
        Parameters(params): Parameters<ReprioritizeSubIssueParams>,
    ) -> Result<CallToolResult, McpError> {
        into_mcp(handlers::reprioritize_sub_issue(self.provider.as_ref(), params).await)
    }
}

// ============================================================================
// Router Composition & Server Initialization
// ============================================================================

impl SubIssuesMcpServer {
    /// Build a server from loaded configuration
    pub fn new(config: &Config) -> Self {
        let provider = Arc::new(ConfiguredClientProvider::new(config.github.clone()));
        Self::with_provider(provider, config.server.read_only)
    }

    /// Build a server around an explicit client provider
    pub fn with_provider(provider: Arc<dyn ClientProvider>, read_only: bool) -> Self {
        let router = Self::read_tool_router();

        let router = if read_only {
            router
        } else {
            router + Self::write_tool_router()
        };

        Self {
            provider,
            read_only,
            tool_router: router,
        }
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for SubIssuesMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

// ============================================================================
// EmbeddableMcp Implementation
// ============================================================================

#[async_trait]
impl EmbeddableMcp for SubIssuesMcpServer {
    fn server_name(&self) -> &str {
        "github-subissues"
    }

    fn server_description(&self) -> Option<&str> {
        Some(INSTRUCTIONS)
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        if !self.has_tool(name) {
            return Err(EmbeddableError::ToolNotFound(name.to_string()));
        }

        match name {
            "list_sub_issues" => {
                let params: ListSubIssuesParams = serde_json::from_value(params)?;
                self.list_sub_issues(Parameters(params)).await.map_err(Into::into)
            }

            "add_sub_issue" => {
                let params: AddSubIssueParams = serde_json::from_value(params)?;
                self.add_sub_issue(Parameters(params)).await.map_err(Into::into)
            }

            "remove_sub_issue" => {
                let params: RemoveSubIssueParams = serde_json::from_value(params)?;
                self.remove_sub_issue(Parameters(params)).await.map_err(Into::into)
            }

            "reprioritize_sub_issue" => {
                let params: ReprioritizeSubIssueParams = serde_json::from_value(params)?;
                self.reprioritize_sub_issue(Parameters(params))
                    .await
                    .map_err(Into::into)
            }

            _ => Err(EmbeddableError::ToolNotFound(name.to_string())),
        }
    }
}
