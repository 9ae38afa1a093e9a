//! In-process tool execution
//!
//! [`EmbeddableMcp`] lets a host (or a test) list and call a server's tools
//! directly with JSON arguments, skipping the stdio transport entirely.
//!
//! ```rust,ignore
//! use mcp_common::EmbeddableMcp;
//!
//! let result = server
//!     .call_tool("list_sub_issues", serde_json::json!({ "owner": "o", "repo": "r", "issue_number": 1 }))
//!     .await?;
//! ```

use async_trait::async_trait;
use rmcp::model::{CallToolResult, Tool};
use serde_json::Value;

/// Error type for embeddable MCP operations
#[derive(Debug, thiserror::Error)]
pub enum EmbeddableError {
    /// No tool with that name is exposed by the server
    #[error("tool not found: {0}")]
    ToolNotFound(String),

    /// The arguments could not be read as the tool's parameter type
    #[error("invalid parameters: {0}")]
    InvalidParams(#[from] serde_json::Error),

    /// The tool failed at the protocol level
    #[error("mcp error: {0}")]
    McpError(String),
}

impl From<rmcp::ErrorData> for EmbeddableError {
    fn from(err: rmcp::ErrorData) -> Self {
        EmbeddableError::McpError(err.message.to_string())
    }
}

/// Result type for embeddable MCP operations
pub type EmbeddableResult<T> = Result<T, EmbeddableError>;

/// An MCP server whose tools can be called in-process
///
/// Implementations must be `Send + Sync`; calls may arrive concurrently from
/// many tasks.
#[async_trait]
pub trait EmbeddableMcp: Send + Sync {
    /// Name used for the server in MCP configuration files
    fn server_name(&self) -> &str;

    /// Every tool currently exposed, with its schema and annotations
    fn list_tools(&self) -> Vec<Tool>;

    /// Run a tool by name
    ///
    /// Tool-level failures come back as `Ok` results with `is_error` set;
    /// `Err` is reserved for unknown tools, unreadable arguments and
    /// protocol-level failures.
    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult>;

    /// Short description for discovery
    fn server_description(&self) -> Option<&str> {
        None
    }

    /// Whether a tool with this name is exposed
    fn has_tool(&self, name: &str) -> bool {
        self.list_tools().iter().any(|t| t.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EmptyServer;

    #[async_trait]
    impl EmbeddableMcp for EmptyServer {
        fn server_name(&self) -> &str {
            "empty"
        }

        fn list_tools(&self) -> Vec<Tool> {
            vec![]
        }

        async fn call_tool(&self, name: &str, _params: Value) -> EmbeddableResult<CallToolResult> {
            Err(EmbeddableError::ToolNotFound(name.to_string()))
        }
    }

    #[test]
    fn test_defaults() {
        let server = EmptyServer;
        assert_eq!(server.server_name(), "empty");
        assert!(server.server_description().is_none());
        assert!(!server.has_tool("anything"));
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let result = EmptyServer.call_tool("missing", serde_json::json!({})).await;
        assert!(matches!(result, Err(EmbeddableError::ToolNotFound(name)) if name == "missing"));
    }

    #[test]
    fn test_protocol_error_conversion() {
        let err: EmbeddableError = rmcp::ErrorData::internal_error("boom", None).into();
        assert_eq!(err.to_string(), "mcp error: boom");
    }
}
