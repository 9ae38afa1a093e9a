//! MCP Common - Shared utilities for MCP servers
//!
//! - **Initialization**: [`init_tracing`] and [`serve_stdio`]
//! - **Results**: helpers for building `CallToolResult` values, including
//!   tool-level errors
//! - **Errors**: protocol-level error constructors
//! - **Embeddable**: [`EmbeddableMcp`] for calling tools in-process
//!
//! ```rust,ignore
//! use mcp_common::{init_tracing, serve_stdio, LogFormat};
//!
//! init_tracing("my_mcp", LogFormat::Text)?;
//! serve_stdio(MyServer::new()).await?;
//! ```

pub mod embeddable;
pub mod error;
pub mod init;
pub mod result;

pub use embeddable::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
pub use error::internal_error;
pub use init::{init_tracing, serve_stdio, LogFormat};
pub use result::{first_text, text_success, tool_error};

// Re-export rmcp types that are commonly needed
pub use rmcp::{
    model::{CallToolResult, Content, Tool},
    ErrorData as McpError,
};

// Re-export async_trait for implementing EmbeddableMcp
pub use async_trait::async_trait;
