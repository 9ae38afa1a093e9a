//! Tool call outcomes
//!
//! A tool call ends in one of two tiers:
//!
//! - [`ToolOutcome`]: the call ran. Either it produced output, or it failed
//!   in a way the caller can read and correct (bad arguments, a 404 or 422
//!   from a mutating endpoint). Rendered as a normal tool result, with
//!   `is_error` set for failures.
//! - [`CallFailure`]: the call could not be carried out at all (no client,
//!   network trouble, undecodable response, a failed listing). Rendered as a
//!   protocol error.

use mcp_common::{internal_error, text_success, tool_error, CallToolResult, McpError};
use thiserror::Error;
use tracing::{error, info};

use crate::github::GitHubError;
use crate::params::ParamError;

/// Result of a tool call that reached a conclusion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolOutcome {
    /// JSON text for the caller
    Success(String),
    /// Caller-visible error message
    Failure(String),
}

impl ToolOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, ToolOutcome::Failure(_))
    }

    pub fn text(&self) -> &str {
        match self {
            ToolOutcome::Success(text) | ToolOutcome::Failure(text) => text,
        }
    }

    pub fn into_call_result(self) -> CallToolResult {
        match self {
            ToolOutcome::Success(text) => text_success(text),
            ToolOutcome::Failure(text) => tool_error(text),
        }
    }
}

impl From<ParamError> for ToolOutcome {
    fn from(err: ParamError) -> Self {
        ToolOutcome::Failure(err.to_string())
    }
}

/// A tool call that could not be completed
#[derive(Error, Debug)]
#[error("failed to {action}: {source}")]
pub struct CallFailure {
    /// What the tool was doing, e.g. "list sub-issues"
    pub action: &'static str,
    #[source]
    pub source: GitHubError,
}

impl From<CallFailure> for McpError {
    fn from(err: CallFailure) -> Self {
        internal_error(err.to_string())
    }
}

/// Render a handler result at the MCP boundary
pub fn into_mcp(result: Result<ToolOutcome, CallFailure>) -> Result<CallToolResult, McpError> {
    match &result {
        Ok(outcome) if outcome.is_failure() => info!(reason = outcome.text(), "tool call failed"),
        Err(failure) => error!(error = %failure, "tool call could not complete"),
        Ok(_) => {}
    }

    result.map(ToolOutcome::into_call_result).map_err(McpError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_renders_plain_result() {
        let result = ToolOutcome::Success("[]".into()).into_call_result();
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result.content.len(), 1);
    }

    #[test]
    fn test_failure_renders_error_result() {
        let outcome: ToolOutcome = ParamError::Missing("owner").into();
        assert!(outcome.is_failure());
        assert_eq!(outcome.text(), "missing required parameter: owner");
        let result = outcome.into_call_result();
        assert_eq!(result.is_error, Some(true));
    }

    #[test]
    fn test_call_failure_becomes_protocol_error() {
        let failure = CallFailure {
            action: "list sub-issues",
            source: GitHubError::ClientUnavailable("no token".into()),
        };
        let err = into_mcp(Err(failure)).unwrap_err();
        assert!(err.message.contains("failed to list sub-issues"));
        assert!(err.message.contains("failed to get GitHub client: no token"));
    }

    #[test]
    fn test_tool_failure_stays_a_result() {
        let result = into_mcp(Ok(ToolOutcome::Failure(
            "failed to remove sub-issue: Sub-issue not found".into(),
        )))
        .unwrap();
        assert_eq!(result.is_error, Some(true));
    }

    #[test]
    fn test_status_failure_keeps_upstream_detail() {
        let failure = CallFailure {
            action: "list sub-issues",
            source: GitHubError::Status("Issue not found".into()),
        };
        let err = into_mcp(Err(failure)).unwrap_err();
        assert_eq!(err.message, "failed to list sub-issues: Issue not found");
    }
}
