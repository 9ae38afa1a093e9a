//! Result helpers for MCP tool responses

use rmcp::model::{CallToolResult, Content};

/// A successful plain-text result
pub fn text_success(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// A tool-level error result
///
/// The call itself succeeded at the protocol level; `is_error` tells the
/// caller the tool could not do what was asked, and the text says why.
pub fn tool_error(message: impl Into<String>) -> CallToolResult {
    CallToolResult::error(vec![Content::text(message.into())])
}

/// Text of the first text content item, if any
pub fn first_text(result: &CallToolResult) -> Option<&str> {
    result
        .content
        .iter()
        .find_map(|c| c.as_text().map(|t| t.text.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_success() {
        let result = text_success("hello world");
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(first_text(&result), Some("hello world"));
    }

    #[test]
    fn test_tool_error() {
        let result = tool_error("missing required parameter: owner");
        assert_eq!(result.is_error, Some(true));
        assert_eq!(first_text(&result), Some("missing required parameter: owner"));
    }

    #[test]
    fn test_first_text_empty() {
        let result = CallToolResult::success(vec![]);
        assert_eq!(first_text(&result), None);
    }
}
