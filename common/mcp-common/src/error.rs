//! Protocol-level error helpers

use rmcp::ErrorData as McpError;

/// An internal error: the server could not complete the request
pub fn internal_error(message: impl Into<String>) -> McpError {
    McpError::internal_error(message.into(), None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_error() {
        let err = internal_error("failed to get GitHub client");
        assert!(err.message.contains("failed to get GitHub client"));
    }
}
