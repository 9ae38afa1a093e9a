//! Error types for GitHub REST calls
//!
//! Everything in here is a hard failure: the call could not be completed
//! at all. The client hands non-success HTTP statuses back as a
//! [`super::ApiResponse`]; only callers that treat a status as fatal turn it
//! into [`GitHubError::Status`].

use thiserror::Error;

/// Errors that can occur while talking to the GitHub API
#[derive(Error, Debug)]
pub enum GitHubError {
    /// No client could be obtained from the provider
    #[error("failed to get GitHub client: {0}")]
    ClientUnavailable(String),

    /// The configured API base URL could not be used to build a request URL
    #[error("failed to create request: {0}")]
    InvalidUrl(String),

    /// GitHub answered with a non-success status the call cannot recover from
    #[error("{0}")]
    Status(String),

    /// The HTTP request could not be sent or completed
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response body could not be read
    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    /// The response body was not the JSON we expected
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The decoded response could not be re-encoded for the tool result
    #[error("failed to marshal response: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Result type alias for GitHub operations
pub type GitHubResult<T> = Result<T, GitHubError>;
