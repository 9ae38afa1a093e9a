//! Thin async client for the GitHub REST API
//!
//! The client only knows how to build a URL under the configured API base,
//! attach the standard GitHub headers, and hand back the status and raw body.
//! Interpreting the body is left to the tool handlers.
//!
//! # Example
//!
//! ```rust,ignore
//! use github_subissues_mcp::config::GitHubConfig;
//! use github_subissues_mcp::github::GitHubClient;
//! use reqwest::Method;
//!
//! let client = GitHubClient::new(&GitHubConfig::default())?;
//! let response = client
//!     .send::<()>(Method::GET, &["repos", "owner", "repo", "issues", "42", "sub_issues"], None)
//!     .await?;
//! ```

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use tracing::{debug, instrument, warn};
use url::Url;

use super::error::{GitHubError, GitHubResult};
use crate::config::GitHubConfig;

/// Media type recommended by GitHub for REST v3 responses
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// REST API version pinned for every request
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Status and raw body of a GitHub response
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// GitHub REST client bound to a single API base URL
///
/// Cloning is cheap: the underlying `reqwest::Client` shares its
/// connection pool between clones.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    base_url: Url,
}

impl GitHubClient {
    /// Build a client from configuration
    ///
    /// The token (if any) is attached as a bearer credential on every request
    /// and marked sensitive so it never shows up in debug output.
    pub fn new(config: &GitHubConfig) -> GitHubResult<Self> {
        let base_url = Url::parse(&config.api_url)
            .map_err(|e| GitHubError::InvalidUrl(format!("{}: {}", config.api_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(GitHubError::InvalidUrl(format!(
                "{} cannot be used as an API base",
                config.api_url
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        if let Some(ref token) = config.token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
                GitHubError::ClientUnavailable("token contains invalid header characters".into())
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let mut builder = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers);
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let http = builder
            .build()
            .map_err(|e| GitHubError::ClientUnavailable(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    /// The API base every request path is appended to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append percent-encoded path segments to the API base
    pub fn endpoint(&self, segments: &[&str]) -> GitHubResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                GitHubError::InvalidUrl(format!("{} cannot be used as an API base", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a request and collect the status and body
    ///
    /// Only transport-level problems are errors here; a 404 or 422 comes
    /// back as an [`ApiResponse`] with the upstream body intact.
    #[instrument(skip(self, body), fields(method = %method, path = %segments.join("/")))]
    pub async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> GitHubResult<ApiResponse> {
        let url = self.endpoint(segments)?;
        debug!(%url, "sending GitHub request");

        let mut request = self.http.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(GitHubError::Transport)?;
        let status = response.status();
        let body = response.text().await.map_err(GitHubError::Body)?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "GitHub returned non-success status");
        }

        Ok(ApiResponse { status, body })
    }
}
