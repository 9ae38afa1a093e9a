//! Client providers
//!
//! Tool handlers never build HTTP clients themselves. They ask a
//! [`ClientProvider`] for one on every call, which keeps credentials and
//! transport setup out of the handlers and lets tests point the tools at a
//! mock server.

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::debug;

use super::client::GitHubClient;
use super::error::{GitHubError, GitHubResult};
use crate::config::GitHubConfig;

/// Source of ready-to-use GitHub clients
///
/// Implementations are shared across concurrent tool calls and must be
/// safe to call from many tasks at once.
#[async_trait]
pub trait ClientProvider: Send + Sync {
    /// Obtain a client for the current call
    async fn client(&self) -> GitHubResult<GitHubClient>;
}

/// A pre-built client hands out clones of itself
#[async_trait]
impl ClientProvider for GitHubClient {
    async fn client(&self) -> GitHubResult<GitHubClient> {
        Ok(self.clone())
    }
}

/// Builds a client from configuration on first use and reuses it after
pub struct ConfiguredClientProvider {
    config: GitHubConfig,
    client: OnceCell<GitHubClient>,
}

impl ConfiguredClientProvider {
    pub fn new(config: GitHubConfig) -> Self {
        Self {
            config,
            client: OnceCell::new(),
        }
    }
}

#[async_trait]
impl ClientProvider for ConfiguredClientProvider {
    async fn client(&self) -> GitHubResult<GitHubClient> {
        if self.config.token.is_none() {
            return Err(GitHubError::ClientUnavailable(
                "no token configured (set GITHUB_PERSONAL_ACCESS_TOKEN)".into(),
            ));
        }

        self.client
            .get_or_try_init(|| async {
                debug!(api_url = %self.config.api_url, "building GitHub client");
                GitHubClient::new(&self.config)
            })
            .await
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_token_is_client_error() {
        let provider = ConfiguredClientProvider::new(GitHubConfig::default());
        let err = provider.client().await.unwrap_err();
        assert!(err.to_string().contains("failed to get GitHub client"));
    }

    #[tokio::test]
    async fn test_client_is_built_once() {
        let provider = ConfiguredClientProvider::new(GitHubConfig {
            token: Some("t0ken".into()),
            ..GitHubConfig::default()
        });
        let first = provider.client().await.unwrap();
        let second = provider.client().await.unwrap();
        assert_eq!(first.base_url(), second.base_url());
        assert!(provider.client.initialized());
    }

    #[tokio::test]
    async fn test_static_client_provider() {
        let client = GitHubClient::new(&GitHubConfig {
            api_url: "http://127.0.0.1:9".into(),
            ..GitHubConfig::default()
        })
        .unwrap();
        let provided = client.client().await.unwrap();
        assert_eq!(provided.base_url().as_str(), "http://127.0.0.1:9/");
    }
}
