//! Configuration loading for github-subissues-mcp
//!
//! Configuration is loaded from:
//! 1. Environment variable SUBISSUES_CONFIG_PATH
//! 2. ~/.binks/github-subissues.toml
//! 3. Default values
//!
//! Environment variables `GITHUB_PERSONAL_ACCESS_TOKEN` (or `GITHUB_TOKEN`),
//! `GITHUB_API_URL` and `GITHUB_READ_ONLY` override whatever the file says.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// GitHub API access
    #[serde(default)]
    pub github: GitHubConfig,
    /// Tool exposure
    #[serde(default)]
    pub server: ServerConfig,
}

/// GitHub API configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct GitHubConfig {
    /// REST API base URL (GitHub Enterprise: https://HOST/api/v3)
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Personal access token or app token
    #[serde(default)]
    pub token: Option<String>,
    /// User-Agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Per-request timeout; unset leaves it to the transport
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

/// Server behaviour configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Only expose tools that do not modify GitHub state
    #[serde(default)]
    pub read_only: bool,
}

// Default value functions
fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_user_agent() -> String {
    concat!("github-subissues-mcp/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            token: None,
            user_agent: default_user_agent(),
            request_timeout_secs: None,
        }
    }
}

// Hand-written so the token never ends up in logs
impl std::fmt::Debug for GitHubConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubConfig")
            .field("api_url", &self.api_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("user_agent", &self.user_agent)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl Config {
    /// Load configuration from file or use defaults, then apply env overrides
    pub fn load() -> Result<Self> {
        Self::load_from(Self::find_config_path().as_deref())
    }

    /// Load configuration from an explicit path (if any), then apply env overrides
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) if path.exists() => {
                tracing::info!("Loading config from: {}", path.display());
                Self::from_file(path)?
            }
            Some(_) => {
                tracing::info!("Config file not found, using defaults");
                Self::default()
            }
            None => {
                tracing::info!("No config path specified, using defaults");
                Self::default()
            }
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Parse a TOML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Apply environment-style overrides through a lookup function
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let token =
            non_blank("GITHUB_PERSONAL_ACCESS_TOKEN").or_else(|| non_blank("GITHUB_TOKEN"));
        if let Some(token) = token {
            self.github.token = Some(token);
        }

        if let Some(url) = non_blank("GITHUB_API_URL") {
            self.github.api_url = url;
        }

        if let Some(flag) = lookup("GITHUB_READ_ONLY") {
            self.server.read_only = matches!(
                flag.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }
    }

    /// Find the configuration file path
    fn find_config_path() -> Option<PathBuf> {
        // 1. Check environment variable
        if let Ok(path) = std::env::var("SUBISSUES_CONFIG_PATH") {
            return Some(PathBuf::from(path));
        }

        // 2. Check ~/.binks/github-subissues.toml
        if let Ok(home) = std::env::var("HOME") {
            let path = PathBuf::from(home)
                .join(".binks")
                .join("github-subissues.toml");
            return Some(path);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.github.api_url, "https://api.github.com");
        assert!(config.github.token.is_none());
        assert!(config.github.user_agent.starts_with("github-subissues-mcp/"));
        assert!(!config.server.read_only);
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: Config = toml::from_str(
            r#"
            [github]
            api_url = "https://ghe.example.com/api/v3"
            request_timeout_secs = 30

            [server]
            read_only = true
            "#,
        )
        .unwrap();

        assert_eq!(config.github.api_url, "https://ghe.example.com/api/v3");
        assert_eq!(config.github.request_timeout_secs, Some(30));
        assert!(config.github.user_agent.starts_with("github-subissues-mcp/"));
        assert!(config.server.read_only);
    }

    #[test]
    fn test_personal_access_token_wins() {
        let mut config = Config::default();
        config.apply_overrides(lookup_from(&[
            ("GITHUB_PERSONAL_ACCESS_TOKEN", "pat"),
            ("GITHUB_TOKEN", "fallback"),
        ]));
        assert_eq!(config.github.token.as_deref(), Some("pat"));
    }

    #[test]
    fn test_github_token_fallback_and_blank_values() {
        let mut config = Config::default();
        config.apply_overrides(lookup_from(&[
            ("GITHUB_PERSONAL_ACCESS_TOKEN", "  "),
            ("GITHUB_TOKEN", "fallback"),
            ("GITHUB_API_URL", ""),
        ]));
        assert_eq!(config.github.token.as_deref(), Some("fallback"));
        assert_eq!(config.github.api_url, "https://api.github.com");
    }

    #[test]
    fn test_blank_tokens_leave_config_value() {
        let mut config = Config::default();
        config.github.token = Some("from-file".into());
        config.apply_overrides(lookup_from(&[
            ("GITHUB_PERSONAL_ACCESS_TOKEN", ""),
            ("GITHUB_TOKEN", " "),
        ]));
        assert_eq!(config.github.token.as_deref(), Some("from-file"));
    }

    #[test]
    fn test_read_only_flag_values() {
        for (value, expected) in [("1", true), ("TRUE", true), ("off", false), ("0", false)] {
            let mut config = Config::default();
            config.apply_overrides(lookup_from(&[("GITHUB_READ_ONLY", value)]));
            assert_eq!(config.server.read_only, expected, "value {value}");
        }
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = GitHubConfig {
            token: Some("ghp_secret".into()),
            ..GitHubConfig::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("ghp_secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config =
            Config::load_from(Some(Path::new("/nonexistent/github-subissues.toml"))).unwrap();
        assert!(!config.github.api_url.is_empty());
    }
}
