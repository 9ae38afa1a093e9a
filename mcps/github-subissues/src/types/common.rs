//! Common types shared across GitHub entities

use serde::Deserialize;

/// A GitHub user as embedded in issue payloads (author, assignee, ...)
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    /// GitHub login/username
    pub login: String,

    #[serde(default)]
    pub id: Option<u64>,
}

/// A GitHub label
#[derive(Debug, Clone, Deserialize)]
pub struct Label {
    pub name: String,

    /// Hex without #
    #[serde(default)]
    pub color: Option<String>,
}

/// Error document GitHub returns alongside 4xx/5xx statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
