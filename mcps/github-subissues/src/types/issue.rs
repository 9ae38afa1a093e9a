//! Issue type definitions
//!
//! The issue object returned by the REST API for the sub-issue endpoints.
//! Handlers decode responses into it to check their shape; what reaches
//! the caller is the upstream JSON, untouched.

use serde::Deserialize;

use super::common::{Label, User};

/// Represents a GitHub issue (parent or sub-issue)
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    /// Global issue id; this is what `sub_issue_id` refers to
    #[serde(default)]
    pub id: Option<u64>,

    /// Issue number (unique within repository)
    pub number: u64,

    /// Issue title
    pub title: String,

    /// Issue state (open, closed)
    #[serde(default)]
    pub state: Option<String>,

    /// Issue body (markdown)
    #[serde(default)]
    pub body: Option<String>,

    #[serde(default)]
    pub html_url: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    /// Issue author
    #[serde(default)]
    pub user: Option<User>,

    #[serde(default)]
    pub labels: Vec<Label>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_full_issue() {
        let issue: Issue = serde_json::from_value(json!({
            "id": 1234567,
            "number": 42,
            "title": "Parent Issue",
            "state": "open",
            "html_url": "https://github.com/owner/repo/issues/42",
            "user": { "login": "octocat", "id": 1, "type": "User" },
            "labels": [{ "name": "bug", "color": "d73a4a", "default": true }],
            "sub_issues_summary": { "total": 3, "completed": 1, "percent_completed": 33 },
            "locked": false
        }))
        .unwrap();

        assert_eq!(issue.id, Some(1234567));
        assert_eq!(issue.number, 42);
        assert_eq!(issue.user.as_ref().map(|u| u.login.as_str()), Some("octocat"));
        assert_eq!(issue.labels[0].name, "bug");
    }

    #[test]
    fn test_minimal_issue() {
        let issue: Issue = serde_json::from_value(json!({
            "number": 101,
            "title": "Sub-issue 1"
        }))
        .unwrap();

        assert!(issue.id.is_none());
        assert!(issue.labels.is_empty());
    }

    #[test]
    fn test_null_fields() {
        let issue: Issue = serde_json::from_value(json!({
            "number": 7,
            "title": "No body",
            "body": null,
            "user": null
        }))
        .unwrap();
        assert!(issue.body.is_none());
        assert!(issue.user.is_none());
    }

    #[test]
    fn test_missing_title_rejected() {
        assert!(serde_json::from_value::<Issue>(json!({ "number": 7 })).is_err());
    }
}
