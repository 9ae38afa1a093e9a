//! Handler implementations for the sub-issue tools
//!
//! Every tool follows the same four steps: validate the arguments, build a
//! [`SubIssueRequest`], send it through a [`ClientProvider`], and adapt the
//! response with [`execute`]. The per-tool functions live in `subissue`.

mod subissue;

pub use subissue::*;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};

use crate::github::{ApiResponse, ClientProvider, GitHubError};
use crate::outcome::{CallFailure, ToolOutcome};
use crate::params::{IssueRef, SubIssueLink, SubIssuePriority};
use crate::types::common::ApiErrorBody;

/// How a non-success upstream status reaches the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusReporting {
    /// Tool result with `is_error` set
    ToolError,
    /// Protocol-level failure
    CallError,
}

/// One call against the sub-issue endpoints
#[derive(Debug, Clone, PartialEq)]
pub struct SubIssueRequest {
    /// Used in messages: "failed to {action}: ..."
    pub action: &'static str,
    pub method: Method,
    pub path: Vec<String>,
    pub body: Option<Value>,
    pub on_status: StatusReporting,
}

impl SubIssueRequest {
    /// `GET /repos/{owner}/{repo}/issues/{issue_number}/sub_issues`
    pub fn list(issue: &IssueRef) -> Self {
        Self {
            action: "list sub-issues",
            method: Method::GET,
            path: sub_issues_path(issue),
            body: None,
            on_status: StatusReporting::CallError,
        }
    }

    /// `PUT .../sub_issues` with `{sub_issue_id, replace_parent?}`
    pub fn add(link: &SubIssueLink) -> Self {
        let mut body = Map::new();
        body.insert("sub_issue_id".into(), json!(link.sub_issue_id));
        if let Some(replace_parent) = link.replace_parent {
            body.insert("replace_parent".into(), json!(replace_parent));
        }

        Self {
            action: "add sub-issue",
            method: Method::PUT,
            path: sub_issues_path(&link.parent),
            body: Some(Value::Object(body)),
            on_status: StatusReporting::ToolError,
        }
    }

    /// `DELETE .../sub_issues` with `{sub_issue_id}`
    pub fn remove(link: &SubIssueLink) -> Self {
        Self {
            action: "remove sub-issue",
            method: Method::DELETE,
            path: sub_issues_path(&link.parent),
            body: Some(json!({ "sub_issue_id": link.sub_issue_id })),
            on_status: StatusReporting::ToolError,
        }
    }

    /// `PATCH .../sub_issues/priority` with `{sub_issue_id, after_id?}`
    pub fn reprioritize(priority: &SubIssuePriority) -> Self {
        let mut body = Map::new();
        body.insert("sub_issue_id".into(), json!(priority.sub_issue_id));
        if let Some(after_id) = priority.after_id {
            body.insert("after_id".into(), json!(after_id));
        }

        let mut path = sub_issues_path(&priority.parent);
        path.push("priority".into());

        Self {
            action: "reprioritize sub-issue",
            method: Method::PATCH,
            path,
            body: Some(Value::Object(body)),
            on_status: StatusReporting::ToolError,
        }
    }
}

fn sub_issues_path(issue: &IssueRef) -> Vec<String> {
    vec![
        "repos".into(),
        issue.owner.clone(),
        issue.repo.clone(),
        "issues".into(),
        issue.issue_number.to_string(),
        "sub_issues".into(),
    ]
}

/// Send a request and adapt the response into a tool outcome
///
/// Non-success statuses carry the upstream body, either as
/// [`ToolOutcome::Failure`] or as a [`CallFailure`] depending on the
/// request's [`StatusReporting`]. On success the body must decode as `T`;
/// the upstream JSON itself is returned, compacted, so no field is lost.
/// Anything else that stops the call from completing is a [`CallFailure`].
pub async fn execute<T>(
    provider: &dyn ClientProvider,
    request: SubIssueRequest,
) -> Result<ToolOutcome, CallFailure>
where
    T: DeserializeOwned,
{
    let action = request.action;
    let fail = |source: GitHubError| CallFailure { action, source };

    let client = provider.client().await.map_err(fail)?;

    let segments: Vec<&str> = request.path.iter().map(String::as_str).collect();
    let response = client
        .send(request.method, &segments, request.body.as_ref())
        .await
        .map_err(fail)?;

    if !response.is_success() {
        let detail = upstream_detail(&response);
        return match request.on_status {
            StatusReporting::ToolError => Ok(ToolOutcome::Failure(format!(
                "failed to {}: {}",
                action, detail
            ))),
            StatusReporting::CallError => Err(fail(GitHubError::Status(detail))),
        };
    }

    let payload: Value =
        serde_json::from_str(&response.body).map_err(|e| fail(GitHubError::Decode(e)))?;
    serde_json::from_value::<T>(payload.clone()).map_err(|e| fail(GitHubError::Decode(e)))?;
    let text = serde_json::to_string(&payload).map_err(|e| fail(GitHubError::Encode(e)))?;

    Ok(ToolOutcome::Success(text))
}

/// Describe a non-success response for the caller
///
/// GitHub error documents put the human-readable part in `message`; that
/// goes first, followed by the body exactly as received.
fn upstream_detail(response: &ApiResponse) -> String {
    let raw = response.body.trim();
    if raw.is_empty() {
        return response.status.to_string();
    }

    match serde_json::from_str::<ApiErrorBody>(raw) {
        Ok(ApiErrorBody {
            message: Some(message),
        }) if !message.is_empty() => format!("{}\n{}", message, raw),
        _ => raw.to_string(),
    }
}
