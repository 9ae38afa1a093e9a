//! Sub-issue handler implementations

use tracing::info;

use super::{execute, SubIssueRequest};
use crate::github::ClientProvider;
use crate::outcome::{CallFailure, ToolOutcome};
use crate::params::{
    AddSubIssueParams, ListSubIssuesParams, RemoveSubIssueParams, ReprioritizeSubIssueParams,
};
use crate::types::Issue;

/// List the sub-issues of an issue, in the order GitHub returns them
pub async fn list_sub_issues(
    provider: &dyn ClientProvider,
    params: ListSubIssuesParams,
) -> Result<ToolOutcome, CallFailure> {
    let issue = match params.validate() {
        Ok(issue) => issue,
        Err(e) => return Ok(e.into()),
    };

    info!(
        owner = %issue.owner,
        repo = %issue.repo,
        issue_number = issue.issue_number,
        "listing sub-issues"
    );

    execute::<Vec<Issue>>(provider, SubIssueRequest::list(&issue)).await
}

/// Attach an existing issue as a sub-issue
pub async fn add_sub_issue(
    provider: &dyn ClientProvider,
    params: AddSubIssueParams,
) -> Result<ToolOutcome, CallFailure> {
    let link = match params.validate() {
        Ok(link) => link,
        Err(e) => return Ok(e.into()),
    };

    info!(
        owner = %link.parent.owner,
        repo = %link.parent.repo,
        issue_number = link.parent.issue_number,
        sub_issue_id = link.sub_issue_id,
        "adding sub-issue"
    );

    execute::<Issue>(provider, SubIssueRequest::add(&link)).await
}

/// Detach a sub-issue from its parent
pub async fn remove_sub_issue(
    provider: &dyn ClientProvider,
    params: RemoveSubIssueParams,
) -> Result<ToolOutcome, CallFailure> {
    let link = match params.validate() {
        Ok(link) => link,
        Err(e) => return Ok(e.into()),
    };

    info!(
        owner = %link.parent.owner,
        repo = %link.parent.repo,
        issue_number = link.parent.issue_number,
        sub_issue_id = link.sub_issue_id,
        "removing sub-issue"
    );

    execute::<Issue>(provider, SubIssueRequest::remove(&link)).await
}

/// Move a sub-issue after a sibling, or to the top when no sibling is given
pub async fn reprioritize_sub_issue(
    provider: &dyn ClientProvider,
    params: ReprioritizeSubIssueParams,
) -> Result<ToolOutcome, CallFailure> {
    let priority = match params.validate() {
        Ok(priority) => priority,
        Err(e) => return Ok(e.into()),
    };

    info!(
        owner = %priority.parent.owner,
        repo = %priority.parent.repo,
        issue_number = priority.parent.issue_number,
        sub_issue_id = priority.sub_issue_id,
        after_id = ?priority.after_id,
        "reprioritizing sub-issue"
    );

    execute::<Issue>(provider, SubIssueRequest::reprioritize(&priority)).await
}
