//! Sub-issue tool parameter types
//!
//! The `*Params` structs are what the tools declare and receive. Their
//! fields stay as raw JSON so a missing or mistyped argument can be reported
//! as a tool result instead of a protocol-level rejection; the schema still
//! advertises the intended types and required fields. `validate` turns them
//! into the typed requests the handlers work with.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::extract::{optional_bool, optional_u64, required_string, required_u64, ParamError};

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListSubIssuesParams {
    #[schemars(with = "String", description = "The account owner of the repository")]
    pub owner: Option<Value>,
    #[schemars(with = "String", description = "The name of the repository")]
    pub repo: Option<Value>,
    #[schemars(with = "u64", description = "The number that identifies the issue")]
    pub issue_number: Option<Value>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct AddSubIssueParams {
    #[schemars(with = "String", description = "The account owner of the repository")]
    pub owner: Option<Value>,
    #[schemars(with = "String", description = "The name of the repository")]
    pub repo: Option<Value>,
    #[schemars(with = "u64", description = "The number that identifies the parent issue")]
    pub issue_number: Option<Value>,
    #[schemars(
        with = "u64",
        description = "The ID of the issue to add as a sub-issue (the issue id, not its number)"
    )]
    pub sub_issue_id: Option<Value>,
    #[schemars(
        with = "Option<bool>",
        description = "When true, move the sub-issue away from its current parent"
    )]
    pub replace_parent: Option<Value>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct RemoveSubIssueParams {
    #[schemars(with = "String", description = "The account owner of the repository")]
    pub owner: Option<Value>,
    #[schemars(with = "String", description = "The name of the repository")]
    pub repo: Option<Value>,
    #[schemars(with = "u64", description = "The number that identifies the parent issue")]
    pub issue_number: Option<Value>,
    #[schemars(with = "u64", description = "The ID of the sub-issue to remove")]
    pub sub_issue_id: Option<Value>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ReprioritizeSubIssueParams {
    #[schemars(with = "String", description = "The account owner of the repository")]
    pub owner: Option<Value>,
    #[schemars(with = "String", description = "The name of the repository")]
    pub repo: Option<Value>,
    #[schemars(with = "u64", description = "The number that identifies the parent issue")]
    pub issue_number: Option<Value>,
    #[schemars(with = "u64", description = "The ID of the sub-issue to reprioritize")]
    pub sub_issue_id: Option<Value>,
    #[schemars(
        with = "Option<u64>",
        description = "The ID of the sub-issue to place this sub-issue after. If not provided, the sub-issue will be moved to the top."
    )]
    pub after_id: Option<Value>,
}

// ============================================================================
// Validated requests
// ============================================================================

/// An issue addressed by repository and number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRef {
    pub owner: String,
    pub repo: String,
    pub issue_number: u64,
}

impl IssueRef {
    fn extract(
        owner: Option<&Value>,
        repo: Option<&Value>,
        issue_number: Option<&Value>,
    ) -> Result<Self, ParamError> {
        Ok(Self {
            owner: required_string(owner, "owner")?,
            repo: required_string(repo, "repo")?,
            issue_number: required_u64(issue_number, "issue_number")?,
        })
    }
}

/// Link or unlink a sub-issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubIssueLink {
    pub parent: IssueRef,
    pub sub_issue_id: u64,
    pub replace_parent: Option<bool>,
}

/// Move a sub-issue within its parent's priority order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubIssuePriority {
    pub parent: IssueRef,
    pub sub_issue_id: u64,
    /// `None` moves the sub-issue to the top
    pub after_id: Option<u64>,
}

impl ListSubIssuesParams {
    pub fn validate(&self) -> Result<IssueRef, ParamError> {
        IssueRef::extract(
            self.owner.as_ref(),
            self.repo.as_ref(),
            self.issue_number.as_ref(),
        )
    }
}

impl AddSubIssueParams {
    pub fn validate(&self) -> Result<SubIssueLink, ParamError> {
        let parent = IssueRef::extract(
            self.owner.as_ref(),
            self.repo.as_ref(),
            self.issue_number.as_ref(),
        )?;
        let sub_issue_id = required_u64(self.sub_issue_id.as_ref(), "sub_issue_id")?;
        let replace_parent = optional_bool(self.replace_parent.as_ref(), "replace_parent")?;
        Ok(SubIssueLink {
            parent,
            sub_issue_id,
            replace_parent,
        })
    }
}

impl RemoveSubIssueParams {
    pub fn validate(&self) -> Result<SubIssueLink, ParamError> {
        let parent = IssueRef::extract(
            self.owner.as_ref(),
            self.repo.as_ref(),
            self.issue_number.as_ref(),
        )?;
        let sub_issue_id = required_u64(self.sub_issue_id.as_ref(), "sub_issue_id")?;
        Ok(SubIssueLink {
            parent,
            sub_issue_id,
            replace_parent: None,
        })
    }
}

impl ReprioritizeSubIssueParams {
    pub fn validate(&self) -> Result<SubIssuePriority, ParamError> {
        let parent = IssueRef::extract(
            self.owner.as_ref(),
            self.repo.as_ref(),
            self.issue_number.as_ref(),
        )?;
        let sub_issue_id = required_u64(self.sub_issue_id.as_ref(), "sub_issue_id")?;
        let after_id = optional_u64(self.after_id.as_ref(), "after_id")?;
        Ok(SubIssuePriority {
            parent,
            sub_issue_id,
            after_id,
        })
    }
}
