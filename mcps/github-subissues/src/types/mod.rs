//! Type definitions for GitHub entities
//!
//! Rust structs for the GitHub objects the sub-issue endpoints return.

pub mod common;
pub mod issue;

pub use common::{ApiErrorBody, Label, User};
pub use issue::Issue;
