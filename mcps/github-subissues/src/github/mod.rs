//! GitHub REST API access
//!
//! This module provides the HTTP client the tools call through, the
//! provider abstraction handlers obtain it from, and the hard-failure error
//! type.

pub mod client;
pub mod error;
pub mod provider;

pub use client::{ApiResponse, GitHubClient};
pub use error::{GitHubError, GitHubResult};
pub use provider::{ClientProvider, ConfiguredClientProvider};
