//! # GitHub API Client
//!
//! Provides GitHub REST API integration for repository search by topic and
//! for issuing the personal access token ticketcast stores on first run.

pub mod auth;
pub mod client;
pub mod consts;
pub mod endpoints;
pub mod models;

// Re-export the client
pub use client::{GitHubClient, create_github_client};
// Re-export models
pub use models::{AuthorizationRequest, GitHubAuth, GitHubAuthorization, GitHubRepository, RepositorySearchResults};
// Re-export endpoint helpers
pub use endpoints::search::topic_search_query;
