//! # Credential Management
//!
//! Discovery and storage of credentials for the two remote services:
//! `.netrc` lookup for the Jira account secret and the GitHub token file
//! written on first run.

pub mod netrc;
pub mod token;

/// Represents credentials for a service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
  pub username: String,
  pub password: String,
}
