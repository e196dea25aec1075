//! # Remote Service Capabilities
//!
//! The workflow components only need a handful of operations from each
//! remote service. They see them through these traits, so the orchestrator
//! can run against the real clients or against in-memory fakes.

use anyhow::Result;
use ticketcast_jira::{CreatedIssue, IssueFields, JiraIssue, JiraProject};

/// Issue tracker operations used by a run
pub trait IssueTracker {
  /// Every project visible to the authenticated account, in tracker order
  fn list_projects(&self) -> Result<Vec<JiraProject>>;

  /// Fetch a single issue by key
  fn get_issue(&self, issue_key: &str) -> Result<JiraIssue>;

  /// Create an issue; `fields.project` must be set
  fn create_issue(&self, fields: &IssueFields) -> Result<CreatedIssue>;
}

/// Code host operations used by a run
pub trait RepositoryHost {
  /// Names of the repositories carrying every topic of a space-separated token
  fn search_repositories_by_topic(&self, topic_token: &str) -> Result<Vec<String>>;
}
