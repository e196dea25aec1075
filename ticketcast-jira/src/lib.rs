//! # Jira API Client
//!
//! Provides Jira REST API integration for the operations ticketcast needs:
//! listing visible projects, reading an issue to use as a template and
//! creating issues.

pub mod auth;
mod client;
pub mod consts;
mod endpoints;
pub mod models;

// Re-export the client
pub use client::{JiraClient, create_jira_client};
// Re-export models
pub use models::{
  CreatedIssue, IssueFields, IssueTypeRef, JiraAuth, JiraIssue, JiraIssueFields, JiraIssueType, JiraProject,
  ProjectRef,
};
