//! # Issue Submitter
//!
//! Creates every payload on every reviewed project, projects first and
//! payloads nested. The first rejection stops the run; issues created before
//! it are left in place.

use anyhow::{Context, Result};
use tracing::{debug, info};
use ticketcast_jira::{IssueFields, JiraProject};

use crate::services::IssueTracker;

/// An issue created by the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedIssue {
  pub key: String,
  pub project_name: String,
}

/// Line reported for each created issue
pub fn confirmation_line(key: &str, project_name: &str) -> String {
  format!("Issue {key} created on {project_name}")
}

/// Create each payload on each project, calling `report` after every
/// successful creation.
pub fn submit<F>(
  tracker: &dyn IssueTracker,
  projects: &[JiraProject],
  payloads: &[IssueFields],
  mut report: F,
) -> Result<Vec<SubmittedIssue>>
where
  F: FnMut(&SubmittedIssue),
{
  let mut submitted = Vec::with_capacity(projects.len() * payloads.len());

  for project in projects {
    for payload in payloads {
      let fields = payload.for_project(&project.id);
      debug!("Creating '{}' on {} ({})", fields.summary, project.key, project.id);

      let created = tracker
        .create_issue(&fields)
        .with_context(|| format!("Failed to create '{}' on {}", fields.summary, project.name))?;

      let issue = SubmittedIssue {
        key: created.key,
        project_name: project.name.clone(),
      };
      report(&issue);
      submitted.push(issue);
    }
  }

  info!("Created {} issues", submitted.len());
  Ok(submitted)
}
