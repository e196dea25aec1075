//! # Session
//!
//! One run of the tool: locate repositories, match them to Jira projects,
//! let the operator review the list, build the issue content and create the
//! issues.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, warn};
use ticketcast_core::{Prompter, Settings, print_warning};

use crate::content::build_payloads;
use crate::errors::TicketcastError;
use crate::locator::{RepositorySource, locate};
use crate::matcher::match_projects;
use crate::reviewer::{ProjectEditor, review};
use crate::services::{IssueTracker, RepositoryHost};
use crate::submitter::{SubmittedIssue, submit};

/// Everything the operator asked for on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunRequest {
  pub topics: Vec<String>,
  pub csv_project_list: Option<PathBuf>,
  pub csv_jira_card: Option<PathBuf>,
  pub template: Option<String>,
  pub issue_type: Option<String>,
  pub summary: Option<String>,
  pub description: Option<String>,
}

/// Treat a blank flag value as absent
pub fn non_blank(value: Option<String>) -> Option<String> {
  value.filter(|v| !v.trim().is_empty())
}

impl RunRequest {
  /// Where repository names come from. A CSV list wins over topics.
  pub fn repository_source(&self) -> Result<RepositorySource, TicketcastError> {
    if let Some(path) = &self.csv_project_list {
      return Ok(RepositorySource::CsvFile(path.clone()));
    }
    if !self.topics.is_empty() {
      return Ok(RepositorySource::Topics(self.topics.clone()));
    }
    Err(TicketcastError::Usage(
      "no repository source specified: pass --topic or --csv_project_list".to_string(),
    ))
  }

  /// True when the run searches the code host
  pub fn needs_repository_host(&self) -> bool {
    matches!(self.repository_source(), Ok(RepositorySource::Topics(_)))
  }
}

/// Services and settings of a run
pub struct Session {
  request: RunRequest,
  settings: Settings,
  tracker: Box<dyn IssueTracker>,
  host: Option<Box<dyn RepositoryHost>>,
}

impl Session {
  pub fn new(
    request: RunRequest,
    settings: Settings,
    tracker: Box<dyn IssueTracker>,
    host: Option<Box<dyn RepositoryHost>>,
  ) -> Self {
    Self {
      request,
      settings,
      tracker,
      host,
    }
  }

  /// Run the whole workflow. Returns the created issues; an empty list means
  /// nothing was left to create issues on.
  pub fn run<F>(
    &self,
    editor: &dyn ProjectEditor,
    prompter: &mut dyn Prompter,
    report: F,
  ) -> Result<Vec<SubmittedIssue>>
  where
    F: FnMut(&SubmittedIssue),
  {
    let source = self.request.repository_source()?;
    let repo_names = locate(&source, self.host.as_deref())?;

    let projects = self.tracker.list_projects().context("Failed to list Jira projects")?;
    let matched = match_projects(&projects, &repo_names, &self.settings.matching.strip_suffixes);
    info!(
      "{} repositories matched {} of {} projects",
      repo_names.len(),
      matched.len(),
      projects.len()
    );
    if matched.is_empty() {
      warn!("No project matched {:?}", repo_names);
      print_warning("No Jira project matches the selected repositories");
      return Ok(Vec::new());
    }

    let reviewed = review(matched, editor)?;
    if reviewed.is_empty() {
      print_warning("Every project was removed during review, nothing to do");
      return Ok(Vec::new());
    }

    let payloads = build_payloads(&self.request, self.tracker.as_ref(), prompter, &self.settings.issues.types)?;
    submit(self.tracker.as_ref(), &reviewed, &payloads, report)
  }
}
