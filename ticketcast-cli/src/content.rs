//! # Issue Content
//!
//! Builds the issue payloads of a run. They come from, in order of
//! precedence: a CSV card file, an existing issue used as template, the
//! three content flags, or interactive prompts.

use anyhow::Result;
use tracing::{debug, warn};
use ticketcast_core::Prompter;
use ticketcast_jira::IssueFields;

use crate::services::IssueTracker;
use crate::session::RunRequest;
use crate::tabular::read_issue_cards;

pub const TEMPLATE_QUESTION: &str = "Do you want to use an existing issue as template?";

/// Turn literal `\n` sequences typed on a single line into newlines
pub fn unescape_newlines(text: &str) -> String {
  text.replace("\\n", "\n")
}

/// Payloads for every project of the run
pub fn build_payloads(
  request: &RunRequest,
  tracker: &dyn IssueTracker,
  prompter: &mut dyn Prompter,
  allowed_types: &[String],
) -> Result<Vec<IssueFields>> {
  if let Some(path) = &request.csv_jira_card {
    debug!("Reading issue cards from {}", path.display());
    return read_issue_cards(path);
  }

  if let Some(key) = &request.template {
    return Ok(vec![duplicate_template(tracker, prompter, Some(key))?]);
  }

  if let (Some(issue_type), Some(summary), Some(description)) =
    (&request.issue_type, &request.summary, &request.description)
  {
    return Ok(vec![IssueFields::new(
      summary.as_str(),
      unescape_newlines(description),
      issue_type.as_str(),
    )]);
  }

  if prompter.confirm(TEMPLATE_QUESTION)? {
    Ok(vec![duplicate_template(tracker, prompter, None)?])
  } else {
    Ok(vec![prompt_fields(request, prompter, allowed_types)?])
  }
}

/// Copy an existing issue, asking for another key until one can be fetched
pub fn duplicate_template(
  tracker: &dyn IssueTracker,
  prompter: &mut dyn Prompter,
  initial_key: Option<&str>,
) -> Result<IssueFields> {
  let mut next_key = initial_key.map(str::to_string);

  loop {
    let key = match next_key.take() {
      Some(key) => key,
      None => prompter.input("Template issue key")?,
    };
    let key = key.trim();
    if key.is_empty() {
      continue;
    }

    match tracker.get_issue(key) {
      Ok(issue) => {
        debug!("Using {} as template", issue.key);
        return Ok(issue.as_template());
      }
      Err(e) => {
        warn!("Template {key} unavailable: {e:#}");
        prompter.notify(&format!("Cannot use {key} as template: {e}"));
      }
    }
  }
}

fn prompt_non_empty(prompter: &mut dyn Prompter, prompt: &str, complaint: &str) -> Result<String> {
  loop {
    let value = prompter.input(prompt)?;
    if !value.trim().is_empty() {
      return Ok(value);
    }
    prompter.notify(complaint);
  }
}

/// An empty allow-list accepts any non-empty type
fn is_allowed_type(value: &str, allowed_types: &[String]) -> bool {
  if allowed_types.is_empty() {
    return !value.is_empty();
  }
  allowed_types.iter().any(|allowed| allowed == value)
}

/// Ask for whatever content the flags did not provide
pub fn prompt_fields(request: &RunRequest, prompter: &mut dyn Prompter, allowed_types: &[String]) -> Result<IssueFields> {
  let mut candidate = request.issue_type.clone();
  let issue_type = loop {
    if let Some(value) = candidate
      .as_deref()
      .map(str::trim)
      .filter(|value| is_allowed_type(value, allowed_types))
    {
      break value.to_string();
    }
    prompter.notify(&format!("Possible issue types are: [{}]", allowed_types.join("; ")));
    candidate = Some(prompter.input("Issue type")?);
  };

  let summary = match &request.summary {
    Some(summary) => summary.clone(),
    None => prompt_non_empty(prompter, "Summary", "Summary shouldn't be empty")?,
  };

  let description = match &request.description {
    Some(description) => description.clone(),
    None => prompt_non_empty(prompter, "Description", "Description shouldn't be empty")?,
  };

  Ok(IssueFields::new(summary, unescape_newlines(&description), issue_type))
}
