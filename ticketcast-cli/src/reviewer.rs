//! # Interactive Reviewer
//!
//! Lets the operator prune the matched projects in a text editor before any
//! issue is created. The buffer starts with a `#` comment line followed by
//! one project name per line; whatever names are left when the editor exits
//! are kept. Names may themselves start with `#`.

use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::process::Command;

use anyhow::{Context, Result};
use tracing::{debug, info};
use ticketcast_jira::JiraProject;

use crate::consts::{DEFAULT_EDITOR, ENV_EDITOR_VARS};

/// First line of the review buffer
pub const REVIEW_HEADER: &str = "# Delete the lines of the projects that should not get the issue, then save and quit";

/// Something that lets the operator edit the review buffer
pub trait ProjectEditor {
  /// Return the buffer as left by the operator
  fn edit(&self, buffer: &str) -> Result<String>;
}

impl<F> ProjectEditor for F
where
  F: Fn(&str) -> Result<String>,
{
  fn edit(&self, buffer: &str) -> Result<String> {
    self(buffer)
  }
}

/// The operator's editor, run on a temporary file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalEditor {
  program: String,
  args: Vec<String>,
}

impl ExternalEditor {
  /// Editor named by `VISUAL`, then `EDITOR`, then the platform default
  pub fn from_env() -> Result<Self> {
    let mut values = ENV_EDITOR_VARS.iter().map(|var| std::env::var(var).ok());
    let visual = values.next().flatten();
    let editor = values.next().flatten();
    Self::from_command(&resolve_command(visual, editor))
  }

  /// Editor from a command line such as `code --wait`. Quotes and
  /// backslashes follow shell rules, so paths with spaces can be quoted.
  pub fn from_command(command: &str) -> Result<Self> {
    let parts = shell_words::split(command).with_context(|| format!("Invalid editor command '{command}'"))?;
    let mut parts = parts.into_iter();
    let program = parts
      .next()
      .ok_or_else(|| anyhow::anyhow!("The editor command is empty"))?;

    Ok(Self {
      program,
      args: parts.collect(),
    })
  }
}

/// First non-blank editor command, falling back to the platform default
pub fn resolve_command(visual: Option<String>, editor: Option<String>) -> String {
  [visual, editor]
    .into_iter()
    .flatten()
    .map(|value| value.trim().to_string())
    .find(|value| !value.is_empty())
    .unwrap_or_else(|| DEFAULT_EDITOR.to_string())
}

impl ProjectEditor for ExternalEditor {
  fn edit(&self, buffer: &str) -> Result<String> {
    let mut file = tempfile::Builder::new()
      .prefix("ticketcast-review-")
      .suffix(".txt")
      .tempfile()
      .context("Failed to create the review file")?;
    file
      .write_all(buffer.as_bytes())
      .context("Failed to write the review file")?;
    file.flush().context("Failed to write the review file")?;
    // Close our handle so the editor may replace the file.
    let path = file.into_temp_path();

    debug!("Opening {} with {} {:?}", path.display(), self.program, self.args);
    let status = Command::new(&self.program)
      .args(&self.args)
      .arg(&path)
      .status()
      .with_context(|| format!("Failed to start editor '{}'", self.program))?;

    if !status.success() {
      return Err(anyhow::anyhow!("Editor '{}' exited with {status}", self.program));
    }

    fs::read_to_string(&path).context("Failed to read back the review file")
  }
}

/// Review buffer listing `projects` in order
pub fn render_review_buffer(projects: &[JiraProject]) -> String {
  let mut buffer = String::from(REVIEW_HEADER);
  buffer.push('\n');
  for project in projects {
    buffer.push_str(&project.name);
    buffer.push('\n');
  }
  buffer
}

/// Project names left in an edited buffer. Only a leading [`REVIEW_HEADER`]
/// is skipped; every other non-blank line is a name, even one starting with `#`.
pub fn parse_review_buffer(buffer: &str) -> Vec<String> {
  let mut lines = buffer.lines().peekable();
  if lines.peek().is_some_and(|first| first.trim() == REVIEW_HEADER) {
    lines.next();
  }

  lines
    .map(str::trim)
    .filter(|line| !line.is_empty())
    .map(str::to_string)
    .collect()
}

/// Keep the projects whose name survived, in their original order. Names
/// are compared without surrounding whitespace.
pub fn apply_review(projects: &[JiraProject], kept_names: &[String]) -> Vec<JiraProject> {
  let kept: HashSet<&str> = kept_names.iter().map(|name| name.trim()).collect();
  let known: HashSet<&str> = projects.iter().map(|p| p.name.trim()).collect();

  for name in kept_names.iter().filter(|name| !known.contains(name.trim())) {
    debug!("Ignoring unknown project '{name}' from the review buffer");
  }

  projects
    .iter()
    .filter(|project| kept.contains(project.name.trim()))
    .cloned()
    .collect()
}

/// Let the operator prune `projects`. An empty list skips the editor.
pub fn review(projects: Vec<JiraProject>, editor: &dyn ProjectEditor) -> Result<Vec<JiraProject>> {
  if projects.is_empty() {
    return Ok(projects);
  }

  let edited = editor.edit(&render_review_buffer(&projects))?;
  let reviewed = apply_review(&projects, &parse_review_buffer(&edited));

  info!("{} of {} projects kept after review", reviewed.len(), projects.len());
  Ok(reviewed)
}
