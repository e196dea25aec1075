//! In-memory stand-ins for the prompt and the remote services, shared by the
//! unit tests of the workflow modules.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use anyhow::Result;
use ticketcast_core::Prompter;
use ticketcast_jira::{CreatedIssue, IssueFields, JiraIssue, JiraIssueFields, JiraIssueType, JiraProject};

use crate::services::{IssueTracker, RepositoryHost};

/// Prompter answering from a fixed script. Running out of answers is an
/// error, so a test that loops forever fails instead of hanging.
pub struct ScriptedPrompter {
  answers: VecDeque<String>,
  prompts: Vec<String>,
  notes: Vec<String>,
}

impl ScriptedPrompter {
  pub fn new<I, S>(answers: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      answers: answers.into_iter().map(Into::into).collect(),
      prompts: Vec::new(),
      notes: Vec::new(),
    }
  }

  /// Every prompt shown, in order
  pub fn prompts(&self) -> &[String] {
    &self.prompts
  }

  /// Every notification shown, in order
  pub fn notes(&self) -> &[String] {
    &self.notes
  }

  /// Answers left unused
  pub fn remaining(&self) -> usize {
    self.answers.len()
  }

  fn next_answer(&mut self, prompt: &str) -> Result<String> {
    self.prompts.push(prompt.to_string());
    self
      .answers
      .pop_front()
      .ok_or_else(|| anyhow::anyhow!("no scripted answer left for '{prompt}'"))
  }
}

impl Prompter for ScriptedPrompter {
  fn confirm(&mut self, prompt: &str) -> Result<bool> {
    let answer = self.next_answer(prompt)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
  }

  fn input(&mut self, prompt: &str) -> Result<String> {
    self.next_answer(prompt)
  }

  fn password(&mut self, prompt: &str) -> Result<String> {
    self.next_answer(prompt)
  }

  fn notify(&mut self, message: &str) {
    self.notes.push(message.to_string());
  }
}

pub fn project(id: &str, key: &str, name: &str) -> JiraProject {
  JiraProject {
    id: id.to_string(),
    key: key.to_string(),
    name: name.to_string(),
  }
}

type TemplateFields = (Option<String>, Option<String>, Option<String>);

/// Issue tracker keeping everything in memory
#[derive(Default)]
pub struct FakeTracker {
  projects: Vec<JiraProject>,
  templates: HashMap<String, TemplateFields>,
  reject_from: Option<usize>,
  created: RefCell<Vec<IssueFields>>,
}

impl FakeTracker {
  pub fn with_projects(projects: Vec<JiraProject>) -> Self {
    Self {
      projects,
      ..Self::default()
    }
  }

  /// Register an issue that can be fetched by key
  pub fn with_template(mut self, key: &str, summary: Option<&str>, description: Option<&str>, issue_type: Option<&str>) -> Self {
    self.templates.insert(
      key.to_string(),
      (
        summary.map(str::to_string),
        description.map(str::to_string),
        issue_type.map(str::to_string),
      ),
    );
    self
  }

  /// Reject every creation once `count` issues exist
  pub fn rejecting_after(mut self, count: usize) -> Self {
    self.reject_from = Some(count);
    self
  }

  /// Payloads received by `create_issue`, in call order
  pub fn created(&self) -> Vec<IssueFields> {
    self.created.borrow().clone()
  }
}

impl IssueTracker for FakeTracker {
  fn list_projects(&self) -> Result<Vec<JiraProject>> {
    Ok(self.projects.clone())
  }

  fn get_issue(&self, issue_key: &str) -> Result<JiraIssue> {
    let (summary, description, issue_type) = self
      .templates
      .get(issue_key)
      .ok_or_else(|| anyhow::anyhow!("Issue {issue_key} not found"))?;

    Ok(JiraIssue {
      id: "1".to_string(),
      key: issue_key.to_string(),
      fields: JiraIssueFields {
        summary: summary.clone(),
        description: description.clone(),
        issuetype: issue_type.as_ref().map(|name| JiraIssueType {
          id: None,
          name: Some(name.clone()),
        }),
      },
    })
  }

  fn create_issue(&self, fields: &IssueFields) -> Result<CreatedIssue> {
    let mut created = self.created.borrow_mut();
    if self.reject_from.is_some_and(|limit| created.len() >= limit) {
      return Err(anyhow::anyhow!("Unexpected error: HTTP 400 Bad Request - issuetype: invalid"));
    }

    let project_id = fields.project.as_ref().map(|p| p.id.as_str()).unwrap_or_default();
    let project_key = self
      .projects
      .iter()
      .find(|p| p.id == project_id)
      .map_or("UNKNOWN", |p| p.key.as_str());

    created.push(fields.clone());
    let number = created.len();
    Ok(CreatedIssue {
      id: number.to_string(),
      key: format!("{project_key}-{number}"),
      self_url: None,
    })
  }
}

/// Code host returning a fixed answer and recording the tokens it was asked
#[derive(Default)]
pub struct FakeHost {
  names: Vec<String>,
  queries: RefCell<Vec<String>>,
}

impl FakeHost {
  pub fn new(names: &[&str]) -> Self {
    Self {
      names: names.iter().map(|n| n.to_string()).collect(),
      queries: RefCell::default(),
    }
  }

  pub fn queries(&self) -> Vec<String> {
    self.queries.borrow().clone()
  }
}

impl RepositoryHost for FakeHost {
  fn search_repositories_by_topic(&self, topic_token: &str) -> Result<Vec<String>> {
    self.queries.borrow_mut().push(topic_token.to_string());
    Ok(self.names.clone())
  }
}
