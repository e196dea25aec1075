use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::consts::{FALLBACK_DESCRIPTION, FALLBACK_ISSUE_TYPE, FALLBACK_SUMMARY};

/// Represents Jira authentication credentials
#[derive(Clone)]
pub struct JiraAuth {
  pub username: String,
  pub api_token: String,
}

/// A Jira project as returned by `GET /rest/api/2/project`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JiraProject {
  pub id: String,
  pub key: String,
  pub name: String,
}

/// Represents a Jira issue
#[derive(Debug, Deserialize)]
pub struct JiraIssue {
  #[allow(dead_code)]
  pub id: String,
  pub key: String,
  pub fields: JiraIssueFields,
}

/// The subset of issue fields ticketcast reads. Any of them may be null on a
/// real server.
#[derive(Debug, Default, Deserialize)]
pub struct JiraIssueFields {
  #[serde(default)]
  pub summary: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub issuetype: Option<JiraIssueType>,
}

/// Represents a Jira issue type
#[derive(Debug, Deserialize)]
pub struct JiraIssueType {
  #[allow(dead_code)]
  #[serde(default)]
  pub id: Option<String>,
  #[serde(default)]
  pub name: Option<String>,
}

/// Reference to an issue type by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueTypeRef {
  pub name: String,
}

/// Reference to a project by id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRef {
  pub id: String,
}

/// The `fields` object sent to create an issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueFields {
  pub summary: String,
  pub description: String,
  pub issuetype: IssueTypeRef,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub project: Option<ProjectRef>,
}

impl IssueFields {
  /// Build a payload without a target project
  pub fn new(summary: impl Into<String>, description: impl Into<String>, issue_type: impl Into<String>) -> Self {
    Self {
      summary: summary.into(),
      description: description.into(),
      issuetype: IssueTypeRef {
        name: issue_type.into(),
      },
      project: None,
    }
  }

  /// Copy of this payload targeting the given project
  pub fn for_project(&self, project_id: &str) -> Self {
    Self {
      project: Some(ProjectRef {
        id: project_id.to_string(),
      }),
      ..self.clone()
    }
  }
}

/// Request body for `POST /rest/api/2/issue`
#[derive(Debug, Serialize)]
pub(crate) struct CreateIssueRequest<'a> {
  pub fields: &'a IssueFields,
}

/// Response of a successful issue creation
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedIssue {
  pub id: String,
  pub key: String,
  #[serde(rename = "self", default)]
  pub self_url: Option<String>,
}

/// Error body returned by Jira on 4xx responses
#[derive(Debug, Default, Deserialize)]
pub(crate) struct JiraErrorResponse {
  #[serde(rename = "errorMessages", default)]
  pub error_messages: Vec<String>,
  #[serde(default)]
  pub errors: BTreeMap<String, String>,
}

impl JiraErrorResponse {
  /// Flatten the messages and per-field errors into one line
  pub fn summary(&self) -> String {
    self
      .error_messages
      .iter()
      .cloned()
      .chain(self.errors.iter().map(|(field, message)| format!("{field}: {message}")))
      .collect::<Vec<_>>()
      .join("; ")
  }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
  value.filter(|v| !v.trim().is_empty())
}

impl JiraIssue {
  /// Payload duplicating this issue. Empty fields fall back to `TODO`,
  /// `TODO` and `Task`.
  pub fn as_template(&self) -> IssueFields {
    let fields = &self.fields;
    let issue_type = fields.issuetype.as_ref().and_then(|t| t.name.as_deref());

    IssueFields::new(
      non_empty(fields.summary.as_deref()).unwrap_or(FALLBACK_SUMMARY),
      non_empty(fields.description.as_deref()).unwrap_or(FALLBACK_DESCRIPTION),
      non_empty(issue_type).unwrap_or(FALLBACK_ISSUE_TYPE),
    )
  }
}
