//! # Jira Issue Endpoints
//!
//! Fetching an issue to use as a template and creating new issues.

use anyhow::{Context, Result};
use reqwest::StatusCode;
use tracing::{debug, instrument};

use crate::client::{JiraClient, unexpected_status};
use crate::models::{CreateIssueRequest, CreatedIssue, IssueFields, JiraIssue};

/// Issue keys (`BUS-12`) and ids (`10042`) only hold ASCII letters, digits,
/// `-` and `_`; anything else would change the request path.
fn check_issue_key(issue_key: &str) -> Result<()> {
  let valid = !issue_key.is_empty()
    && issue_key
      .chars()
      .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
  if valid {
    Ok(())
  } else {
    Err(anyhow::anyhow!("Invalid issue key '{issue_key}'"))
  }
}

impl JiraClient {
  /// Get a Jira issue by key
  #[instrument(skip(self), level = "debug")]
  pub async fn get_issue(&self, issue_key: &str) -> Result<JiraIssue> {
    check_issue_key(issue_key)?;

    let response = self
      .get(&format!("/rest/api/2/issue/{issue_key}"))
      .send()
      .await
      .context("Failed to fetch Jira issue")?;

    match response.status() {
      StatusCode::OK => {
        let issue = response
          .json::<JiraIssue>()
          .await
          .context("Failed to parse Jira issue")?;
        Ok(issue)
      }
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Authentication failed. Please check your Jira credentials."
      )),
      StatusCode::NOT_FOUND => Err(anyhow::anyhow!("Issue {} not found", issue_key)),
      _ => Err(unexpected_status(response).await),
    }
  }

  /// Create an issue. The payload must already carry its target project.
  #[instrument(skip(self, fields), level = "debug")]
  pub async fn create_issue(&self, fields: &IssueFields) -> Result<CreatedIssue> {
    let response = self
      .post("/rest/api/2/issue")
      .json(&CreateIssueRequest { fields })
      .send()
      .await
      .context("Failed to create Jira issue")?;

    match response.status() {
      StatusCode::CREATED | StatusCode::OK => {
        let created = response
          .json::<CreatedIssue>()
          .await
          .context("Failed to parse created Jira issue")?;
        debug!("Created issue {}", created.key);
        Ok(created)
      }
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Authentication failed. Please check your Jira credentials."
      )),
      _ => Err(
        unexpected_status(response)
          .await
          .context("Jira rejected the issue"),
      ),
    }
  }
}
