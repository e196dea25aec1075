//! # Client Creation
//!
//! Builds the authenticated Jira and GitHub clients for a run and adapts them
//! to the [`IssueTracker`] and [`RepositoryHost`] capabilities. Each adapter
//! owns the tokio runtime its client runs on and drives every call to
//! completion with `block_on`.

use std::path::Path;

use anyhow::{Context, Result};
use tokio::runtime::Runtime;
use tracing::{debug, info};
use ticketcast_core::Prompter;
use ticketcast_gh::GitHubClient;
use ticketcast_gh::auth::create_github_runtime_and_client;
use ticketcast_jira::auth::create_jira_runtime_and_client;
use ticketcast_jira::{CreatedIssue, IssueFields, JiraClient, JiraIssue, JiraProject};

use crate::creds::{ensure_github_token, get_jira_credentials, github_username};
use crate::services::{IssueTracker, RepositoryHost};

/// Jira client bound to its runtime
pub struct JiraTracker {
  rt: Runtime,
  client: JiraClient,
}

impl JiraTracker {
  pub fn new(rt: Runtime, client: JiraClient) -> Self {
    Self { rt, client }
  }
}

impl IssueTracker for JiraTracker {
  fn list_projects(&self) -> Result<Vec<JiraProject>> {
    self.rt.block_on(self.client.list_projects())
  }

  fn get_issue(&self, issue_key: &str) -> Result<JiraIssue> {
    self.rt.block_on(self.client.get_issue(issue_key))
  }

  fn create_issue(&self, fields: &IssueFields) -> Result<CreatedIssue> {
    self.rt.block_on(self.client.create_issue(fields))
  }
}

/// GitHub client bound to its runtime
pub struct GitHubHost {
  rt: Runtime,
  client: GitHubClient,
}

impl GitHubHost {
  pub fn new(rt: Runtime, client: GitHubClient) -> Self {
    Self { rt, client }
  }
}

impl RepositoryHost for GitHubHost {
  fn search_repositories_by_topic(&self, topic_token: &str) -> Result<Vec<String>> {
    self.rt.block_on(self.client.search_repositories_by_topic(topic_token))
  }
}

/// Connect to Jira and check that the credentials are accepted.
pub fn connect_jira(
  jira_host: &str,
  home: Option<&Path>,
  configured_username: Option<&str>,
  prompter: &mut dyn Prompter,
) -> Result<JiraTracker> {
  let credentials = get_jira_credentials(jira_host, home, configured_username, prompter)?;
  let (rt, client) = create_jira_runtime_and_client(jira_host, &credentials)?;

  let connected = rt
    .block_on(client.test_connection())
    .with_context(|| format!("Failed to reach Jira at {jira_host}"))?;
  if !connected {
    return Err(anyhow::anyhow!(
      "Jira rejected the credentials of {} on {jira_host}",
      credentials.username
    ));
  }

  info!("Connected to Jira at {}", client.base_url());
  Ok(JiraTracker::new(rt, client))
}

/// Connect to GitHub, provisioning a token on first use.
pub fn connect_github(token_path: &Path, api_url: &str, prompter: &mut dyn Prompter) -> Result<GitHubHost> {
  let username = github_username();
  debug!("GitHub username candidate: {:?}", username);

  let stored = ensure_github_token(token_path, prompter, username.as_deref(), |login, password| {
    let rt = Runtime::new().context("Failed to create async runtime")?;
    let client = GitHubClient::anonymous().with_base_url(api_url);
    rt.block_on(ticketcast_gh::auth::issue_token(&client, login, password))
  })?;

  let (rt, client) = create_github_runtime_and_client(&stored.token, api_url)?;
  Ok(GitHubHost::new(rt, client))
}
