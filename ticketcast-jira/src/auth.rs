//! Authentication helpers for the Jira client.
//!
//! Jira credentials are the operator's account name plus a secret. The
//! secret can live in `~/.netrc` under the Jira host; otherwise the CLI asks
//! for it on every run.

use std::path::Path;

use anyhow::{Context, Result};
use ticketcast_core::creds::Credentials;
use ticketcast_core::creds::netrc::{get_netrc_path, normalize_host, parse_netrc_file};
use tokio::runtime::Runtime;
use tracing::debug;

use crate::{JiraClient, create_jira_client};

/// Look up Jira credentials for the given server in `~/.netrc`.
pub fn get_jira_netrc_credentials(home: &Path, jira_host: &str) -> Result<Option<Credentials>> {
  let machine = normalize_host(jira_host);
  let creds = parse_netrc_file(&get_netrc_path(home), &machine)?;
  debug!("Jira .netrc entry for {machine}: {}", creds.is_some());
  Ok(creds)
}

/// Creates a tokio runtime and an authenticated Jira client.
pub fn create_jira_runtime_and_client(jira_host: &str, credentials: &Credentials) -> Result<(Runtime, JiraClient)> {
  let rt = Runtime::new().context("Failed to create async runtime")?;
  let client = create_jira_client(jira_host, &credentials.username, &credentials.password)?;
  Ok((rt, client))
}
