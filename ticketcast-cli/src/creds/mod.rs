//! # Credential Resolution
//!
//! Works out the Jira account and the GitHub token for a run. Jira secrets
//! come from `~/.netrc` or a hidden prompt; the GitHub token comes from the
//! token file, which is provisioned on first use.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};
use ticketcast_core::Prompter;
use ticketcast_core::creds::Credentials;
use ticketcast_core::creds::token::{StoredToken, read_token_file, write_token_file};
use ticketcast_jira::auth::get_jira_netrc_credentials;

/// Name of the account running the process
pub fn os_username() -> Option<String> {
  ["USER", "USERNAME"]
    .iter()
    .filter_map(|var| std::env::var(var).ok())
    .map(|value| value.trim().to_string())
    .find(|value| !value.is_empty())
}

/// Resolve the Jira account for `jira_host`.
///
/// A `.netrc` entry for the host wins. Otherwise the username comes from the
/// settings or the OS account, and the secret is asked for with a hidden
/// prompt.
pub fn get_jira_credentials(
  jira_host: &str,
  home: Option<&Path>,
  configured_username: Option<&str>,
  prompter: &mut dyn Prompter,
) -> Result<Credentials> {
  if let Some(home) = home
    && let Some(credentials) = get_jira_netrc_credentials(home, jira_host)?
  {
    debug!("Using .netrc credentials for {}", credentials.username);
    return Ok(credentials);
  }

  let username = match configured_username.map(str::trim).filter(|name| !name.is_empty()) {
    Some(name) => name.to_string(),
    None => match os_username() {
      Some(name) => name,
      None => prompter.input("Jira username")?.trim().to_string(),
    },
  };
  if username.is_empty() {
    return Err(anyhow::anyhow!("A Jira username is required"));
  }

  let password = prompter.password(&format!("Jira password for {username}"))?;
  Ok(Credentials { username, password })
}

/// Username used to request a GitHub token.
///
/// Reads `github.user`, then `user.name` from the git configuration, then
/// falls back to the OS account. Git configuration failures are ignored.
pub fn github_username() -> Option<String> {
  let from_git = git2::Config::open_default().ok().and_then(|config| {
    ["github.user", "user.name"]
      .iter()
      .filter_map(|key| config.get_string(key).ok())
      .map(|value| value.trim().to_string())
      .find(|value| !value.is_empty())
  });

  from_git.or_else(os_username)
}

/// Return the stored GitHub token, requesting and storing a new one when the
/// token file is absent.
///
/// `issue` exchanges a username and password for a token. It is only called
/// when both are non-empty.
pub fn ensure_github_token<F>(
  token_path: &Path,
  prompter: &mut dyn Prompter,
  username: Option<&str>,
  issue: F,
) -> Result<StoredToken>
where
  F: FnOnce(&str, &str) -> Result<StoredToken>,
{
  if let Some(stored) = read_token_file(token_path)? {
    debug!("Using GitHub token from {}", token_path.display());
    return Ok(stored);
  }

  prompter.notify("No GitHub token stored yet, requesting a new one");

  let username = username.map(str::trim).unwrap_or_default();
  if username.is_empty() {
    warn!("No GitHub username found in git configuration or environment");
    return Err(anyhow::anyhow!(
      "Cannot request a GitHub token without a username; set `git config --global github.user`"
    ));
  }

  let password = prompter.password(&format!("GitHub password for {username}"))?;
  if password.is_empty() {
    return Err(anyhow::anyhow!("Cannot request a GitHub token with an empty password"));
  }

  let stored = issue(username, &password)?;
  write_token_file(token_path, &stored)
    .with_context(|| format!("Failed to store the GitHub token in {}", token_path.display()))?;
  info!("GitHub token stored in {}", token_path.display());

  Ok(stored)
}

#[cfg(test)]
mod tests {
  use tempfile::TempDir;
  use ticketcast_test_utils::{EnvVarGuard, HomeEnvTestGuard};

  use super::*;
  use crate::testing::ScriptedPrompter;

  #[test]
  fn test_jira_credentials_from_netrc() {
    let home = HomeEnvTestGuard::new();
    std::fs::write(
      home.home_path(".netrc"),
      "machine jira.example.com login alice password s3cret\n",
    )
    .unwrap();

    let mut prompter = ScriptedPrompter::new(Vec::<String>::new());
    let credentials =
      get_jira_credentials("https://jira.example.com", Some(home.home_dir()), None, &mut prompter).unwrap();

    assert_eq!(credentials.username, "alice");
    assert_eq!(credentials.password, "s3cret");
  }

  #[test]
  fn test_jira_credentials_prompt_for_secret() {
    let home = TempDir::new().unwrap();
    let mut prompter = ScriptedPrompter::new(["hunter2"]);

    let credentials =
      get_jira_credentials("https://jira.example.com", Some(home.path()), Some("bob"), &mut prompter).unwrap();

    assert_eq!(credentials.username, "bob");
    assert_eq!(credentials.password, "hunter2");
    assert_eq!(prompter.prompts(), ["Jira password for bob"]);
  }

  #[test]
  fn test_jira_username_falls_back_to_os_account() {
    let user = EnvVarGuard::new("USER");
    user.set("carol");

    let mut prompter = ScriptedPrompter::new(["pw"]);
    let credentials = get_jira_credentials("jira.example.com", None, Some("  "), &mut prompter).unwrap();

    assert_eq!(credentials.username, "carol");
  }

  #[test]
  fn test_existing_github_token_is_reused() {
    let dir = TempDir::new().unwrap();
    let token_path = dir.path().join("github_token");
    std::fs::write(&token_path, "ghp_existing\n4\n").unwrap();

    let mut prompter = ScriptedPrompter::new(Vec::<String>::new());
    let stored = ensure_github_token(&token_path, &mut prompter, Some("octocat"), |_, _| {
      panic!("no token should be requested")
    })
    .unwrap();

    assert_eq!(stored.token, "ghp_existing");
    assert_eq!(stored.authorization_id, Some(4));
  }

  #[test]
  fn test_github_token_is_provisioned_and_stored() {
    let dir = TempDir::new().unwrap();
    let token_path = dir.path().join("data").join("github_token");
    let mut prompter = ScriptedPrompter::new(["hunter2"]);

    let stored = ensure_github_token(&token_path, &mut prompter, Some("octocat"), |login, password| {
      assert_eq!(login, "octocat");
      assert_eq!(password, "hunter2");
      Ok(StoredToken {
        token: "ghp_fresh".to_string(),
        authorization_id: Some(77),
      })
    })
    .unwrap();

    assert_eq!(stored.token, "ghp_fresh");
    assert_eq!(std::fs::read_to_string(&token_path).unwrap(), "ghp_fresh\n77");
  }

  #[test]
  fn test_github_token_refused_without_username_or_password() {
    let dir = TempDir::new().unwrap();
    let token_path = dir.path().join("github_token");

    let mut prompter = ScriptedPrompter::new(Vec::<String>::new());
    let error = ensure_github_token(&token_path, &mut prompter, Some(""), |_, _| unreachable!()).unwrap_err();
    assert!(error.to_string().contains("without a username"));

    let mut prompter = ScriptedPrompter::new([""]);
    let error = ensure_github_token(&token_path, &mut prompter, Some("octocat"), |_, _| unreachable!()).unwrap_err();
    assert!(error.to_string().contains("empty password"));

    assert!(!token_path.exists());
  }
}
