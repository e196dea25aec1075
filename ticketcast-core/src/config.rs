//! # Configuration Management
//!
//! Handles the configuration directories (XDG base directory support through
//! `directories`) and the `config.toml` settings file holding Jira connection
//! parameters, the GitHub API location and matching preferences.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{
  CONFIG_FILE_NAME, DEFAULT_ISSUE_TYPES, DEFAULT_STRIP_SUFFIXES, ENV_JIRA_HOST, GITHUB_API_URL, GITHUB_TOKEN_FILE_NAME,
};
use crate::url::ensure_url_scheme;

/// Represents the configuration directories for the ticketcast application
#[derive(Debug, Clone)]
pub struct ConfigDirs {
  pub config_dir: PathBuf,
  pub data_dir: PathBuf,
}

impl ConfigDirs {
  /// Create a new ConfigDirs instance
  pub fn new() -> Result<Self> {
    let proj_dirs = ProjectDirs::from("", "", "ticketcast").context("Failed to determine project directories")?;

    Ok(Self {
      config_dir: proj_dirs.config_dir().to_path_buf(),
      data_dir: proj_dirs.data_dir().to_path_buf(),
    })
  }

  /// Get the config directory
  pub fn config_dir(&self) -> &PathBuf {
    &self.config_dir
  }

  /// Get the data directory
  pub fn data_dir(&self) -> &PathBuf {
    &self.data_dir
  }

  /// Get the path to the settings file
  pub fn config_path(&self) -> PathBuf {
    self.config_dir.join(CONFIG_FILE_NAME)
  }

  /// Get the path to the stored GitHub token
  pub fn github_token_path(&self) -> PathBuf {
    self.data_dir.join(GITHUB_TOKEN_FILE_NAME)
  }
}

/// Get the configuration directories
pub fn get_config_dirs() -> Result<ConfigDirs> {
  ConfigDirs::new()
}

/// Contents of `config.toml`. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
  pub jira: JiraSettings,
  pub github: GitHubSettings,
  pub matching: MatchingSettings,
  pub issues: IssueSettings,
}

/// Jira connection parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct JiraSettings {
  /// Jira server URL (e.g., https://jira.example.com)
  pub server: Option<String>,
  /// Account name; the OS user name is used when absent
  pub username: Option<String>,
}

/// GitHub API location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GitHubSettings {
  pub api_url: String,
}

impl Default for GitHubSettings {
  fn default() -> Self {
    Self {
      api_url: GITHUB_API_URL.to_string(),
    }
  }
}

/// Repository to project matching preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MatchingSettings {
  pub strip_suffixes: Vec<String>,
}

impl Default for MatchingSettings {
  fn default() -> Self {
    Self {
      strip_suffixes: DEFAULT_STRIP_SUFFIXES.iter().map(|s| s.to_string()).collect(),
    }
  }
}

/// Issue creation preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct IssueSettings {
  /// Issue types offered by the interactive prompt
  pub types: Vec<String>,
}

impl Default for IssueSettings {
  fn default() -> Self {
    Self {
      types: DEFAULT_ISSUE_TYPES.iter().map(|s| s.to_string()).collect(),
    }
  }
}

impl Settings {
  /// Load settings from the given file, falling back to defaults when the
  /// file does not exist.
  pub fn load(path: &Path) -> Result<Self> {
    if !path.exists() {
      debug!("No settings file at {}, using defaults", path.display());
      return Ok(Self::default());
    }

    let content =
      fs::read_to_string(path).with_context(|| format!("Failed to read settings from {}", path.display()))?;

    toml::from_str(&content).with_context(|| format!("Failed to parse settings from {}", path.display()))
  }

  /// Resolve the Jira server URL: `$JIRA_HOST` wins over the settings file.
  pub fn jira_server(&self) -> Result<String> {
    self.jira_server_with(std::env::var(ENV_JIRA_HOST).ok())
  }

  /// Resolve the Jira server URL against an explicit environment override.
  pub fn jira_server_with(&self, env_override: Option<String>) -> Result<String> {
    let raw = env_override
      .filter(|host| !host.trim().is_empty())
      .or_else(|| self.jira.server.clone())
      .ok_or_else(|| {
        anyhow::anyhow!("Jira server not configured. Set '{ENV_JIRA_HOST}' or add `server` to the [jira] section")
      })?;

    ensure_url_scheme(&raw)
  }
}
