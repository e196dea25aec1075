//! Read-only `.netrc` lookup.
//!
//! A Jira secret found in `~/.netrc` spares the per-run password prompt.
//! Both the single-line (`machine host login user password pass`) and the
//! multi-line layouts are accepted since the file is tokenized as a whole.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::creds::Credentials;

/// Returns the path to the `.netrc` file for the provided home directory.
pub fn get_netrc_path(home: &Path) -> PathBuf {
  home.join(".netrc")
}

/// One `machine` (or `default`) block of a `.netrc` file.
#[derive(Default)]
struct NetrcEntry {
  machine: Option<String>,
  login: Option<String>,
  password: Option<String>,
}

impl NetrcEntry {
  fn credentials(&self) -> Option<Credentials> {
    Some(Credentials {
      username: self.login.clone()?,
      password: self.password.clone()?,
    })
  }
}

/// Find the credentials for `target_machine` in `.netrc` content.
///
/// Entries missing either `login` or `password` are ignored. A `default`
/// entry is used when no machine matches.
pub fn find_credentials(content: &str, target_machine: &str) -> Option<Credentials> {
  let mut tokens = content.split_whitespace();
  let mut entries: Vec<NetrcEntry> = Vec::new();

  while let Some(token) = tokens.next() {
    match token {
      "machine" => entries.push(NetrcEntry {
        machine: tokens.next().map(str::to_string),
        ..NetrcEntry::default()
      }),
      "default" => entries.push(NetrcEntry::default()),
      "login" | "password" => {
        let value = tokens.next().map(str::to_string);
        if let Some(entry) = entries.last_mut() {
          if token == "login" {
            entry.login = value;
          } else {
            entry.password = value;
          }
        }
      }
      _ => {}
    }
  }

  let matching = entries
    .iter()
    .filter(|entry| entry.machine.as_deref() == Some(target_machine))
    .find_map(NetrcEntry::credentials);

  matching.or_else(|| {
    entries
      .iter()
      .filter(|entry| entry.machine.is_none())
      .find_map(NetrcEntry::credentials)
  })
}

/// Parses a `.netrc` file and returns credentials for the requested machine.
///
/// A missing file is not an error; it simply yields `Ok(None)`.
pub fn parse_netrc_file(path: &Path, target_machine: &str) -> Result<Option<Credentials>> {
  if !path.exists() {
    return Ok(None);
  }

  let content = std::fs::read_to_string(path).context("Failed to read .netrc file")?;
  Ok(find_credentials(&content, target_machine))
}

/// Normalizes a server URL to the bare host used as a `.netrc` machine name.
pub fn normalize_host(raw_host: &str) -> String {
  let host = raw_host
    .trim_start_matches("https://")
    .trim_start_matches("http://");
  host.split('/').next().unwrap_or(host).to_string()
}
