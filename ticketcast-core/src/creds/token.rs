//! GitHub token file.
//!
//! The file holds two lines: the access token, then the id of the
//! authorization that issued it. It is created once by the provisioning flow
//! and read on every later run.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// A stored GitHub access token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredToken {
  pub token: String,
  pub authorization_id: Option<u64>,
}

/// Read the token file. Returns `Ok(None)` when the file does not exist or
/// holds no token.
pub fn read_token_file(path: &Path) -> Result<Option<StoredToken>> {
  if !path.exists() {
    return Ok(None);
  }

  let content =
    fs::read_to_string(path).with_context(|| format!("Failed to read GitHub token from {}", path.display()))?;
  let mut lines = content.lines().map(str::trim);

  let token = match lines.next() {
    Some(token) if !token.is_empty() => token.to_string(),
    _ => {
      debug!("Token file {} is empty", path.display());
      return Ok(None);
    }
  };
  let authorization_id = lines.next().and_then(|id| id.parse().ok());

  Ok(Some(StoredToken {
    token,
    authorization_id,
  }))
}

/// Write the token file, creating parent directories. On Unix the file is
/// created with mode 600, and an existing file is narrowed to 600 before the
/// token is written.
pub fn write_token_file(path: &Path, stored: &StoredToken) -> Result<()> {
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).with_context(|| format!("Failed to create directory {}", parent.display()))?;
  }

  let mut content = format!("{}\n", stored.token);
  if let Some(id) = stored.authorization_id {
    content.push_str(&id.to_string());
  }

  let mut options = OpenOptions::new();
  options.write(true).create(true).truncate(true);
  #[cfg(unix)]
  {
    use std::os::unix::fs::OpenOptionsExt;
    options.mode(0o600);
  }

  let mut file = options
    .open(path)
    .with_context(|| format!("Failed to open {} for writing", path.display()))?;

  #[cfg(unix)]
  {
    use std::os::unix::fs::PermissionsExt;
    file
      .set_permissions(fs::Permissions::from_mode(0o600))
      .with_context(|| format!("Failed to set permissions on {}", path.display()))?;
  }

  file
    .write_all(content.as_bytes())
    .with_context(|| format!("Failed to write GitHub token to {}", path.display()))?;

  Ok(())
}
