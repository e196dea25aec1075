//! HOME directory management for testing
//!
//! This module provides utilities for isolating HOME directory during testing
//! to prevent tests from reading the user's actual `.netrc` or token files.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::MutexGuard;

use tempfile::TempDir;

use crate::env::lock_env;

/// A test environment that points HOME at a temporary directory
pub struct HomeEnvTestGuard {
  /// The temporary directory that will be used as HOME
  pub temp_dir: TempDir,
  /// The original HOME value, if any
  original_home: Option<String>,
  _lock: MutexGuard<'static, ()>,
}

impl Default for HomeEnvTestGuard {
  fn default() -> Self {
    Self::new()
  }
}

impl HomeEnvTestGuard {
  /// Create a new test environment with a temporary HOME directory
  pub fn new() -> Self {
    let lock = lock_env();
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let original_home = env::var("HOME").ok();

    unsafe {
      env::set_var("HOME", temp_dir.path());
    }

    Self {
      temp_dir,
      original_home,
      _lock: lock,
    }
  }

  /// Get the path to the temporary HOME directory
  pub fn home_dir(&self) -> &Path {
    self.temp_dir.path()
  }

  /// Get the path to a file in the temporary HOME directory
  pub fn home_path(&self, relative_path: &str) -> PathBuf {
    self.temp_dir.path().join(relative_path)
  }
}

impl Drop for HomeEnvTestGuard {
  fn drop(&mut self) {
    match &self.original_home {
      Some(home) => unsafe {
        env::set_var("HOME", home);
      },
      None => unsafe {
        env::remove_var("HOME");
      },
    }
  }
}
