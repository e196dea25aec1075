//! Environment variable management for testing
//!
//! This module provides utilities for overriding environment variables during
//! testing so tests don't interfere with each other or with the developer's
//! own configuration.

use std::env;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use tempfile::TempDir;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Take the process-wide environment lock, ignoring poisoning left behind by
/// a failed test.
pub(crate) fn lock_env() -> MutexGuard<'static, ()> {
  ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Restore a variable to its saved value
fn restore(name: &str, original: Option<&String>) {
  match original {
    Some(val) => unsafe {
      env::set_var(name, val);
    },
    None => unsafe {
      env::remove_var(name);
    },
  }
}

/// A test environment that overrides XDG directories to use a per-test
/// temporary directory
pub struct EnvTestGuard {
  /// The temporary directory that will be used for XDG directories
  pub temp_dir: TempDir,
  /// The original XDG_CONFIG_HOME value, if any
  original_config_home: Option<String>,
  /// The original XDG_DATA_HOME value, if any
  original_data_home: Option<String>,
  _lock: MutexGuard<'static, ()>,
}

impl Default for EnvTestGuard {
  fn default() -> Self {
    Self::new()
  }
}

impl EnvTestGuard {
  /// XDG environment variable names
  pub const XDG_CONFIG_HOME: &'static str = "XDG_CONFIG_HOME";
  pub const XDG_DATA_HOME: &'static str = "XDG_DATA_HOME";

  /// Create a new test environment with overridden XDG directories
  pub fn new() -> Self {
    let lock = lock_env();
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");

    let original_config_home = env::var(Self::XDG_CONFIG_HOME).ok();
    let original_data_home = env::var(Self::XDG_DATA_HOME).ok();

    let temp_path = temp_dir.path().to_path_buf();
    unsafe {
      env::set_var(Self::XDG_CONFIG_HOME, temp_path.join("config"));
      env::set_var(Self::XDG_DATA_HOME, temp_path.join("data"));
    }

    std::fs::create_dir_all(temp_path.join("config")).expect("Failed to create config directory");
    std::fs::create_dir_all(temp_path.join("data")).expect("Failed to create data directory");

    Self {
      temp_dir,
      original_config_home,
      original_data_home,
      _lock: lock,
    }
  }

  /// Get the path to the XDG config directory
  pub fn config_dir(&self) -> PathBuf {
    self.temp_dir.path().join("config")
  }

  /// Get the path to the XDG data directory
  pub fn data_dir(&self) -> PathBuf {
    self.temp_dir.path().join("data")
  }
}

impl Drop for EnvTestGuard {
  fn drop(&mut self) {
    restore(Self::XDG_CONFIG_HOME, self.original_config_home.as_ref());
    restore(Self::XDG_DATA_HOME, self.original_data_home.as_ref());
  }
}

/// Overrides a single environment variable and restores it when dropped
pub struct EnvVarGuard {
  name: String,
  original: Option<String>,
  _lock: MutexGuard<'static, ()>,
}

impl EnvVarGuard {
  /// Start guarding `name`; its current value is restored on drop
  pub fn new(name: &str) -> Self {
    let lock = lock_env();
    Self {
      name: name.to_string(),
      original: env::var(name).ok(),
      _lock: lock,
    }
  }

  /// Set the guarded variable
  pub fn set(&self, value: &str) {
    unsafe {
      env::set_var(&self.name, value);
    }
  }
}

impl Drop for EnvVarGuard {
  fn drop(&mut self) {
    restore(&self.name, self.original.as_ref());
  }
}
