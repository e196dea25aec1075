//! Input file fixtures
//!
//! Project lists and issue cards are read from CSV files; these helpers write
//! them into a temporary directory that lives as long as the fixture.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A CSV file written into its own temporary directory
pub struct CsvFixture {
  temp_dir: TempDir,
  path: PathBuf,
}

impl CsvFixture {
  /// Write `content` verbatim to `<tempdir>/<file_name>`
  pub fn new(file_name: &str, content: &str) -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let path = temp_dir.path().join(file_name);
    fs::write(&path, content).expect("Failed to write CSV fixture");
    Self { temp_dir, path }
  }

  /// Build a CSV file from a header and rows, quoting nothing
  pub fn from_rows(file_name: &str, header: &[&str], rows: &[&[&str]]) -> Self {
    let mut content = header.join(",");
    content.push('\n');
    for row in rows {
      content.push_str(&row.join(","));
      content.push('\n');
    }
    Self::new(file_name, &content)
  }

  /// Path of the CSV file
  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Directory holding the CSV file
  pub fn dir(&self) -> &Path {
    self.temp_dir.path()
  }
}
