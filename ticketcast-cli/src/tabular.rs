//! # CSV Input Files
//!
//! Readers for the two CSV inputs: the project list (a `projects` column)
//! and the issue cards (`summary`, `description`, `issuetype`). Both files
//! need a header row; columns are addressed by name, so extra columns and
//! column order do not matter.

use std::fs::File;
use std::path::Path;

use anyhow::Result;
use csv::{Reader, ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;
use tracing::{debug, trace};
use ticketcast_jira::IssueFields;

use crate::consts::{CARD_COLUMNS, PROJECTS_COLUMN};
use crate::errors::TicketcastError;

#[derive(Debug, Deserialize)]
struct ProjectRow {
  #[serde(default)]
  projects: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CardRow {
  #[serde(default)]
  summary: Option<String>,
  #[serde(default)]
  description: Option<String>,
  #[serde(default)]
  issuetype: Option<String>,
}

fn config_error(path: &Path, message: impl std::fmt::Display) -> anyhow::Error {
  TicketcastError::Config(format!("{}: {message}", path.display())).into()
}

fn open_reader(path: &Path, required: &[&str]) -> Result<Reader<File>> {
  let mut reader = ReaderBuilder::new()
    .trim(Trim::All)
    .flexible(true)
    .from_path(path)
    .map_err(|e| config_error(path, format!("cannot read file: {e}")))?;

  let headers: StringRecord = reader
    .headers()
    .map_err(|e| config_error(path, format!("cannot read header row: {e}")))?
    .clone();
  trace!("CSV headers of {}: {:?}", path.display(), headers);

  let missing: Vec<&str> = required
    .iter()
    .copied()
    .filter(|column| !headers.iter().any(|h| h == *column))
    .collect();
  if !missing.is_empty() {
    return Err(config_error(path, format!("missing column(s): {}", missing.join(", "))));
  }

  Ok(reader)
}

/// Repository names listed in the `projects` column, in file order. Rows
/// without a value are skipped.
pub fn read_project_list(path: &Path) -> Result<Vec<String>> {
  let mut reader = open_reader(path, &[PROJECTS_COLUMN])?;
  let mut names = Vec::new();

  for (index, row) in reader.deserialize::<ProjectRow>().enumerate() {
    let row = row.map_err(|e| config_error(path, format!("row {}: {e}", index + 1)))?;
    match row.projects.filter(|name| !name.is_empty()) {
      Some(name) => names.push(name),
      None => debug!("Skipping empty project row {}", index + 1),
    }
  }

  debug!("Read {} project names from {}", names.len(), path.display());
  Ok(names)
}

fn required_value(path: &Path, row: usize, column: &str, value: Option<String>) -> Result<String> {
  value
    .filter(|v| !v.is_empty())
    .ok_or_else(|| config_error(path, format!("row {row}: column '{column}' is empty")))
}

/// One issue payload per row, in file order. Every row needs a value in each
/// of the three columns.
pub fn read_issue_cards(path: &Path) -> Result<Vec<IssueFields>> {
  let mut reader = open_reader(path, CARD_COLUMNS)?;
  let mut cards = Vec::new();

  for (index, row) in reader.deserialize::<CardRow>().enumerate() {
    let number = index + 1;
    let row = row.map_err(|e| config_error(path, format!("row {number}: {e}")))?;

    cards.push(IssueFields::new(
      required_value(path, number, "summary", row.summary)?,
      required_value(path, number, "description", row.description)?,
      required_value(path, number, "issuetype", row.issuetype)?,
    ));
  }

  debug!("Read {} issue cards from {}", cards.len(), path.display());
  Ok(cards)
}

#[cfg(test)]
mod tests {
  use ticketcast_test_utils::CsvFixture;

  use super::*;

  fn config_message(error: anyhow::Error) -> String {
    match error.downcast_ref::<TicketcastError>() {
      Some(TicketcastError::Config(message)) => message.clone(),
      other => panic!("expected a config error, got {other:?}"),
    }
  }

  #[test]
  fn test_read_project_list() {
    let fixture = CsvFixture::new("projects.csv", "projects\nbusiness_odoo\n\ngeo_openerp\n  sale  \n");

    let names = read_project_list(fixture.path()).unwrap();
    assert_eq!(names, vec!["business_odoo", "geo_openerp", "sale"]);
  }

  #[test]
  fn test_read_project_list_with_extra_columns() {
    let fixture = CsvFixture::from_rows(
      "projects.csv",
      &["owner", "projects"],
      &[&["camptocamp", "business_odoo"], &["acme", ""], &["acme", "website"]],
    );

    let names = read_project_list(fixture.path()).unwrap();
    assert_eq!(names, vec!["business_odoo", "website"]);
  }

  #[test]
  fn test_read_project_list_missing_column() {
    let fixture = CsvFixture::new("projects.csv", "repositories\nbusiness_odoo\n");

    let message = config_message(read_project_list(fixture.path()).unwrap_err());
    assert!(message.contains("missing column(s): projects"));
  }

  #[test]
  fn test_read_project_list_missing_file() {
    let fixture = CsvFixture::new("other.csv", "projects\n");

    let message = config_message(read_project_list(&fixture.dir().join("absent.csv")).unwrap_err());
    assert!(message.contains("cannot read file"));
  }

  #[test]
  fn test_read_issue_cards() {
    let fixture = CsvFixture::new(
      "cards.csv",
      "summary,description,issuetype\n\
       Bump version,\"Bump the version\nof every module\",Task\n\
       Fix tests,Tests are red,Bug\n",
    );

    let cards = read_issue_cards(fixture.path()).unwrap();
    assert_eq!(
      cards,
      vec![
        IssueFields::new("Bump version", "Bump the version\nof every module", "Task"),
        IssueFields::new("Fix tests", "Tests are red", "Bug"),
      ]
    );
  }

  #[test]
  fn test_read_issue_cards_rejects_empty_value() {
    let fixture = CsvFixture::from_rows(
      "cards.csv",
      &["summary", "description", "issuetype"],
      &[&["Bump", "Bump it", "Task"], &["Fix", "", "Bug"]],
    );

    let message = config_message(read_issue_cards(fixture.path()).unwrap_err());
    assert!(message.contains("row 2: column 'description' is empty"));
  }

  #[test]
  fn test_read_issue_cards_missing_columns() {
    let fixture = CsvFixture::new("cards.csv", "summary,type\nBump,Task\n");

    let message = config_message(read_issue_cards(fixture.path()).unwrap_err());
    assert!(message.contains("missing column(s): description, issuetype"));
  }
}
