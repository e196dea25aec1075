//! # Repository Locator
//!
//! Produces the ordered list of repository names a run works on, either from
//! a CSV project list or from a topic search on the code host.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::errors::TicketcastError;
use crate::services::RepositoryHost;
use crate::tabular::read_project_list;

/// Where repository names come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositorySource {
  /// A CSV file with a `projects` column
  CsvFile(PathBuf),
  /// Topic labels every returned repository must carry
  Topics(Vec<String>),
}

/// Collapse topic labels into one space-separated token.
///
/// Labels may themselves hold comma-separated topics;
/// `["business,odoo-9", "need-5-digits"]` gives `"business odoo-9 need-5-digits"`.
pub fn topic_query_token(labels: &[String]) -> String {
  labels
    .join(",")
    .split(',')
    .map(str::trim)
    .filter(|fragment| !fragment.is_empty())
    .collect::<Vec<_>>()
    .join(" ")
}

/// Repository names for `source`, in file or search order.
///
/// The host is only needed for a topic search.
pub fn locate(source: &RepositorySource, host: Option<&dyn RepositoryHost>) -> Result<Vec<String>> {
  let names = match source {
    RepositorySource::CsvFile(path) => read_project_list(path)?,
    RepositorySource::Topics(labels) => {
      let token = topic_query_token(labels);
      if token.is_empty() {
        return Err(TicketcastError::Usage("the given topics are all empty".to_string()).into());
      }
      let host = host.ok_or_else(|| anyhow::anyhow!("A topic search needs a GitHub connection"))?;
      host
        .search_repositories_by_topic(&token)
        .with_context(|| format!("Failed to search repositories with topics '{token}'"))?
    }
  };

  info!("Located {} repositories", names.len());
  Ok(names)
}
