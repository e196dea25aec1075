//! # Project Matcher
//!
//! Maps repository names onto Jira projects. A project matches a repository
//! when its name, stripped of whitespace and lowercased, starts with the
//! normalized repository name.

use tracing::{debug, warn};
use ticketcast_jira::JiraProject;

/// Drop an `owner/` prefix and every configured suffix from a repository name
pub fn normalize_repository_name(name: &str, suffixes: &[String]) -> String {
  let name = name.trim();
  let name = name.rsplit_once('/').map_or(name, |(_, repo)| repo);

  suffixes
    .iter()
    .filter(|suffix| !suffix.is_empty())
    .fold(name.to_string(), |acc, suffix| acc.replace(suffix.as_str(), ""))
}

/// Project display name with whitespace removed and lowercased
pub fn normalize_project_name(name: &str) -> String {
  name
    .chars()
    .filter(|c| !c.is_whitespace())
    .flat_map(char::to_lowercase)
    .collect()
}

/// Projects matching any of `repo_names`.
///
/// A project is listed once per repository it matches, in project order with
/// repository order nested.
pub fn match_projects(projects: &[JiraProject], repo_names: &[String], suffixes: &[String]) -> Vec<JiraProject> {
  let prefixes: Vec<String> = repo_names
    .iter()
    .filter_map(|raw| {
      let normalized = normalize_repository_name(raw, suffixes);
      if normalized.is_empty() {
        warn!("Repository name '{raw}' is empty once normalized, skipping it");
        None
      } else {
        Some(normalized)
      }
    })
    .collect();

  let mut matched = Vec::new();
  for project in projects {
    let project_name = normalize_project_name(&project.name);
    for prefix in &prefixes {
      if project_name.starts_with(prefix.as_str()) {
        debug!("Project '{}' matches repository '{}'", project.name, prefix);
        matched.push(project.clone());
      }
    }
  }

  debug!("{} of {} projects matched", matched.len(), projects.len());
  matched
}
