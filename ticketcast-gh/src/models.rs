use serde::{Deserialize, Serialize};

/// Represents GitHub authentication credentials
#[derive(Clone)]
pub struct GitHubAuth {
  pub token: String,
}

/// Represents a GitHub repository as returned by the search API
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubRepository {
  pub id: u64,
  pub name: String,
  pub full_name: String,
  #[serde(default)]
  pub topics: Vec<String>,
}

/// One page of `GET /search/repositories`
#[derive(Debug, Deserialize)]
pub struct RepositorySearchResults {
  pub total_count: u64,
  #[serde(default)]
  pub incomplete_results: bool,
  #[serde(default)]
  pub items: Vec<GitHubRepository>,
}

/// Request body for `POST /authorizations`
#[derive(Debug, Serialize)]
pub struct AuthorizationRequest {
  pub scopes: Vec<String>,
  pub note: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub note_url: Option<String>,
}

/// An authorization issued by GitHub
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubAuthorization {
  pub id: u64,
  pub token: String,
}
