//! # GitHub HTTP Client
//!
//! HTTP client implementation for GitHub API interactions, handling
//! authentication and the headers GitHub requires on every request.

use anyhow::Result;
use reqwest::{Client, RequestBuilder, header};

use crate::consts::{ACCEPT, USER_AGENT};
use crate::models::GitHubAuth;

/// Represents a GitHub API client
pub struct GitHubClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) auth: Option<GitHubAuth>,
}

impl GitHubClient {
  /// Create a new GitHub client authenticated with a token
  pub fn new(auth: GitHubAuth) -> Self {
    Self {
      client: Client::new(),
      base_url: ticketcast_core::consts::GITHUB_API_URL.to_string(),
      auth: Some(auth),
    }
  }

  /// Create a client without a token, used to issue the first token
  pub fn anonymous() -> Self {
    Self {
      client: Client::new(),
      base_url: ticketcast_core::consts::GITHUB_API_URL.to_string(),
      auth: None,
    }
  }

  /// Point the client at another API root (GitHub Enterprise, tests)
  pub fn with_base_url(mut self, base_url: &str) -> Self {
    self.base_url = base_url.trim_end_matches('/').to_string();
    self
  }

  /// Base URL the client talks to
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Build a request with the standard headers and the token when present
  pub(crate) fn request(&self, method: reqwest::Method, path: &str) -> RequestBuilder {
    let builder = self
      .client
      .request(method, format!("{}{}", self.base_url, path))
      .header(header::ACCEPT, ACCEPT)
      .header(header::USER_AGENT, USER_AGENT);

    match &self.auth {
      Some(auth) => builder.header(header::AUTHORIZATION, format!("token {}", auth.token)),
      None => builder,
    }
  }
}

/// Create a GitHub client from a token
pub fn create_github_client(token: &str) -> Result<GitHubClient> {
  let auth = GitHubAuth {
    token: token.to_string(),
  };

  Ok(GitHubClient::new(auth))
}
