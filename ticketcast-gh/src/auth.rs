//! Authentication helpers for the GitHub client.
//!
//! ticketcast talks to GitHub with a token kept in its data directory. The
//! first run has no token yet; [`issue_token`] trades the account's username
//! and password for one, and the caller persists it with
//! [`ticketcast_core::creds::token::write_token_file`].

use anyhow::{Context, Result};
use ticketcast_core::creds::token::StoredToken;
use tokio::runtime::Runtime;

use crate::consts::{TOKEN_NOTE, TOKEN_SCOPES};
use crate::models::AuthorizationRequest;
use crate::{GitHubClient, create_github_client};

/// Request a new token with the scopes ticketcast needs.
pub async fn issue_token(client: &GitHubClient, username: &str, password: &str) -> Result<StoredToken> {
  let request = AuthorizationRequest {
    scopes: TOKEN_SCOPES.iter().map(|s| s.to_string()).collect(),
    note: TOKEN_NOTE.to_string(),
    note_url: None,
  };

  let authorization = client
    .create_authorization(username, password, &request)
    .await
    .context("Failed to create a GitHub token")?;

  Ok(StoredToken {
    token: authorization.token,
    authorization_id: Some(authorization.id),
  })
}

/// Creates a tokio runtime and a GitHub client authenticated with `token`.
pub fn create_github_runtime_and_client(token: &str, api_url: &str) -> Result<(Runtime, GitHubClient)> {
  let rt = Runtime::new().context("Failed to create async runtime")?;
  let client = create_github_client(token)?.with_base_url(api_url);
  Ok((rt, client))
}
