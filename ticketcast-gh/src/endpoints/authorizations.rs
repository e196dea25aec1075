//! GitHub authorizations: exchanging account credentials for a token.

use anyhow::{Context, Result};
use reqwest::{Method, StatusCode};
use tracing::{info, instrument};

use crate::client::GitHubClient;
use crate::models::{AuthorizationRequest, GitHubAuthorization};

impl GitHubClient {
  /// Create an authorization using Basic auth with the account password.
  ///
  /// # Errors
  ///
  /// Returns an error when the credentials are rejected, when GitHub asks
  /// for a second factor, or when the response cannot be parsed.
  #[instrument(skip(self, password, request), level = "debug")]
  pub async fn create_authorization(
    &self,
    username: &str,
    password: &str,
    request: &AuthorizationRequest,
  ) -> Result<GitHubAuthorization> {
    let response = self
      .request(Method::POST, "/authorizations")
      .basic_auth(username, Some(password))
      .json(request)
      .send()
      .await
      .context("POST /authorizations failed")?;

    let status = response.status();
    match status {
      StatusCode::CREATED | StatusCode::OK => {
        let authorization = response
          .json::<GitHubAuthorization>()
          .await
          .context("Failed to parse GitHub authorization")?;
        info!("GitHub authorization {} created", authorization.id);
        Ok(authorization)
      }
      StatusCode::UNAUTHORIZED if response.headers().contains_key("x-github-otp") => Err(anyhow::anyhow!(
        "GitHub requires a two-factor code for {username}; create a personal access token instead"
      )),
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Authentication failed. Please check your GitHub username and password."
      )),
      _ => {
        let error_text = response.text().await.unwrap_or_default();
        Err(anyhow::anyhow!("Unexpected error: HTTP {status} - {error_text}"))
      }
    }
  }
}
