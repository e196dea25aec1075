//! # Jira Project Endpoints

use anyhow::{Context, Result};
use reqwest::StatusCode;
use tracing::{debug, instrument};

use crate::client::{JiraClient, unexpected_status};
use crate::models::JiraProject;

impl JiraClient {
  /// List every project visible to the authenticated user, in server order
  #[instrument(skip(self), level = "debug")]
  pub async fn list_projects(&self) -> Result<Vec<JiraProject>> {
    let response = self
      .get("/rest/api/2/project")
      .send()
      .await
      .context("Failed to fetch Jira projects")?;

    match response.status() {
      StatusCode::OK => {
        let projects = response
          .json::<Vec<JiraProject>>()
          .await
          .context("Failed to parse Jira projects")?;
        debug!("Jira returned {} projects", projects.len());
        Ok(projects)
      }
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Authentication failed. Please check your Jira credentials."
      )),
      _ => Err(unexpected_status(response).await),
    }
  }
}

#[cfg(test)]
mod tests {
  use wiremock::matchers::{basic_auth, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::JiraClient;
  use crate::models::JiraAuth;

  fn client_for(server: &MockServer) -> JiraClient {
    let auth = JiraAuth {
      username: "test_user".to_string(),
      api_token: "test_token".to_string(),
    };
    JiraClient::new(&server.uri(), auth)
  }

  #[tokio::test]
  async fn test_list_projects() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    Mock::given(method("GET"))
      .and(path("/rest/api/2/project"))
      .and(basic_auth("test_user", "test_token"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
          { "id": "10000", "key": "CAMP", "name": "Camptocamp Odoo", "projectTypeKey": "software" },
          { "id": "10001", "key": "GEO", "name": "Geo Spatial" }
      ])))
      .mount(&mock_server)
      .await;

    let projects = client.list_projects().await?;
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].id, "10000");
    assert_eq!(projects[0].name, "Camptocamp Odoo");
    assert_eq!(projects[1].key, "GEO");

    Ok(())
  }

  #[tokio::test]
  async fn test_list_projects_unauthorized() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    Mock::given(method("GET"))
      .and(path("/rest/api/2/project"))
      .respond_with(ResponseTemplate::new(403))
      .mount(&mock_server)
      .await;

    let error = client.list_projects().await.unwrap_err().to_string();
    assert!(error.contains("Authentication failed"));

    Ok(())
  }
}
