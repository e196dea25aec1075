//! GitHub repository search.

use anyhow::{Context, Result};
use reqwest::{Method, StatusCode};
use tracing::{debug, info, instrument, trace, warn};

use crate::client::GitHubClient;
use crate::consts::{SEARCH_PAGE_SIZE, SEARCH_RESULT_LIMIT};
use crate::models::{GitHubRepository, RepositorySearchResults};

/// Turn a space-separated topic token into a search query requiring every
/// topic (`topic:a topic:b`).
pub fn topic_search_query(topic_token: &str) -> String {
  topic_token
    .split_whitespace()
    .map(|topic| format!("topic:{topic}"))
    .collect::<Vec<_>>()
    .join(" ")
}

impl GitHubClient {
  /// Fetch one page of repository search results
  #[instrument(skip(self), level = "debug")]
  pub async fn search_repositories_page(&self, query: &str, page: usize) -> Result<RepositorySearchResults> {
    let response = self
      .request(Method::GET, "/search/repositories")
      .query(&[
        ("q", query.to_string()),
        ("per_page", SEARCH_PAGE_SIZE.to_string()),
        ("page", page.to_string()),
      ])
      .send()
      .await
      .context("GET /search/repositories failed")?;

    let status = response.status();
    debug!("GitHub API response status: {}", status);

    match status {
      StatusCode::OK => {
        let results = response
          .json::<RepositorySearchResults>()
          .await
          .context("Failed to parse GitHub search response")?;
        trace!("Search page {}: {} items", page, results.items.len());
        Ok(results)
      }
      StatusCode::UNAUTHORIZED => Err(anyhow::anyhow!(
        "Authentication failed. Please check your GitHub credentials."
      )),
      StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => {
        let error_text = response.text().await.unwrap_or_default();
        Err(anyhow::anyhow!("GitHub refused the search (rate limit?): {error_text}"))
      }
      StatusCode::UNPROCESSABLE_ENTITY => {
        let error_text = response.text().await.unwrap_or_default();
        Err(anyhow::anyhow!("Invalid search query '{query}': {error_text}"))
      }
      _ => {
        let error_text = response.text().await.unwrap_or_default();
        warn!("Unexpected GitHub API error: HTTP {} - {}", status, error_text);
        Err(anyhow::anyhow!("Unexpected error: HTTP {status} - {error_text}"))
      }
    }
  }

  /// Search repositories, following result pages until the service has no
  /// more to give. Results keep the service's order.
  pub async fn search_repositories(&self, query: &str) -> Result<Vec<GitHubRepository>> {
    let mut repositories = Vec::new();
    let mut page = 1;

    loop {
      let results = self.search_repositories_page(query, page).await?;
      if results.incomplete_results {
        warn!("GitHub reported incomplete search results for '{query}'");
      }

      let received = results.items.len();
      repositories.extend(results.items);

      let total = usize::try_from(results.total_count).unwrap_or(usize::MAX);
      if received < SEARCH_PAGE_SIZE || repositories.len() >= total.min(SEARCH_RESULT_LIMIT) {
        break;
      }
      page += 1;
    }

    info!("Found {} repositories for '{}'", repositories.len(), query);
    Ok(repositories)
  }

  /// Names of the repositories carrying every topic in `topic_token`
  pub async fn search_repositories_by_topic(&self, topic_token: &str) -> Result<Vec<String>> {
    let query = topic_search_query(topic_token);
    let repositories = self.search_repositories(&query).await?;
    Ok(repositories.into_iter().map(|repo| repo.name).collect())
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use wiremock::matchers::{header, method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;
  use crate::create_github_client;

  fn repo(id: u64, name: &str) -> serde_json::Value {
    json!({ "id": id, "name": name, "full_name": format!("camptocamp/{name}") })
  }

  #[test]
  fn test_topic_search_query() {
    assert_eq!(
      topic_search_query("business odoo-9 need-5-digits"),
      "topic:business topic:odoo-9 topic:need-5-digits"
    );
    assert_eq!(topic_search_query("  single  "), "topic:single");
  }

  #[tokio::test]
  async fn test_search_repositories_by_topic() -> Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_github_client("test_token")?.with_base_url(&mock_server.uri());

    Mock::given(method("GET"))
      .and(path("/search/repositories"))
      .and(query_param("q", "topic:business topic:odoo-9"))
      .and(query_param("page", "1"))
      .and(header("Authorization", "token test_token"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "total_count": 2,
          "incomplete_results": false,
          "items": [repo(1, "business_odoo"), repo(2, "geo_openerp")]
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let names = client.search_repositories_by_topic("business odoo-9").await?;
    assert_eq!(names, vec!["business_odoo", "geo_openerp"]);

    Ok(())
  }

  #[tokio::test]
  async fn test_search_repositories_follows_pages() -> Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_github_client("test_token")?.with_base_url(&mock_server.uri());

    let first_page: Vec<_> = (0..SEARCH_PAGE_SIZE as u64).map(|i| repo(i, &format!("repo{i}"))).collect();

    Mock::given(method("GET"))
      .and(path("/search/repositories"))
      .and(query_param("page", "1"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "total_count": SEARCH_PAGE_SIZE + 1,
          "items": first_page
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    Mock::given(method("GET"))
      .and(path("/search/repositories"))
      .and(query_param("page", "2"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "total_count": SEARCH_PAGE_SIZE + 1,
          "items": [repo(500, "last")]
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let repositories = client.search_repositories("topic:many").await?;
    assert_eq!(repositories.len(), SEARCH_PAGE_SIZE + 1);
    assert_eq!(repositories[0].name, "repo0");
    assert_eq!(repositories[SEARCH_PAGE_SIZE].name, "last");

    Ok(())
  }

  #[tokio::test]
  async fn test_search_repositories_invalid_query() -> Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_github_client("test_token")?.with_base_url(&mock_server.uri());

    Mock::given(method("GET"))
      .and(path("/search/repositories"))
      .respond_with(ResponseTemplate::new(422).set_body_json(json!({ "message": "Validation Failed" })))
      .mount(&mock_server)
      .await;

    let error = client.search_repositories("topic:").await.unwrap_err().to_string();
    assert!(error.contains("Invalid search query"));

    Ok(())
  }
}
