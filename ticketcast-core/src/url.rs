//! URL helpers shared across crates.
//!
//! Server addresses come from config files and environment variables, so they
//! are often missing a scheme or carry a trailing slash. Clients build request
//! URLs by plain concatenation (`{base}/rest/api/2/...`) and need a clean base.

use anyhow::Result;
use url::{Position, Url};

/// Render a parsed URL without a trailing slash on its path.
fn render_base(url: &Url) -> String {
  let mut result = url[..Position::BeforePath].to_string();
  result.push_str(url.path().trim_end_matches('/'));

  if let Some(query) = url.query() {
    result.push('?');
    result.push_str(query);
  }

  result
}

/// Strip a malformed `http:`/`https:` prefix (`http:/host`, `https:host`) and
/// reparse with `https://`.
fn parse_with_https_prefix(input: &str) -> Result<Url> {
  let candidate = match input.split_once(':') {
    Some((scheme, rest)) if scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https") => {
      rest.trim_start_matches('/')
    }
    _ => input,
  };

  Url::parse(&format!("https://{candidate}"))
    .map_err(|e| anyhow::anyhow!("Failed to parse URL '{input}': {e}. Ensure it has a valid scheme."))
}

/// Ensure a server address has a scheme (https:// assumed) and no trailing
/// slash.
pub fn ensure_url_scheme(input: &str) -> Result<String> {
  let trimmed = input.trim();
  if trimmed.is_empty() {
    return Err(anyhow::anyhow!("Host cannot be empty"));
  }

  let lowered = trimmed.to_ascii_lowercase();
  let well_formed = lowered.starts_with("http://") || lowered.starts_with("https://");

  let url = match Url::parse(trimmed) {
    Ok(url) if well_formed && url.host().is_some() => url,
    _ => parse_with_https_prefix(trimmed)?,
  };

  Ok(render_base(&url))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_ensure_url_scheme_with_https() {
    let result = ensure_url_scheme("https://jira.example.com").unwrap();
    assert_eq!(result, "https://jira.example.com");
  }

  #[test]
  fn test_ensure_url_scheme_with_http_and_port() {
    let result = ensure_url_scheme("http://localhost:8080").unwrap();
    assert_eq!(result, "http://localhost:8080");
  }

  #[test]
  fn test_ensure_url_scheme_without_scheme() {
    let result = ensure_url_scheme("company.atlassian.net").unwrap();
    assert_eq!(result, "https://company.atlassian.net");
  }

  #[test]
  fn test_ensure_url_scheme_bare_host_with_port() {
    let result = ensure_url_scheme("localhost:8080").unwrap();
    assert_eq!(result, "https://localhost:8080");
  }

  #[test]
  fn test_ensure_url_scheme_strips_trailing_slash() {
    assert_eq!(
      ensure_url_scheme("https://jira.example.com/").unwrap(),
      "https://jira.example.com"
    );
    assert_eq!(
      ensure_url_scheme("jira.example.com/context/").unwrap(),
      "https://jira.example.com/context"
    );
  }

  #[test]
  fn test_ensure_url_scheme_partial_scheme() {
    let result = ensure_url_scheme("http:/example.com").unwrap();
    assert_eq!(result, "https://example.com");
  }

  #[test]
  fn test_ensure_url_scheme_empty_string() {
    let result = ensure_url_scheme("   ");
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Host cannot be empty"));
  }
}
