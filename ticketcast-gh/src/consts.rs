//! Constants for the ticketcast-gh client

/// User-Agent header value for the GitHub API client
pub const USER_AGENT: &str = concat!("ticketcast/", env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Accept header value for the GitHub API
pub const ACCEPT: &str = "application/vnd.github.v3+json";

/// Page size requested from the search API (its maximum)
pub const SEARCH_PAGE_SIZE: usize = 100;

/// The search API never returns more than this many results for a query
pub const SEARCH_RESULT_LIMIT: usize = 1000;

/// Scopes requested for the stored token
pub const TOKEN_SCOPES: &[&str] = &["user", "repo"];

/// Note attached to the authorization created on first run
pub const TOKEN_NOTE: &str = "ticketcast";
