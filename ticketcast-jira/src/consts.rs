//! Constants for the ticketcast-jira client.

/// User-Agent header value for the Jira API client
pub const USER_AGENT: &str = concat!("ticketcast/", env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Issue fields used when a template issue leaves them empty
pub const FALLBACK_SUMMARY: &str = "TODO";
pub const FALLBACK_DESCRIPTION: &str = "TODO";
pub const FALLBACK_ISSUE_TYPE: &str = "Task";
