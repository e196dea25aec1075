//! Core constants shared across ticketcast components.

/// Environment variable overriding the Jira server URL from the config file.
pub const ENV_JIRA_HOST: &str = "JIRA_HOST";

/// Base URL for the official SaaS GitHub API
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Name of the settings file inside the configuration directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Name of the GitHub token file inside the data directory.
pub const GITHUB_TOKEN_FILE_NAME: &str = "github_token";

/// Repository name suffixes removed before matching against Jira projects.
pub const DEFAULT_STRIP_SUFFIXES: &[&str] = &["_odoo", "_openerp"];

/// Issue types accepted by the interactive prompt.
pub const DEFAULT_ISSUE_TYPES: &[&str] = &["Bug", "Task"];
