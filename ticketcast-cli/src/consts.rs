//! Constants for the ticketcast CLI

/// Environment variables naming the review editor, in lookup order
pub const ENV_EDITOR_VARS: &[&str] = &["VISUAL", "EDITOR"];

/// Editor used when neither `VISUAL` nor `EDITOR` is set
#[cfg(windows)]
pub const DEFAULT_EDITOR: &str = "notepad";

/// Editor used when neither `VISUAL` nor `EDITOR` is set
#[cfg(not(windows))]
pub const DEFAULT_EDITOR: &str = "vim";

/// Column holding repository names in a project list CSV
pub const PROJECTS_COLUMN: &str = "projects";

/// Columns of an issue card CSV
pub const CARD_COLUMNS: &[&str] = &["summary", "description", "issuetype"];

/// Message printed once every issue has been submitted
pub const EXIT_MESSAGE: &str = "Bye";
