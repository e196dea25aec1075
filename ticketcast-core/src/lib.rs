//! # ticketcast Core Library
//!
//! Shared building blocks for the ticketcast crates: configuration
//! directories and settings, credential discovery, interactive prompts and
//! console output helpers. The service clients and the CLI both depend on
//! this crate so credential and configuration lookup behave the same way
//! everywhere.

pub mod config;
pub mod consts;
pub mod creds;
pub mod output;
pub mod prompts;
pub mod url;

// Re-export main types
pub use config::{ConfigDirs, Settings, get_config_dirs};
pub use output::{ColorMode, print_error, print_info, print_success, print_warning};
pub use prompts::{DialoguerPrompter, Prompter};
