//! # Jira API Endpoints
//!
//! Endpoint implementations grouped by Jira REST resource.

pub mod issues;
pub mod projects;
