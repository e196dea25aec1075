//! # GitHub API Endpoints
//!
//! Endpoint implementations grouped by GitHub REST resource.

pub mod authorizations;
pub mod search;
