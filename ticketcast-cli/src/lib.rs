//! # ticketcast CLI Library
//!
//! The workflow behind the `ticketcast` command: locating repositories,
//! matching them to Jira projects, reviewing the matches, building issue
//! content and submitting the issues.

pub mod cli;
pub mod clients;
pub mod consts;
pub mod content;
pub mod creds;
pub mod errors;
pub mod locator;
pub mod matcher;
pub mod reviewer;
pub mod services;
pub mod session;
pub mod submitter;
pub mod tabular;

#[cfg(test)]
mod testing;
