//! Test utilities shared across the ticketcast workspace
//!
//! This crate provides common testing infrastructure including:
//! - XDG directory mocking ([`EnvTestGuard`])
//! - Single environment variable overrides ([`EnvVarGuard`])
//! - HOME directory isolation ([`HomeEnvTestGuard`])
//! - CSV input files ([`CsvFixture`])
//!
//! Guards that touch process environment variables serialize on a shared
//! lock so tests running on parallel threads do not observe each other's
//! overrides.
//!
//! The clippy dead_code lint is disabled for this crate because test utilities
//! may not be used by all tests, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod env;
pub mod fixtures;
pub mod home;

// Re-export commonly used items
pub use env::{EnvTestGuard, EnvVarGuard};
pub use fixtures::CsvFixture;
pub use home::HomeEnvTestGuard;
