//! Error categories the CLI reports with a dedicated message and exit code.
//!
//! Remote failures are plain `anyhow` errors coming from the service clients;
//! they abort the run with their full context chain.

use thiserror::Error;

/// Local errors raised before or outside remote calls
#[derive(Debug, Error)]
pub enum TicketcastError {
  /// Missing or contradictory invocation input
  #[error("{0}")]
  Usage(String),
  /// Malformed input file or configuration
  #[error("{0}")]
  Config(String),
}

impl TicketcastError {
  /// Process exit code for this error
  pub const fn exit_code(&self) -> i32 {
    match self {
      TicketcastError::Usage(_) => 2,
      TicketcastError::Config(_) => 1,
    }
  }
}
