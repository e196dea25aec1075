//! # ticketcast CLI Entry Point
//!
//! Parses the command line, sets up tracing and maps failures to exit codes.

use clap::Parser;
use ticketcast_cli::cli::{Cli, handle_cli};
use ticketcast_cli::errors::TicketcastError;
use ticketcast_core::print_error;
use tracing::debug;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
  let cmd = Cli::parse();

  // Set up tracing based on verbosity level
  let level = match cmd.verbose {
    0 => tracing::Level::WARN,
    1 => tracing::Level::INFO,
    2 => tracing::Level::DEBUG,
    _ => tracing::Level::TRACE,
  };

  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(std::io::stderr))
    .with(EnvFilter::from_default_env().add_directive(level.into()))
    .init();

  debug!("Tracing initialized with level: {}", level);

  if let Err(error) = handle_cli(cmd) {
    let code = match error.downcast_ref::<TicketcastError>() {
      Some(known) => {
        print_error(&known.to_string());
        known.exit_code()
      }
      None => {
        print_error(&format!("{error:#}"));
        1
      }
    };
    std::process::exit(code);
  }
}
