//! # Prompts Module
//!
//! The [`Prompter`] trait is the single way ticketcast asks the user
//! something. Production code uses [`DialoguerPrompter`]; tests drive the
//! same code paths with canned answers.

use anyhow::{Context, Result};
use console::Style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Password};

use crate::output::print_info;

/// Returns a custom dialoguer theme matching ticketcast's color palette.
///
/// Features:
/// - Cyan bold prompt text
/// - Green `❯` prefix on active item
/// - Green highlight on active item text
pub fn ticketcast_theme() -> ColorfulTheme {
  ColorfulTheme {
    prompt_style: Style::new().cyan().bold(),
    active_item_prefix: Style::new().green().apply_to("❯ ".to_string()),
    active_item_style: Style::new().green(),
    ..ColorfulTheme::default()
  }
}

/// Source of answers for interactive questions.
///
/// Every method blocks until an answer is available. An interrupted prompt
/// (Ctrl-C) surfaces as an error so the caller aborts the run.
pub trait Prompter {
  /// Ask a yes/no question
  fn confirm(&mut self, prompt: &str) -> Result<bool>;

  /// Ask for a line of text; an empty answer is allowed
  fn input(&mut self, prompt: &str) -> Result<String>;

  /// Ask for a secret without echoing it
  fn password(&mut self, prompt: &str) -> Result<String>;

  /// Show a message that is not a question
  fn notify(&mut self, message: &str);
}

/// Terminal prompter backed by `dialoguer`
pub struct DialoguerPrompter {
  theme: ColorfulTheme,
}

impl Default for DialoguerPrompter {
  fn default() -> Self {
    Self::new()
  }
}

impl DialoguerPrompter {
  pub fn new() -> Self {
    Self {
      theme: ticketcast_theme(),
    }
  }
}

impl Prompter for DialoguerPrompter {
  fn confirm(&mut self, prompt: &str) -> Result<bool> {
    Confirm::with_theme(&self.theme)
      .with_prompt(prompt)
      .default(false)
      .interact()
      .context("Failed to read confirmation")
  }

  fn input(&mut self, prompt: &str) -> Result<String> {
    Input::<String>::with_theme(&self.theme)
      .with_prompt(prompt)
      .allow_empty(true)
      .interact_text()
      .context("Failed to read input")
  }

  fn password(&mut self, prompt: &str) -> Result<String> {
    Password::with_theme(&self.theme)
      .with_prompt(prompt)
      .allow_empty_password(true)
      .interact()
      .context("Failed to read password")
  }

  fn notify(&mut self, message: &str) {
    print_info(message);
  }
}
