//! # Output Formatting
//!
//! Formatted output functions with colors and emojis for user-facing
//! messages.

use owo_colors::{OwoColorize, Stream, Style};

/// Enum representing different color modes for output
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
  /// Enable colored output
  Yes,
  /// Enable colored output (alias for Yes)
  Always,
  /// Automatically detect if colors should be used based on terminal
  /// capabilities
  Auto,
  /// Disable colored output
  No,
  /// Disable colored output (alias for No)
  Never,
}

impl ColorMode {
  /// Apply the mode as a global override for `owo-colors`. Only output
  /// written through the helpers below honours it.
  pub fn apply(self) {
    match self {
      ColorMode::Always | ColorMode::Yes => owo_colors::set_override(true),
      ColorMode::Never | ColorMode::No => owo_colors::set_override(false),
      // Leave terminal detection to owo-colors
      ColorMode::Auto => {}
    }
  }
}

/// Helper function to safely get an emoji or fallback to a default character
pub fn get_emoji_or_default(name: &str, default: &str) -> String {
  match emojis::get_by_shortcode(name) {
    Some(emoji) => emoji.to_string(),
    None => default.to_string(),
  }
}

/// Style `text` for `stream`, or leave it plain when that stream gets no colors
fn paint(text: &str, stream: Stream, style: Style) -> String {
  text.if_supports_color(stream, |t| t.style(style)).to_string()
}

/// Print a success message
pub fn print_success(message: &str) {
  let check = get_emoji_or_default("check_mark", "✓");
  println!("{} {}", paint(&check, Stream::Stdout, Style::new().green().bold()), message);
}

/// Print an error message
pub fn print_error(message: &str) {
  let cross = get_emoji_or_default("cross_mark", "✗");
  eprintln!("{} {}", paint(&cross, Stream::Stderr, Style::new().red().bold()), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
  let warning = get_emoji_or_default("warning", "⚠");
  println!("{} {}", paint(&warning, Stream::Stdout, Style::new().yellow().bold()), message);
}

/// Print an info message
pub fn print_info(message: &str) {
  let info = get_emoji_or_default("information", "ℹ");
  println!("{} {}", paint(&info, Stream::Stdout, Style::new().blue().bold()), message);
}

/// Format a Jira issue key
pub fn format_issue_key(key: &str) -> String {
  paint(key, Stream::Stdout, Style::new().bright_cyan().bold())
}

/// Format a Jira project name
pub fn format_project_name(name: &str) -> String {
  paint(name, Stream::Stdout, Style::new().bright_green())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_get_emoji_or_default() {
    let result = get_emoji_or_default("check_mark", "✓");
    assert!(!result.is_empty());

    let result = get_emoji_or_default("nonexistent_emoji", "fallback");
    assert_eq!(result, "fallback");
  }

  #[test]
  fn test_format_functions_keep_text() {
    owo_colors::set_override(false);
    assert_eq!(format_issue_key("OPS-12"), "OPS-12");
    assert_eq!(format_project_name("Camptocamp"), "Camptocamp");
  }

  #[test]
  fn test_never_mode_strips_colors() {
    ColorMode::Never.apply();
    assert_eq!(paint("BUS-1", Stream::Stdout, Style::new().red().bold()), "BUS-1");
    assert_eq!(paint("BUS-1", Stream::Stderr, Style::new().red()), "BUS-1");
    assert!(!format_issue_key("BUS-1").contains('\u{1b}'));
  }
}
