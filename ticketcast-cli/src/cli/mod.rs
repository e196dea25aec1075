//! # Command Line Interface
//!
//! Defines the flags of the `ticketcast` command and wires the configured
//! services into a [`Session`].

use std::path::PathBuf;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser};
use tracing::debug;
use ticketcast_core::output::{format_issue_key, format_project_name};
use ticketcast_core::{ColorMode, DialoguerPrompter, Settings, get_config_dirs, print_info, print_success};

use crate::clients::{connect_github, connect_jira};
use crate::consts::EXIT_MESSAGE;
use crate::errors::TicketcastError;
use crate::reviewer::ExternalEditor;
use crate::services::RepositoryHost;
use crate::session::{RunRequest, Session, non_blank};
use crate::submitter::confirmation_line;

/// Create the same Jira issue on every project matching a set of repositories
#[derive(Parser, Debug)]
#[command(name = "ticketcast")]
#[command(display_name = "🎫 ticketcast")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "Create the same Jira issue on every project matching a set of repositories")]
#[command(
  long_about = "ticketcast finds repositories by GitHub topic or from a CSV list, matches them to\n\
        Jira projects by name, lets you prune the list in your editor and creates one issue\n\
        per project and issue card.\n\n\
        The issue content comes from a CSV card file (--csv_jira_card), an existing issue\n\
        (--template), the --issuetype/--summary/--description flags, or interactive prompts."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    ignore_case = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,

  /// Settings file to use instead of the default location
  #[arg(long, value_name = "PATH")]
  pub config: Option<PathBuf>,

  /// GitHub topic the repositories must carry (repeatable, comma-separated)
  #[arg(long = "topic", value_name = "TOPIC", action = ArgAction::Append)]
  pub topics: Vec<String>,

  /// CSV file with a `projects` column listing repository names
  #[arg(long = "csv_project_list", visible_alias = "csv-project-list", value_name = "PATH")]
  pub csv_project_list: Option<PathBuf>,

  /// CSV file with `summary`, `description` and `issuetype` columns
  #[arg(long = "csv_jira_card", visible_alias = "csv-jira-card", value_name = "PATH")]
  pub csv_jira_card: Option<PathBuf>,

  /// Key of an existing issue to duplicate
  #[arg(long, value_name = "KEY")]
  pub template: Option<String>,

  /// Issue type of the new issues
  #[arg(long = "issuetype", visible_alias = "issue-type", value_name = "TYPE")]
  pub issue_type: Option<String>,

  /// Summary of the new issues
  #[arg(long)]
  pub summary: Option<String>,

  /// Description of the new issues; `\n` starts a new line
  #[arg(long)]
  pub description: Option<String>,
}

impl Cli {
  /// The run described by the flags. Blank values count as absent.
  pub fn run_request(&self) -> RunRequest {
    RunRequest {
      topics: self
        .topics
        .iter()
        .filter(|topic| !topic.trim().is_empty())
        .cloned()
        .collect(),
      csv_project_list: self.csv_project_list.clone(),
      csv_jira_card: self.csv_jira_card.clone(),
      template: non_blank(self.template.clone()),
      issue_type: non_blank(self.issue_type.clone()),
      summary: non_blank(self.summary.clone()),
      description: non_blank(self.description.clone()),
    }
  }
}

/// Run the command described by `cli`
pub fn handle_cli(cli: Cli) -> Result<()> {
  cli.colors.apply();

  let request = cli.run_request();
  // Fail on a missing source before asking for any credential.
  request.repository_source()?;

  let dirs = get_config_dirs()?;
  let config_path = cli.config.clone().unwrap_or_else(|| dirs.config_path());
  let settings = Settings::load(&config_path).map_err(|e| TicketcastError::Config(format!("{e:#}")))?;
  let jira_host = settings
    .jira_server()
    .map_err(|e| TicketcastError::Config(format!("{e:#}")))?;
  debug!("Using settings from {} against {}", config_path.display(), jira_host);

  let mut prompter = DialoguerPrompter::new();
  let home = directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
  let tracker = connect_jira(&jira_host, home.as_deref(), settings.jira.username.as_deref(), &mut prompter)?;

  let host: Option<Box<dyn RepositoryHost>> = if request.needs_repository_host() {
    let host = connect_github(&dirs.github_token_path(), &settings.github.api_url, &mut prompter)?;
    Some(Box::new(host))
  } else {
    None
  };

  let editor = ExternalEditor::from_env()?;
  let session = Session::new(request, settings, Box::new(tracker), host);
  session.run(&editor, &mut prompter, |issue| {
    print_success(&confirmation_line(
      &format_issue_key(&issue.key),
      &format_project_name(&issue.project_name),
    ));
  })?;

  print_info(EXIT_MESSAGE);
  Ok(())
}
