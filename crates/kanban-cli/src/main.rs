// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

mod app;
mod commands;
mod markdown;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kanban_cli_config::sections::LoggingConfig;
use kanban_cli_config::{load_config_with_cli, CliOverrides, LogFormat};
use kanban_cli_resolve::ResolveError;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use app::App;
use commands::config::ConfigCommand;
use commands::org::OrgCommand;
use commands::pr::PrCommand;
use commands::project::ProjectCommand;
use commands::repo::RepoCommand;
use commands::session::SessionCommand;
use commands::task::TaskCommand;
use commands::workspace::WorkspaceCommand;

/// Crates whose diagnostics follow `--log-level`.
const LOG_TARGETS: &[&str] = &[
	"kanban",
	"kanban_cli_api",
	"kanban_cli_config",
	"kanban_cli_git",
	"kanban_cli_picker",
	"kanban_cli_resolve",
];

/// kanban - drive coding agents on a kanban board from the terminal
#[derive(Parser, Debug)]
#[command(name = "kanban", version, about, long_about = None)]
struct Args {
	/// Server URL (overrides config)
	#[arg(long, global = true)]
	server_url: Option<String>,

	/// Log level (overrides config)
	#[arg(short, long, global = true)]
	log_level: Option<String>,

	/// Output logs as JSON (overrides config)
	#[arg(long, global = true)]
	json_logs: bool,

	/// Explain how each ID was resolved
	#[arg(short, long, global = true)]
	verbose: bool,

	/// Never launch the interactive picker
	#[arg(long, global = true)]
	no_input: bool,

	/// Print results as JSON
	#[arg(long, global = true)]
	json: bool,

	/// Picker command (overrides config)
	#[arg(long, global = true, value_name = "COMMAND")]
	picker: Option<String>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Manage projects
	#[command(subcommand)]
	Project(ProjectCommand),
	/// Manage tasks
	#[command(subcommand)]
	Task(TaskCommand),
	/// Manage workspaces (task attempts)
	#[command(subcommand)]
	#[command(visible_alias = "attempt")]
	Workspace(WorkspaceCommand),
	/// Manage registered repositories
	#[command(subcommand)]
	Repo(RepoCommand),
	/// Manage organizations
	#[command(subcommand)]
	Org(OrgCommand),
	/// Inspect executor sessions
	#[command(subcommand)]
	Session(SessionCommand),
	/// Open pull requests
	#[command(subcommand)]
	Pr(PrCommand),
	/// Inspect and initialize configuration
	#[command(subcommand)]
	Config(ConfigCommand),
	/// Show version information
	Version,
}

impl From<&Args> for CliOverrides {
	fn from(args: &Args) -> Self {
		let log_level = match (&args.log_level, args.verbose) {
			(Some(level), _) => Some(level.clone()),
			(None, true) => Some("debug".to_string()),
			(None, false) => None,
		};
		CliOverrides {
			server_url: args.server_url.clone(),
			log_level,
			log_format: args.json_logs.then_some(LogFormat::Json),
			picker: args.picker.clone(),
			interactive: args.no_input.then_some(false),
		}
	}
}

fn init_tracing(logging: &LoggingConfig) {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		let directives: Vec<String> = LOG_TARGETS
			.iter()
			.map(|target| format!("{target}={}", logging.level))
			.collect();
		EnvFilter::new(format!("warn,{}", directives.join(",")))
	});

	match logging.format {
		LogFormat::Json => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().json().with_writer(std::io::stderr))
				.init();
		}
		LogFormat::Compact => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().compact().with_writer(std::io::stderr))
				.init();
		}
		LogFormat::Pretty => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().with_writer(std::io::stderr))
				.init();
		}
	}
}

/// Resolution failures carry their own exit code; everything else exits 1.
fn exit_code(err: &anyhow::Error) -> i32 {
	err.chain()
		.find_map(|cause| cause.downcast_ref::<ResolveError>())
		.map(ResolveError::exit_code)
		.unwrap_or(1)
}

async fn run(args: Args) -> Result<()> {
	// Fast paths that must work without a valid config.
	match &args.command {
		Command::Version => return commands::version::run(args.json),
		Command::Config(command) if !command.needs_config() => {
			return commands::config::run_standalone(command, args.json);
		}
		_ => {}
	}

	let config =
		load_config_with_cli(CliOverrides::from(&args)).context("failed to load configuration")?;
	init_tracing(&config.logging);
	debug!(server = %config.server.url, "starting kanban");

	if let Command::Config(command) = args.command {
		return commands::config::run(&config, command, args.json);
	}

	let app = App::new(config, args.json, args.verbose)?;
	match args.command {
		Command::Project(command) => commands::project::run(&app, command).await,
		Command::Task(command) => commands::task::run(&app, command).await,
		Command::Workspace(command) => commands::workspace::run(&app, command).await,
		Command::Repo(command) => commands::repo::run(&app, command).await,
		Command::Org(command) => commands::org::run(&app, command).await,
		Command::Session(command) => commands::session::run(&app, command).await,
		Command::Pr(command) => commands::pr::run(&app, command).await,
		Command::Config(_) | Command::Version => Ok(()),
	}
}

#[tokio::main]
async fn main() {
	let args = Args::parse();
	let json = args.json;

	if let Err(err) = run(args).await {
		output::error(&err, json);
		std::process::exit(exit_code(&err));
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::CommandFactory;
	use kanban_cli_resolve::EntityKind;

	#[test]
	fn test_cli_definition_is_valid() {
		Args::command().debug_assert();
	}

	#[test]
	fn test_verbose_raises_log_level() {
		let args = Args::parse_from(["kanban", "-v", "project", "list"]);
		let overrides = CliOverrides::from(&args);
		assert_eq!(overrides.log_level.as_deref(), Some("debug"));
	}

	#[test]
	fn test_explicit_log_level_wins_over_verbose() {
		let args = Args::parse_from(["kanban", "-v", "--log-level", "trace", "version"]);
		let overrides = CliOverrides::from(&args);
		assert_eq!(overrides.log_level.as_deref(), Some("trace"));
	}

	#[test]
	fn test_no_input_disables_picker() {
		let args = Args::parse_from(["kanban", "task", "list", "--no-input"]);
		let overrides = CliOverrides::from(&args);
		assert_eq!(overrides.interactive, Some(false));
		assert_eq!(overrides.log_format, None);
	}

	#[test]
	fn test_attempt_alias() {
		let args = Args::parse_from(["kanban", "attempt", "branch"]);
		assert!(matches!(
			args.command,
			Command::Workspace(WorkspaceCommand::Branch { workspace: None })
		));
	}

	#[test]
	fn test_spin_off_without_value_means_current_workspace() {
		let args = Args::parse_from(["kanban", "task", "create", "--title", "x", "--spin-off"]);
		match args.command {
			Command::Task(TaskCommand::Create(create)) => {
				assert_eq!(create.spin_off.as_deref(), Some(""));
			}
			other => panic!("unexpected command: {other:?}"),
		}
	}

	#[test]
	fn test_exit_code_from_resolve_error() {
		let err = anyhow::Error::new(ResolveError::PickerCancelled {
			kind: EntityKind::Workspace,
		})
		.context("failed to pick workspace");
		assert_eq!(exit_code(&err), 130);
	}

	#[test]
	fn test_exit_code_defaults_to_one() {
		let err = anyhow::anyhow!("server exploded");
		assert_eq!(exit_code(&err), 1);
	}
}
