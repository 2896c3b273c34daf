// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use anyhow::{bail, Context, Result};
use colored::Colorize;
use kanban_cli_config::paths::resolve_xdg_paths;
use kanban_cli_config::{ensure_default_config, KanbanConfig, CONFIG_KEYS};

use crate::output;

#[derive(Debug, Clone, clap::Subcommand)]
pub enum ConfigCommand {
	/// Write a commented default config file
	Init,
	/// Show the resolved configuration
	Show,
	/// Print a single value, e.g. `server.url`
	Get { key: String },
	/// Print config file locations
	Path,
}

impl ConfigCommand {
	/// Whether the command needs the layered configuration loaded.
	pub fn needs_config(&self) -> bool {
		matches!(self, ConfigCommand::Show | ConfigCommand::Get { .. })
	}
}

/// Runs `init` and `path`, which work even when the config is invalid.
pub fn run_standalone(command: &ConfigCommand, json: bool) -> Result<()> {
	let paths = resolve_xdg_paths().context("failed to locate config directory")?;
	match command {
		ConfigCommand::Init => {
			let written = ensure_default_config(&paths.user_config_file)?;
			if json {
				return output::print_json(&serde_json::json!({
					"path": paths.user_config_file,
					"created": written,
				}));
			}
			if written {
				output::success(&format!("Wrote {}", paths.user_config_file.display()));
			} else {
				println!(
					"{} already exists",
					paths.user_config_file.display().to_string().bold()
				);
			}
			Ok(())
		}
		ConfigCommand::Path => {
			if json {
				return output::print_json(&serde_json::json!({
					"user": paths.user_config_file,
					"system": paths.system_config_file,
					"workspace": paths.workspace_config_file,
				}));
			}
			output::field("User", paths.user_config_file.display());
			output::field("System", paths.system_config_file.display());
			match &paths.workspace_config_file {
				Some(ws) => output::field("Workspace", ws.display()),
				None => output::field("Workspace", "-".dimmed()),
			}
			Ok(())
		}
		ConfigCommand::Show | ConfigCommand::Get { .. } => {
			bail!("this config command needs the loaded configuration")
		}
	}
}

pub fn run(config: &KanbanConfig, command: ConfigCommand, json: bool) -> Result<()> {
	match command {
		ConfigCommand::Show => {
			if json {
				return output::print_json(config);
			}
			print!("{}", config.to_toml()?);
			Ok(())
		}
		ConfigCommand::Get { key } => match config.get(&key) {
			Some(value) => {
				if json {
					return output::print_json(&serde_json::json!({ key: value }));
				}
				println!("{value}");
				Ok(())
			}
			None => bail!(
				"unknown config key '{key}' (known keys: {})",
				CONFIG_KEYS.join(", ")
			),
		},
		other => run_standalone(&other, json),
	}
}
