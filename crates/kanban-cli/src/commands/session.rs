// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use anyhow::{Context, Result};

use crate::app::App;
use crate::output;

#[derive(Debug, Clone, clap::Subcommand)]
pub enum SessionCommand {
	/// List executor sessions of a workspace
	List {
		/// Workspace ID (defaults to the workspace on the current branch)
		workspace: Option<String>,
	},
}

pub async fn run(app: &App, command: SessionCommand) -> Result<()> {
	let SessionCommand::List { workspace } = command;

	let workspace_id = app.workspace(workspace.as_deref()).await?;
	let sessions = app
		.client
		.list_sessions(&workspace_id)
		.await
		.with_context(|| format!("failed to list sessions of workspace {workspace_id}"))?;

	if app.json {
		return output::print_json(&sessions);
	}
	if sessions.is_empty() {
		output::empty("No sessions.");
		return Ok(());
	}

	println!("{:<38} {:<16} {:<20}", "ID", "EXECUTOR", "STARTED");
	println!("{}", "-".repeat(76));
	for s in &sessions {
		let started = s
			.created_at
			.map(|t| t.format("%Y-%m-%d %H:%M").to_string())
			.unwrap_or_else(|| "-".to_string());
		println!(
			"{:<38} {:<16} {:<20}",
			s.id,
			s.executor.as_deref().unwrap_or("-"),
			started
		);
	}
	Ok(())
}
