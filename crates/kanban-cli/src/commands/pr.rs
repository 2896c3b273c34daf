// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use anyhow::{Context, Result};
use kanban_cli_api::CreatePullRequest;

use crate::app::App;
use crate::output;

#[derive(Debug, Clone, clap::Subcommand)]
pub enum PrCommand {
	/// Open a pull request for a workspace's branch
	Create {
		/// Workspace ID (defaults to the workspace on the current branch)
		workspace: Option<String>,
		#[arg(long)]
		title: Option<String>,
		#[arg(long)]
		body: Option<String>,
		/// Branch to merge into (defaults to the workspace's target branch)
		#[arg(long)]
		target_branch: Option<String>,
	},
}

pub async fn run(app: &App, command: PrCommand) -> Result<()> {
	let PrCommand::Create {
		workspace,
		title,
		body,
		target_branch,
	} = command;

	let workspace_id = app.workspace(workspace.as_deref()).await?;
	let request = CreatePullRequest {
		title,
		body,
		target_branch,
	};
	let pr = app
		.client
		.create_pull_request(&workspace_id, &request)
		.await
		.with_context(|| format!("failed to create pull request for workspace {workspace_id}"))?;

	if app.json {
		return output::print_json(&pr);
	}
	output::success(&format!("Pull request created: {}", pr.url));
	Ok(())
}
