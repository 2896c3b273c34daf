// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use anyhow::{Context, Result};
use kanban_cli_api::{CreateWorkspace, KanbanApi, Workspace};

use crate::app::App;
use crate::output::{self, truncate};

#[derive(Debug, Clone, clap::Subcommand)]
pub enum WorkspaceCommand {
	/// List workspaces, optionally for a single task
	List {
		#[arg(long)]
		task: Option<String>,
	},
	/// Show a workspace (defaults to the one on the current branch)
	Show {
		/// Workspace ID
		workspace: Option<String>,
	},
	/// Start a workspace for a task
	Create {
		/// Task ID
		#[arg(long)]
		task: String,
		/// Coding agent to run (e.g. claude, gemini, codex)
		#[arg(long)]
		executor: Option<String>,
		/// Branch to start from
		#[arg(long)]
		base_branch: Option<String>,
		/// Repository IDs or names (defaults to the repository containing the current directory)
		#[arg(long = "repo", value_name = "REPO")]
		repos: Vec<String>,
	},
	/// Print the branch of a workspace
	Branch {
		/// Workspace ID
		workspace: Option<String>,
	},
}

pub async fn run(app: &App, command: WorkspaceCommand) -> Result<()> {
	match command {
		WorkspaceCommand::List { task } => list(app, task.as_deref()).await,
		WorkspaceCommand::Show { workspace } => {
			let workspace = load(app, workspace.as_deref()).await?;
			if app.json {
				return output::print_json(&workspace);
			}
			output::field("Workspace", workspace.name.as_deref().unwrap_or("(unnamed)"));
			output::field("ID", &workspace.id);
			output::field("Task", &workspace.task_id);
			output::field("Branch", &workspace.branch);
			output::optional_field("Target branch", workspace.target_branch.as_deref());
			output::optional_field("Executor", workspace.executor.as_deref());
			Ok(())
		}
		WorkspaceCommand::Create {
			task,
			executor,
			base_branch,
			repos,
		} => {
			let executor = app.executor(executor.as_deref())?;
			let repo_ids = if repos.is_empty() {
				vec![app.repository(None).await?]
			} else {
				let mut ids = Vec::with_capacity(repos.len());
				for repo in &repos {
					ids.push(app.repository(Some(repo)).await?);
				}
				ids
			};

			let request = CreateWorkspace {
				task_id: task,
				executor,
				base_branch,
				repo_ids,
			};
			let workspace = app
				.client
				.create_workspace(&request)
				.await
				.context("failed to create workspace")?;
			if app.json {
				return output::print_json(&workspace);
			}
			output::success(&format!(
				"Started workspace {} on branch {}",
				workspace.id, workspace.branch
			));
			Ok(())
		}
		WorkspaceCommand::Branch { workspace } => {
			let workspace = load(app, workspace.as_deref()).await?;
			if app.json {
				return output::print_json(&serde_json::json!({ "branch": workspace.branch }));
			}
			println!("{}", workspace.branch);
			Ok(())
		}
	}
}

async fn load(app: &App, token: Option<&str>) -> Result<Workspace> {
	let id = app.workspace(token).await?;
	app.client
		.get_workspace(&id)
		.await
		.with_context(|| format!("failed to load workspace {id}"))
}

async fn list(app: &App, task: Option<&str>) -> Result<()> {
	let workspaces = match task {
		Some(task_id) => app
			.client
			.list_workspaces_for_task(task_id)
			.await
			.with_context(|| format!("failed to list workspaces of task {task_id}"))?,
		None => app
			.client
			.list_workspaces()
			.await
			.context("failed to list workspaces")?,
	};

	if app.json {
		return output::print_json(&workspaces);
	}
	if workspaces.is_empty() {
		output::empty("No workspaces.");
		return Ok(());
	}

	println!("{:<38} {:<40} {:<24}", "ID", "BRANCH", "NAME");
	println!("{}", "-".repeat(104));
	for w in &workspaces {
		println!(
			"{:<38} {:<40} {:<24}",
			w.id,
			truncate(&w.branch, 40),
			truncate(w.name.as_deref().unwrap_or("(unnamed)"), 24)
		);
	}
	Ok(())
}
