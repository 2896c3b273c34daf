// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use kanban_cli_api::{CreateTask, Task, TaskStatus, UpdateTask};

use crate::app::App;
use crate::markdown::read_task_file;
use crate::output::{self, truncate};

#[derive(Debug, Clone, clap::Subcommand)]
pub enum TaskCommand {
	/// List tasks of a project
	List {
		/// Project ID (defaults to the project matching the current git remote)
		#[arg(long)]
		project: Option<String>,
		/// Only show tasks with this status
		#[arg(long)]
		status: Option<TaskStatus>,
	},
	/// Show a task (defaults to the task of the current workspace)
	Show {
		/// Task ID
		task: Option<String>,
	},
	/// Create a task
	Create(CreateArgs),
	/// Update a task's title, description or status
	Update {
		/// Task ID
		task: String,
		#[arg(long)]
		title: Option<String>,
		#[arg(long)]
		description: Option<String>,
		#[arg(long)]
		status: Option<TaskStatus>,
	},
	/// Delete a task
	Delete {
		/// Task ID
		task: String,
	},
}

#[derive(Debug, Clone, clap::Args)]
pub struct CreateArgs {
	/// Task title
	#[arg(long, required_unless_present = "from_file", conflicts_with = "from_file")]
	pub title: Option<String>,

	/// Task description
	#[arg(long)]
	pub description: Option<String>,

	/// Read title and description from a markdown file
	#[arg(long, value_name = "PATH")]
	pub from_file: Option<PathBuf>,

	/// Project ID (defaults to the project matching the current git remote)
	#[arg(long)]
	pub project: Option<String>,

	/// Create the task as a spin-off of a workspace (defaults to the current one)
	#[arg(long, value_name = "WORKSPACE", num_args = 0..=1, default_missing_value = "")]
	pub spin_off: Option<String>,
}

pub async fn run(app: &App, command: TaskCommand) -> Result<()> {
	match command {
		TaskCommand::List { project, status } => list(app, project.as_deref(), status).await,
		TaskCommand::Show { task } => show(app, task.as_deref()).await,
		TaskCommand::Create(args) => create(app, args).await,
		TaskCommand::Update {
			task,
			title,
			description,
			status,
		} => {
			let update = UpdateTask {
				title,
				description,
				status,
			};
			if update.is_empty() {
				bail!("nothing to update; pass --title, --description or --status");
			}
			let task = app
				.client
				.update_task(&task, &update)
				.await
				.with_context(|| format!("failed to update task {task}"))?;
			if app.json {
				return output::print_json(&task);
			}
			output::success(&format!("Updated task {} ({})", task.title, task.id));
			Ok(())
		}
		TaskCommand::Delete { task } => {
			app.client
				.delete_task(&task)
				.await
				.with_context(|| format!("failed to delete task {task}"))?;
			if app.json {
				return output::print_json(&serde_json::json!({ "deleted": task }));
			}
			output::success(&format!("Deleted task {task}"));
			Ok(())
		}
	}
}

async fn list(app: &App, project: Option<&str>, status: Option<TaskStatus>) -> Result<()> {
	let project_id = app.project(project).await?;
	let mut tasks = app
		.client
		.list_tasks(&project_id)
		.await
		.with_context(|| format!("failed to list tasks of project {project_id}"))?;
	if let Some(status) = status {
		tasks.retain(|t| t.status == status);
	}

	if app.json {
		return output::print_json(&tasks);
	}
	if tasks.is_empty() {
		output::empty("No tasks.");
		return Ok(());
	}

	println!("{:<38} {:<12} {:<50}", "ID", "STATUS", "TITLE");
	println!("{}", "-".repeat(102));
	for t in &tasks {
		println!(
			"{:<38} {:<12} {:<50}",
			t.id,
			t.status.as_str(),
			truncate(&t.title, 50)
		);
	}
	Ok(())
}

async fn show(app: &App, token: Option<&str>) -> Result<()> {
	let task_id = match token.filter(|t| !t.trim().is_empty()) {
		Some(id) => id.to_string(),
		None => {
			let workspace_id = app.workspace(None).await?;
			app.client
				.get_workspace(&workspace_id)
				.await
				.with_context(|| format!("failed to load workspace {workspace_id}"))?
				.task_id
		}
	};

	let task = app
		.client
		.get_task(&task_id)
		.await
		.with_context(|| format!("failed to load task {task_id}"))?;

	if app.json {
		return output::print_json(&task);
	}
	print_task(&task);
	Ok(())
}

fn print_task(task: &Task) {
	println!("{}", task.title.bold());
	output::field("ID", &task.id);
	output::field("Project", &task.project_id);
	output::field("Status", task.status);
	output::optional_field("Spun off from", task.parent_workspace_id.as_deref());
	if let Some(updated) = task.updated_at {
		output::field("Updated", updated.format("%Y-%m-%d %H:%M"));
	}
	if let Some(description) = task.description.as_deref().filter(|d| !d.is_empty()) {
		println!();
		println!("{description}");
	}
}

async fn create(app: &App, args: CreateArgs) -> Result<()> {
	let (title, description) = match &args.from_file {
		Some(path) => {
			let draft = read_task_file(path)?;
			(draft.title, args.description.clone().or(draft.description))
		}
		None => match args.title.clone() {
			Some(title) => (title, args.description.clone()),
			None => bail!("a title is required; pass --title or --from-file"),
		},
	};

	let parent_workspace_id = match args.spin_off.as_deref() {
		Some(token) => Some(app.workspace(Some(token)).await?),
		None => None,
	};

	let project_id = match (&args.project, &parent_workspace_id) {
		(None, Some(parent)) => {
			let workspace = app
				.client
				.get_workspace(parent)
				.await
				.with_context(|| format!("failed to load workspace {parent}"))?;
			app.client
				.get_task(&workspace.task_id)
				.await
				.with_context(|| format!("failed to load task {}", workspace.task_id))?
				.project_id
		}
		(project, _) => app.project(project.as_deref()).await?,
	};

	let request = CreateTask {
		project_id,
		title,
		description,
		parent_workspace_id,
	};
	let task = app
		.client
		.create_task(&request)
		.await
		.context("failed to create task")?;

	if app.json {
		return output::print_json(&task);
	}
	output::success(&format!("Created task {} ({})", task.title, task.id));
	Ok(())
}
