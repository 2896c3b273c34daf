// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use anyhow::{Context, Result};
use kanban_cli_api::KanbanApi;

use crate::app::App;
use crate::output::{self, truncate};

#[derive(Debug, Clone, clap::Subcommand)]
pub enum ProjectCommand {
	/// List all projects
	List,
	/// Show a project (defaults to the one matching the current git remote)
	Show {
		/// Project ID
		project: Option<String>,
	},
}

pub async fn run(app: &App, command: ProjectCommand) -> Result<()> {
	match command {
		ProjectCommand::List => list(app).await,
		ProjectCommand::Show { project } => show(app, project.as_deref()).await,
	}
}

async fn list(app: &App) -> Result<()> {
	let projects = app
		.client
		.list_projects()
		.await
		.context("failed to list projects")?;

	if app.json {
		return output::print_json(&projects);
	}
	if projects.is_empty() {
		output::empty("No projects.");
		return Ok(());
	}

	println!("{:<38} {:<30} {:<40}", "ID", "NAME", "REPOSITORY");
	println!("{}", "-".repeat(110));
	for p in &projects {
		println!(
			"{:<38} {:<30} {:<40}",
			p.id,
			truncate(&p.name, 30),
			truncate(&p.remote_repo_path, 40)
		);
	}
	Ok(())
}

async fn show(app: &App, token: Option<&str>) -> Result<()> {
	let id = app.project(token).await?;
	let project = app
		.client
		.get_project(&id)
		.await
		.with_context(|| format!("failed to load project {id}"))?;

	if app.json {
		return output::print_json(&project);
	}

	output::field("Project", &project.name);
	output::field("ID", &project.id);
	output::optional_field("Repository", Some(project.remote_repo_path.as_str()));
	if let Some(created) = project.created_at {
		output::field("Created", created.format("%Y-%m-%d %H:%M"));
	}
	Ok(())
}
