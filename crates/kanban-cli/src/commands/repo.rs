// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

use anyhow::{Context, Result};
use kanban_cli_api::KanbanApi;

use crate::app::App;
use crate::output::{self, truncate};

#[derive(Debug, Clone, clap::Subcommand)]
pub enum RepoCommand {
	/// List registered repositories
	List,
	/// Show a repository (defaults to the one containing the current directory)
	Show {
		/// Repository ID or name
		repo: Option<String>,
	},
	/// Register a local checkout with the server
	Register {
		/// Path to the repository checkout
		path: PathBuf,
		/// Display name (defaults to the directory name)
		#[arg(long)]
		name: Option<String>,
	},
}

pub async fn run(app: &App, command: RepoCommand) -> Result<()> {
	match command {
		RepoCommand::List => list(app).await,
		RepoCommand::Show { repo } => show(app, repo.as_deref()).await,
		RepoCommand::Register { path, name } => register(app, path, name.as_deref()).await,
	}
}

async fn list(app: &App) -> Result<()> {
	let repos = app
		.client
		.list_repositories()
		.await
		.context("failed to list repositories")?;

	if app.json {
		return output::print_json(&repos);
	}
	if repos.is_empty() {
		output::empty("No repositories registered. Use `kanban repo register <path>`.");
		return Ok(());
	}

	println!("{:<38} {:<24} {:<50}", "ID", "NAME", "PATH");
	println!("{}", "-".repeat(112));
	for r in &repos {
		println!(
			"{:<38} {:<24} {:<50}",
			r.id,
			truncate(r.display_name.as_deref().unwrap_or(&r.name), 24),
			r.path
		);
	}
	Ok(())
}

async fn show(app: &App, token: Option<&str>) -> Result<()> {
	let id = app.repository(token).await?;
	let repos = app
		.client
		.list_repositories()
		.await
		.context("failed to list repositories")?;
	let repo = repos
		.into_iter()
		.find(|r| r.id == id)
		.with_context(|| format!("repository {id} no longer exists"))?;

	if app.json {
		return output::print_json(&repo);
	}

	output::field("Repository", &repo.name);
	output::field("ID", &repo.id);
	output::field("Path", &repo.path);
	output::optional_field("Display name", repo.display_name.as_deref());
	Ok(())
}

async fn register(app: &App, path: PathBuf, name: Option<&str>) -> Result<()> {
	let path = std::fs::canonicalize(&path)
		.with_context(|| format!("{} is not an accessible directory", path.display()))?;
	let path = path.to_string_lossy();

	let repo = app
		.client
		.register_repository(&path, name)
		.await
		.with_context(|| format!("failed to register {path}"))?;

	if app.json {
		return output::print_json(&repo);
	}
	output::success(&format!("Registered {} ({})", repo.name, repo.id));
	Ok(())
}
