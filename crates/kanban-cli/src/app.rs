// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Per-invocation wiring: config, server client and resolver.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use kanban_cli_api::KanbanClient;
use kanban_cli_config::KanbanConfig;
use kanban_cli_git::CommandGitClient;
use kanban_cli_picker::FzfPicker;
use kanban_cli_resolve::{EntityKind, Resolution, ResolveError, ResolveOptions, Resolver};

use crate::output;

pub struct App {
	pub config: KanbanConfig,
	pub client: Arc<KanbanClient>,
	pub resolver: Resolver,
	pub json: bool,
	pub verbose: bool,
}

impl App {
	pub fn new(config: KanbanConfig, json: bool, verbose: bool) -> Result<Self> {
		let client = Arc::new(
			KanbanClient::new(
				&config.server.url,
				Duration::from_secs(config.server.timeout_secs),
			)
			.context("failed to create server client")?,
		);

		let cwd: PathBuf = std::env::current_dir().context("failed to read working directory")?;
		let interactive = config.picker.interactive && std::io::stdin().is_terminal();
		let options = ResolveOptions {
			interactive,
			verbose,
			default_executor: Some(config.executor.default.clone()),
		};

		let resolver = Resolver::new(
			client.clone(),
			Arc::new(CommandGitClient::new()),
			Arc::new(FzfPicker::new(&config.picker.command)),
			cwd,
		)
		.with_options(options);

		Ok(Self {
			config,
			client,
			resolver,
			json,
			verbose,
		})
	}

	/// Surfaces warnings and, with `--verbose`, how the ID was found.
	fn accept(&self, kind: EntityKind, resolution: Resolution) -> String {
		if let Some(warning) = &resolution.warning {
			output::warning(warning);
		}
		if self.verbose {
			output::note(&format!(
				"{kind} {} ({})",
				resolution.id, resolution.source
			));
		}
		resolution.id
	}

	pub async fn project(&self, token: Option<&str>) -> Result<String, ResolveError> {
		let resolution = self.resolver.resolve_project(token).await?;
		Ok(self.accept(EntityKind::Project, resolution))
	}

	pub async fn repository(&self, token: Option<&str>) -> Result<String, ResolveError> {
		let resolution = self.resolver.resolve_repository(token).await?;
		Ok(self.accept(EntityKind::Repository, resolution))
	}

	pub async fn organization(&self, token: Option<&str>) -> Result<String, ResolveError> {
		let resolution = self.resolver.resolve_organization(token).await?;
		Ok(self.accept(EntityKind::Organization, resolution))
	}

	pub async fn workspace(&self, token: Option<&str>) -> Result<String, ResolveError> {
		let resolution = self.resolver.resolve_workspace(token).await?;
		Ok(self.accept(EntityKind::Workspace, resolution))
	}

	pub fn executor(&self, token: Option<&str>) -> Result<String, ResolveError> {
		let resolution = self.resolver.resolve_executor(token)?;
		Ok(self.accept(EntityKind::Executor, resolution))
	}
}
