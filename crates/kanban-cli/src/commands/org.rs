// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use anyhow::{Context, Result};
use kanban_cli_api::KanbanApi;

use crate::app::App;
use crate::output;

#[derive(Debug, Clone, clap::Subcommand)]
pub enum OrgCommand {
	/// List organizations
	List,
	/// Show an organization
	Show {
		/// Organization ID or name
		org: Option<String>,
	},
}

pub async fn run(app: &App, command: OrgCommand) -> Result<()> {
	match command {
		OrgCommand::List => {
			let orgs = app
				.client
				.list_organizations()
				.await
				.context("failed to list organizations")?;
			if app.json {
				return output::print_json(&orgs);
			}
			if orgs.is_empty() {
				output::empty("No organizations.");
				return Ok(());
			}
			println!("{:<38} {:<30} {:<20}", "ID", "NAME", "SLUG");
			println!("{}", "-".repeat(90));
			for o in &orgs {
				println!(
					"{:<38} {:<30} {:<20}",
					o.id,
					o.name,
					o.slug.as_deref().unwrap_or("-")
				);
			}
			Ok(())
		}
		OrgCommand::Show { org } => {
			let id = app.organization(org.as_deref()).await?;
			let orgs = app
				.client
				.list_organizations()
				.await
				.context("failed to list organizations")?;
			let org = orgs
				.into_iter()
				.find(|o| o.id == id)
				.with_context(|| format!("organization {id} no longer exists"))?;
			if app.json {
				return output::print_json(&org);
			}
			output::field("Organization", &org.name);
			output::field("ID", &org.id);
			output::optional_field("Slug", org.slug.as_deref());
			Ok(())
		}
	}
}
