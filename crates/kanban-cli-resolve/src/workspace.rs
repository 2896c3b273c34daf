// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use kanban_cli_picker::Candidate;
use tracing::debug;

use crate::error::{EntityKind, ResolveError};
use crate::resolution::{Resolution, ResolutionSource};
use crate::resolver::{given, Resolver};

const KIND: EntityKind = EntityKind::Workspace;

const NO_BRANCH_MATCH: &str = "not in a workspace branch; provide workspace ID explicitly";

impl Resolver {
	/// Resolves a workspace (task attempt).
	///
	/// An explicit token is returned unchanged. Otherwise the current git
	/// branch is looked up on the server, and failing that the user picks
	/// from every workspace.
	pub async fn resolve_workspace(&self, token: Option<&str>) -> Result<Resolution, ResolveError> {
		if let Some(token) = given(token) {
			return Ok(self.report(KIND, Resolution::new(token, ResolutionSource::Explicit)));
		}

		if let Some(branch) = self.git.current_branch(&self.cwd).await {
			debug!(%branch, "looking up workspace by branch");
			let found = self
				.api
				.search_workspaces_by_branch(&branch)
				.await
				.map_err(ResolveError::api(KIND))?;

			match found.as_slice() {
				[] => debug!(%branch, "no workspace on current branch"),
				[only] => {
					return Ok(self.report(KIND, Resolution::new(&only.id, ResolutionSource::Branch)))
				}
				[first, ..] => {
					let resolution = Resolution::new(&first.id, ResolutionSource::Branch).with_warning(
						format!(
							"{} workspaces use branch '{branch}'; using {}",
							found.len(),
							first.id
						),
					);
					return Ok(self.report(KIND, resolution));
				}
			}
		}

		let workspaces = self
			.api
			.list_workspaces()
			.await
			.map_err(ResolveError::api(KIND))?;
		if workspaces.is_empty() {
			return Err(ResolveError::not_found(KIND, NO_BRANCH_MATCH));
		}

		let candidates = workspaces
			.iter()
			.map(|w| {
				Candidate::new(&w.id)
					.column(&w.branch)
					.column(w.name.as_deref().unwrap_or("(unnamed)"))
			})
			.collect();
		let id = self
			.choose(KIND, candidates, NO_BRANCH_MATCH.to_string())
			.await?;
		Ok(self.report(KIND, Resolution::new(id, ResolutionSource::Picker)))
	}
}
