// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use kanban_cli_git::repo_basename;
use tracing::debug;

use crate::error::{EntityKind, ResolveError};
use crate::resolution::{Resolution, ResolutionSource};
use crate::resolver::{given, Resolver};

const KIND: EntityKind = EntityKind::Project;

impl Resolver {
	/// Resolves a project.
	///
	/// An explicit token is returned unchanged; the server validates it on
	/// first use. Without a token the project is found by comparing the
	/// basename of the local `origin` remote with each project's repository.
	pub async fn resolve_project(&self, token: Option<&str>) -> Result<Resolution, ResolveError> {
		if let Some(token) = given(token) {
			return Ok(self.report(KIND, Resolution::new(token, ResolutionSource::Explicit)));
		}

		let Some(basename) = self.git.current_repo_basename(&self.cwd).await else {
			return Err(ResolveError::not_found(
				KIND,
				"not in a git repository or no `origin` remote configured; specify the project explicitly",
			));
		};
		debug!(%basename, "detecting project from git remote");

		let projects = self.api.list_projects().await.map_err(ResolveError::api(KIND))?;
		let matches: Vec<_> = projects
			.iter()
			.filter(|p| repo_basename(&p.remote_repo_path) == basename)
			.collect();

		let resolution = match matches.as_slice() {
			[] => {
				return Err(ResolveError::not_found(
					KIND,
					format!("no project matches repository basename '{basename}'"),
				))
			}
			[only] => Resolution::new(&only.id, ResolutionSource::GitRemote),
			[first, ..] => Resolution::new(&first.id, ResolutionSource::GitRemote).with_warning(
				format!(
					"{} projects match repository basename '{basename}'; using '{}' ({})",
					matches.len(),
					first.name,
					first.id
				),
			),
		};

		Ok(self.report(KIND, resolution))
	}
}
