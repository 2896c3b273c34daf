// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::path::Path;

use futures::future::join_all;
use kanban_cli_api::Repository;
use kanban_cli_picker::Candidate;
use tracing::debug;

use crate::error::{EntityKind, Match, ResolveError};
use crate::resolution::{Resolution, ResolutionSource};
use crate::resolver::{given, Resolver};

const KIND: EntityKind = EntityKind::Repository;

/// True when `cwd` is `repo_path` or lies below it.
///
/// Trailing slashes are ignored on both sides and the match must end on a
/// path separator, so `/a/bx` is not inside `/a/b`.
pub fn path_contains(repo_path: &str, cwd: &str) -> bool {
	if repo_path.is_empty() {
		return false;
	}
	let repo = repo_path.trim_end_matches('/');
	let cwd = cwd.trim_end_matches('/');
	cwd == repo || cwd.strip_prefix(repo).is_some_and(|rest| rest.starts_with('/'))
}

/// The deepest repository containing `cwd`; ties keep input order.
fn deepest_containing<'a>(repos: &[&'a Repository], cwd: &str) -> Option<&'a Repository> {
	let mut containing: Vec<&Repository> = repos
		.iter()
		.copied()
		.filter(|r| path_contains(&r.path, cwd))
		.collect();
	containing.sort_by_key(|r| std::cmp::Reverse(r.path.trim_end_matches('/').len()));
	containing.first().copied()
}

fn ambiguity(token: &str, repos: &[&Repository]) -> ResolveError {
	ResolveError::Ambiguous {
		kind: KIND,
		token: token.to_string(),
		matches: repos.iter().map(|r| Match::new(&r.id, &r.path)).collect(),
	}
}

impl Resolver {
	/// Resolves a repository.
	///
	/// With a token: exact ID, then exact name, then case-insensitive
	/// substring of the name. Several name matches are always an error.
	///
	/// Without a token: git remote basename, then working-directory
	/// containment, then the interactive picker.
	pub async fn resolve_repository(&self, token: Option<&str>) -> Result<Resolution, ResolveError> {
		let repos = self
			.api
			.list_repositories()
			.await
			.map_err(ResolveError::api(KIND))?;

		let resolution = match given(token) {
			Some(token) => resolve_explicit(&repos, token)?,
			None => self.resolve_from_context(&repos).await?,
		};
		Ok(self.report(KIND, resolution))
	}

	async fn resolve_from_context(&self, repos: &[Repository]) -> Result<Resolution, ResolveError> {
		if repos.is_empty() {
			return Err(ResolveError::not_found(
				KIND,
				"no repositories registered; register one with `kanban repo register <path>`",
			));
		}

		let cwd = self.cwd.to_string_lossy().into_owned();

		if let Some(resolution) = self.match_git_remote(repos, &cwd).await {
			return Ok(resolution);
		}

		let all: Vec<&Repository> = repos.iter().collect();
		if let Some(repo) = deepest_containing(&all, &cwd) {
			debug!(path = %repo.path, "repository contains working directory");
			return Ok(Resolution::new(&repo.id, ResolutionSource::PathContainment));
		}

		let candidates = repos
			.iter()
			.map(|r| Candidate::new(&r.id).column(&r.name).column(&r.path))
			.collect();
		let guidance = format!(
			"could not detect a repository for {cwd}; pass a repository ID or name"
		);
		let id = self.choose(KIND, candidates, guidance).await?;
		Ok(Resolution::new(id, ResolutionSource::Picker))
	}

	/// Compares the local `origin` basename with each repository's own
	/// remote basename, falling back to the stored name when the checkout
	/// is not reachable from here.
	async fn match_git_remote(&self, repos: &[Repository], cwd: &str) -> Option<Resolution> {
		let local = self.git.current_repo_basename(&self.cwd).await?;
		debug!(basename = %local, count = repos.len(), "matching repositories by git remote");

		let lookups = repos.iter().map(|repo| async move {
			let basename = self
				.git
				.current_repo_basename(Path::new(&repo.path))
				.await
				.unwrap_or_else(|| repo.name.clone());
			(repo, basename)
		});
		let matches: Vec<&Repository> = join_all(lookups)
			.await
			.into_iter()
			.filter(|(_, basename)| *basename == local)
			.map(|(repo, _)| repo)
			.collect();

		match matches.as_slice() {
			[] => None,
			[only] => Some(Resolution::new(&only.id, ResolutionSource::GitRemote)),
			[first, ..] => Some(match deepest_containing(&matches, cwd) {
				Some(repo) => Resolution::new(&repo.id, ResolutionSource::GitRemote),
				None => Resolution::new(&first.id, ResolutionSource::GitRemote).with_warning(format!(
					"{} repositories match remote basename '{local}' and none contains {cwd}; using {} ({})",
					matches.len(),
					first.path,
					first.id
				)),
			}),
		}
	}
}

fn resolve_explicit(repos: &[Repository], token: &str) -> Result<Resolution, ResolveError> {
	if let Some(repo) = repos.iter().find(|r| r.id == token) {
		return Ok(Resolution::new(&repo.id, ResolutionSource::IdMatch));
	}

	let named: Vec<&Repository> = repos.iter().filter(|r| r.name == token).collect();
	match named.as_slice() {
		[only] => return Ok(Resolution::new(&only.id, ResolutionSource::NameMatch)),
		[_, _, ..] => return Err(ambiguity(token, &named)),
		[] => {}
	}

	let needle = token.to_lowercase();
	let partial: Vec<&Repository> = repos
		.iter()
		.filter(|r| r.name.to_lowercase().contains(&needle))
		.collect();
	match partial.as_slice() {
		[only] => Ok(Resolution::new(&only.id, ResolutionSource::PartialNameMatch)),
		[_, _, ..] => Err(ambiguity(token, &partial)),
		[] => Err(ResolveError::not_found(
			KIND,
			format!("repository '{token}' not found"),
		)),
	}
}
