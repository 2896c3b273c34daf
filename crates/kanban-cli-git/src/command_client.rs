// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, trace, warn};

use crate::client::GitClient;
use crate::error::GitError;

/// Git client implementation using the git CLI.
pub struct CommandGitClient;

impl CommandGitClient {
	pub fn new() -> Self {
		Self
	}
}

impl Default for CommandGitClient {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl GitClient for CommandGitClient {
	async fn current_branch(&self, path: &Path) -> Option<String> {
		signal(path, &["branch", "--show-current"]).await
	}

	async fn remote_origin_url(&self, path: &Path) -> Option<String> {
		signal(path, &["remote", "get-url", "origin"]).await
	}
}

/// Runs a git query and folds every failure into `None`.
async fn signal(path: &Path, args: &[&str]) -> Option<String> {
	match run_git(path, args).await {
		Ok(stdout) if stdout.is_empty() => {
			trace!(path = %path.display(), args = ?args, "git returned empty output");
			None
		}
		Ok(stdout) => Some(stdout),
		Err(e) => {
			debug!(path = %path.display(), args = ?args, error = %e, "git signal unavailable");
			None
		}
	}
}

/// Runs `git -C <dir> <query>` and returns trimmed stdout.
async fn run_git(dir: &Path, query: &[&str]) -> Result<String, GitError> {
	trace!(dir = %dir.display(), query = ?query, "git");

	let output = Command::new("git")
		.arg("-C")
		.arg(dir)
		.args(query)
		.output()
		.await
		.map_err(|source| match source.kind() {
			std::io::ErrorKind::NotFound => {
				warn!("git executable not found in PATH");
				GitError::NotInstalled
			}
			_ => GitError::Spawn {
				dir: dir.to_path_buf(),
				source,
			},
		})?;

	if !output.status.success() {
		return Err(GitError::QueryFailed {
			dir: dir.to_path_buf(),
			query: query.join(" "),
			code: output.status.code(),
			stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
		});
	}
	Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
