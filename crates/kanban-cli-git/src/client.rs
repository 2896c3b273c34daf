// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::path::Path;

use async_trait::async_trait;

use crate::normalize::repo_basename;

/// Trait abstracting the git signals for testability.
///
/// Implementations never fail: any problem running git (not installed, not a
/// repository, no such remote) is reported as `None`, which callers treat as
/// "no context available".
#[async_trait]
pub trait GitClient: Send + Sync {
	/// Name of the checked-out branch, or `None` for detached HEAD and
	/// non-repositories.
	async fn current_branch(&self, path: &Path) -> Option<String>;

	/// URL configured for the `origin` remote.
	async fn remote_origin_url(&self, path: &Path) -> Option<String>;

	/// Basename of the `origin` remote, independent of where the repository
	/// is checked out locally.
	async fn current_repo_basename(&self, path: &Path) -> Option<String> {
		let url = self.remote_origin_url(path).await?;
		let basename = repo_basename(&url);
		if basename.is_empty() {
			None
		} else {
			Some(basename)
		}
	}
}
