// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::client::GitClient;

/// Recorded call to the mock git client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MockCall {
	CurrentBranch(PathBuf),
	RemoteOriginUrl(PathBuf),
}

/// Mock git client for testing.
///
/// Remotes are keyed by path so a test can describe several checkouts at
/// once (the working directory plus each registered repository).
#[derive(Clone, Default)]
pub struct MockGitClient {
	/// Branch returned for every path.
	pub branch: Option<String>,
	/// `origin` URL per repository path.
	pub remotes: HashMap<PathBuf, String>,
	/// Track calls for verification.
	pub calls: Arc<Mutex<Vec<MockCall>>>,
}

impl MockGitClient {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
		self.branch = Some(branch.into());
		self
	}

	pub fn with_remote(mut self, path: impl Into<PathBuf>, url: impl Into<String>) -> Self {
		self.remotes.insert(path.into(), url.into());
		self
	}

	/// Returns the recorded calls.
	pub fn get_calls(&self) -> Vec<MockCall> {
		self.calls.lock().unwrap().clone()
	}

	/// Clears recorded calls.
	pub fn clear_calls(&self) {
		self.calls.lock().unwrap().clear();
	}

	fn record(&self, call: MockCall) {
		self.calls.lock().unwrap().push(call);
	}
}

#[async_trait]
impl GitClient for MockGitClient {
	async fn current_branch(&self, path: &Path) -> Option<String> {
		self.record(MockCall::CurrentBranch(path.to_path_buf()));
		self.branch.clone()
	}

	async fn remote_origin_url(&self, path: &Path) -> Option<String> {
		self.record(MockCall::RemoteOriginUrl(path.to_path_buf()));
		self.remotes.get(path).cloned()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	/// Test: MockGitClient records all calls in order.
	///
	/// Why this test is important: Resolver tests assert which signals were
	/// consulted (for example that an explicit token skips git entirely).
	/// Incorrect recording would lead to false positive tests.
	#[tokio::test]
	async fn test_records_all_calls() {
		let client = MockGitClient::new();
		let path = PathBuf::from("/test");

		client.current_branch(&path).await;
		client.remote_origin_url(&path).await;

		assert_eq!(
			client.get_calls(),
			vec![
				MockCall::CurrentBranch(path.clone()),
				MockCall::RemoteOriginUrl(path),
			]
		);

		client.clear_calls();
		assert!(client.get_calls().is_empty());
	}

	#[tokio::test]
	async fn test_remotes_are_per_path() {
		let client = MockGitClient::new()
			.with_remote("/work/a", "https://host/org/a.git")
			.with_remote("/work/b", "git@host:org/b.git");

		assert_eq!(
			client.current_repo_basename(Path::new("/work/a")).await,
			Some("a".to_string())
		);
		assert_eq!(
			client.current_repo_basename(Path::new("/work/b")).await,
			Some("b".to_string())
		);
		assert_eq!(client.current_repo_basename(Path::new("/work/c")).await, None);
	}

	#[tokio::test]
	async fn test_branch_defaults_to_none() {
		let client = MockGitClient::new();
		assert_eq!(client.current_branch(Path::new("/test")).await, None);

		let client = client.with_branch("main");
		assert_eq!(
			client.current_branch(Path::new("/test")).await,
			Some("main".to_string())
		);
	}
}
