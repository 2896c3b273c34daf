// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use async_trait::async_trait;

use crate::error::ApiError;
use crate::types::{Organization, Project, Repository, Workspace};

/// Read surface the resolvers consume.
///
/// Every call fetches fresh state from the server; implementations must not
/// cache between calls.
#[async_trait]
pub trait KanbanApi: Send + Sync {
	async fn list_projects(&self) -> Result<Vec<Project>, ApiError>;

	async fn list_repositories(&self) -> Result<Vec<Repository>, ApiError>;

	/// Registers a local checkout with the server.
	async fn register_repository(
		&self,
		path: &str,
		display_name: Option<&str>,
	) -> Result<Repository, ApiError>;

	async fn list_organizations(&self) -> Result<Vec<Organization>, ApiError>;

	async fn list_workspaces(&self) -> Result<Vec<Workspace>, ApiError>;

	/// Workspaces whose recorded branch equals `branch`, in server order.
	async fn search_workspaces_by_branch(&self, branch: &str) -> Result<Vec<Workspace>, ApiError>;
}
