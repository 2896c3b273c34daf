// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::api::KanbanApi;
use crate::error::ApiError;
use crate::types::{Organization, Project, Repository, Workspace};

/// Recorded call to the mock API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MockApiCall {
	ListProjects,
	ListRepositories,
	RegisterRepository {
		path: String,
		display_name: Option<String>,
	},
	ListOrganizations,
	ListWorkspaces,
	SearchWorkspacesByBranch(String),
}

/// In-memory server for testing.
#[derive(Clone, Default)]
pub struct MockKanbanApi {
	pub projects: Vec<Project>,
	pub repositories: Arc<Mutex<Vec<Repository>>>,
	pub organizations: Vec<Organization>,
	pub workspaces: Vec<Workspace>,
	/// When set, every call fails with this server message.
	pub failure: Option<String>,
	pub calls: Arc<Mutex<Vec<MockApiCall>>>,
}

impl MockKanbanApi {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_projects(mut self, projects: Vec<Project>) -> Self {
		self.projects = projects;
		self
	}

	pub fn with_repositories(self, repositories: Vec<Repository>) -> Self {
		*self.repositories.lock().unwrap() = repositories;
		self
	}

	pub fn with_organizations(mut self, organizations: Vec<Organization>) -> Self {
		self.organizations = organizations;
		self
	}

	pub fn with_workspaces(mut self, workspaces: Vec<Workspace>) -> Self {
		self.workspaces = workspaces;
		self
	}

	pub fn failing(mut self, message: impl Into<String>) -> Self {
		self.failure = Some(message.into());
		self
	}

	pub fn get_calls(&self) -> Vec<MockApiCall> {
		self.calls.lock().unwrap().clone()
	}

	fn record(&self, call: MockApiCall) -> Result<(), ApiError> {
		self.calls.lock().unwrap().push(call);
		match &self.failure {
			Some(message) => Err(ApiError::Server {
				status: StatusCode::INTERNAL_SERVER_ERROR,
				message: message.clone(),
			}),
			None => Ok(()),
		}
	}
}

#[async_trait]
impl KanbanApi for MockKanbanApi {
	async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
		self.record(MockApiCall::ListProjects)?;
		Ok(self.projects.clone())
	}

	async fn list_repositories(&self) -> Result<Vec<Repository>, ApiError> {
		self.record(MockApiCall::ListRepositories)?;
		Ok(self.repositories.lock().unwrap().clone())
	}

	async fn register_repository(
		&self,
		path: &str,
		display_name: Option<&str>,
	) -> Result<Repository, ApiError> {
		self.record(MockApiCall::RegisterRepository {
			path: path.to_string(),
			display_name: display_name.map(str::to_string),
		})?;

		let mut repositories = self.repositories.lock().unwrap();
		let name = path
			.trim_end_matches('/')
			.rsplit('/')
			.next()
			.unwrap_or(path)
			.to_string();
		let repo = Repository {
			id: format!("repo-{}", repositories.len() + 1),
			name,
			path: path.to_string(),
			display_name: display_name.map(str::to_string),
		};
		repositories.push(repo.clone());
		Ok(repo)
	}

	async fn list_organizations(&self) -> Result<Vec<Organization>, ApiError> {
		self.record(MockApiCall::ListOrganizations)?;
		Ok(self.organizations.clone())
	}

	async fn list_workspaces(&self) -> Result<Vec<Workspace>, ApiError> {
		self.record(MockApiCall::ListWorkspaces)?;
		Ok(self.workspaces.clone())
	}

	async fn search_workspaces_by_branch(&self, branch: &str) -> Result<Vec<Workspace>, ApiError> {
		self.record(MockApiCall::SearchWorkspacesByBranch(branch.to_string()))?;
		Ok(self
			.workspaces
			.iter()
			.filter(|w| w.branch == branch)
			.cloned()
			.collect())
	}
}
