// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Envelope wrapping every response body.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiResponse<T> {
	pub success: bool,
	pub data: Option<T>,
	#[serde(default)]
	pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Project {
	pub id: String,
	pub name: String,
	/// URL or path of the project's upstream repository.
	#[serde(default, alias = "git_repo_path")]
	pub remote_repo_path: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub created_at: Option<DateTime<Utc>>,
}

impl Project {
	pub fn new(
		id: impl Into<String>,
		name: impl Into<String>,
		remote_repo_path: impl Into<String>,
	) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			remote_repo_path: remote_repo_path.into(),
			created_at: None,
		}
	}
}

/// A repository checked out on the machine running the server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Repository {
	pub id: String,
	pub name: String,
	/// Absolute local path of the checkout.
	pub path: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub display_name: Option<String>,
}

impl Repository {
	pub fn new(id: impl Into<String>, name: impl Into<String>, path: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			path: path.into(),
			display_name: None,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Organization {
	pub id: String,
	pub name: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub slug: Option<String>,
}

impl Organization {
	pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			slug: None,
		}
	}
}

/// A task attempt: one executor run on its own git branch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Workspace {
	pub id: String,
	#[serde(default)]
	pub task_id: String,
	#[serde(default)]
	pub branch: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub executor: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub target_branch: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub created_at: Option<DateTime<Utc>>,
}

impl Workspace {
	pub fn new(id: impl Into<String>, task_id: impl Into<String>, branch: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			task_id: task_id.into(),
			branch: branch.into(),
			name: None,
			executor: None,
			target_branch: None,
			created_at: None,
		}
	}

	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
	Todo,
	InProgress,
	InReview,
	Done,
	Cancelled,
}

impl TaskStatus {
	pub const ALL: [TaskStatus; 5] = [
		TaskStatus::Todo,
		TaskStatus::InProgress,
		TaskStatus::InReview,
		TaskStatus::Done,
		TaskStatus::Cancelled,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			TaskStatus::Todo => "todo",
			TaskStatus::InProgress => "inprogress",
			TaskStatus::InReview => "inreview",
			TaskStatus::Done => "done",
			TaskStatus::Cancelled => "cancelled",
		}
	}
}

impl fmt::Display for TaskStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for TaskStatus {
	type Err = String;

	/// Accepts `inprogress`, `in-progress`, `in_progress` and `In Progress`.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let folded: String = s
			.chars()
			.filter(|c| !matches!(c, '-' | '_' | ' '))
			.flat_map(char::to_lowercase)
			.collect();
		Self::ALL
			.into_iter()
			.find(|status| status.as_str() == folded)
			.ok_or_else(|| {
				let valid: Vec<_> = Self::ALL.iter().map(TaskStatus::as_str).collect();
				format!("unknown task status '{s}' (expected one of: {})", valid.join(", "))
			})
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Task {
	pub id: String,
	pub project_id: String,
	pub title: String,
	#[serde(default)]
	pub description: Option<String>,
	pub status: TaskStatus,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub parent_workspace_id: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub created_at: Option<DateTime<Utc>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Session {
	pub id: String,
	pub workspace_id: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub executor: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PullRequest {
	pub url: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub number: Option<u64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRepository {
	pub path: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateTask {
	pub project_id: String,
	pub title: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub parent_workspace_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTask {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub status: Option<TaskStatus>,
}

impl UpdateTask {
	pub fn is_empty(&self) -> bool {
		self.title.is_none() && self.description.is_none() && self.status.is_none()
	}
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateWorkspace {
	pub task_id: String,
	pub executor: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub base_branch: Option<String>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub repo_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreatePullRequest {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub body: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub target_branch: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_project_accepts_git_repo_path_alias() {
		let json = r#"{"id":"p1","name":"api","git_repo_path":"https://host/org/api"}"#;
		let project: Project = serde_json::from_str(json).unwrap();
		assert_eq!(project.remote_repo_path, "https://host/org/api");
	}

	#[test]
	fn test_workspace_tolerates_missing_optional_fields() {
		let json = r#"{"id":"w1","task_id":"t1","branch":"feature/xyz"}"#;
		let workspace: Workspace = serde_json::from_str(json).unwrap();
		assert_eq!(workspace, Workspace::new("w1", "t1", "feature/xyz"));
	}

	#[test]
	fn test_task_status_parsing_is_lenient() {
		assert_eq!("inprogress".parse::<TaskStatus>(), Ok(TaskStatus::InProgress));
		assert_eq!("in-progress".parse::<TaskStatus>(), Ok(TaskStatus::InProgress));
		assert_eq!("In Review".parse::<TaskStatus>(), Ok(TaskStatus::InReview));
		assert_eq!("DONE".parse::<TaskStatus>(), Ok(TaskStatus::Done));
		assert!("blocked".parse::<TaskStatus>().is_err());
	}

	#[test]
	fn test_task_status_serializes_lowercase() {
		let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
		assert_eq!(json, "\"inprogress\"");
	}

	#[test]
	fn test_update_task_skips_unset_fields() {
		let update = UpdateTask {
			status: Some(TaskStatus::Done),
			..Default::default()
		};
		assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"status":"done"}"#);
		assert!(UpdateTask::default().is_empty());
	}

	#[test]
	fn test_envelope_without_data() {
		let json = r#"{"success":false,"message":"Task not found"}"#;
		let envelope: ApiResponse<Task> = serde_json::from_str(json).unwrap();
		assert!(!envelope.success);
		assert!(envelope.data.is_none());
		assert_eq!(envelope.message.as_deref(), Some("Task not found"));
	}
}
