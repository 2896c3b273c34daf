// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::api::KanbanApi;
use crate::error::ApiError;
use crate::types::{
	ApiResponse, CreatePullRequest, CreateTask, CreateWorkspace, Organization, Project,
	PullRequest, RegisterRepository, Repository, Session, Task, UpdateTask, Workspace,
};

/// HTTP client for the kanban server's REST API.
pub struct KanbanClient {
	base_url: Url,
	http: reqwest::Client,
}

impl KanbanClient {
	pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
		let base_url = parse_base_url(base_url)?;
		let http = kanban_common_http::new_client_with_timeout(timeout)?;
		Ok(Self { base_url, http })
	}

	/// Appends `segments` to the base URL, each as one percent-encoded path
	/// segment, so an ID containing `/`, `?` or `#` cannot leave its route.
	fn url(&self, segments: &[&str]) -> Result<Url, ApiError> {
		if let Some(bad) = segments.iter().find(|s| matches!(**s, "" | "." | "..")) {
			return Err(ApiError::InvalidUrl(format!("invalid path segment {bad:?}")));
		}
		let mut url = self.base_url.clone();
		url.path_segments_mut()
			.map_err(|()| ApiError::InvalidUrl(format!("{}: not a base URL", self.base_url)))?
			.pop_if_empty()
			.extend(segments);
		Ok(url)
	}

	async fn send<T: DeserializeOwned>(
		&self,
		req: RequestBuilder,
		endpoint: &str,
	) -> Result<Option<T>, ApiError> {
		let response = req.send().await?;
		let status = response.status();
		let body = response.text().await?;
		trace!(endpoint, %status, bytes = body.len(), "response received");
		decode_envelope(status, &body, endpoint)
	}

	async fn fetch<T: DeserializeOwned>(&self, req: RequestBuilder, endpoint: &str) -> Result<T, ApiError> {
		self
			.send(req, endpoint)
			.await?
			.ok_or_else(|| ApiError::MissingData {
				endpoint: endpoint.to_string(),
			})
	}

	async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
		debug!(url = %url, "GET");
		let endpoint = url.path().to_string();
		self.fetch(self.http.get(url), &endpoint).await
	}

	pub async fn get_project(&self, id: &str) -> Result<Project, ApiError> {
		self.get_json(self.url(&["api", "projects", id])?).await
	}

	pub async fn list_tasks(&self, project_id: &str) -> Result<Vec<Task>, ApiError> {
		let mut url = self.url(&["api", "tasks"])?;
		url.query_pairs_mut().append_pair("project_id", project_id);
		self.get_json(url).await
	}

	pub async fn get_task(&self, id: &str) -> Result<Task, ApiError> {
		self.get_json(self.url(&["api", "tasks", id])?).await
	}

	pub async fn create_task(&self, request: &CreateTask) -> Result<Task, ApiError> {
		let url = self.url(&["api", "tasks"])?;
		debug!(url = %url, project_id = %request.project_id, "creating task");
		self.fetch(self.http.post(url).json(request), "api/tasks").await
	}

	pub async fn update_task(&self, id: &str, request: &UpdateTask) -> Result<Task, ApiError> {
		let url = self.url(&["api", "tasks", id])?;
		debug!(url = %url, "updating task");
		let endpoint = url.path().to_string();
		self.fetch(self.http.put(url).json(request), &endpoint).await
	}

	pub async fn delete_task(&self, id: &str) -> Result<(), ApiError> {
		let url = self.url(&["api", "tasks", id])?;
		debug!(url = %url, "deleting task");
		let endpoint = url.path().to_string();
		self
			.send::<serde_json::Value>(self.http.delete(url), &endpoint)
			.await?;
		Ok(())
	}

	pub async fn get_workspace(&self, id: &str) -> Result<Workspace, ApiError> {
		self
			.get_json(self.url(&["api", "task-attempts", id])?)
			.await
	}

	pub async fn list_workspaces_for_task(&self, task_id: &str) -> Result<Vec<Workspace>, ApiError> {
		let mut url = self.url(&["api", "task-attempts"])?;
		url.query_pairs_mut().append_pair("task_id", task_id);
		self.get_json(url).await
	}

	pub async fn create_workspace(&self, request: &CreateWorkspace) -> Result<Workspace, ApiError> {
		let url = self.url(&["api", "task-attempts"])?;
		debug!(url = %url, task_id = %request.task_id, executor = %request.executor, "creating workspace");
		self
			.fetch(self.http.post(url).json(request), "api/task-attempts")
			.await
	}

	pub async fn list_sessions(&self, workspace_id: &str) -> Result<Vec<Session>, ApiError> {
		let mut url = self.url(&["api", "sessions"])?;
		url.query_pairs_mut().append_pair("workspace_id", workspace_id);
		self.get_json(url).await
	}

	pub async fn create_pull_request(
		&self,
		workspace_id: &str,
		request: &CreatePullRequest,
	) -> Result<PullRequest, ApiError> {
		let url = self.url(&["api", "task-attempts", workspace_id, "pr"])?;
		debug!(url = %url, "creating pull request");
		let endpoint = url.path().to_string();
		self.fetch(self.http.post(url).json(request), &endpoint).await
	}
}

#[async_trait]
impl KanbanApi for KanbanClient {
	async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
		self.get_json(self.url(&["api", "projects"])?).await
	}

	async fn list_repositories(&self) -> Result<Vec<Repository>, ApiError> {
		self.get_json(self.url(&["api", "repos"])?).await
	}

	async fn register_repository(
		&self,
		path: &str,
		display_name: Option<&str>,
	) -> Result<Repository, ApiError> {
		let url = self.url(&["api", "repos"])?;
		debug!(url = %url, path, "registering repository");
		let request = RegisterRepository {
			path: path.to_string(),
			display_name: display_name.map(str::to_string),
		};
		self.fetch(self.http.post(url).json(&request), "api/repos").await
	}

	async fn list_organizations(&self) -> Result<Vec<Organization>, ApiError> {
		self.get_json(self.url(&["api", "organizations"])?).await
	}

	async fn list_workspaces(&self) -> Result<Vec<Workspace>, ApiError> {
		self.get_json(self.url(&["api", "task-attempts"])?).await
	}

	async fn search_workspaces_by_branch(&self, branch: &str) -> Result<Vec<Workspace>, ApiError> {
		let mut url = self.url(&["api", "task-attempts"])?;
		url.query_pairs_mut().append_pair("branch", branch);
		self.get_json(url).await
	}
}

/// Parses the server URL, forcing a trailing slash so relative joins keep
/// any path prefix (`http://host/kanban` + `api/x` -> `/kanban/api/x`).
fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
	let mut url = Url::parse(raw).map_err(|e| ApiError::InvalidUrl(format!("{raw}: {e}")))?;
	if url.cannot_be_a_base() {
		return Err(ApiError::InvalidUrl(format!("{raw}: not a base URL")));
	}
	if !url.path().ends_with('/') {
		let path = format!("{}/", url.path());
		url.set_path(&path);
	}
	Ok(url)
}

/// Unwraps the `{success, data, message}` envelope.
///
/// Non-2xx statuses and `success: false` both become [`ApiError::Server`];
/// the envelope message is preferred over the raw body.
fn decode_envelope<T: DeserializeOwned>(
	status: StatusCode,
	body: &str,
	endpoint: &str,
) -> Result<Option<T>, ApiError> {
	if !status.is_success() {
		let message = serde_json::from_str::<ApiResponse<serde_json::Value>>(body)
			.ok()
			.and_then(|envelope| envelope.message)
			.or_else(|| Some(body.trim().to_string()).filter(|b| !b.is_empty()))
			.unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());
		return Err(ApiError::Server { status, message });
	}

	let envelope: ApiResponse<T> =
		serde_json::from_str(body).map_err(|source| ApiError::Decode {
			endpoint: endpoint.to_string(),
			source,
		})?;

	if !envelope.success {
		return Err(ApiError::Server {
			status,
			message: envelope
				.message
				.unwrap_or_else(|| "request failed".to_string()),
		});
	}

	Ok(envelope.data)
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;
	use wiremock::matchers::{body_json, method, path, query_param};
	use wiremock::{Mock, MockServer, ResponseTemplate};

	fn client(server: &MockServer) -> KanbanClient {
		KanbanClient::new(&server.uri(), Duration::from_secs(5)).unwrap()
	}

	#[test]
	fn test_base_url_keeps_path_prefix() {
		let url = parse_base_url("http://localhost:3001/kanban").unwrap();
		assert_eq!(
			url.join("api/projects").unwrap().as_str(),
			"http://localhost:3001/kanban/api/projects"
		);
	}

	#[test]
	fn test_base_url_rejects_garbage() {
		assert!(matches!(
			parse_base_url("not a url"),
			Err(ApiError::InvalidUrl(_))
		));
	}

	#[test]
	fn test_decode_success_envelope() {
		let body = r#"{"success":true,"data":[{"id":"o1","name":"acme"}],"message":null}"#;
		let orgs: Option<Vec<Organization>> =
			decode_envelope(StatusCode::OK, body, "api/organizations").unwrap();
		assert_eq!(orgs, Some(vec![Organization::new("o1", "acme")]));
	}

	#[test]
	fn test_decode_unsuccessful_envelope_on_200() {
		let body = r#"{"success":false,"data":null,"message":"project is archived"}"#;
		let err = decode_envelope::<Project>(StatusCode::OK, body, "api/projects/p1").unwrap_err();
		match err {
			ApiError::Server { status, message } => {
				assert_eq!(status, StatusCode::OK);
				assert_eq!(message, "project is archived");
			}
			other => panic!("expected server error, got {other:?}"),
		}
	}

	#[test]
	fn test_decode_plain_text_error_body() {
		let err =
			decode_envelope::<Project>(StatusCode::BAD_GATEWAY, "upstream down\n", "api/projects")
				.unwrap_err();
		assert!(matches!(
			err,
			ApiError::Server { ref message, .. } if message == "upstream down"
		));
	}

	#[test]
	fn test_decode_rejects_malformed_json() {
		let err = decode_envelope::<Project>(StatusCode::OK, "{", "api/projects").unwrap_err();
		assert!(matches!(err, ApiError::Decode { .. }));
	}

	#[tokio::test]
	async fn test_list_projects() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.and(path("/api/projects"))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!({
				"success": true,
				"data": [{"id": "p1", "name": "api", "git_repo_path": "https://host/org/api"}],
				"message": null
			})))
			.mount(&server)
			.await;

		let projects = client(&server).list_projects().await.unwrap();

		assert_eq!(projects, vec![Project::new("p1", "api", "https://host/org/api")]);
	}

	#[tokio::test]
	async fn test_search_workspaces_sends_branch_query() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.and(path("/api/task-attempts"))
			.and(query_param("branch", "feature/xyz"))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!({
				"success": true,
				"data": [{"id": "w1", "task_id": "t1", "branch": "feature/xyz"}]
			})))
			.expect(1)
			.mount(&server)
			.await;

		let workspaces = client(&server)
			.search_workspaces_by_branch("feature/xyz")
			.await
			.unwrap();

		assert_eq!(workspaces, vec![Workspace::new("w1", "t1", "feature/xyz")]);
	}

	#[tokio::test]
	async fn test_register_repository_posts_path() {
		let server = MockServer::start().await;
		Mock::given(method("POST"))
			.and(path("/api/repos"))
			.and(body_json(json!({"path": "/work/api", "display_name": "API"})))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!({
				"success": true,
				"data": {"id": "r1", "name": "api", "path": "/work/api", "display_name": "API"}
			})))
			.mount(&server)
			.await;

		let repo = client(&server)
			.register_repository("/work/api", Some("API"))
			.await
			.unwrap();

		assert_eq!(repo.id, "r1");
		assert_eq!(repo.display_name.as_deref(), Some("API"));
	}

	#[tokio::test]
	async fn test_not_found_is_reported() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.and(path("/api/tasks/missing"))
			.respond_with(ResponseTemplate::new(404).set_body_json(json!({
				"success": false,
				"message": "Task not found"
			})))
			.mount(&server)
			.await;

		let err = client(&server).get_task("missing").await.unwrap_err();

		assert!(err.is_not_found());
		assert_eq!(err.to_string(), "server error: 404 Not Found - Task not found");
	}

	#[tokio::test]
	async fn test_delete_task_accepts_empty_data() {
		let server = MockServer::start().await;
		Mock::given(method("DELETE"))
			.and(path("/api/tasks/t1"))
			.respond_with(
				ResponseTemplate::new(200).set_body_json(json!({"success": true, "data": null})),
			)
			.expect(1)
			.mount(&server)
			.await;

		client(&server).delete_task("t1").await.unwrap();
	}

	#[tokio::test]
	async fn test_missing_data_is_an_error() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.and(path("/api/repos"))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
			.mount(&server)
			.await;

		let err = client(&server).list_repositories().await.unwrap_err();

		assert!(matches!(err, ApiError::MissingData { .. }));
	}

	/// Test: An ID with path syntax stays a single segment of its own route.
	///
	/// Why this test is important: Explicit IDs are passed through without
	/// validation. A token like `../projects/p1` must reach the server as a
	/// (missing) task ID, never as a request against another resource.
	#[tokio::test]
	async fn test_task_id_is_one_encoded_segment() {
		let server = MockServer::start().await;
		Mock::given(method("DELETE"))
			.and(path("/api/tasks/..%2Fprojects%2Fp1"))
			.respond_with(
				ResponseTemplate::new(200).set_body_json(json!({"success": true, "data": null})),
			)
			.expect(1)
			.mount(&server)
			.await;
		Mock::given(method("DELETE"))
			.and(path("/api/projects/p1"))
			.respond_with(ResponseTemplate::new(200))
			.expect(0)
			.mount(&server)
			.await;

		client(&server).delete_task("../projects/p1").await.unwrap();
	}

	#[test]
	fn test_url_encodes_query_and_fragment_characters() {
		let client = KanbanClient::new("http://localhost:3001/kanban", Duration::from_secs(5)).unwrap();

		let url = client.url(&["api", "tasks", "x?status=done#top"]).unwrap();

		assert_eq!(
			url.as_str(),
			"http://localhost:3001/kanban/api/tasks/x%3Fstatus=done%23top"
		);
		assert_eq!(url.query(), None);
	}

	#[test]
	fn test_url_rejects_dot_segments() {
		let client = KanbanClient::new("http://localhost:3001", Duration::from_secs(5)).unwrap();

		for id in ["", ".", ".."] {
			assert!(matches!(
				client.url(&["api", "tasks", id]),
				Err(ApiError::InvalidUrl(_))
			));
		}
	}
}
