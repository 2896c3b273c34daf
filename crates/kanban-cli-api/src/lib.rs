// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Data access for the kanban orchestration server.
//!
//! [`KanbanApi`] is the narrow read surface the resolvers depend on.
//! [`KanbanClient`] implements it over HTTP and additionally exposes the
//! task, workspace, session and pull-request endpoints used by commands.

mod api;
mod client;
mod error;
mod mock;
mod types;

pub use api::KanbanApi;
pub use client::KanbanClient;
pub use error::ApiError;
pub use mock::{MockApiCall, MockKanbanApi};
pub use types::{
	ApiResponse, CreatePullRequest, CreateTask, CreateWorkspace, Organization, Project,
	PullRequest, RegisterRepository, Repository, Session, Task, TaskStatus, UpdateTask,
	Workspace,
};
