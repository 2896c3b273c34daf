// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Git signals consumed by the kanban resolvers.
//!
//! Only two facts are read from git: the checked-out branch and the URL of
//! the `origin` remote. Both degrade to `None` when git is missing, the path
//! is not a repository, or the remote is not configured.

mod client;
mod command_client;
mod error;
mod mock_client;
mod normalize;

pub use client::GitClient;
pub use command_client::CommandGitClient;
pub use error::GitError;
pub use mock_client::{MockCall, MockGitClient};
pub use normalize::repo_basename;
