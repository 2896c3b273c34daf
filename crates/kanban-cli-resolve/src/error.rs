// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::fmt;

use kanban_cli_api::ApiError;
use kanban_cli_picker::PickerError;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
	Project,
	Repository,
	Organization,
	Workspace,
	Executor,
}

impl fmt::Display for EntityKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			EntityKind::Project => "project",
			EntityKind::Repository => "repository",
			EntityKind::Organization => "organization",
			EntityKind::Workspace => "workspace",
			EntityKind::Executor => "executor",
		})
	}
}

/// One candidate listed in an ambiguity error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
	pub id: String,
	/// A field that tells candidates apart (path, name, ...).
	pub detail: String,
}

impl Match {
	pub fn new(id: impl Into<String>, detail: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			detail: detail.into(),
		}
	}
}

fn list_matches(matches: &[Match]) -> String {
	matches
		.iter()
		.map(|m| {
			if m.detail.is_empty() {
				format!("  {}", m.id)
			} else {
				format!("  {}  {}", m.id, m.detail)
			}
		})
		.collect::<Vec<_>>()
		.join("\n")
}

#[derive(Debug, Error)]
pub enum ResolveError {
	#[error("{kind} '{token}' is ambiguous; use one of these IDs:\n{}", list_matches(.matches))]
	Ambiguous {
		kind: EntityKind,
		token: String,
		matches: Vec<Match>,
	},

	#[error("{message}")]
	NotFound { kind: EntityKind, message: String },

	#[error("{context}")]
	PickerUnavailable {
		kind: EntityKind,
		context: String,
		#[source]
		source: PickerError,
	},

	#[error("{kind} selection cancelled")]
	PickerCancelled { kind: EntityKind },

	#[error("no {kind} candidates to select from")]
	NoCandidates { kind: EntityKind },

	#[error("failed to load {kind} data")]
	Api {
		kind: EntityKind,
		#[source]
		source: ApiError,
	},
}

impl ResolveError {
	pub fn kind(&self) -> EntityKind {
		match self {
			Self::Ambiguous { kind, .. }
			| Self::NotFound { kind, .. }
			| Self::PickerUnavailable { kind, .. }
			| Self::PickerCancelled { kind }
			| Self::NoCandidates { kind }
			| Self::Api { kind, .. } => *kind,
		}
	}

	/// Process exit code for this failure.
	pub fn exit_code(&self) -> i32 {
		match self {
			Self::NotFound { .. } | Self::NoCandidates { .. } => 3,
			Self::Ambiguous { .. } => 4,
			Self::PickerUnavailable { .. } => 5,
			Self::PickerCancelled { .. } => 130,
			Self::Api { .. } => 1,
		}
	}

	pub(crate) fn not_found(kind: EntityKind, message: impl Into<String>) -> Self {
		Self::NotFound {
			kind,
			message: message.into(),
		}
	}

	pub(crate) fn api(kind: EntityKind) -> impl FnOnce(ApiError) -> Self {
		move |source| Self::Api { kind, source }
	}
}
