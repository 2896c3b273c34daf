// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::path::PathBuf;
use std::sync::Arc;

use kanban_cli_api::KanbanApi;
use kanban_cli_git::GitClient;
use kanban_cli_picker::{pick, Candidate, Picker, PickerError};
use tracing::{debug, info};

use crate::error::{EntityKind, ResolveError};
use crate::options::ResolveOptions;
use crate::resolution::Resolution;

/// Entry point for all entity resolution.
///
/// Holds the capabilities every resolver needs. It keeps no state between
/// calls: each resolution fetches fresh data, so a single command may
/// resolve the same kind of entity several times.
pub struct Resolver {
	pub(crate) api: Arc<dyn KanbanApi>,
	pub(crate) git: Arc<dyn GitClient>,
	picker: Arc<dyn Picker>,
	pub(crate) cwd: PathBuf,
	pub(crate) options: ResolveOptions,
}

impl Resolver {
	pub fn new(
		api: Arc<dyn KanbanApi>,
		git: Arc<dyn GitClient>,
		picker: Arc<dyn Picker>,
		cwd: impl Into<PathBuf>,
	) -> Self {
		Self {
			api,
			git,
			picker,
			cwd: cwd.into(),
			options: ResolveOptions::default(),
		}
	}

	pub fn with_options(mut self, options: ResolveOptions) -> Self {
		self.options = options;
		self
	}

	/// Last-resort interactive selection.
	///
	/// `guidance` explains why auto-detection failed; it becomes the error
	/// message when the picker cannot or may not be used.
	pub(crate) async fn choose(
		&self,
		kind: EntityKind,
		candidates: Vec<Candidate>,
		guidance: String,
	) -> Result<String, ResolveError> {
		if candidates.is_empty() {
			return Err(ResolveError::NoCandidates { kind });
		}

		if !self.options.interactive {
			debug!(%kind, "interactive selection disabled");
			return Err(ResolveError::not_found(kind, guidance));
		}

		if !self.picker.is_available().await {
			return Err(ResolveError::PickerUnavailable {
				kind,
				context: guidance,
				source: PickerError::NotInstalled {
					command: self.picker.command().to_string(),
				},
			});
		}

		let prompt = kind.to_string();
		pick(self.picker.as_ref(), &candidates, &prompt)
			.await
			.map_err(|e| match e {
				PickerError::Cancelled => ResolveError::PickerCancelled { kind },
				PickerError::NoCandidates => ResolveError::NoCandidates { kind },
				PickerError::InvalidSelection(line) => {
					ResolveError::not_found(kind, format!("picker returned an unknown {kind}: {line:?}"))
				}
				source @ (PickerError::NotInstalled { .. } | PickerError::Io(_)) => {
					ResolveError::PickerUnavailable {
						kind,
						context: guidance,
						source,
					}
				}
			})
	}

	/// Logs the outcome and passes it through.
	///
	/// Warnings are only logged at debug level; showing them to the user is
	/// left to the caller holding the [`Resolution`].
	pub(crate) fn report(&self, kind: EntityKind, resolution: Resolution) -> Resolution {
		if let Some(warning) = &resolution.warning {
			debug!(%kind, id = %resolution.id, %warning, "resolved with warning");
		}
		if self.options.verbose {
			info!(%kind, id = %resolution.id, source = %resolution.source, "resolved");
		} else {
			debug!(%kind, id = %resolution.id, source = %resolution.source, "resolved");
		}
		resolution
	}
}

/// A token counts as given only if it has non-whitespace content.
pub(crate) fn given(token: Option<&str>) -> Option<&str> {
	token.filter(|t| !t.trim().is_empty())
}
