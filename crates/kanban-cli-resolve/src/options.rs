// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

/// Per-invocation resolver settings, fixed for the lifetime of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
	/// Allow falling back to the interactive picker.
	pub interactive: bool,
	/// Log which strategy produced each ID at info level.
	pub verbose: bool,
	/// Executor used when none is named.
	pub default_executor: Option<String>,
}

impl Default for ResolveOptions {
	fn default() -> Self {
		Self {
			interactive: true,
			verbose: false,
			default_executor: None,
		}
	}
}
