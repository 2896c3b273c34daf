// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::fmt;

/// Which strategy produced a resolved ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
	/// Token used verbatim as an ID.
	Explicit,
	IdMatch,
	NameMatch,
	PartialNameMatch,
	GitRemote,
	PathContainment,
	Branch,
	Picker,
	ConfigDefault,
}

impl fmt::Display for ResolutionSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			ResolutionSource::Explicit => "explicit ID",
			ResolutionSource::IdMatch => "ID match",
			ResolutionSource::NameMatch => "name match",
			ResolutionSource::PartialNameMatch => "partial name match",
			ResolutionSource::GitRemote => "git remote",
			ResolutionSource::PathContainment => "working directory",
			ResolutionSource::Branch => "current branch",
			ResolutionSource::Picker => "interactive selection",
			ResolutionSource::ConfigDefault => "config default",
		})
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
	pub id: String,
	pub source: ResolutionSource,
	/// Set when auto-detection had to pick among several candidates.
	pub warning: Option<String>,
}

impl Resolution {
	pub fn new(id: impl Into<String>, source: ResolutionSource) -> Self {
		Self {
			id: id.into(),
			source,
			warning: None,
		}
	}

	pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
		self.warning = Some(warning.into());
		self
	}
}
