// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! What was built, from which commit, for which target.
//!
//! Shown by `kanban version` and embedded in the User-Agent sent to the task
//! server.

shadow_rs::shadow!(build);

#[cfg(feature = "serde")]
use serde::Serialize;

/// `{os}-{arch}` of the compile target, set by `build.rs`.
pub const PLATFORM: &str = env!("KANBAN_PLATFORM");

const UNKNOWN: &str = "unknown";

#[allow(clippy::const_is_empty)]
const fn or_unknown(value: &'static str) -> &'static str {
	if value.is_empty() {
		UNKNOWN
	} else {
		value
	}
}

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
	pub version: &'static str,
	pub git_sha: &'static str,
	pub build_timestamp: &'static str,
	pub platform: &'static str,
}

impl BuildInfo {
	/// Build info of the running binary. Git fields read `unknown` when the
	/// crate was built outside a checkout.
	pub const fn current() -> Self {
		Self {
			version: build::PKG_VERSION,
			git_sha: or_unknown(build::SHORT_COMMIT),
			build_timestamp: or_unknown(build::BUILD_TIME),
			platform: PLATFORM,
		}
	}

	/// `kanban 0.1.0 (abc1234, linux-x86_64)`
	pub fn summary(&self) -> String {
		format!("kanban {} ({}, {})", self.version, self.git_sha, self.platform)
	}

	pub fn display_string(&self) -> String {
		[
			("version", self.version),
			("commit", self.git_sha),
			("built", self.build_timestamp),
			("platform", self.platform),
		]
		.iter()
		.map(|(label, value)| format!("{label:<9} {value}"))
		.collect::<Vec<_>>()
		.join("\n")
	}
}
