// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Coding-agent executor used when a command does not name one.

use serde::{Deserialize, Serialize};

pub const DEFAULT_EXECUTOR: &str = "CLAUDE_CODE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutorConfig {
	pub default: String,
}

impl Default for ExecutorConfig {
	fn default() -> Self {
		ExecutorConfigLayer::default().finalize()
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExecutorConfigLayer {
	#[serde(default)]
	pub default: Option<String>,
}

impl ExecutorConfigLayer {
	pub fn merge(&mut self, other: ExecutorConfigLayer) {
		if other.default.is_some() {
			self.default = other.default;
		}
	}

	pub fn finalize(self) -> ExecutorConfig {
		ExecutorConfig {
			default: self
				.default
				.unwrap_or_else(|| DEFAULT_EXECUTOR.to_string()),
		}
	}
}
