// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Interactive picker settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickerConfig {
	/// Fuzzy finder command line, e.g. `fzf` or `sk --exact`.
	pub command: String,
	/// When false, resolvers never fall back to the picker.
	pub interactive: bool,
}

impl Default for PickerConfig {
	fn default() -> Self {
		PickerConfigLayer::default().finalize()
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PickerConfigLayer {
	#[serde(default)]
	pub command: Option<String>,
	#[serde(default)]
	pub interactive: Option<bool>,
}

impl PickerConfigLayer {
	pub fn merge(&mut self, other: PickerConfigLayer) {
		if other.command.is_some() {
			self.command = other.command;
		}
		if other.interactive.is_some() {
			self.interactive = other.interactive;
		}
	}

	pub fn finalize(self) -> PickerConfig {
		PickerConfig {
			command: self.command.unwrap_or_else(|| "fzf".to_string()),
			interactive: self.interactive.unwrap_or(true),
		}
	}
}
