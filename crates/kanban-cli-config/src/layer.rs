// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration produced by a single source.

use serde::Deserialize;

use crate::sections::{
	ExecutorConfigLayer, LoggingConfigLayer, PickerConfigLayer, ServerConfigLayer,
};

/// One source's view of the configuration. Every field is optional so that
/// higher-precedence layers only override what they actually set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigLayer {
	#[serde(default)]
	pub server: Option<ServerConfigLayer>,
	#[serde(default)]
	pub executor: Option<ExecutorConfigLayer>,
	#[serde(default)]
	pub picker: Option<PickerConfigLayer>,
	#[serde(default)]
	pub logging: Option<LoggingConfigLayer>,
}

impl ConfigLayer {
	/// Merge `other` on top of `self`.
	pub fn merge(&mut self, other: ConfigLayer) {
		merge_section(&mut self.server, other.server, ServerConfigLayer::merge);
		merge_section(&mut self.executor, other.executor, ExecutorConfigLayer::merge);
		merge_section(&mut self.picker, other.picker, PickerConfigLayer::merge);
		merge_section(&mut self.logging, other.logging, LoggingConfigLayer::merge);
	}
}

fn merge_section<T>(base: &mut Option<T>, other: Option<T>, merge: fn(&mut T, T)) {
	match (base.as_mut(), other) {
		(Some(existing), Some(other)) => merge(existing, other),
		(None, Some(other)) => *base = Some(other),
		(_, None) => {}
	}
}
