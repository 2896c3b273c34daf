// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::PickerError;
use crate::picker::Picker;

/// Recorded call to the mock picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MockPickerCall {
	IsAvailable,
	Choose { lines: Vec<String>, prompt: String },
}

#[derive(Clone, Debug)]
enum Behavior {
	Index(usize),
	Line(String),
	Cancel,
}

/// Scripted picker for testing.
#[derive(Clone, Debug)]
pub struct MockPicker {
	available: bool,
	behavior: Behavior,
	calls: Arc<Mutex<Vec<MockPickerCall>>>,
}

impl MockPicker {
	/// Picks the line at `index` (clamped to the last line).
	pub fn selecting(index: usize) -> Self {
		Self::with_behavior(Behavior::Index(index))
	}

	/// Returns `line` regardless of what was offered.
	pub fn returning(line: impl Into<String>) -> Self {
		Self::with_behavior(Behavior::Line(line.into()))
	}

	/// Behaves as if the user pressed escape.
	pub fn cancelled() -> Self {
		Self::with_behavior(Behavior::Cancel)
	}

	/// A picker whose binary is not installed.
	pub fn unavailable() -> Self {
		Self {
			available: false,
			..Self::cancelled()
		}
	}

	fn with_behavior(behavior: Behavior) -> Self {
		Self {
			available: true,
			behavior,
			calls: Arc::new(Mutex::new(Vec::new())),
		}
	}

	pub fn get_calls(&self) -> Vec<MockPickerCall> {
		self.calls.lock().unwrap().clone()
	}

	/// Number of times the picker was actually shown.
	pub fn choose_count(&self) -> usize {
		self.get_calls()
			.iter()
			.filter(|c| matches!(c, MockPickerCall::Choose { .. }))
			.count()
	}

	fn record(&self, call: MockPickerCall) {
		self.calls.lock().unwrap().push(call);
	}
}

#[async_trait]
impl Picker for MockPicker {
	fn command(&self) -> &str {
		"mock"
	}

	async fn is_available(&self) -> bool {
		self.record(MockPickerCall::IsAvailable);
		self.available
	}

	async fn choose(&self, lines: Vec<String>, prompt: &str) -> Result<String, PickerError> {
		self.record(MockPickerCall::Choose {
			lines: lines.clone(),
			prompt: prompt.to_string(),
		});

		if !self.available {
			return Err(PickerError::NotInstalled {
				command: "mock".to_string(),
			});
		}

		match &self.behavior {
			Behavior::Index(i) => lines
				.get((*i).min(lines.len().saturating_sub(1)))
				.cloned()
				.ok_or(PickerError::Cancelled),
			Behavior::Line(line) => Ok(line.clone()),
			Behavior::Cancel => Err(PickerError::Cancelled),
		}
	}
}
