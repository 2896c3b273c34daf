// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use async_trait::async_trait;
use tracing::debug;

use crate::candidate::{selection_id, Candidate};
use crate::error::PickerError;

/// Capability: present N labeled lines, return the one the user chose.
#[async_trait]
pub trait Picker: Send + Sync {
	/// Program name, for error messages.
	fn command(&self) -> &str;

	/// Probes whether the picker can be launched at all.
	async fn is_available(&self) -> bool;

	/// Shows `lines` under `prompt` and returns the selected line verbatim.
	async fn choose(&self, lines: Vec<String>, prompt: &str) -> Result<String, PickerError>;
}

/// Lets the user choose one of `candidates` and returns its ID.
///
/// An empty candidate list is rejected with [`PickerError::NoCandidates`]
/// before the picker is launched.
pub async fn pick(
	picker: &dyn Picker,
	candidates: &[Candidate],
	prompt: &str,
) -> Result<String, PickerError> {
	if candidates.is_empty() {
		return Err(PickerError::NoCandidates);
	}

	let lines = candidates.iter().map(Candidate::label).collect();
	let selected = picker.choose(lines, prompt).await?;

	let id = selection_id(&selected)
		.ok_or_else(|| PickerError::InvalidSelection(selected.clone()))?;

	let chosen = candidates
		.iter()
		.find(|c| c.id == id)
		.ok_or_else(|| PickerError::InvalidSelection(selected.clone()))?;

	debug!(id = %chosen.id, "picker selection");
	Ok(chosen.id.clone())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::mock::{MockPicker, MockPickerCall};

	fn candidates() -> Vec<Candidate> {
		vec![
			Candidate::new("r1").column("api").column("/work/api"),
			Candidate::new("r2").column("web").column("/work/web"),
		]
	}

	/// Test: An empty list never reaches the picker.
	///
	/// Why this test is important: "Nothing to select from" is a different
	/// failure than a cancelled selection; launching the picker with no rows
	/// would show the user an empty screen and report a cancellation.
	#[tokio::test]
	async fn test_empty_candidates_rejected_before_launch() {
		let picker = MockPicker::selecting(0);

		let result = pick(&picker, &[], "repo").await;

		assert!(matches!(result, Err(PickerError::NoCandidates)));
		assert!(picker.get_calls().is_empty());
	}

	#[tokio::test]
	async fn test_selected_line_maps_to_id() {
		let picker = MockPicker::selecting(1);

		let id = pick(&picker, &candidates(), "repo").await.unwrap();

		assert_eq!(id, "r2");
		assert_eq!(
			picker.get_calls(),
			vec![MockPickerCall::Choose {
				lines: vec![
					"r1\tapi\t/work/api".to_string(),
					"r2\tweb\t/work/web".to_string(),
				],
				prompt: "repo".to_string(),
			}]
		);
	}

	#[tokio::test]
	async fn test_cancellation_propagates() {
		let picker = MockPicker::cancelled();

		let result = pick(&picker, &candidates(), "repo").await;

		assert!(matches!(result, Err(PickerError::Cancelled)));
	}

	#[tokio::test]
	async fn test_unknown_selection_is_rejected() {
		let picker = MockPicker::returning("zzz\tnot-offered");

		let result = pick(&picker, &candidates(), "repo").await;

		assert!(matches!(result, Err(PickerError::InvalidSelection(_))));
	}
}
