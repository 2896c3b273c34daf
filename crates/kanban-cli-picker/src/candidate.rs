// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

/// One selectable row: the entity ID followed by display columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
	pub id: String,
	pub columns: Vec<String>,
}

impl Candidate {
	pub fn new(id: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			columns: Vec::new(),
		}
	}

	pub fn column(mut self, value: impl Into<String>) -> Self {
		self.columns.push(value.into());
		self
	}

	/// Renders the candidate as a single tab-delimited line with the ID in
	/// the first column. Tabs and newlines inside values become spaces so a
	/// row can never split or shift columns.
	pub fn label(&self) -> String {
		std::iter::once(self.id.as_str())
			.chain(self.columns.iter().map(String::as_str))
			.map(sanitize)
			.collect::<Vec<_>>()
			.join("\t")
	}
}

fn sanitize(value: &str) -> String {
	value.replace(['\t', '\n', '\r'], " ")
}

/// Extracts the leading ID field from a line returned by the picker.
pub fn selection_id(line: &str) -> Option<&str> {
	let line = line.trim_end_matches(['\n', '\r']);
	let id = line.split('\t').next()?.trim();
	if id.is_empty() {
		None
	} else {
		Some(id)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_label_is_tab_joined() {
		let candidate = Candidate::new("r1").column("api").column("/work/api");
		assert_eq!(candidate.label(), "r1\tapi\t/work/api");
	}

	#[test]
	fn test_label_sanitizes_embedded_separators() {
		let candidate = Candidate::new("w1").column("fix\tthe\nbug");
		assert_eq!(candidate.label(), "w1\tfix the bug");
	}

	#[test]
	fn test_selection_id_takes_first_column() {
		assert_eq!(selection_id("r1\tapi\t/work/api\n"), Some("r1"));
		assert_eq!(selection_id("r1"), Some("r1"));
		assert_eq!(selection_id(""), None);
		assert_eq!(selection_id("\tname"), None);
	}

	// Property: Rendering a candidate and reading the selection back yields
	// the candidate's ID.
	//
	// Why this test is important: The picker only hands back the chosen line.
	// If any column content could disturb the first field, the resolver would
	// return the wrong entity.
	proptest! {
			#[test]
			fn prop_label_round_trips_id(
					id in "[a-zA-Z0-9-]{1,36}",
					cols in prop::collection::vec(".{0,20}", 0..4),
			) {
					let candidate = cols
							.iter()
							.fold(Candidate::new(id.clone()), |c, col| c.column(col.clone()));
					let label = candidate.label();
					prop_assert_eq!(selection_id(&label), Some(id.as_str()));
			}
	}
}
