// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Task text from a markdown file.

use std::path::Path;

use anyhow::{Context, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
	pub title: String,
	pub description: Option<String>,
}

/// Splits markdown into a task title and description.
///
/// The first `# ` heading is the title and everything else the description.
/// Without a heading the first non-empty line is the title, minus any
/// leading `#` marks.
pub fn parse_task_markdown(text: &str) -> Option<TaskDraft> {
	let lines: Vec<&str> = text.lines().collect();

	let heading = lines
		.iter()
		.position(|l| l.trim_start().starts_with("# "));
	let (index, title) = match heading {
		Some(i) => (i, lines[i].trim_start()[2..].trim()),
		None => {
			let i = lines.iter().position(|l| !l.trim().is_empty())?;
			(i, lines[i].trim().trim_start_matches('#').trim())
		}
	};
	if title.is_empty() {
		return None;
	}

	let rest: Vec<&str> = lines
		.iter()
		.enumerate()
		.filter(|(i, _)| *i != index)
		.map(|(_, l)| *l)
		.collect();
	let description = rest.join("\n").trim().to_string();

	Some(TaskDraft {
		title: title.to_string(),
		description: (!description.is_empty()).then_some(description),
	})
}

pub fn read_task_file(path: &Path) -> Result<TaskDraft> {
	let text = std::fs::read_to_string(path)
		.with_context(|| format!("failed to read {}", path.display()))?;
	parse_task_markdown(&text)
		.with_context(|| format!("{} has no title line", path.display()))
}
