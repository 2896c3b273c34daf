// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Terminal rendering shared by the commands.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(value)?);
	Ok(())
}

/// Shortens `value` to at most `width` characters, marking the cut with `...`.
pub fn truncate(value: &str, width: usize) -> String {
	if value.chars().count() <= width {
		return value.to_string();
	}
	let keep = width.saturating_sub(3);
	let mut out: String = value.chars().take(keep).collect();
	out.push_str("...");
	out
}

/// Prints a `Label: value` line.
pub fn field(label: &str, value: impl std::fmt::Display) {
	println!("{}: {}", label.bold(), value);
}

pub fn optional_field(label: &str, value: Option<&str>) {
	match value {
		Some(v) if !v.is_empty() => field(label, v),
		_ => field(label, "-".dimmed()),
	}
}

pub fn empty(message: &str) {
	println!("{}", message.dimmed());
}

pub fn warning(message: &str) {
	eprintln!("{} {}", "warning:".yellow().bold(), message);
}

pub fn note(message: &str) {
	eprintln!("{}", message.dimmed());
}

pub fn success(message: &str) {
	println!("{} {}", "✓".green(), message);
}

/// Reports a failed command on stderr, or on stdout as JSON when the
/// command was asked for JSON output.
pub fn error(err: &anyhow::Error, json: bool) {
	if json {
		let body = serde_json::json!({ "error": format!("{err:#}") });
		println!("{body}");
	} else {
		eprintln!("{} {err:#}", "error:".red().bold());
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_truncate_short_values_unchanged() {
		assert_eq!(truncate("api", 10), "api");
		assert_eq!(truncate("exactly10c", 10), "exactly10c");
	}

	#[test]
	fn test_truncate_marks_cut() {
		assert_eq!(truncate("a very long title", 10), "a very ...");
	}

	#[test]
	fn test_truncate_counts_chars_not_bytes() {
		assert_eq!(truncate("ünïcödé-title", 8), "ünïcö...");
	}
}
