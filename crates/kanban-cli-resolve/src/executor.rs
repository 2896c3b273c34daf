// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use crate::error::{EntityKind, Match, ResolveError};
use crate::resolution::{Resolution, ResolutionSource};
use crate::resolver::{given, Resolver};

const KIND: EntityKind = EntityKind::Executor;

/// Coding agents the server can run.
pub const KNOWN_EXECUTORS: &[&str] = &[
	"CLAUDE_CODE",
	"AMP",
	"GEMINI",
	"CODEX",
	"OPENCODE",
	"CURSOR_AGENT",
	"QWEN_CODE",
	"COPILOT",
	"DROID",
];

/// `claude-code`, `Claude Code` and `CLAUDE_CODE` all fold to `CLAUDE_CODE`.
fn fold(token: &str) -> String {
	token
		.trim()
		.chars()
		.map(|c| match c {
			'-' | ' ' => '_',
			c => c.to_ascii_uppercase(),
		})
		.collect()
}

fn exact(token: &str) -> Option<&'static str> {
	let folded = fold(token);
	KNOWN_EXECUTORS.iter().copied().find(|e| *e == folded)
}

impl Resolver {
	/// Resolves an executor name.
	///
	/// Exact match (ignoring case and `-`/`_`), then a unique substring
	/// match, then the configured default.
	pub fn resolve_executor(&self, token: Option<&str>) -> Result<Resolution, ResolveError> {
		let resolution = match given(token) {
			Some(token) => resolve_token(token)?,
			None => {
				let Some(default) = self.options.default_executor.as_deref() else {
					return Err(ResolveError::not_found(
						KIND,
						format!("executor is required (one of: {})", KNOWN_EXECUTORS.join(", ")),
					));
				};
				let executor = exact(default).ok_or_else(|| {
					ResolveError::not_found(
						KIND,
						format!("configured default executor '{default}' is not a known executor"),
					)
				})?;
				Resolution::new(executor, ResolutionSource::ConfigDefault)
			}
		};
		Ok(self.report(KIND, resolution))
	}
}

fn resolve_token(token: &str) -> Result<Resolution, ResolveError> {
	if let Some(executor) = exact(token) {
		return Ok(Resolution::new(executor, ResolutionSource::NameMatch));
	}

	let folded = fold(token);
	let partial: Vec<&str> = KNOWN_EXECUTORS
		.iter()
		.copied()
		.filter(|e| e.contains(&folded))
		.collect();

	match partial.as_slice() {
		[only] => Ok(Resolution::new(*only, ResolutionSource::PartialNameMatch)),
		[] => Err(ResolveError::not_found(
			KIND,
			format!(
				"unknown executor '{token}' (one of: {})",
				KNOWN_EXECUTORS.join(", ")
			),
		)),
		_ => Err(ResolveError::Ambiguous {
			kind: KIND,
			token: token.to_string(),
			matches: partial.iter().map(|e| Match::new(*e, "")).collect(),
		}),
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use kanban_cli_api::MockKanbanApi;
	use kanban_cli_git::MockGitClient;
	use kanban_cli_picker::MockPicker;

	use super::*;
	use crate::options::ResolveOptions;

	fn resolver(default_executor: Option<&str>) -> Resolver {
		Resolver::new(
			Arc::new(MockKanbanApi::new()),
			Arc::new(MockGitClient::new()),
			Arc::new(MockPicker::cancelled()),
			"/",
		)
		.with_options(ResolveOptions {
			default_executor: default_executor.map(str::to_string),
			..Default::default()
		})
	}

	#[test]
	fn test_exact_match_ignores_case_and_separators() {
		let r = resolver(None);
		for token in ["claude-code", "Claude Code", "CLAUDE_CODE", "claude_code"] {
			let resolution = r.resolve_executor(Some(token)).unwrap();
			assert_eq!(resolution.id, "CLAUDE_CODE", "{token}");
			assert_eq!(resolution.source, ResolutionSource::NameMatch);
		}
	}

	#[test]
	fn test_unique_substring() {
		let resolution = resolver(None).resolve_executor(Some("cursor")).unwrap();
		assert_eq!(resolution.id, "CURSOR_AGENT");
		assert_eq!(resolution.source, ResolutionSource::PartialNameMatch);
	}

	#[test]
	fn test_ambiguous_substring() {
		let err = resolver(None).resolve_executor(Some("code")).unwrap_err();
		match err {
			ResolveError::Ambiguous { matches, .. } => {
				let ids: Vec<_> = matches.iter().map(|m| m.id.as_str()).collect();
				assert_eq!(ids, vec!["CLAUDE_CODE", "CODEX", "OPENCODE", "QWEN_CODE"]);
			}
			other => panic!("expected ambiguity, got {other:?}"),
		}
	}

	#[test]
	fn test_default_from_config() {
		let resolution = resolver(Some("amp")).resolve_executor(None).unwrap();
		assert_eq!(resolution.id, "AMP");
		assert_eq!(resolution.source, ResolutionSource::ConfigDefault);
	}

	#[test]
	fn test_unknown_default_is_reported() {
		let err = resolver(Some("hal9000")).resolve_executor(None).unwrap_err();
		assert!(err.to_string().contains("hal9000"));
	}

	#[test]
	fn test_no_token_no_default() {
		let err = resolver(None).resolve_executor(None).unwrap_err();
		assert!(matches!(err, ResolveError::NotFound { kind: EntityKind::Executor, .. }));
	}

	#[test]
	fn test_unknown_executor() {
		let err = resolver(None).resolve_executor(Some("vim")).unwrap_err();
		assert!(err.to_string().starts_with("unknown executor 'vim'"));
	}
}
