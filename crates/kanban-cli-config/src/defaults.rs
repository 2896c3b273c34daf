// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Default config file written by `kanban config init`.

use std::path::Path;

use tracing::info;

use crate::error::ConfigError;

pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# kanban CLI configuration
#
# Precedence (highest first): command-line flags, KANBAN_* environment
# variables, ./.kanban/config.toml, this file, /etc/kanban/config.toml.

[server]
# Base URL of the kanban server (KANBAN_SERVER_URL)
url = "http://127.0.0.1:3001"
# Request timeout in seconds (KANBAN_SERVER_TIMEOUT_SECS)
timeout_secs = 30

[executor]
# Executor used by `kanban workspace create` when --executor is omitted
# (KANBAN_DEFAULT_EXECUTOR)
default = "CLAUDE_CODE"

[picker]
# Fuzzy finder used when an entity cannot be inferred (KANBAN_PICKER)
command = "fzf"
# Set to false to never prompt (KANBAN_INTERACTIVE)
interactive = true

[logging]
# trace, debug, info, warn, error (KANBAN_LOG_LEVEL)
level = "warn"
# pretty, compact, json (KANBAN_LOG_FORMAT)
format = "compact"
"#;

/// Writes [`DEFAULT_CONFIG_TEMPLATE`] to `path` unless a file is already
/// there. Returns whether a file was written.
pub fn ensure_default_config(path: &Path) -> Result<bool, ConfigError> {
	if path.exists() {
		return Ok(false);
	}

	if let Some(parent) = path.parent() {
		std::fs::create_dir_all(parent)?;
	}
	std::fs::write(path, DEFAULT_CONFIG_TEMPLATE)?;
	info!(path = %path.display(), "created default config");
	Ok(true)
}
