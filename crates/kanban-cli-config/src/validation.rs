// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Validation of the resolved configuration.

use url::Url;

use crate::error::ConfigError;
use crate::runtime::KanbanConfig;

pub fn validate(config: &KanbanConfig) -> Result<(), ConfigError> {
	let url = Url::parse(&config.server.url)
		.map_err(|e| ConfigError::invalid_value("server.url", e.to_string()))?;
	if !matches!(url.scheme(), "http" | "https") {
		return Err(ConfigError::invalid_value(
			"server.url",
			format!("scheme must be http or https, got '{}'", url.scheme()),
		));
	}

	if config.server.timeout_secs == 0 {
		return Err(ConfigError::invalid_value(
			"server.timeout_secs",
			"must be greater than zero",
		));
	}

	if config.picker.command.trim().is_empty() {
		return Err(ConfigError::invalid_value("picker.command", "must not be empty"));
	}

	if config.executor.default.trim().is_empty() {
		return Err(ConfigError::invalid_value("executor.default", "must not be empty"));
	}

	Ok(())
}
