// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Fully resolved configuration.

use serde::Serialize;

use crate::error::ConfigError;
use crate::layer::ConfigLayer;
use crate::paths::PathsConfig;
use crate::sections::{ExecutorConfig, LoggingConfig, PickerConfig, ServerConfig};

/// Dotted keys understood by [`KanbanConfig::get`].
pub const CONFIG_KEYS: &[&str] = &[
	"server.url",
	"server.timeout_secs",
	"executor.default",
	"picker.command",
	"picker.interactive",
	"logging.level",
	"logging.format",
];

#[derive(Debug, Clone, Default, Serialize)]
pub struct KanbanConfig {
	pub server: ServerConfig,
	pub executor: ExecutorConfig,
	pub picker: PickerConfig,
	pub logging: LoggingConfig,
	#[serde(skip)]
	pub paths: PathsConfig,
}

impl KanbanConfig {
	pub fn from_layer(layer: ConfigLayer, paths: PathsConfig) -> Self {
		Self {
			server: layer.server.unwrap_or_default().finalize(),
			executor: layer.executor.unwrap_or_default().finalize(),
			picker: layer.picker.unwrap_or_default().finalize(),
			logging: layer.logging.unwrap_or_default().finalize(),
			paths,
		}
	}

	/// Looks up a single value by dotted key, e.g. `server.url`.
	pub fn get(&self, key: &str) -> Option<String> {
		let value = match key {
			"server.url" => self.server.url.clone(),
			"server.timeout_secs" => self.server.timeout_secs.to_string(),
			"executor.default" => self.executor.default.clone(),
			"picker.command" => self.picker.command.clone(),
			"picker.interactive" => self.picker.interactive.to_string(),
			"logging.level" => self.logging.level.clone(),
			"logging.format" => self.logging.format.to_string(),
			_ => return None,
		};
		Some(value)
	}

	/// Renders the resolved configuration as TOML.
	pub fn to_toml(&self) -> Result<String, ConfigError> {
		Ok(toml::to_string_pretty(self)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::sections::LogFormat;

	#[test]
	fn test_every_key_resolves() {
		let config = KanbanConfig::default();
		for key in CONFIG_KEYS {
			assert!(config.get(key).is_some(), "{key} should resolve");
		}
	}

	#[test]
	fn test_get_values() {
		let mut config = KanbanConfig::default();
		config.logging.format = LogFormat::Json;
		assert_eq!(config.get("server.url").as_deref(), Some("http://127.0.0.1:3001"));
		assert_eq!(config.get("server.timeout_secs").as_deref(), Some("30"));
		assert_eq!(config.get("picker.interactive").as_deref(), Some("true"));
		assert_eq!(config.get("logging.format").as_deref(), Some("json"));
		assert_eq!(config.get("server"), None);
		assert_eq!(config.get("nope.key"), None);
	}

	#[test]
	fn test_to_toml_has_sections() {
		let rendered = KanbanConfig::default().to_toml().unwrap();
		assert!(rendered.contains("[server]"));
		assert!(rendered.contains("url = \"http://127.0.0.1:3001\""));
		assert!(rendered.contains("[picker]"));
		assert!(!rendered.contains("paths"));
	}
}
