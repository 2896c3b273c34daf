// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

/// Failure to locate, read or check the kanban configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("failed to access config file: {0}")]
	Io(#[from] std::io::Error),

	#[error("{path} is not valid TOML: {source}")]
	TomlParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("failed to render config as TOML: {0}")]
	TomlSerialize(#[from] toml::ser::Error),

	/// A key holds a value the CLI cannot work with, such as a server URL
	/// that is not http(s).
	#[error("config key `{field}`: {message}")]
	InvalidValue { field: String, message: String },

	#[error("cannot locate a home directory; set XDG_CONFIG_HOME")]
	HomeDirNotFound,
}

impl ConfigError {
	pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
		Self::InvalidValue {
			field: field.into(),
			message: message.into(),
		}
	}
}
