// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: defaults, TOML files, environment, CLI flags.

use std::path::PathBuf;

use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::ConfigLayer;
use crate::paths::PathsConfig;
use crate::sections::{
	ExecutorConfigLayer, LogFormat, LoggingConfigLayer, PickerConfigLayer, ServerConfigLayer,
};

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	SystemFile = 20,
	UserFile = 30,
	WorkspaceFile = 40,
	Environment = 50,
	Cli = 60,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<ConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(ConfigLayer::default())
	}
}

/// TOML file configuration source. A missing file is an empty layer.
pub struct FileSource {
	name: &'static str,
	path: PathBuf,
	precedence: Precedence,
}

impl FileSource {
	pub fn new(name: &'static str, path: impl Into<PathBuf>, precedence: Precedence) -> Self {
		Self {
			name,
			path: path.into(),
			precedence,
		}
	}

	pub fn system(paths: &PathsConfig) -> Self {
		Self::new("system-file", &paths.system_config_file, Precedence::SystemFile)
	}

	pub fn user(paths: &PathsConfig) -> Self {
		Self::new("user-file", &paths.user_config_file, Precedence::UserFile)
	}

	pub fn workspace(path: impl Into<PathBuf>) -> Self {
		Self::new("workspace-file", path, Precedence::WorkspaceFile)
	}
}

impl ConfigSource for FileSource {
	fn name(&self) -> &'static str {
		self.name
	}

	fn precedence(&self) -> Precedence {
		self.precedence
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(ConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path)?;

		let layer: ConfigLayer = toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
			path: self.path.clone(),
			source: e,
		})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

type EnvLookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Environment variable source.
///
/// Convention: KANBAN_<NAME>, see [`EnvSource::load`] for the full list.
pub struct EnvSource {
	lookup: EnvLookup,
}

impl EnvSource {
	/// Reads the process environment.
	pub fn process() -> Self {
		Self::from_lookup(|name| std::env::var(name).ok())
	}

	/// Reads variables through `lookup`; used to test without touching the
	/// process environment.
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String> + Send + Sync + 'static) -> Self {
		Self {
			lookup: Box::new(lookup),
		}
	}

	fn var(&self, name: &str) -> Option<String> {
		(self.lookup)(name).filter(|s| !s.is_empty())
	}

	fn bool(&self, name: &str) -> Result<Option<bool>, ConfigError> {
		match self.var(name) {
			Some(v) => match v.to_ascii_lowercase().as_str() {
				"1" | "true" | "yes" | "on" => Ok(Some(true)),
				"0" | "false" | "no" | "off" => Ok(Some(false)),
				_ => Err(ConfigError::invalid_value(
					name,
					format!("invalid boolean value '{v}'"),
				)),
			},
			None => Ok(None),
		}
	}

	fn u64(&self, name: &str) -> Result<Option<u64>, ConfigError> {
		match self.var(name) {
			Some(v) => v.parse().map(Some).map_err(|_| {
				ConfigError::invalid_value(name, format!("invalid integer value '{v}'"))
			}),
			None => Ok(None),
		}
	}

	fn log_format(&self, name: &str) -> Result<Option<LogFormat>, ConfigError> {
		self
			.var(name)
			.map(|v| v.parse().map_err(|e: String| ConfigError::invalid_value(name, e)))
			.transpose()
	}
}

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		debug!("loading environment variables");
		Ok(ConfigLayer {
			server: Some(ServerConfigLayer {
				url: self.var("KANBAN_SERVER_URL"),
				timeout_secs: self.u64("KANBAN_SERVER_TIMEOUT_SECS")?,
			}),
			executor: Some(ExecutorConfigLayer {
				default: self.var("KANBAN_DEFAULT_EXECUTOR"),
			}),
			picker: Some(PickerConfigLayer {
				command: self.var("KANBAN_PICKER"),
				interactive: self.bool("KANBAN_INTERACTIVE")?,
			}),
			logging: Some(LoggingConfigLayer {
				level: self.var("KANBAN_LOG_LEVEL"),
				format: self.log_format("KANBAN_LOG_FORMAT")?,
			}),
		})
	}
}

/// Values given as command-line flags.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
	pub server_url: Option<String>,
	pub log_level: Option<String>,
	pub log_format: Option<LogFormat>,
	pub picker: Option<String>,
	/// `Some(false)` for `--no-input`.
	pub interactive: Option<bool>,
}

/// Command-line source, highest precedence.
pub struct CliSource {
	overrides: CliOverrides,
}

impl CliSource {
	pub fn new(overrides: CliOverrides) -> Self {
		Self { overrides }
	}
}

impl ConfigSource for CliSource {
	fn name(&self) -> &'static str {
		"cli"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Cli
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		let o = self.overrides.clone();
		Ok(ConfigLayer {
			server: Some(ServerConfigLayer {
				url: o.server_url,
				timeout_secs: None,
			}),
			executor: None,
			picker: Some(PickerConfigLayer {
				command: o.picker,
				interactive: o.interactive,
			}),
			logging: Some(LoggingConfigLayer {
				level: o.log_level,
				format: o.log_format,
			}),
		})
	}
}
