// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Settings for the `kanban` CLI.
//!
//! Values come from built-in defaults, `/etc/kanban/config.toml`, the user's
//! XDG config file, `.kanban/config.toml` in the working directory,
//! `KANBAN_*` environment variables and command-line flags, in increasing
//! precedence. The merged result is validated once and is read-only after
//! that.

pub mod defaults;
pub mod error;
pub mod layer;
pub mod paths;
pub mod registry;
pub mod runtime;
pub mod sections;
pub mod sources;
pub mod validation;

pub use defaults::{ensure_default_config, DEFAULT_CONFIG_TEMPLATE};
pub use error::ConfigError;
pub use layer::ConfigLayer;
pub use paths::PathsConfig;
pub use registry::ConfigRegistry;
pub use runtime::{KanbanConfig, CONFIG_KEYS};
pub use sections::{LogFormat, DEFAULT_EXECUTOR, DEFAULT_SERVER_URL};
pub use sources::{CliOverrides, ConfigSource, Precedence};

/// Loads configuration from every source, `cli` taking precedence.
pub fn load_config_with_cli(cli: CliOverrides) -> Result<KanbanConfig, ConfigError> {
	let paths = paths::resolve_xdg_paths()?;

	let mut registry = ConfigRegistry::new();

	registry.register(Box::new(sources::DefaultsSource));
	registry.register(Box::new(sources::FileSource::system(&paths)));
	registry.register(Box::new(sources::FileSource::user(&paths)));
	if let Some(ws) = &paths.workspace_config_file {
		registry.register(Box::new(sources::FileSource::workspace(ws)));
	}
	registry.register(Box::new(sources::EnvSource::process()));
	registry.register(Box::new(sources::CliSource::new(cli)));

	registry.load(paths)
}
