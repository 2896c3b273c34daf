// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Where configuration files live.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::ConfigError;

pub const SYSTEM_CONFIG_FILE: &str = "/etc/kanban/config.toml";

/// Config files consulted in a run, lowest precedence first.
#[derive(Debug, Clone)]
pub struct PathsConfig {
	pub system_config_file: PathBuf,
	/// `$XDG_CONFIG_HOME/kanban/config.toml`
	pub user_config_file: PathBuf,
	/// `.kanban/config.toml` under the working directory, if it is readable.
	pub workspace_config_file: Option<PathBuf>,
}

impl PathsConfig {
	pub fn new(config_home: &Path, cwd: Option<&Path>) -> Self {
		Self {
			system_config_file: PathBuf::from(SYSTEM_CONFIG_FILE),
			user_config_file: config_home.join("kanban").join("config.toml"),
			workspace_config_file: cwd.map(workspace_config_path),
		}
	}
}

impl Default for PathsConfig {
	fn default() -> Self {
		Self::new(Path::new("~/.config"), None)
	}
}

/// Resolves paths from `XDG_CONFIG_HOME` (falling back to `~/.config`) and
/// the current directory.
pub fn resolve_xdg_paths() -> Result<PathsConfig, ConfigError> {
	let config_home = match std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
		Some(dir) => PathBuf::from(dir),
		None => dirs::home_dir()
			.ok_or(ConfigError::HomeDirNotFound)?
			.join(".config"),
	};
	let cwd = std::env::current_dir().ok();

	let paths = PathsConfig::new(&config_home, cwd.as_deref());
	debug!(user = %paths.user_config_file.display(), "config paths resolved");
	Ok(paths)
}

pub fn workspace_config_path(cwd: &Path) -> PathBuf {
	cwd.join(".kanban").join("config.toml")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_paths_from_config_home() {
		let paths = PathsConfig::new(Path::new("/home/dev/.config"), Some(Path::new("/work/api")));
		assert_eq!(
			paths.user_config_file,
			PathBuf::from("/home/dev/.config/kanban/config.toml")
		);
		assert_eq!(paths.system_config_file, PathBuf::from(SYSTEM_CONFIG_FILE));
		assert_eq!(
			paths.workspace_config_file,
			Some(PathBuf::from("/work/api/.kanban/config.toml"))
		);
	}

	#[test]
	fn test_no_cwd_means_no_workspace_file() {
		let paths = PathsConfig::new(Path::new("/cfg"), None);
		assert!(paths.workspace_config_file.is_none());
	}

	#[test]
	fn test_resolve_xdg_paths_ends_in_kanban_dir() {
		let paths = resolve_xdg_paths().unwrap();
		assert!(paths.user_config_file.ends_with("kanban/config.toml"));
	}
}
