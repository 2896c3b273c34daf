// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Ordered collection of configuration sources.

use tracing::debug;

use crate::error::ConfigError;
use crate::layer::ConfigLayer;
use crate::paths::PathsConfig;
use crate::runtime::KanbanConfig;
use crate::sources::ConfigSource;
use crate::validation;

#[derive(Default)]
pub struct ConfigRegistry {
	sources: Vec<Box<dyn ConfigSource>>,
}

impl ConfigRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn register(&mut self, source: Box<dyn ConfigSource>) {
		self.sources.push(source);
	}

	/// Merges every source in precedence order, then resolves and validates.
	pub fn load(mut self, paths: PathsConfig) -> Result<KanbanConfig, ConfigError> {
		self.sources.sort_by_key(|s| s.precedence());

		let mut merged = ConfigLayer::default();
		for source in &self.sources {
			debug!(source = source.name(), "loading configuration source");
			merged.merge(source.load()?);
		}

		let config = KanbanConfig::from_layer(merged, paths);
		validation::validate(&config)?;

		debug!(
			server = %config.server.url,
			picker = %config.picker.command,
			interactive = config.picker.interactive,
			"configuration loaded"
		);
		Ok(config)
	}
}
