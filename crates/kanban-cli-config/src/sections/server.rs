// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Kanban server connection.

use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3001";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerConfig {
	pub url: String,
	pub timeout_secs: u64,
}

impl Default for ServerConfig {
	fn default() -> Self {
		ServerConfigLayer::default().finalize()
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerConfigLayer {
	#[serde(default)]
	pub url: Option<String>,
	#[serde(default)]
	pub timeout_secs: Option<u64>,
}

impl ServerConfigLayer {
	pub fn merge(&mut self, other: ServerConfigLayer) {
		if other.url.is_some() {
			self.url = other.url;
		}
		if other.timeout_secs.is_some() {
			self.timeout_secs = other.timeout_secs;
		}
	}

	pub fn finalize(self) -> ServerConfig {
		ServerConfig {
			url: self.url.unwrap_or_else(|| DEFAULT_SERVER_URL.to_string()),
			timeout_secs: self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let config = ServerConfigLayer::default().finalize();
		assert_eq!(config.url, "http://127.0.0.1:3001");
		assert_eq!(config.timeout_secs, 30);
	}

	#[test]
	fn test_merge_keeps_unset_fields() {
		let mut base = ServerConfigLayer {
			url: Some("http://a:1".to_string()),
			timeout_secs: Some(5),
		};
		base.merge(ServerConfigLayer {
			url: Some("http://b:2".to_string()),
			timeout_secs: None,
		});
		let config = base.finalize();
		assert_eq!(config.url, "http://b:2");
		assert_eq!(config.timeout_secs, 5);
	}
}
