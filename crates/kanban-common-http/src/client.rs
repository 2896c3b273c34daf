// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP client with consistent User-Agent header.

use std::time::Duration;

use kanban_common_version::BuildInfo;
use reqwest::{Client, ClientBuilder};

/// Creates a new HTTP client builder with the standard User-Agent header.
///
/// Use this when you need to customize the client beyond a timeout.
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// Creates a new HTTP client with a request timeout and the standard
/// User-Agent.
pub fn new_client_with_timeout(timeout: Duration) -> Result<Client, reqwest::Error> {
	tracing::trace!(timeout_secs = timeout.as_secs(), "building HTTP client");
	builder().timeout(timeout).build()
}

/// Returns the standard User-Agent string.
///
/// Format: `kanban/{version} ({platform}; {git_sha})`
pub fn user_agent() -> String {
	let info = BuildInfo::current();
	format!(
		"kanban/{} ({}; {})",
		info.version, info.platform, info.git_sha
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn user_agent_has_product_prefix() {
		let ua = user_agent();
		assert!(ua.starts_with("kanban/"));
		assert!(ua.contains('('));
		assert!(ua.ends_with(')'));
	}

	#[test]
	fn client_with_timeout_builds() {
		let client = new_client_with_timeout(Duration::from_secs(5));
		assert!(client.is_ok());
	}
}
