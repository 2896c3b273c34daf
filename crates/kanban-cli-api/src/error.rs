// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
	#[error("network error: {0}")]
	Network(#[from] reqwest::Error),

	#[error("server error: {status} - {message}")]
	Server { status: StatusCode, message: String },

	#[error("invalid URL: {0}")]
	InvalidUrl(String),

	#[error("invalid response from {endpoint}: {source}")]
	Decode {
		endpoint: String,
		#[source]
		source: serde_json::Error,
	},

	#[error("response from {endpoint} carried no data")]
	MissingData { endpoint: String },
}

impl ApiError {
	/// True when the server answered 404 for the requested entity.
	pub fn is_not_found(&self) -> bool {
		matches!(self, Self::Server { status, .. } if *status == StatusCode::NOT_FOUND)
	}
}
