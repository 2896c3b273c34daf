// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a git query produced no signal.
#[derive(Debug, Error)]
pub enum GitError {
	#[error("`git {query}` exited with {code:?} in {dir}: {stderr}")]
	QueryFailed {
		dir: PathBuf,
		query: String,
		code: Option<i32>,
		stderr: String,
	},

	#[error("git executable not found in PATH")]
	NotInstalled,

	#[error("could not run git in {dir}")]
	Spawn {
		dir: PathBuf,
		#[source]
		source: io::Error,
	},
}
