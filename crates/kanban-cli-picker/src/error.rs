// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PickerError {
	#[error("interactive picker `{command}` is not installed; install it (e.g. `brew install fzf` or `apt install fzf`) or pass an ID explicitly")]
	NotInstalled { command: String },

	#[error("selection cancelled")]
	Cancelled,

	#[error("nothing to select from")]
	NoCandidates,

	#[error("picker returned an unknown selection: {0:?}")]
	InvalidSelection(String),

	#[error("I/O error talking to picker: {0}")]
	Io(#[from] io::Error),
}
