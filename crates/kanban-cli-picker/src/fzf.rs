// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, trace};

use crate::error::PickerError;
use crate::picker::Picker;

pub const DEFAULT_PICKER_COMMAND: &str = "fzf";

/// Picker backed by an external fuzzy finder that reads candidates on stdin
/// and prints the chosen line on stdout (fzf, sk, ...).
///
/// The command may carry extra arguments, e.g. `"fzf --exact"`.
#[derive(Clone, Debug)]
pub struct FzfPicker {
	program: String,
	args: Vec<String>,
}

impl FzfPicker {
	pub fn new(command: &str) -> Self {
		let mut parts = command.split_whitespace().map(str::to_string);
		let program = parts
			.next()
			.unwrap_or_else(|| DEFAULT_PICKER_COMMAND.to_string());
		Self {
			program,
			args: parts.collect(),
		}
	}

	fn build(&self, prompt: &str) -> Command {
		let mut cmd = Command::new(&self.program);
		cmd.args(&self.args)
			.arg("--prompt")
			.arg(format!("{prompt}> "))
			.arg("--delimiter")
			.arg("\t")
			.args(["--height", "40%", "--reverse", "--no-multi"])
			.stdin(Stdio::piped())
			.stdout(Stdio::piped())
			.stderr(Stdio::inherit());
		cmd
	}
}

impl Default for FzfPicker {
	fn default() -> Self {
		Self::new(DEFAULT_PICKER_COMMAND)
	}
}

#[async_trait]
impl Picker for FzfPicker {
	fn command(&self) -> &str {
		&self.program
	}

	async fn is_available(&self) -> bool {
		let status = Command::new(&self.program)
			.arg("--version")
			.stdin(Stdio::null())
			.stdout(Stdio::null())
			.stderr(Stdio::null())
			.status()
			.await;

		match status {
			Ok(status) => status.success(),
			Err(e) => {
				debug!(program = %self.program, error = %e, "picker availability check failed");
				false
			}
		}
	}

	async fn choose(&self, lines: Vec<String>, prompt: &str) -> Result<String, PickerError> {
		trace!(program = %self.program, count = lines.len(), "launching picker");

		let mut child = self.build(prompt).spawn().map_err(|e| {
			if e.kind() == std::io::ErrorKind::NotFound {
				PickerError::NotInstalled {
					command: self.program.clone(),
				}
			} else {
				PickerError::Io(e)
			}
		})?;

		if let Some(mut stdin) = child.stdin.take() {
			let mut input = lines.join("\n");
			input.push('\n');
			match stdin.write_all(input.as_bytes()).await {
				Ok(()) => {}
				// The finder may exit before reading every line; its exit
				// status still decides the outcome.
				Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
					debug!("picker closed stdin before reading all candidates");
				}
				Err(e) => return Err(e.into()),
			}
			// Dropping stdin closes the pipe so the finder sees EOF.
		}

		let output = child.wait_with_output().await?;
		if !output.status.success() {
			debug!(code = ?output.status.code(), "picker exited without a selection");
			return Err(PickerError::Cancelled);
		}

		let stdout = String::from_utf8_lossy(&output.stdout);
		match stdout.lines().next() {
			Some(line) if !line.trim().is_empty() => Ok(line.to_string()),
			_ => Err(PickerError::Cancelled),
		}
	}
}
