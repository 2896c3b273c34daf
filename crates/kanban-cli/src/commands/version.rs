// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use anyhow::Result;
use kanban_common_version::BuildInfo;

use crate::output;

pub fn run(json: bool) -> Result<()> {
	let info = BuildInfo::current();
	if json {
		return output::print_json(&info);
	}
	println!("{}", info.summary());
	println!();
	println!("{}", info.display_string());
	Ok(())
}
