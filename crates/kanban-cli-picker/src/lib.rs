// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Interactive selection for the kanban resolvers.
//!
//! Candidates are rendered as tab-delimited lines whose first column is the
//! entity ID, piped to an external fuzzy finder (`fzf` by default), and the
//! chosen line is mapped back to that ID.

mod candidate;
mod error;
mod fzf;
mod mock;
mod picker;

pub use candidate::{selection_id, Candidate};
pub use error::PickerError;
pub use fzf::{FzfPicker, DEFAULT_PICKER_COMMAND};
pub use mock::{MockPicker, MockPickerCall};
pub use picker::{pick, Picker};
