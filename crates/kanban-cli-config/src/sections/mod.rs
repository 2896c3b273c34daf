// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections. Each has a fully resolved runtime type and a
//! partial layer type used for merging.

mod executor;
mod logging;
mod picker;
mod server;

pub use executor::{ExecutorConfig, ExecutorConfigLayer, DEFAULT_EXECUTOR};
pub use logging::{LogFormat, LoggingConfig, LoggingConfigLayer};
pub use picker::{PickerConfig, PickerConfigLayer};
pub use server::{ServerConfig, ServerConfigLayer, DEFAULT_SERVER_URL, DEFAULT_TIMEOUT_SECS};
