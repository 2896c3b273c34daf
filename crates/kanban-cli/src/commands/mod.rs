// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

pub mod config;
pub mod org;
pub mod pr;
pub mod project;
pub mod repo;
pub mod session;
pub mod task;
pub mod version;
pub mod workspace;
