// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Entity resolution for the kanban CLI.
//!
//! Each resolver turns an optional user-supplied token plus ambient context
//! (git remote, working directory, current branch) into exactly one entity
//! ID, or a typed [`ResolveError`]. Explicit input always beats context, and
//! the interactive picker is the last resort.

mod error;
mod executor;
mod options;
mod organization;
mod project;
mod repository;
mod resolution;
mod resolver;
mod workspace;

pub use error::{EntityKind, Match, ResolveError};
pub use executor::KNOWN_EXECUTORS;
pub use options::ResolveOptions;
pub use repository::path_contains;
pub use resolution::{Resolution, ResolutionSource};
pub use resolver::Resolver;
