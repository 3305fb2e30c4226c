// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Reads commit messages from the current repository and locates its
//! hooks directory.

mod repo;

pub use repo::{get_commit_range, open_repo, Repository};
