// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for cmc.
//!
//! This module handles loading and parsing configuration from cmc.toml,
//! falling back to the built-in guideline defaults.

pub mod default;
mod loader;
mod schema;

pub use loader::{find_config_file, find_config_file_from, load_config, parse_config};
pub use schema::*;
