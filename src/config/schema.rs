// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from cmc.toml.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default maximum length of the title line.
pub const DEFAULT_MAX_TITLE_LENGTH: usize = 70;

/// Default maximum length of a body line.
pub const DEFAULT_MAX_BODY_LENGTH: usize = 70;

/// The main configuration structure for cmc.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CmcConfig {
    /// Rule configuration.
    pub rules: RulesConfig,

    /// Input handling configuration.
    pub input: InputConfig,

    /// UI/UX configuration.
    pub ui: UiConfig,
}

impl CmcConfig {
    /// Load configuration from the default locations.
    pub fn load() -> Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Reject values no message could ever satisfy.
    pub fn validate(&self) -> Result<()> {
        if self.rules.max_title_length == 0 {
            return Err(ConfigError::InvalidValue {
                key: "rules.max_title_length".to_string(),
                message: "must be greater than zero".to_string(),
            }
            .into());
        }
        if self.rules.max_body_length == 0 {
            return Err(ConfigError::InvalidValue {
                key: "rules.max_body_length".to_string(),
                message: "must be greater than zero".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

/// Rule configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RulesConfig {
    /// Maximum visible length of the title line.
    pub max_title_length: usize,

    /// Maximum visible length of each body line.
    pub max_body_length: usize,

    /// Title prefixes for which no rules are run (merges, reverts...).
    pub excluded_subjects: Vec<String>,

    /// Whether warnings reject the message too.
    pub strict: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            max_body_length: DEFAULT_MAX_BODY_LENGTH,
            excluded_subjects: Vec::new(),
            strict: false,
        }
    }
}

/// Input handling configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Drop lines starting with '#' before validating.
    pub strip_comments: bool,
}

/// UI/UX configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Whether to use colors.
    pub color: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { color: true }
    }
}
