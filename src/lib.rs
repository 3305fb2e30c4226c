// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! cmc - Commit Message Checker
//!
//! Validates commit messages against the commit message guideline and
//! reports violations as errors (blocking) or warnings (advisory).
//!
//! # Features
//!
//! - **Rule Engine**: Title, body, line length and tag rules applied in a fixed order
//! - **Reports**: Ordered diagnostics with line attribution and error/warning counts
//! - **Input Sources**: Files, standard input, raw commit objects and git revisions
//! - **Git Hooks**: Install and remove the commit-msg hook that runs cmc
//!
//! # Example
//!
//! ```
//! use cmc::rules::validate;
//!
//! let report = validate("Add retry to uploader\n\nRetries three times.");
//! assert!(report.is_accepted());
//!
//! let report = validate("Add retry to uploader\nRetries three times.");
//! assert_eq!(report.error_count(), 1);
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod hooks;
pub mod rules;

// Re-exports for convenience
pub use config::CmcConfig;
pub use error::{CmcError, Result};
pub use rules::{validate, Diagnostic, Report, RuleEngine, Severity};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of cmc.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
