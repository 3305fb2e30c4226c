// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the cmc application.
//!
//! Guideline violations are never errors: they are diagnostics inside a
//! [`Report`](crate::rules::Report). The types here cover everything that
//! stops cmc from producing or acting on a report.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for cmc operations.
#[derive(Error, Debug)]
pub enum CmcError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Validation outcome
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    // Input errors
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    // Hook errors
    #[error("Hook error: {0}")]
    Hook(#[from] HookError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Invalid commit reference: {reference}")]
    InvalidReference { reference: String },

    #[error("Git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::OpenFailed {
            message: err.message().to_string(),
        }
    }
}

/// Outcome of a check that did not pass.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Commit message rejected: {errors} error(s), {warnings} warning(s)")]
    Rejected { errors: usize, warnings: usize },

    #[error("Commit message has {warnings} warning(s) in strict mode")]
    StrictWarnings { warnings: usize },
}

/// Errors reading the message before it reaches the validator.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Input is not valid UTF-8 (invalid byte at offset {offset})")]
    NotUtf8 { offset: usize },

    #[error("Header: Unexpected token at line {line}")]
    UnexpectedHeaderToken { line: usize },
}

/// Hook-related errors.
#[derive(Error, Debug)]
pub enum HookError {
    #[error("Failed to install hook '{hook}': {message}")]
    InstallFailed { hook: String, message: String },

    #[error("Hook already exists: {hook}")]
    AlreadyExists { hook: String },

    #[error("Hook not found: {hook}")]
    NotFound { hook: String },

    #[error("Failed to remove hook '{hook}': {message}")]
    RemoveFailed { hook: String, message: String },
}

/// Result type alias for cmc operations.
pub type Result<T> = std::result::Result<T, CmcError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CmcError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
