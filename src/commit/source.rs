// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Reading commit messages from files, standard input and git.

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{CmcError, InputError, Result};
use crate::git;

use super::message::clean_message;
use super::raw::RawCommit;

/// Where a commit message comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageSource {
    /// Read from standard input.
    Stdin,
    /// Read from a file (e.g. `.git/COMMIT_EDITMSG` in a commit-msg hook).
    File(PathBuf),
    /// A commit or `A..B` range in the current repository.
    Revision(String),
}

impl MessageSource {
    /// Pick the source from the optional file argument and revision.
    pub fn from_args(file: Option<&Path>, rev: Option<&str>) -> Self {
        match (rev, file) {
            (Some(rev), _) => MessageSource::Revision(rev.to_string()),
            (None, Some(path)) if path != Path::new("-") => MessageSource::File(path.to_path_buf()),
            _ => MessageSource::Stdin,
        }
    }
}

/// Options applied to every message before validation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadOptions {
    /// The input is a raw commit object with a header.
    pub raw: bool,
    /// Drop `#` comment lines.
    pub strip_comments: bool,
}

/// A message ready to be validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedMessage {
    /// Commit id when the message came from git.
    pub commit_sha: Option<String>,
    /// The cleaned message text.
    pub text: String,
}

/// Load one or more messages from a source.
pub fn load_messages(source: &MessageSource, options: ReadOptions) -> Result<Vec<LoadedMessage>> {
    tracing::debug!("Loading commit message from {:?}", source);

    match source {
        MessageSource::Stdin => {
            let mut bytes = Vec::new();
            std::io::stdin().read_to_end(&mut bytes)?;
            Ok(vec![prepare(None, decode(bytes)?, options)?])
        }
        MessageSource::File(path) => {
            let bytes = std::fs::read(path).map_err(|e| CmcError::WithContext {
                context: format!("Failed to read {}", path.display()),
                message: e.to_string(),
            })?;
            Ok(vec![prepare(None, decode(bytes)?, options)?])
        }
        MessageSource::Revision(rev) => {
            git::get_commit_range(rev)?
                .into_iter()
                .map(|(sha, message)| {
                    // Messages from git never carry the object header.
                    let options = ReadOptions {
                        raw: false,
                        ..options
                    };
                    prepare(Some(sha), message, options)
                })
                .collect()
        }
    }
}

/// Decode input bytes, rejecting anything that is not UTF-8.
pub fn decode(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| {
        InputError::NotUtf8 {
            offset: e.utf8_error().valid_up_to(),
        }
        .into()
    })
}

fn prepare(commit_sha: Option<String>, text: String, options: ReadOptions) -> Result<LoadedMessage> {
    let message = if options.raw {
        RawCommit::parse(&text)?.message
    } else {
        text
    };

    Ok(LoadedMessage {
        commit_sha,
        text: clean_message(&message, options.strip_comments),
    })
}
