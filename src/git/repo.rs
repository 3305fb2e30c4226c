// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository operations.

use crate::commit::source::decode;
use crate::error::{CmcError, GitError, Result};
use git2::{Oid, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository with the lookups cmc needs.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Open a repository from the current directory.
    pub fn open_current() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            CmcError::Git(GitError::OpenFailed {
                message: format!("Failed to get current directory: {}", e),
            })
        })?;
        Self::open(&current_dir)
    }

    /// Open a repository from a path.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                CmcError::Git(GitError::NotARepository)
            } else {
                CmcError::Git(GitError::OpenFailed {
                    message: e.message().to_string(),
                })
            }
        })?;

        Ok(Self { inner: repo })
    }

    /// Get a commit by reference (SHA, branch name, etc.).
    pub fn get_commit(&self, reference: &str) -> Result<git2::Commit<'_>> {
        let obj = self.inner.revparse_single(reference).map_err(|e| {
            CmcError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        let commit = obj.peel_to_commit().map_err(|e| {
            CmcError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        Ok(commit)
    }

    /// Get the commit message for a reference.
    pub fn get_commit_message(&self, reference: &str) -> Result<String> {
        let commit = self.get_commit(reference)?;
        commit_message(&commit)
    }

    /// Get commits in an `A..B` range, newest first.
    pub fn get_commits_in_range(&self, range: &str) -> Result<Vec<(Oid, String)>> {
        let Some((from, to)) = range.split_once("..") else {
            let commit = self.get_commit(range)?;
            return Ok(vec![(commit.id(), commit_message(&commit)?)]);
        };

        let mut revwalk = self.inner.revwalk().map_err(|e| {
            CmcError::Git(GitError::CommandFailed {
                command: "revwalk".to_string(),
                message: e.message().to_string(),
            })
        })?;

        let to = self.get_commit(if to.is_empty() { "HEAD" } else { to })?;
        revwalk.push(to.id()).map_err(|e| {
            CmcError::Git(GitError::CommandFailed {
                command: "revwalk.push".to_string(),
                message: e.message().to_string(),
            })
        })?;

        if !from.is_empty() {
            let from = self.get_commit(from)?;
            revwalk.hide(from.id()).map_err(|e| {
                CmcError::Git(GitError::CommandFailed {
                    command: "revwalk.hide".to_string(),
                    message: e.message().to_string(),
                })
            })?;
        }

        let mut commits = Vec::new();
        for oid_result in revwalk {
            let oid = oid_result.map_err(|e| {
                CmcError::Git(GitError::CommandFailed {
                    command: "revwalk".to_string(),
                    message: e.message().to_string(),
                })
            })?;
            let commit = self.inner.find_commit(oid).map_err(|e| {
                CmcError::Git(GitError::InvalidReference {
                    reference: format!("{}: {}", oid, e.message()),
                })
            })?;
            commits.push((oid, commit_message(&commit)?));
        }

        Ok(commits)
    }

    /// Get the git directory path (.git).
    pub fn git_dir(&self) -> &Path {
        self.inner.path()
    }
}

/// Decode a commit message, rejecting messages that are not UTF-8.
fn commit_message(commit: &git2::Commit<'_>) -> Result<String> {
    decode(commit.message_bytes().to_vec())
}

/// Open the repository from the current directory.
pub fn open_repo() -> Result<Repository> {
    Repository::open_current()
}

/// Get commits in a range.
pub fn get_commit_range(range: &str) -> Result<Vec<(String, String)>> {
    let repo = Repository::open_current()?;
    let commits = repo.get_commits_in_range(range)?;
    Ok(commits
        .into_iter()
        .map(|(oid, msg)| (oid.to_string(), msg))
        .collect())
}
