// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook script templates.

/// Marker line identifying hooks written by cmc.
pub const HOOK_MARKER: &str = "# CMC Git Hook";

/// Hooks cmc knows how to install.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookTemplate {
    /// Checks the message file git passes as `$1`.
    CommitMsg,
}

impl HookTemplate {
    /// All hooks, in install order.
    pub fn all() -> &'static [HookTemplate] {
        &[HookTemplate::CommitMsg]
    }

    /// File name inside `.git/hooks`.
    pub fn filename(&self) -> &'static str {
        match self {
            HookTemplate::CommitMsg => "commit-msg",
        }
    }

    /// Generate the hook script.
    pub fn generate(&self) -> String {
        match self {
            HookTemplate::CommitMsg => format!(
                "#!/bin/sh\n\
                 {}\n\
                 # Generated by cmc v{}\n\
                 # Rejects commit messages that do not follow the guideline.\n\
                 \n\
                 exec cmc check --strip-comments \"$1\"\n",
                HOOK_MARKER,
                crate::version::VERSION
            ),
        }
    }
}

impl std::str::FromStr for HookTemplate {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "commit-msg" | "commit_msg" => Ok(HookTemplate::CommitMsg),
            _ => Err(()),
        }
    }
}
