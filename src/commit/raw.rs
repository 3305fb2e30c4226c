// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Parsing of raw commit objects as printed by `git cat-file -p <commit>`.

use crate::error::{InputError, Result};

/// Header keys allowed in a raw commit object.
const HEADER_KEYS: &[&str] = &[
    "tree",
    "parent",
    "author",
    "committer",
    "encoding",
    "gpgsig",
    "mergetag",
];

/// The message part of a raw commit object with a checked header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCommit {
    /// The commit message following the first blank line.
    pub message: String,
}

impl RawCommit {
    /// Parse `git cat-file -p` output.
    ///
    /// Every header line must start with a known key followed by a space, or
    /// be a continuation line starting with a space (multi-line signatures).
    pub fn parse(input: &str) -> Result<Self> {
        let (header, message) = match input.find("\n\n") {
            Some(pos) => (&input[..pos], &input[pos + 2..]),
            None => (input, ""),
        };

        for (index, line) in header.lines().enumerate() {
            if !is_header_line(line) {
                return Err(InputError::UnexpectedHeaderToken { line: index + 1 }.into());
            }
        }

        tracing::debug!("Parsed raw commit header with {} lines", header.lines().count());

        Ok(Self {
            message: message.to_string(),
        })
    }
}

fn is_header_line(line: &str) -> bool {
    if line.starts_with(' ') {
        return true;
    }
    match line.split_once(' ') {
        Some((key, _)) => HEADER_KEYS.contains(&key),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CmcError;

    const RAW: &str = "tree 9bedf67800b2923982bdf60c89c57ce6ee2c7a22\n\
parent 1f7a7a472abf3dd9643fd615f6da379c4acb3e3a\n\
author A U Thor <author@example.com> 1112912053 -0700\n\
committer C O Mitter <committer@example.com> 1112912053 -0700\n\
\n\
Add feature\n\
\n\
Body text\n";

    #[test]
    fn test_parse_raw_commit() {
        let raw = RawCommit::parse(RAW).unwrap();
        assert_eq!(raw.message, "Add feature\n\nBody text\n");
    }

    #[test]
    fn test_parse_signed_commit() {
        let input = "tree abc\n\
gpgsig -----BEGIN PGP SIGNATURE-----\n \n iQEzBAAB\n -----END PGP SIGNATURE-----\n\
\n\
Signed change";
        let raw = RawCommit::parse(input).unwrap();
        assert_eq!(raw.message, "Signed change");
    }

    #[test]
    fn test_unexpected_header_token() {
        let input = "tree abc\nbogus value\n\nTitle";
        let err = RawCommit::parse(input).unwrap_err();
        assert!(matches!(
            err,
            CmcError::Input(InputError::UnexpectedHeaderToken { line: 2 })
        ));
    }

    #[test]
    fn test_header_without_message() {
        let raw = RawCommit::parse("tree abc\nparent def").unwrap();
        assert!(raw.message.is_empty());
    }
}
