// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Tag matchers.
//!
//! Tag rules do not scan strings themselves: they ask a [`TagMatcher`] for
//! the tags on a line and classify what they get back.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// One or more `FIX=` tokens, any case, spaces allowed around `=`.
    static ref FIX_TAG_REGEX: Regex = Regex::new(r"(?i)(?:FIX\s*=\s*)+").unwrap();

    /// Three consecutive upper-case letters.
    static ref UPPER_RUN_REGEX: Regex = Regex::new(r"[A-Z]{3}").unwrap();

    /// Issue tracker reference: DMS, optional 00, six digits.
    static ref ISSUE_TAG_REGEX: Regex = Regex::new(r"DMS(?:00)?[0-9]{6}").unwrap();
}

/// A tag found on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagMatch<'a> {
    /// The matched text.
    pub text: &'a str,
    /// Byte offset of the match in the line.
    pub start: usize,
}

/// Something wrong with the shape of a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagDefect {
    /// No run of three upper-case letters.
    NotUpperCase,
    /// Contains a space character.
    ContainsSpace,
}

/// Finds tags of one kind in a line of text.
pub trait TagMatcher: std::fmt::Debug + Send + Sync {
    /// All maximal, non-overlapping matches, left to right.
    fn find_all<'a>(&self, line: &'a str) -> Vec<TagMatch<'a>>;

    /// Whether the line holds at least one tag.
    fn is_match(&self, line: &str) -> bool {
        !self.find_all(line).is_empty()
    }
}

/// Matches `FIX=` tags.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixTagMatcher;

impl FixTagMatcher {
    /// Check a matched tag against the required format.
    ///
    /// Defects are returned in a fixed order: case first, then spaces.
    pub fn classify(tag: &str) -> Vec<TagDefect> {
        let mut defects = Vec::new();
        if !UPPER_RUN_REGEX.is_match(tag) {
            defects.push(TagDefect::NotUpperCase);
        }
        if tag.contains(' ') {
            defects.push(TagDefect::ContainsSpace);
        }
        defects
    }
}

impl TagMatcher for FixTagMatcher {
    fn find_all<'a>(&self, line: &'a str) -> Vec<TagMatch<'a>> {
        collect_matches(&FIX_TAG_REGEX, line)
    }
}

/// Matches issue tracker references such as `DMS00123456` or `DMS123456`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IssueTagMatcher;

impl TagMatcher for IssueTagMatcher {
    fn find_all<'a>(&self, line: &'a str) -> Vec<TagMatch<'a>> {
        collect_matches(&ISSUE_TAG_REGEX, line)
    }

    fn is_match(&self, line: &str) -> bool {
        ISSUE_TAG_REGEX.is_match(line)
    }
}

fn collect_matches<'a>(regex: &Regex, line: &'a str) -> Vec<TagMatch<'a>> {
    regex
        .find_iter(line)
        .map(|m| TagMatch {
            text: m.as_str(),
            start: m.start(),
        })
        .collect()
}
