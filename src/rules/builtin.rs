// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in guideline rules.

use crate::commit::{Line, LineSequence};
use crate::config::RulesConfig;

use super::matcher::{FixTagMatcher, IssueTagMatcher, TagDefect, TagMatcher};
use super::report::Diagnostic;

/// A rule that looks at the message as a whole.
pub trait MessageRule: std::fmt::Debug + Send + Sync {
    /// Check the message and return any findings.
    fn check(&self, lines: &LineSequence<'_>) -> Vec<Diagnostic>;

    /// Get the rule name.
    fn name(&self) -> &str;
}

/// A rule applied to every line independently.
pub trait LineRule: std::fmt::Debug + Send + Sync {
    /// Check one line and return any findings.
    fn check(&self, line: &Line<'_>) -> Vec<Diagnostic>;

    /// Get the rule name.
    fn name(&self) -> &str;
}

/// Message-level rules, in evaluation order.
pub fn builtin_message_rules() -> Vec<Box<dyn MessageRule>> {
    vec![Box::new(BodyPresenceRule)]
}

/// Per-line rules, in evaluation order.
pub fn builtin_line_rules(config: &RulesConfig) -> Vec<Box<dyn LineRule>> {
    vec![
        Box::new(LineLengthRule {
            max_title_length: config.max_title_length,
            max_body_length: config.max_body_length,
        }),
        Box::new(TitleIssueTagRule::default()),
        Box::new(FixTagRule::default()),
    ]
}

/// The title must be followed by a blank line, and a body is recommended.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyPresenceRule;

impl MessageRule for BodyPresenceRule {
    fn check(&self, lines: &LineSequence<'_>) -> Vec<Diagnostic> {
        if lines.is_title_only() {
            return vec![Diagnostic::warning(
                "body-missing",
                None,
                "It is recommended not to make commit messages without a message body.",
            )];
        }

        match lines.get(1) {
            Some(separator) if !separator.is_blank() => vec![Diagnostic::error(
                "title-not-separated",
                Some(1),
                "Title must be followed by a blank line.",
            )],
            _ => Vec::new(),
        }
    }

    fn name(&self) -> &str {
        "body-presence"
    }
}

/// Limits the visible length of the title and body lines.
#[derive(Debug, Clone, Copy)]
pub struct LineLengthRule {
    /// Maximum title length.
    pub max_title_length: usize,
    /// Maximum body line length.
    pub max_body_length: usize,
}

impl Default for LineLengthRule {
    fn default() -> Self {
        let config = RulesConfig::default();
        Self {
            max_title_length: config.max_title_length,
            max_body_length: config.max_body_length,
        }
    }
}

impl LineRule for LineLengthRule {
    fn check(&self, line: &Line<'_>) -> Vec<Diagnostic> {
        let len = line.visible_len();

        if line.is_title() {
            if len > self.max_title_length {
                return vec![Diagnostic::error(
                    "title-too-long",
                    Some(1),
                    format!(
                        "Title is too long ({} chars). Maximum length is {} chars.",
                        len, self.max_title_length
                    ),
                )];
            }
        } else if len > self.max_body_length {
            return vec![Diagnostic::error(
                "line-too-long",
                Some(line.number()),
                format!(
                    "Too long ({} chars). Maximum length is {} chars.",
                    len, self.max_body_length
                ),
            )];
        }

        Vec::new()
    }

    fn name(&self) -> &str {
        "line-length"
    }
}

/// Issue tracker references do not belong in the title.
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleIssueTagRule {
    matcher: IssueTagMatcher,
}

impl LineRule for TitleIssueTagRule {
    fn check(&self, line: &Line<'_>) -> Vec<Diagnostic> {
        if line.is_title() && self.matcher.is_match(line.text) {
            vec![Diagnostic::warning(
                "title-issue-tag",
                Some(1),
                "It is recommended not to list DMS issues in the title.",
            )]
        } else {
            Vec::new()
        }
    }

    fn name(&self) -> &str {
        "title-issue-tag"
    }
}

/// At most one well-formed `FIX=` tag per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixTagRule {
    matcher: FixTagMatcher,
}

impl LineRule for FixTagRule {
    fn check(&self, line: &Line<'_>) -> Vec<Diagnostic> {
        let tags = self.matcher.find_all(line.text);

        match tags.as_slice() {
            [] => Vec::new(),
            [tag] => FixTagMatcher::classify(tag.text)
                .into_iter()
                .map(|defect| {
                    let requirement = match defect {
                        TagDefect::NotUpperCase => "Must be all upper-case.",
                        TagDefect::ContainsSpace => "Must not contain spaces.",
                    };
                    Diagnostic::error(
                        "invalid-fix-tag",
                        Some(line.number()),
                        format!("Invalid tag \"{}\". {}", tag.text, requirement),
                    )
                })
                .collect(),
            _ => vec![Diagnostic::error(
                "too-many-fix-tags",
                Some(line.number()),
                "Too many FIX= tags. Maximum is one per line.",
            )],
        }
    }

    fn name(&self) -> &str {
        "fix-tag"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::report::Severity;

    fn line(index: usize, text: &str) -> Line<'_> {
        Line { index, text }
    }

    #[test]
    fn test_body_missing_is_warning() {
        let lines = LineSequence::split("Fix bug").unwrap();
        let issues = BodyPresenceRule.check(&lines);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(issues[0].line, None);
    }

    #[test]
    fn test_missing_blank_line() {
        let lines = LineSequence::split("Title\nBody line").unwrap();
        let issues = BodyPresenceRule.check(&lines);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert_eq!(issues[0].line, Some(1));
    }

    #[test]
    fn test_whitespace_separator_counts_as_blank() {
        let lines = LineSequence::split("Title\n  \t\r\nBody").unwrap();
        assert!(BodyPresenceRule.check(&lines).is_empty());
    }

    #[test]
    fn test_title_length_boundary() {
        let rule = LineLengthRule::default();
        let ok = "a".repeat(70);
        assert!(rule.check(&line(0, &ok)).is_empty());

        let long = "a".repeat(71);
        let issues = rule.check(&line(0, &long));
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].message,
            "Title is too long (71 chars). Maximum length is 70 chars."
        );
        assert_eq!(issues[0].line, Some(1));
    }

    #[test]
    fn test_body_length() {
        let rule = LineLengthRule::default();
        let long = "b".repeat(75);
        let issues = rule.check(&line(4, &long));
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].message,
            "Too long (75 chars). Maximum length is 70 chars."
        );
        assert_eq!(issues[0].line, Some(5));
    }

    #[test]
    fn test_length_ignores_carriage_return() {
        let rule = LineLengthRule::default();
        let text = format!("{}\r", "a".repeat(70));
        assert!(rule.check(&line(2, &text)).is_empty());
    }

    #[test]
    fn test_custom_limits() {
        let rule = LineLengthRule {
            max_title_length: 10,
            max_body_length: 20,
        };
        assert_eq!(rule.check(&line(0, "eleven chars")).len(), 1);
        assert!(rule.check(&line(1, "eleven chars")).is_empty());
    }

    #[test]
    fn test_issue_tag_title_only() {
        let rule = TitleIssueTagRule::default();
        assert_eq!(rule.check(&line(0, "Fix DMS00123456")).len(), 1);
        assert_eq!(rule.check(&line(0, "Fix DMS123456")).len(), 1);
        assert!(rule.check(&line(0, "Fix DMS12")).is_empty());
        assert!(rule.check(&line(2, "FIX=DMS00123456")).is_empty());
    }

    #[test]
    fn test_well_formed_fix_tag() {
        assert!(FixTagRule::default().check(&line(2, "FIX=ABC123")).is_empty());
    }

    #[test]
    fn test_lower_case_fix_tag() {
        let issues = FixTagRule::default().check(&line(2, "fix=abc123"));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "Invalid tag \"fix=\". Must be all upper-case.");
        assert_eq!(issues[0].line, Some(3));
    }

    #[test]
    fn test_spaced_fix_tag() {
        let issues = FixTagRule::default().check(&line(2, "FIX = ABC"));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "Invalid tag \"FIX = \". Must not contain spaces.");
    }

    #[test]
    fn test_fix_tag_failing_both_checks() {
        let issues = FixTagRule::default().check(&line(2, "fix = abc"));
        assert_eq!(issues.len(), 2);
        assert!(issues[0].message.ends_with("Must be all upper-case."));
        assert!(issues[1].message.ends_with("Must not contain spaces."));
    }

    #[test]
    fn test_too_many_fix_tags() {
        let issues = FixTagRule::default().check(&line(2, "fix = abc FIX=DEF"));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, "too-many-fix-tags");
    }
}
