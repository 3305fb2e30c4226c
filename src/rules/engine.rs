// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit message validation.

use crate::commit::LineSequence;
use crate::config::{CmcConfig, RulesConfig};

use super::builtin::{builtin_line_rules, builtin_message_rules, LineRule, MessageRule};
use super::report::{Diagnostic, Report, ReportBuilder};

/// Validate a message against the default guideline.
pub fn validate(text: &str) -> Report {
    RuleEngine::default().validate(text)
}

/// Rule engine for validating commit messages.
///
/// The engine only holds configuration and rule objects, so one engine can
/// validate any number of messages, from any number of threads.
#[derive(Debug)]
pub struct RuleEngine {
    config: RulesConfig,
    message_rules: Vec<Box<dyn MessageRule>>,
    line_rules: Vec<Box<dyn LineRule>>,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new(&CmcConfig::default())
    }
}

impl RuleEngine {
    /// Create a new rule engine with the given configuration.
    pub fn new(config: &CmcConfig) -> Self {
        Self {
            config: config.rules.clone(),
            message_rules: builtin_message_rules(),
            line_rules: builtin_line_rules(&config.rules),
        }
    }

    /// Add a message-level rule, run after the built-in ones.
    pub fn add_message_rule(&mut self, rule: Box<dyn MessageRule>) {
        self.message_rules.push(rule);
    }

    /// Add a per-line rule, run after the built-in ones on every line.
    pub fn add_line_rule(&mut self, rule: Box<dyn LineRule>) {
        self.line_rules.push(rule);
    }

    /// Validate a commit message.
    pub fn validate(&self, text: &str) -> Report {
        let mut report = ReportBuilder::new();

        let Some(lines) = LineSequence::split(text) else {
            report.push(Diagnostic::error(
                "message-empty",
                None,
                "Commit message is empty",
            ));
            return report.finish();
        };

        report.push(Diagnostic::info(
            "line-count",
            None,
            format!("Commit message contains {} lines", lines.len()),
        ));

        if self.is_excluded(lines.title().visible()) {
            tracing::debug!("Excluded subject: {:?}", lines.title().visible());
            report.push(Diagnostic::info(
                "excluded-subject",
                Some(1),
                "Found excluded commit type. Skipping message checks.",
            ));
            return report.finish();
        }

        for rule in &self.message_rules {
            tracing::trace!("Applying message rule {}", rule.name());
            report.extend(rule.check(&lines));
        }

        for line in lines.iter() {
            let errors_so_far = report.error_count();
            let first = report.len();

            for rule in &self.line_rules {
                report.extend(rule.check(&line));
            }

            if report.error_count() > errors_so_far {
                tracing::trace!("Line {} has errors", line.number());
                report.attach_source_line(first, line.text);
            }
        }

        let report = report.finish();
        tracing::debug!("Validation finished: {}", report.summary());
        report
    }

    fn is_excluded(&self, title: &str) -> bool {
        self.config
            .excluded_subjects
            .iter()
            .any(|prefix| !prefix.is_empty() && title.starts_with(prefix.as_str()))
    }
}
