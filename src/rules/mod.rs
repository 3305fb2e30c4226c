// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! A message is split into lines, the message-level rules run once, then
//! every line goes through the per-line rules in order. Findings are
//! collected into a [`Report`].

mod builtin;
mod engine;
pub mod matcher;
mod report;

pub use builtin::*;
pub use engine::{validate, RuleEngine};
pub use matcher::{FixTagMatcher, IssueTagMatcher, TagDefect, TagMatch, TagMatcher};
pub use report::{Diagnostic, Report, ReportBuilder, Severity};
