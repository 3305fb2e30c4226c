// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Diagnostic and report types.

use crate::cli::args::OutputFormat;
use console::{style, Style};
use serde::Serialize;

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks the commit.
    Error,
    /// Advisory only.
    Warning,
    /// Informational note.
    Info,
}

impl Severity {
    /// The three-letter tag used in text output.
    pub fn tag(&self) -> &'static str {
        match self {
            Severity::Error => "ERR",
            Severity::Warning => "WRN",
            Severity::Info => "INF",
        }
    }

    fn style(&self) -> Style {
        match self {
            Severity::Error => Style::new().red().bold(),
            Severity::Warning => Style::new().yellow().bold(),
            Severity::Info => Style::new().cyan(),
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A single finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Severity of the finding.
    pub severity: Severity,
    /// Code for programmatic handling.
    pub code: String,
    /// 1-based line number, or none for message-level findings.
    pub line: Option<usize>,
    /// Human-readable message.
    pub message: String,
    /// The offending line exactly as written (a trailing `\r` included),
    /// set when that line produced an error.
    pub source_line: Option<String>,
}

impl Diagnostic {
    fn new(severity: Severity, code: &str, line: Option<usize>, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: code.to_string(),
            line,
            message: message.into(),
            source_line: None,
        }
    }

    /// Create an error.
    pub fn error(code: &str, line: Option<usize>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, code, line, message)
    }

    /// Create a warning.
    pub fn warning(code: &str, line: Option<usize>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, code, line, message)
    }

    /// Create an informational note.
    pub fn info(code: &str, line: Option<usize>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, code, line, message)
    }

    /// Whether this diagnostic blocks the commit.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Format the diagnostic for terminal output.
    pub fn format(&self) -> String {
        let mut output = format!("{}: ", self.severity.style().apply_to(self.severity.tag()));
        if let Some(line) = self.line {
            output.push_str(&format!("Line #{}: ", line));
        }
        output.push_str(&self.message);
        output
    }
}

/// Collects diagnostics during one validation pass.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    diagnostics: Vec<Diagnostic>,
    errors: usize,
}

impl ReportBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        if diagnostic.is_error() {
            self.errors += 1;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Append several diagnostics, keeping their order.
    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        for diagnostic in diagnostics {
            self.push(diagnostic);
        }
    }

    /// Errors emitted so far.
    pub fn error_count(&self) -> usize {
        self.errors
    }

    /// Number of diagnostics emitted so far.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Whether nothing has been emitted yet.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Attach `text` to every diagnostic emitted since position `from`.
    pub fn attach_source_line(&mut self, from: usize, text: &str) {
        for diagnostic in &mut self.diagnostics[from..] {
            diagnostic.source_line = Some(text.to_string());
        }
    }

    /// Finish the pass.
    pub fn finish(self) -> Report {
        let error_count = self
            .diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count();
        let warning_count = self
            .diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count();

        Report {
            diagnostics: self.diagnostics,
            error_count,
            warning_count,
        }
    }
}

/// Result of validating a commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
    warning_count: usize,
}

impl Report {
    /// All diagnostics, in emission order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Only the errors, in emission order.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Error)
    }

    /// Only the warnings, in emission order.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Warning)
    }

    /// Diagnostics of one severity, in emission order.
    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
    }

    /// Number of errors.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Number of warnings.
    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    /// Whether the message passes. Warnings never block.
    pub fn is_accepted(&self) -> bool {
        self.error_count == 0
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.is_accepted() {
            if self.warning_count == 0 {
                "Valid".to_string()
            } else {
                format!("Valid ({} warnings)", self.warning_count)
            }
        } else {
            format!(
                "Invalid ({} errors, {} warnings)",
                self.error_count, self.warning_count
            )
        }
    }

    /// Render the report as plain text.
    ///
    /// Each source line is shown once, indented, after the last diagnostic
    /// that refers to it.
    pub fn render_text(&self) -> String {
        let mut output = String::new();

        for (i, diagnostic) in self.diagnostics.iter().enumerate() {
            output.push_str(&diagnostic.format());
            output.push('\n');

            if let Some(ref source) = diagnostic.source_line {
                let next_shares_source = self
                    .diagnostics
                    .get(i + 1)
                    .is_some_and(|next| next.line == diagnostic.line && next.source_line.is_some());
                if !next_shares_source {
                    output.push_str(&format!(
                        "     {}\n",
                        style(source.trim_end_matches('\r')).dim()
                    ));
                }
            }
        }

        output.push_str(&format!(
            "\n{} error(s).\n{} warning(s).\n",
            self.error_count, self.warning_count
        ));
        output
    }

    /// Render the report as JSON.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "accepted": self.is_accepted(),
            "error_count": self.error_count,
            "warning_count": self.warning_count,
            "diagnostics": self.diagnostics,
        })
    }

    /// Print the report to stdout.
    pub fn print(&self, format: Option<OutputFormat>, commit_sha: Option<&str>) {
        match format {
            Some(OutputFormat::Json) => {
                let mut json = self.to_json();
                if let Some(sha) = commit_sha {
                    json["commit"] = serde_json::Value::String(sha.to_string());
                }
                println!(
                    "{}",
                    serde_json::to_string_pretty(&json).unwrap_or_default()
                );
            }
            _ => {
                if let Some(sha) = commit_sha {
                    let short_sha = &sha[..7.min(sha.len())];
                    let status = if self.is_accepted() {
                        style("✓").green().bold()
                    } else {
                        style("✗").red().bold()
                    };
                    println!("{} {}", status, style(short_sha).cyan());
                }
                print!("{}", self.render_text());
            }
        }
    }
}
