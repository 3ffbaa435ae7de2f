//! # Lint Report
//!
//! The ordered result of a run and its two renderings: the text report
//! printed by the CLI and a serializable view for `--format json`.

use std::path::Path;

use serde::Serialize;

use crate::issue::Issue;

/// First line of a failed text report.
pub const FAILURE_HEADER: &str = "Skill lint failed:";

/// Single line printed when a run finds no issues.
pub const SUCCESS_LINE: &str = "OK: skills lint passed";

/// All issues found by one run, in the order they were produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LintReport {
    /// Number of skill folders checked.
    pub skills_checked: usize,
    /// Every issue found.
    pub issues: Vec<Issue>,
}

impl LintReport {
    /// True when no issues were found.
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn push(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    pub fn extend(&mut self, issues: impl IntoIterator<Item = Issue>) {
        self.issues.extend(issues);
    }

    /// Text report with locations relative to `display_root`.
    ///
    /// A failed report is the header, a blank line, then one
    /// `- <location>: <message>` line per issue.
    pub fn render_text(&self, display_root: &Path) -> String {
        if self.is_ok() {
            return format!("{SUCCESS_LINE}\n");
        }
        let mut out = format!("{FAILURE_HEADER}\n\n");
        for issue in &self.issues {
            out.push_str(&format!(
                "- {}: {}\n",
                issue.display_path(display_root).display(),
                issue.message
            ));
        }
        out
    }

    /// Serializable view with locations relative to `display_root`.
    pub fn view(&self, display_root: &Path) -> ReportView {
        ReportView {
            ok: self.is_ok(),
            skills_checked: self.skills_checked,
            issue_count: self.issues.len(),
            issues: self
                .issues
                .iter()
                .map(|issue| IssueView {
                    path: issue
                        .display_path(display_root)
                        .to_string_lossy()
                        .into_owned(),
                    message: issue.message.clone(),
                })
                .collect(),
        }
    }
}

/// Machine-readable form of a [`LintReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportView {
    pub ok: bool,
    pub skills_checked: usize,
    pub issue_count: usize,
    pub issues: Vec<IssueView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueView {
    pub path: String,
    pub message: String,
}
