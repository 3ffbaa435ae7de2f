//! # EXAMPLES.md Checks
//!
//! An example log is an append-only sequence of blocks, each opened by a
//! heading such as `## EX-2024-05-01-02: flaky fixture`. A block runs until
//! the next example heading or the end of the document. Text before the
//! first heading belongs to no block.
//!
//! Per block, in document order:
//!
//! - the ID must not repeat an earlier ID;
//! - the ID must not sort before the ID of the block directly above it;
//! - each required inline field (`**Cause**`, `**Fix**`, ...) must appear.

use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::LintConfig;
use crate::issue::Issue;

static EXAMPLE_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^##\s+(EX-[0-9]{4}-[0-9]{2}-[0-9]{2}-[0-9]{2})\b").expect("example heading pattern")
});

/// One identified example within an example log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleBlock<'a> {
    /// Example ID, `EX-YYYY-MM-DD-NN`.
    pub id: &'a str,
    /// Lines of the block, heading included.
    pub lines: Vec<&'a str>,
}

impl ExampleBlock<'_> {
    /// Block text with lines joined by `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Split an example log into blocks at each example heading.
pub fn segment_examples(text: &str) -> Vec<ExampleBlock<'_>> {
    let mut blocks: Vec<ExampleBlock<'_>> = Vec::new();

    for line in text.lines() {
        if let Some(caps) = EXAMPLE_HEADING_RE.captures(line.trim()) {
            if let Some(id) = caps.get(1) {
                blocks.push(ExampleBlock {
                    id: id.as_str(),
                    lines: vec![line],
                });
                continue;
            }
        }
        if let Some(current) = blocks.last_mut() {
            current.lines.push(line);
        }
    }

    blocks
}

/// Check one `EXAMPLES.md`. Returns issues in document order; never fails.
pub fn lint_examples_document(path: &Path, text: &str, config: &LintConfig) -> Vec<Issue> {
    let blocks = segment_examples(text);
    if blocks.is_empty() {
        return vec![Issue::new(
            path,
            "No examples found (expected headings like '## EX-YYYY-MM-DD-NN: ...').",
        )];
    }

    let mut issues = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut previous: Option<&str> = None;

    for block in &blocks {
        if !seen.insert(block.id) {
            issues.push(Issue::new(
                path,
                format!("Duplicate Example ID: {}", block.id),
            ));
        }

        if let Some(prev) = previous {
            if block.id < prev {
                issues.push(Issue::new(
                    path,
                    format!(
                        "Example IDs out of order (append-only violated?): {} appears after {prev}",
                        block.id
                    ),
                ));
            }
        }
        previous = Some(block.id);

        let block_text = block.text();
        for field in &config.required_example_fields {
            if !block_text.contains(field.as_str()) {
                issues.push(Issue::new(
                    path,
                    format!("{}: missing required field: {field}", block.id),
                ));
            }
        }
    }

    tracing::debug!(
        path = %path.display(),
        examples = blocks.len(),
        issues = issues.len(),
        "checked example log"
    );
    issues
}
