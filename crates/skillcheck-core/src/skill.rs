//! # SKILL.md Checks
//!
//! Runs the fixed battery of presence and shape checks against one primary
//! skill document:
//!
//! 1. Frontmatter fields: `name` (kebab-case), `description`, and the
//!    `compatibility` block with `runners`, `tools` and a boolean
//!    `offline_ok`.
//! 2. Required body snippets, matched verbatim anywhere in the document.
//! 3. Brittle `EXAMPLES.md:<line>` references, which must cite example IDs
//!    instead.
//!
//! A missing frontmatter block only suppresses the field checks. Body and
//! reference checks always run.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::LintConfig;
use crate::frontmatter::extract_frontmatter;
use crate::issue::Issue;

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*name[ \t]*:[ \t]*[a-z0-9-]+[ \t]*\r?$").expect("name pattern")
});
static DESCRIPTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*description[ \t]*:").expect("description pattern"));
static COMPATIBILITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*compatibility[ \t]*:[ \t]*\r?$").expect("compatibility pattern")
});
static RUNNERS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*runners[ \t]*:").expect("runners pattern"));
static TOOLS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*tools[ \t]*:").expect("tools pattern"));
static OFFLINE_OK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*offline_ok[ \t]*:[ \t]*(true|false)[ \t]*\r?$")
        .expect("offline_ok pattern")
});

/// Check one `SKILL.md`. Returns issues in check order; never fails.
pub fn lint_skill_document(path: &Path, text: &str, config: &LintConfig) -> Vec<Issue> {
    let mut issues = Vec::new();

    match extract_frontmatter(text) {
        Some(frontmatter) => lint_frontmatter(path, frontmatter, &mut issues),
        None => issues.push(Issue::new(
            path,
            "Missing or malformed YAML frontmatter (expected leading --- ... ---).",
        )),
    }

    for snippet in &config.required_snippets {
        if !text.contains(snippet.as_str()) {
            issues.push(Issue::new(
                path,
                format!("Missing required section/snippet: '{snippet}'"),
            ));
        }
    }

    lint_brittle_references(path, text, &config.examples_file, &mut issues);

    tracing::debug!(path = %path.display(), issues = issues.len(), "checked skill document");
    issues
}

fn lint_frontmatter(path: &Path, frontmatter: &str, issues: &mut Vec<Issue>) {
    if !NAME_RE.is_match(frontmatter) {
        issues.push(Issue::new(
            path,
            "Missing/invalid frontmatter 'name:' (expected kebab-case).",
        ));
    }
    // Covers both the `description: >` block form and a plain scalar.
    if !DESCRIPTION_RE.is_match(frontmatter) {
        issues.push(Issue::new(path, "Missing frontmatter 'description:'."));
    }

    if !COMPATIBILITY_RE.is_match(frontmatter) {
        issues.push(Issue::new(
            path,
            "Missing frontmatter 'compatibility:' block.",
        ));
        return;
    }
    if !RUNNERS_RE.is_match(frontmatter) {
        issues.push(Issue::new(
            path,
            "Missing frontmatter 'compatibility.runners'.",
        ));
    }
    if !TOOLS_RE.is_match(frontmatter) {
        issues.push(Issue::new(path, "Missing frontmatter 'compatibility.tools'."));
    }
    if !OFFLINE_OK_RE.is_match(frontmatter) {
        issues.push(Issue::new(
            path,
            "Missing/invalid frontmatter 'compatibility.offline_ok' (expected true|false).",
        ));
    }
}

/// Flag every `<examples_file>:<digit>` citation, one issue per occurrence.
fn lint_brittle_references(
    path: &Path,
    text: &str,
    examples_file: &str,
    issues: &mut Vec<Issue>,
) {
    for (line_no, line) in text.lines().enumerate() {
        for (start, _) in line.match_indices(examples_file) {
            let rest = &line[start + examples_file.len()..];
            let mut chars = rest.chars();
            if chars.next() == Some(':') && chars.next().is_some_and(|c| c.is_ascii_digit()) {
                issues.push(Issue::new(
                    path,
                    format!(
                        "Contains brittle line-number reference on line {} (use Example IDs instead).",
                        line_no + 1
                    ),
                ));
            }
        }
    }
}
