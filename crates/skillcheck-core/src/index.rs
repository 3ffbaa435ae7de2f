//! # Skills Index Cross-Reference
//!
//! `skills_index.md` must link every skill folder as a relative markdown
//! link, e.g. `[foo](./foo-skill/SKILL.md)`. The check runs from disk to
//! index: a folder without a link is an issue. The reverse direction (a
//! link whose folder is gone) is only checked when
//! [`LintConfig::check_stale_index_links`] is set.

use std::collections::{BTreeSet, HashSet};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::LintConfig;
use crate::issue::Issue;
use crate::runner::SkillEntry;

static LINK_TARGET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\]\((\./[^)]+)\)").expect("link target pattern"));

/// Collect every index link to a skill document, normalized to
/// `<skill>/SKILL.md`.
pub fn linked_skill_paths(index_text: &str, config: &LintConfig) -> BTreeSet<String> {
    let suffix = format!("/{}", config.skill_file);
    LINK_TARGET_RE
        .captures_iter(index_text)
        .filter_map(|caps| caps.get(1))
        .map(|target| target.as_str())
        .filter(|target| target.ends_with(&suffix))
        .map(|target| {
            let mut normalized = target;
            while let Some(rest) = normalized.strip_prefix("./") {
                normalized = rest;
            }
            normalized.to_string()
        })
        .filter(|target| target.len() > suffix.len())
        .collect()
}

/// Check that every discovered skill is linked from the index.
pub fn lint_index(
    index_path: &Path,
    index_text: &str,
    entries: &[SkillEntry],
    config: &LintConfig,
) -> Vec<Issue> {
    let linked = linked_skill_paths(index_text, config);
    let mut issues = Vec::new();

    for entry in entries {
        let expected = config.skill_link_path(&entry.name);
        if !linked.contains(&expected) {
            issues.push(Issue::new(
                index_path,
                format!(
                    "Skill folder missing from {}: {expected}",
                    config.index_file
                ),
            ));
        }
    }

    if config.check_stale_index_links {
        let on_disk: HashSet<String> = entries
            .iter()
            .map(|entry| config.skill_link_path(&entry.name))
            .collect();
        for link in linked.iter().filter(|link| !on_disk.contains(*link)) {
            issues.push(Issue::new(
                index_path,
                format!(
                    "{} links to a missing skill folder: {link}",
                    config.index_file
                ),
            ));
        }
    }

    tracing::debug!(
        path = %index_path.display(),
        links = linked.len(),
        issues = issues.len(),
        "checked skills index"
    );
    issues
}
