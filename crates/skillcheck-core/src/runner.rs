//! # Lint Run
//!
//! Discovers the skills in a collection and runs every check over them:
//!
//! 1. The index document must exist, or the run fails with
//!    [`SkillcheckError::IndexMissing`] before any check runs.
//! 2. Skill folders are the non-reserved subfolders holding a `SKILL.md`,
//!    in name order. Other folders are not skills and are skipped silently.
//! 3. The index cross-reference runs once, then each skill's `SKILL.md`
//!    and `EXAMPLES.md` are checked in discovery order.
//!
//! Issues are collected in the order they are produced.

use std::path::{Path, PathBuf};

use crate::config::LintConfig;
use crate::error::SkillcheckError;
use crate::examples::lint_examples_document;
use crate::index::lint_index;
use crate::issue::Issue;
use crate::report::LintReport;
use crate::skill::lint_skill_document;

/// A discovered skill folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillEntry {
    /// Folder name, which is also the skill's registration key.
    pub name: String,
    /// Path of the primary definition document.
    pub skill_doc: PathBuf,
    /// Path of the example log, whether or not it exists.
    pub examples_doc: PathBuf,
}

impl SkillEntry {
    pub fn new(skills_root: &Path, name: &str, config: &LintConfig) -> Self {
        let dir = skills_root.join(name);
        Self {
            name: name.to_string(),
            skill_doc: dir.join(&config.skill_file),
            examples_doc: dir.join(&config.examples_file),
        }
    }
}

/// List the skill folders under `skills_root`, sorted by name.
pub fn discover_skills(
    skills_root: &Path,
    config: &LintConfig,
) -> Result<Vec<SkillEntry>, SkillcheckError> {
    let read_dir =
        std::fs::read_dir(skills_root).map_err(|e| SkillcheckError::io(skills_root, e))?;

    let mut entries = Vec::new();
    for dir_entry in read_dir {
        let dir_entry = dir_entry.map_err(|e| SkillcheckError::io(skills_root, e))?;
        let path = dir_entry.path();
        if !path.is_dir() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            tracing::warn!(path = %path.display(), "skipping folder with non UTF-8 name");
            continue;
        };
        if config.is_reserved(name) {
            tracing::trace!(folder = name, "skipping reserved folder");
            continue;
        }
        let entry = SkillEntry::new(skills_root, name, config);
        if !entry.skill_doc.is_file() {
            tracing::trace!(folder = name, "skipping folder without skill document");
            continue;
        }
        entries.push(entry);
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Lint the whole collection rooted at `skills_root`.
pub fn run_lint(skills_root: &Path, config: &LintConfig) -> Result<LintReport, SkillcheckError> {
    let index_path = skills_root.join(&config.index_file);
    if !index_path.is_file() {
        return Err(SkillcheckError::IndexMissing { path: index_path });
    }

    let entries = discover_skills(skills_root, config)?;
    tracing::debug!(
        skills_root = %skills_root.display(),
        skills = entries.len(),
        "discovered skills"
    );

    let mut report = LintReport::default();

    let index_text = read_text(&index_path)?;
    report.extend(lint_index(&index_path, &index_text, &entries, config));

    for entry in &entries {
        tracing::debug!(skill = %entry.name, "checking skill");
        report.skills_checked += 1;

        let has_examples = entry.examples_doc.is_file();
        if !has_examples {
            report.push(Issue::new(
                &entry.examples_doc,
                format!("Missing {}", config.examples_file),
            ));
        }

        let skill_text = read_text(&entry.skill_doc)?;
        report.extend(lint_skill_document(&entry.skill_doc, &skill_text, config));

        if has_examples {
            let examples_text = read_text(&entry.examples_doc)?;
            report.extend(lint_examples_document(
                &entry.examples_doc,
                &examples_text,
                config,
            ));
        }
    }

    tracing::info!(
        skills = report.skills_checked,
        issues = report.issues.len(),
        "skills lint finished"
    );
    Ok(report)
}

fn read_text(path: &Path) -> Result<String, SkillcheckError> {
    std::fs::read_to_string(path).map_err(|e| SkillcheckError::io(path, e))
}
