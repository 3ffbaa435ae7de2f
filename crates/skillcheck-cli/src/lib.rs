//! # skillcheck-cli — CLI for Skill Collection Linting
//!
//! Provides the `skillcheck` binary, the Rust replacement for the Python
//! `agents/skills/lint_skills.py` script. Running it with no arguments from
//! anywhere inside the repository lints `agents/skills`:
//!
//! ```bash
//! skillcheck
//! skillcheck --skills-dir docs/skills --check-stale-links
//! skillcheck --format json
//! ```
//!
//! ## Exit Status
//!
//! - `0` — no issues.
//! - `1` — issues found, or the collection could not be read.
//! - `2` — the skills index document is missing.
//!
//! ## Crate Policy
//!
//! - Argument parsing and output live here; every check lives in
//!   `skillcheck-core`.
//! - The text report keeps the Python script's format so CI logs stay
//!   comparable.

pub mod lint;

use std::path::{Path, PathBuf};

/// Exit status when the skills index document is missing.
pub const EXIT_INDEX_MISSING: u8 = 2;

/// Resolve a path that may be relative to the repository root.
///
/// Absolute paths are returned as-is; relative paths are joined onto
/// `repo_root`.
pub fn resolve_path(path: &Path, repo_root: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        repo_root.join(path)
    }
}

/// Walk up from `start` to the first directory containing `skills_dir`.
pub fn find_repo_root(start: &Path, skills_dir: &Path) -> Option<PathBuf> {
    let mut dir = start;
    loop {
        if dir.join(skills_dir).is_dir() {
            return Some(dir.to_path_buf());
        }
        dir = dir.parent()?;
    }
}
