//! # Lint Configuration
//!
//! [`LintConfig`] names the files and fixed strings that make up the skill
//! contract. The defaults are the contract agents rely on; a YAML file can
//! override any of them, with missing keys falling back to the defaults.
//!
//! ```yaml
//! skills_dir: agents/skills
//! check_stale_index_links: true
//! required_snippets:
//!   - "## Purpose"
//!   - "## Procedure"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::SkillcheckError;

/// Required body snippets of a `SKILL.md`, in reporting order.
pub const DEFAULT_REQUIRED_SNIPPETS: &[&str] = &[
    "## Purpose",
    "Use when (triggers):",
    "Do NOT use when",
    "## Inputs this Skill expects",
    "## Output contract",
    "## Procedure",
    "Definition of DONE",
];

/// Required inline fields of every example block, in reporting order.
pub const DEFAULT_REQUIRED_EXAMPLE_FIELDS: &[&str] = &[
    "**Trigger phrases**",
    "**Cause**",
    "**Fix**",
    "**Prevention**",
];

/// Files and fixed strings checked by a lint run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LintConfig {
    /// Skills root, relative to the repository root unless absolute.
    pub skills_dir: PathBuf,
    /// File name of the master index inside the skills root.
    pub index_file: String,
    /// File name of the primary definition inside each skill folder.
    pub skill_file: String,
    /// File name of the example log inside each skill folder.
    pub examples_file: String,
    /// Folder name prefixes that mark a folder as reserved (not a skill).
    pub reserved_prefixes: Vec<String>,
    /// Snippets that must appear verbatim somewhere in each primary document.
    pub required_snippets: Vec<String>,
    /// Inline fields that must appear in every example block.
    pub required_example_fields: Vec<String>,
    /// Also flag index links whose skill folder does not exist on disk.
    pub check_stale_index_links: bool,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            skills_dir: PathBuf::from("agents/skills"),
            index_file: "skills_index.md".to_string(),
            skill_file: "SKILL.md".to_string(),
            examples_file: "EXAMPLES.md".to_string(),
            reserved_prefixes: vec!["_".to_string(), ".".to_string()],
            required_snippets: DEFAULT_REQUIRED_SNIPPETS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            required_example_fields: DEFAULT_REQUIRED_EXAMPLE_FIELDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            check_stale_index_links: false,
        }
    }
}

impl LintConfig {
    /// Load a configuration file. Keys absent from the file keep their
    /// default values; unknown keys are rejected.
    pub fn load(path: &Path) -> Result<Self, SkillcheckError> {
        let text = std::fs::read_to_string(path).map_err(|e| SkillcheckError::io(path, e))?;
        Self::from_yaml_str(&text).map_err(|reason| SkillcheckError::Config {
            path: path.to_path_buf(),
            reason,
        })
    }

    fn from_yaml_str(text: &str) -> Result<Self, String> {
        // An empty file deserializes to unit, not to a mapping.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(text).map_err(|e| e.to_string())?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<(), String> {
        for (key, value) in [
            ("index_file", &self.index_file),
            ("skill_file", &self.skill_file),
            ("examples_file", &self.examples_file),
        ] {
            if value.is_empty() || value.contains(['/', '\\']) {
                return Err(format!("{key} must be a bare file name, got {value:?}"));
            }
        }
        if self.reserved_prefixes.iter().any(String::is_empty) {
            return Err("reserved_prefixes must not contain an empty prefix".to_string());
        }
        Ok(())
    }

    /// Whether a folder name is reserved and therefore never a skill.
    pub fn is_reserved(&self, folder_name: &str) -> bool {
        self.reserved_prefixes
            .iter()
            .any(|prefix| folder_name.starts_with(prefix.as_str()))
    }

    /// Path of the index document as written in index links, e.g.
    /// `foo-skill/SKILL.md`.
    pub fn skill_link_path(&self, skill_name: &str) -> String {
        format!("{skill_name}/{}", self.skill_file)
    }
}
