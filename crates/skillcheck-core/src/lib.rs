//! # skillcheck-core — Structural Validation for Skill Collections
//!
//! A skill collection is a directory holding a `skills_index.md` master
//! index and one folder per skill. Each skill folder carries a primary
//! definition (`SKILL.md`) and an append-only example log (`EXAMPLES.md`).
//! Agents skim these files by fixed strings, so the collection has to keep
//! a stable shape. This crate checks that shape and nothing more.
//!
//! ## Checks
//!
//! - [`frontmatter`] — extracts the `---` delimited header block.
//! - [`skill`] — header fields, required body sections, brittle
//!   line-number references.
//! - [`examples`] — example block segmentation, identifier uniqueness and
//!   ordering, required inline fields.
//! - [`index`] — every skill folder is linked from the index.
//! - [`runner`] — discovers skills and runs every check over the collection.
//!
//! ## Crate Policy
//!
//! - Line-oriented pattern matching only. Frontmatter is never parsed as
//!   YAML; only presence and shape of specific keys are checked.
//! - Structural problems are [`Issue`]s and never abort a run. Only setup
//!   failures (missing index, unreadable files, bad config) are errors.
//! - Read-only: nothing in this crate writes to the collection.

pub mod config;
pub mod error;
pub mod examples;
pub mod frontmatter;
pub mod index;
pub mod issue;
pub mod report;
pub mod runner;
pub mod skill;

pub use config::LintConfig;
pub use error::SkillcheckError;
pub use examples::{lint_examples_document, segment_examples, ExampleBlock};
pub use frontmatter::extract_frontmatter;
pub use index::{lint_index, linked_skill_paths};
pub use issue::Issue;
pub use report::{LintReport, ReportView};
pub use runner::{discover_skills, run_lint, SkillEntry};
pub use skill::lint_skill_document;
