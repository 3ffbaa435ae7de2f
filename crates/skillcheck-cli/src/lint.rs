//! # Lint Command
//!
//! Resolves the repository root, skills directory and configuration, runs
//! the lint over the collection, and prints the report.
//!
//! The text report goes to stderr on failure and the success line to
//! stdout. The JSON report always goes to stdout.
//!
//! Issue locations in both reports are relative to the repository root
//! (`--repo-root`, the discovered ancestor, or the current directory), not
//! to the skills directory, so they read `agents/skills/foo/SKILL.md`.
//! Paths outside the repository root are printed as-is.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use skillcheck_core::{run_lint, LintConfig, SkillcheckError};

use crate::{find_repo_root, resolve_path, EXIT_INDEX_MISSING};

/// Exit status when the lint found issues.
pub const EXIT_ISSUES: u8 = 1;

/// Arguments for a lint run. All are optional.
#[derive(Args, Debug, Clone, Default)]
pub struct LintArgs {
    /// Repository root. Defaults to the nearest ancestor of the current
    /// directory that contains the skills directory.
    #[arg(long)]
    pub repo_root: Option<PathBuf>,

    /// Skills directory, relative to the repository root unless absolute.
    /// Overrides `skills_dir` from the config file.
    #[arg(long)]
    pub skills_dir: Option<PathBuf>,

    /// YAML file overriding the built-in contract.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also flag index links whose skill folder no longer exists.
    #[arg(long)]
    pub check_stale_links: bool,
}

/// Output format for the lint report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report, one issue per line.
    #[default]
    Text,
    /// A single JSON document on stdout.
    Json,
}

/// Execute a lint run. Returns the process exit status.
pub fn run_lint_command(args: &LintArgs, cwd: &Path) -> Result<u8> {
    let config = load_config(args)?;

    let repo_root = match &args.repo_root {
        Some(root) => resolve_path(root, cwd),
        None => find_repo_root(cwd, &config.skills_dir).unwrap_or_else(|| {
            tracing::warn!(
                skills_dir = %config.skills_dir.display(),
                "could not locate repository root; using current directory"
            );
            cwd.to_path_buf()
        }),
    };
    let skills_root = resolve_path(&config.skills_dir, &repo_root);
    tracing::debug!(
        repo_root = %repo_root.display(),
        skills_root = %skills_root.display(),
        "resolved skills collection"
    );

    let report = match run_lint(&skills_root, &config) {
        Ok(report) => report,
        Err(SkillcheckError::IndexMissing { path }) => {
            eprintln!("ERROR: missing {}", path.display());
            return Ok(EXIT_INDEX_MISSING);
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("failed to lint skills in {}", skills_root.display()))
        }
    };

    match args.format {
        OutputFormat::Text if report.is_ok() => print!("{}", report.render_text(&repo_root)),
        OutputFormat::Text => eprint!("{}", report.render_text(&repo_root)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report.view(&repo_root))
                .context("failed to serialize lint report")?;
            println!("{json}");
        }
    }

    Ok(if report.is_ok() { 0 } else { EXIT_ISSUES })
}

fn load_config(args: &LintArgs) -> Result<LintConfig> {
    let mut config = match &args.config {
        Some(path) => LintConfig::load(path)?,
        None => LintConfig::default(),
    };
    if let Some(dir) = &args.skills_dir {
        config.skills_dir = dir.clone();
    }
    if args.check_stale_links {
        config.check_stale_index_links = true;
    }
    Ok(config)
}
