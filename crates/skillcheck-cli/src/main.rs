//! # skillcheck CLI entry point
//!
//! Parses arguments, initializes tracing, and runs the lint.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use skillcheck_cli::lint::{run_lint_command, LintArgs};

/// Lint the agent skills collection.
///
/// Checks every skill folder for SKILL.md frontmatter and required
/// sections, EXAMPLES.md example IDs and fields, and registration in
/// skills_index.md.
#[derive(Parser, Debug)]
#[command(name = "skillcheck", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    lint: LintArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // Reports use stdout and stderr directly; logs must not interleave with
    // JSON on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    match run_lint_command(&cli.lint, &cwd) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillcheck_cli::lint::OutputFormat;

    #[test]
    fn cli_parse_no_arguments() {
        let cli = Cli::try_parse_from(["skillcheck"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert!(cli.lint.repo_root.is_none());
        assert!(cli.lint.skills_dir.is_none());
        assert!(cli.lint.config.is_none());
        assert_eq!(cli.lint.format, OutputFormat::Text);
        assert!(!cli.lint.check_stale_links);
    }

    #[test]
    fn cli_parse_all_options() {
        let cli = Cli::try_parse_from([
            "skillcheck",
            "--repo-root",
            "/repo",
            "--skills-dir",
            "docs/skills",
            "--config",
            "skillcheck.yaml",
            "--format",
            "json",
            "--check-stale-links",
        ])
        .unwrap();
        assert_eq!(cli.lint.repo_root, Some(PathBuf::from("/repo")));
        assert_eq!(cli.lint.skills_dir, Some(PathBuf::from("docs/skills")));
        assert_eq!(cli.lint.config, Some(PathBuf::from("skillcheck.yaml")));
        assert_eq!(cli.lint.format, OutputFormat::Json);
        assert!(cli.lint.check_stale_links);
    }

    #[test]
    fn cli_parse_verbose_levels() {
        let cli1 = Cli::try_parse_from(["skillcheck", "-v"]).unwrap();
        assert_eq!(cli1.verbose, 1);

        let cli3 = Cli::try_parse_from(["skillcheck", "-vvv"]).unwrap();
        assert_eq!(cli3.verbose, 3);
    }

    #[test]
    fn cli_parse_unknown_format_errors() {
        assert!(Cli::try_parse_from(["skillcheck", "--format", "xml"]).is_err());
    }

    #[test]
    fn cli_parse_positional_argument_errors() {
        assert!(Cli::try_parse_from(["skillcheck", "agents/skills"]).is_err());
    }
}
