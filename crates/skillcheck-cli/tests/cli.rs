//! End-to-end tests driving the `skillcheck` binary against fixture
//! repositories. Covers exit codes, output streams and report format.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const SKILL_MD: &str = "---
name: foo-skill
description: Keeps foo healthy.
compatibility:
  runners: [codex]
  tools: [shell]
  offline_ok: true
---

## Purpose
Keep foo healthy.

Use when (triggers):
- foo breaks

Do NOT use when:
- bar breaks

## Inputs this Skill expects
- logs

## Output contract
- a fix

## Procedure
1. fix it

Definition of DONE:
- green
";

const EXAMPLES_MD: &str = "## EX-2025-03-01-01: foo broke
- **Trigger phrases**: \"foo broke\"
- **Cause**: stale cache
- **Fix**: clear it
- **Prevention**: key the cache
";

fn fixture_repo() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let skills = dir.path().join("agents/skills");
    fs::create_dir_all(skills.join("foo-skill")).unwrap();
    fs::write(skills.join("skills_index.md"), "- [foo](./foo-skill/SKILL.md)\n").unwrap();
    fs::write(skills.join("foo-skill/SKILL.md"), SKILL_MD).unwrap();
    fs::write(skills.join("foo-skill/EXAMPLES.md"), EXAMPLES_MD).unwrap();
    dir
}

fn skillcheck(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_skillcheck"))
        .current_dir(cwd)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run skillcheck")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn zero_argument_run_passes_on_clean_repo() {
    let repo = fixture_repo();
    let output = skillcheck(repo.path(), &[]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "OK: skills lint passed\n");
}

#[test]
fn run_from_nested_directory_finds_repo_root() {
    let repo = fixture_repo();
    let nested = repo.path().join("agents/skills/foo-skill");
    let output = skillcheck(&nested, &[]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
}

#[test]
fn issues_reported_on_stderr_with_relative_paths() {
    let repo = fixture_repo();
    let skill = repo.path().join("agents/skills/foo-skill/SKILL.md");
    fs::write(&skill, SKILL_MD.replace("## Procedure\n", "")).unwrap();

    let output = skillcheck(repo.path(), &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert_eq!(
        stderr(&output),
        "Skill lint failed:\n\n\
         - agents/skills/foo-skill/SKILL.md: Missing required section/snippet: '## Procedure'\n"
    );
}

#[test]
fn missing_index_exits_with_distinct_status() {
    let repo = fixture_repo();
    fs::remove_file(repo.path().join("agents/skills/skills_index.md")).unwrap();

    let output = skillcheck(repo.path(), &[]);
    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.starts_with("ERROR: missing "), "{err}");
    assert!(err.contains("skills_index.md"), "{err}");
}

#[test]
fn unregistered_skill_fails() {
    let repo = fixture_repo();
    fs::write(repo.path().join("agents/skills/skills_index.md"), "# Skills\n").unwrap();

    let output = skillcheck(repo.path(), &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(
        "- agents/skills/skills_index.md: Skill folder missing from skills_index.md: foo-skill/SKILL.md"
    ));
}

#[test]
fn json_format_on_stdout() {
    let repo = fixture_repo();
    fs::write(
        repo.path().join("agents/skills/foo-skill/EXAMPLES.md"),
        format!("{EXAMPLES_MD}\n{EXAMPLES_MD}"),
    )
    .unwrap();

    let output = skillcheck(repo.path(), &["--format", "json"]);
    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["ok"], false);
    assert_eq!(report["issue_count"], 1);
    assert_eq!(
        report["issues"][0]["path"],
        "agents/skills/foo-skill/EXAMPLES.md"
    );
    assert_eq!(
        report["issues"][0]["message"],
        "Duplicate Example ID: EX-2025-03-01-01"
    );
}

#[test]
fn explicit_repo_root_and_skills_dir() {
    let repo = fixture_repo();
    let elsewhere = tempfile::tempdir().unwrap();
    let root = repo.path().to_str().unwrap();

    let output = skillcheck(
        elsewhere.path(),
        &["--repo-root", root, "--skills-dir", "agents/skills"],
    );
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
}

#[test]
fn stale_link_flag_enables_reverse_check() {
    let repo = fixture_repo();
    fs::write(
        repo.path().join("agents/skills/skills_index.md"),
        "- [foo](./foo-skill/SKILL.md)\n- [old](./old-skill/SKILL.md)\n",
    )
    .unwrap();

    assert_eq!(skillcheck(repo.path(), &[]).status.code(), Some(0));

    let output = skillcheck(repo.path(), &["--check-stale-links"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("links to a missing skill folder: old-skill/SKILL.md"));
}

#[test]
fn invalid_config_exits_with_failure() {
    let repo = fixture_repo();
    let config = repo.path().join("skillcheck.yaml");
    fs::write(&config, "not_a_key: 1\n").unwrap();

    let output = skillcheck(repo.path(), &["--config", config.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("invalid config"), "{}", stderr(&output));
}
