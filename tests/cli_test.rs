//! Integration tests for the gradtrack binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const REQUIREMENTS: &str = r#"
id: cs-2024
year: 2024
department: Computer Science
totalCredits: 6
categories:
  - id: general
    name: General
    subcategories:
      - id: must
        name: Mandatory
        type: required
        courseNames: [Calculus]
      - id: science
        name: Science
        type: elective
        minCredits: 4
        groups:
          - id: sci
            name: Natural Science
            minCredits: 4
            includeRules:
              - type: prefix
                prefixes: [FG]
"#;

const COURSES: &str = r#"[
  {"id": "MA101", "name": "Calculus", "credits": 2, "isPassed": true},
  {"id": "FG101", "name": "Physics", "credits": 2, "isPassed": true},
  {"id": "FG102", "name": "Chemistry", "credits": 2, "isPassed": true},
  {"id": "HI100", "name": "History", "credits": 2, "isPassed": true}
]"#;

const PARTIAL_COURSES: &str = r#"[
  {"id": "FG101", "name": "Physics", "credits": 2, "isPassed": true}
]"#;

fn setup_project(courses: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join(".gradtrack");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("config.yml"),
        "student_name: Test\ninputs:\n  requirements: req.yml\n  courses: courses.json\n",
    )
    .unwrap();
    fs::write(temp.path().join("req.yml"), REQUIREMENTS).unwrap();
    fs::write(temp.path().join("courses.json"), courses).unwrap();
    temp
}

fn gradtrack(dir: &std::path::Path) -> Command {
    let mut cmd = Command::new(cargo_bin("gradtrack"));
    cmd.current_dir(dir)
        .env_remove("GRADTRACK_REQUIREMENTS")
        .env_remove("GRADTRACK_COURSES")
        .env_remove("GRADTRACK_COURSE_TYPES");
    cmd
}

#[test]
fn cli_no_args_runs_check() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(COURSES);
    gradtrack(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Eligible for graduation"))
        .stdout(predicate::str::contains("[ok] Science"));
    Ok(())
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("gradtrack"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("graduation requirement checking"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("gradtrack"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_check_reports_missing_courses() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(PARTIAL_COURSES);
    gradtrack(temp.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("[missing] Calculus"))
        .stderr(predicate::str::contains("Not yet eligible"));
    Ok(())
}

#[test]
fn cli_check_fail_if_ineligible() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(PARTIAL_COURSES);
    gradtrack(temp.path())
        .args(["check", "--fail-if-ineligible"])
        .assert()
        .code(1);
    Ok(())
}

#[test]
fn cli_check_json_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(COURSES);
    let output = gradtrack(temp.path())
        .args(["check", "--format", "json"])
        .output()?;

    assert!(output.status.success());
    let status: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(status["isGraduationEligible"], true);
    assert_eq!(status["unmatchedCourses"][0]["id"], "HI100");
    Ok(())
}

#[test]
fn cli_check_unmatched_flag() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(COURSES);
    gradtrack(temp.path())
        .args(["check", "--unmatched"])
        .assert()
        .success()
        .stdout(predicate::str::contains("HI100 History"));
    Ok(())
}

#[test]
fn cli_check_flags_override_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(COURSES);
    fs::write(temp.path().join("partial.json"), PARTIAL_COURSES)?;
    gradtrack(temp.path())
        .args(["check", "--courses", "partial.json", "--fail-if-ineligible"])
        .assert()
        .code(1);
    Ok(())
}

#[test]
fn cli_check_quiet_skips_tree() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(COURSES);
    gradtrack(temp.path())
        .args(["--quiet", "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Remaining"))
        .stdout(predicate::str::contains("[ok]").not());
    Ok(())
}

#[test]
fn cli_check_without_inputs_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    gradtrack(temp.path())
        .arg("check")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No requirement definition"));
    Ok(())
}

#[test]
fn cli_check_missing_course_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(COURSES);
    gradtrack(temp.path())
        .args(["check", "--courses", "absent.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Courses file not found"));
    Ok(())
}

#[test]
fn cli_project_flag_sets_root() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(COURSES);
    let elsewhere = TempDir::new()?;
    gradtrack(elsewhere.path())
        .arg("--project")
        .arg(temp.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Eligible for graduation"));
    Ok(())
}

#[test]
fn cli_lint_validates_definition() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(COURSES);
    gradtrack(temp.path())
        .arg("lint")
        .assert()
        .success()
        .stdout(predicate::str::contains("is valid"));
    Ok(())
}

#[test]
fn cli_lint_reports_errors() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(COURSES);
    fs::write(
        temp.path().join("bad.yml"),
        REQUIREMENTS.replace("minCredits: 4\n            includeRules", "minCredits: -1\n            includeRules"),
    )?;
    gradtrack(temp.path())
        .args(["lint", "--requirements", "bad.yml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error[credit-bounds]"));
    Ok(())
}

#[test]
fn cli_lint_json_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(COURSES);
    gradtrack(temp.path())
        .args(["lint", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"summary\""));
    Ok(())
}

#[test]
fn cli_migrate_prints_canonical_definition() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(
        temp.path().join("old.yml"),
        r#"
id: old
year: 2019
department: Science
totalCredits: 4
categories:
  - id: c
    name: C
    subcategories:
      - id: s
        name: S
        minCredits: 4
        rules:
          - type: specific
            courses: [Calculus]
"#,
    )?;
    gradtrack(temp.path())
        .args(["migrate", "old.yml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("includeRules"))
        .stdout(predicate::str::contains("type: courses"))
        .stdout(predicate::str::contains("version: 2"));
    Ok(())
}

#[test]
fn cli_schema_prints_json_schema() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let output = gradtrack(temp.path()).arg("schema").output()?;

    assert!(output.status.success());
    let schema: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(schema["title"], "gradtrack requirement definition");
    Ok(())
}

#[test]
fn cli_completions_generate() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("gradtrack"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("gradtrack"));
    Ok(())
}

#[test]
fn cli_debug_flag_accepted() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(COURSES);
    gradtrack(temp.path())
        .args(["--debug", "check"])
        .assert()
        .success();
    Ok(())
}

#[test]
fn cli_invalid_command_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("gradtrack"));
    cmd.arg("invalid-command");
    cmd.assert().failure();
    Ok(())
}
