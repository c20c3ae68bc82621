//! Integration tests for the catmatch CLI
//!
//! These tests run the binary against catalog and profile files in a
//! temporary directory.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper function to create a catmatch command isolated from the user's config
fn catmatch(config_dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("catmatch"));
    cmd.env("CATMATCH_CONFIG_DIR", config_dir);
    cmd
}

/// Write a small catalog file and return its path
fn write_catalog(dir: &Path) -> PathBuf {
    let path = dir.join("catalog.json");
    fs::write(
        &path,
        r#"[
  {"type": "Table", "schema": "dbo", "name": "Employee"},
  {"type": "Table", "schema": "dbo", "name": "Employer"},
  {"type": "Table", "schema": "dbo", "name": "Customer"},
  {"type": "View", "schema": "dbo", "name": "EmployeeSummary"},
  {"type": "Table", "schema": "HumanResources", "name": "Employee"},
  {"type": "Table", "schema": "HumanResources", "name": "Department"}
]"#,
    )
    .unwrap();
    path
}

// =============================================================================
// Basic commands
// =============================================================================

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    catmatch(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("catmatch"));
}

#[test]
fn test_no_args_shows_info() {
    let temp = TempDir::new().unwrap();
    catmatch(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("catmatch v"));
}

#[test]
fn test_version_json() {
    let temp = TempDir::new().unwrap();
    catmatch(temp.path())
        .args(["--json", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}

// =============================================================================
// Match command
// =============================================================================

#[test]
fn test_match_without_filter_lists_everything() {
    let temp = TempDir::new().unwrap();
    let catalog = write_catalog(temp.path());

    catmatch(temp.path())
        .args(["match", "--catalog"])
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("Matched 6 of 6 object(s)"));
}

#[test]
fn test_match_include_and_exclude_flags() {
    let temp = TempDir::new().unwrap();
    let catalog = write_catalog(temp.path());

    catmatch(temp.path())
        .args(["match", "--catalog"])
        .arg(&catalog)
        .args(["--include", "Table:", "--exclude", "HumanResources."])
        .assert()
        .success()
        .stdout(predicate::str::contains("[dbo].[Customer] (Table)"))
        .stdout(predicate::str::contains("HumanResources").not())
        .stdout(predicate::str::contains("Matched 3 of 6 object(s)"));
}

#[test]
fn test_match_json_output() {
    let temp = TempDir::new().unwrap();
    let catalog = write_catalog(temp.path());

    let output = catmatch(temp.path())
        .args(["--json", "match", "--catalog"])
        .arg(&catalog)
        .args(["--include", "emp*", "--exclude-type", "view"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["candidates"], 6);
    assert_eq!(report["matched"], 3);
    assert_eq!(report["objects"][0]["name"], "Employee");
}

#[test]
fn test_match_with_filter_file() {
    let temp = TempDir::new().unwrap();
    let catalog = write_catalog(temp.path());
    let filter = temp.path().join("filter.toml");
    fs::write(
        &filter,
        r#"
include_schemas = ["Human*"]

[[include]]
name = "Emp*"
"#,
    )
    .unwrap();

    catmatch(temp.path())
        .args(["match", "--catalog"])
        .arg(&catalog)
        .arg("--filter")
        .arg(&filter)
        .assert()
        .success()
        .stdout(predicate::str::contains("[HumanResources].[Employee] (Table)"))
        .stdout(predicate::str::contains("Matched 1 of 6 object(s)"));
}

#[test]
fn test_match_with_named_profile() {
    let temp = TempDir::new().unwrap();
    let catalog = write_catalog(temp.path());
    let profiles = temp.path().join("profiles");
    fs::create_dir_all(&profiles).unwrap();
    fs::write(profiles.join("views.toml"), "include_types = [\"View\"]\n").unwrap();

    catmatch(temp.path())
        .args(["match", "--profile", "views", "--catalog"])
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("[dbo].[EmployeeSummary] (View)"))
        .stdout(predicate::str::contains("Matched 1 of 6 object(s)"));
}

#[test]
fn test_match_nothing() {
    let temp = TempDir::new().unwrap();
    let catalog = write_catalog(temp.path());

    catmatch(temp.path())
        .args(["match", "--catalog"])
        .arg(&catalog)
        .args(["--include-type", "Tab*"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No objects matched."));
}

#[test]
fn test_match_missing_catalog_fails() {
    let temp = TempDir::new().unwrap();

    catmatch(temp.path())
        .args(["match", "--catalog", "does-not-exist.json"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("failed to read catalog"));
}

#[test]
fn test_match_unknown_profile_fails() {
    let temp = TempDir::new().unwrap();
    let catalog = write_catalog(temp.path());

    catmatch(temp.path())
        .args(["match", "--profile", "ghost", "--catalog"])
        .arg(&catalog)
        .assert()
        .failure()
        .stderr(predicate::str::contains("profile not found: ghost"));
}

// =============================================================================
// Profile command
// =============================================================================

#[test]
fn test_profile_list_empty() {
    let temp = TempDir::new().unwrap();

    catmatch(temp.path())
        .args(["profile", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No profiles found."));
}

#[test]
fn test_profile_list_and_show() {
    let temp = TempDir::new().unwrap();
    let profiles = temp.path().join("profiles");
    fs::create_dir_all(&profiles).unwrap();
    fs::write(profiles.join("b-views.toml"), "include_types = [\"View\"]\n").unwrap();
    fs::write(profiles.join("a-hr.toml"), "include_schemas = [\"HumanResources\"]\n").unwrap();
    fs::write(profiles.join("notes.txt"), "ignored").unwrap();

    catmatch(temp.path())
        .args(["--json", "profile", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"a-hr\""))
        .stdout(predicate::str::contains("\"b-views\""))
        .stdout(predicate::str::contains("notes").not());

    catmatch(temp.path())
        .args(["profile", "show", "a-hr"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile: a-hr"))
        .stdout(predicate::str::contains("HumanResources"));
}
