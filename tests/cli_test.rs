//! Integration tests for the courseprep binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SIMPLE_MANIFEST: &str = "# course requirements\npytest>=7.0\n\nnumpy\n";

fn setup_project(manifest: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("requirements.txt"), manifest).unwrap();
    temp
}

/// A run with an emptied PATH: no interpreter is found, so every external
/// step fails while directory creation still succeeds.
#[test]
fn cli_no_args_runs_all_steps_and_exits_zero() {
    let temp = setup_project(SIMPLE_MANIFEST);
    let mut cmd = Command::new(cargo_bin("courseprep"));
    cmd.current_dir(temp.path());
    cmd.env("PATH", "");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Setup Summary"))
        .stdout(predicate::str::contains(
            "Completed 1/5 setup steps successfully.",
        ))
        .stdout(predicate::str::contains("warnings or errors"));

    for dir in ["notebooks", "data", "solutions", "resources"] {
        assert!(temp.path().join(dir).is_dir(), "{} not created", dir);
    }
}

#[test]
fn cli_shows_help() {
    let mut cmd = Command::new(cargo_bin("courseprep"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Course environment setup"));
}

#[test]
fn cli_shows_version() {
    let mut cmd = Command::new(cargo_bin("courseprep"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn cli_missing_manifest_still_exits_zero() {
    let temp = TempDir::new().unwrap();
    let mut cmd = Command::new(cargo_bin("courseprep"));
    cmd.current_dir(temp.path());
    cmd.env("PATH", "");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Completed 1/5"))
        .stderr(predicate::str::contains("Could not find"))
        .stderr(predicate::str::contains("Manifest not found"));

    // Directory creation runs regardless of the missing manifest.
    assert!(temp.path().join("notebooks").is_dir());
}

#[test]
fn cli_accepts_manifest_override() {
    let temp = TempDir::new().unwrap();
    let manifest = temp.path().join("deps.txt");
    fs::write(&manifest, SIMPLE_MANIFEST).unwrap();

    let mut cmd = Command::new(cargo_bin("courseprep"));
    cmd.current_dir(temp.path());
    cmd.env("PATH", "");
    cmd.args(["--manifest", manifest.to_str().unwrap()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Checking 2 required packages"));
}

#[test]
fn cli_accepts_dir_override() {
    let cwd = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    fs::write(project.path().join("requirements.txt"), SIMPLE_MANIFEST).unwrap();

    let mut cmd = Command::new(cargo_bin("courseprep"));
    cmd.current_dir(cwd.path());
    cmd.env("PATH", "");
    cmd.args(["--dir", project.path().to_str().unwrap()]);
    cmd.assert().success();

    assert!(project.path().join("notebooks").is_dir());
    assert!(!cwd.path().join("notebooks").exists());
}

#[test]
fn cli_quiet_hides_progress_but_keeps_summary() {
    let temp = setup_project(SIMPLE_MANIFEST);
    let mut cmd = Command::new(cargo_bin("courseprep"));
    cmd.current_dir(temp.path());
    cmd.env("PATH", "");
    cmd.arg("--quiet");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Completed 1/5"))
        .stdout(predicate::str::contains("Created directory").not())
        .stdout(predicate::str::contains("Checking 2 required packages").not());
}

#[test]
fn cli_directory_creation_failure_is_fatal() {
    let temp = setup_project(SIMPLE_MANIFEST);
    // A regular file squatting on a directory name makes creation fail.
    fs::write(temp.path().join("data"), "not a directory").unwrap();

    let mut cmd = Command::new(cargo_bin("courseprep"));
    cmd.current_dir(temp.path());
    cmd.env("PATH", "");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

/// Full happy path against a scripted interpreter covering pip and jupyter.
#[cfg(unix)]
#[test]
fn cli_all_steps_pass_with_working_toolchain() {
    use std::os::unix::fs::PermissionsExt;

    let temp = setup_project("pytest>=7.0\n");
    let bin = temp.path().join("bin");
    fs::create_dir_all(&bin).unwrap();

    let script = r#"#!/bin/sh
case "$1" in
  --version) echo "Python 3.11.4" ;;
  -m)
    case "$2" in
      pip)
        case "$3" in
          install) exit 0 ;;
          list) echo '[{"name": "pytest", "version": "7.4.0"}]' ;;
        esac ;;
      jupyter) echo "7.0.6" ;;
    esac ;;
esac
exit 0
"#;
    let python = bin.join("python3");
    fs::write(&python, script).unwrap();
    fs::set_permissions(&python, fs::Permissions::from_mode(0o755)).unwrap();

    let mut cmd = Command::new(cargo_bin("courseprep"));
    cmd.current_dir(temp.path());
    cmd.env("PATH", &bin);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Detected Python 3.11.4"))
        .stdout(predicate::str::contains("pytest 7.4.0 - installed"))
        .stdout(predicate::str::contains(
            "All required packages are installed with correct versions!",
        ))
        .stdout(predicate::str::contains(
            "Completed 5/5 setup steps successfully.",
        ))
        .stdout(predicate::str::contains("fully set up"));
}

/// An old interpreter trips the version warning but every other step runs.
#[cfg(unix)]
#[test]
fn cli_old_interpreter_warns_but_continues() {
    use std::os::unix::fs::PermissionsExt;

    let temp = setup_project("pytest>=7.0\n");
    let bin = temp.path().join("bin");
    fs::create_dir_all(&bin).unwrap();

    let script = r#"#!/bin/sh
case "$1" in
  --version) echo "Python 3.8.10" ;;
  -m)
    case "$2" in
      pip)
        case "$3" in
          install) exit 0 ;;
          list) echo '[{"name": "pytest", "version": "7.4.0"}]' ;;
        esac ;;
      jupyter) echo "7.0.6" ;;
    esac ;;
esac
exit 0
"#;
    let python = bin.join("python3");
    fs::write(&python, script).unwrap();
    fs::set_permissions(&python, fs::Permissions::from_mode(0o755)).unwrap();

    let mut cmd = Command::new(cargo_bin("courseprep"));
    cmd.current_dir(temp.path());
    cmd.env("PATH", &bin);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("recommends Python 3.9"))
        .stdout(predicate::str::contains(
            "Completed 4/5 setup steps successfully.",
        ));
}
