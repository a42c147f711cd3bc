//! End-to-end tests for the `portside` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn portside() -> Command {
    let mut cmd = Command::cargo_bin("portside").unwrap();
    cmd.env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .env("PORTSIDE_LOGGING__LEVEL", "warn");
    cmd
}

#[test]
fn greets_alice() {
    portside()
        .arg("Alice")
        .assert()
        .success()
        .code(0)
        .stdout("Hello, Alice!\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn empty_name_fails_with_one_line() {
    portside()
        .arg("")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr("Error: Name cannot be empty\n");
}

#[test]
fn name_over_domain_bound_fails() {
    portside()
        .arg("n".repeat(150))
        .assert()
        .code(1)
        .stderr("Error: Name cannot exceed 100 characters\n");
}

#[test]
fn input_over_intake_bound_fails() {
    portside()
        .arg("n".repeat(300))
        .assert()
        .code(1)
        .stderr("Error: Input cannot exceed 256 characters\n");
}

#[test]
fn missing_name_exits_with_one() {
    portside()
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error: "));
}

#[test]
fn version_flag_succeeds() {
    portside()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn help_mentions_name_argument() {
    portside()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("NAME"));
}

#[test]
fn missing_explicit_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    portside()
        .arg("--config")
        .arg(dir.path().join("nope.toml"))
        .arg("Alice")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("Error: Configuration error"));
}

#[test]
fn verbose_logs_go_to_stderr_only() {
    portside()
        .args(["-vv", "Alice"])
        .assert()
        .success()
        .stdout("Hello, Alice!\n");
}

#[test]
fn multi_line_name_is_rejected() {
    portside()
        .arg("Al\nice")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr("Error: Name cannot contain control characters\n");
}

#[test]
fn malformed_config_fails_with_one_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "[output\nno_color = true\n").unwrap();

    let assert = portside()
        .arg("--config")
        .arg(&path)
        .arg("Alice")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("Error: Configuration error"));

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert_eq!(stderr.lines().count(), 1, "{stderr:?}");
    assert!(stderr.ends_with('\n'));
}

#[cfg(unix)]
#[test]
fn non_utf8_argument_is_rejected() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt as _;

    portside()
        .arg(OsStr::from_bytes(b"Al\xffice"))
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr("Error: Arguments must be valid UTF-8\n");
}
