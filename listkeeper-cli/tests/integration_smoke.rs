//! Smoke tests to verify command wiring

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("listkeeper").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("--session-ttl-secs"));
}

#[test]
fn test_config_path_respects_flag() {
    let mut cmd = Command::cargo_bin("listkeeper").unwrap();
    cmd.args(["--config", "/tmp/listkeeper-test.toml", "config", "path"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("/tmp/listkeeper-test.toml"));
}

#[test]
fn test_config_show_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[server]\nbind = \"127.0.0.1:8081\"").unwrap();

    let mut cmd = Command::cargo_bin("listkeeper").unwrap();
    cmd.arg("--config").arg(file.path()).args(["config", "show"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("127.0.0.1:8081"))
        .stdout(predicate::str::contains("session_ttl_secs = 86400"));
}

#[test]
fn test_config_show_rejects_bad_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[server\nbind =").unwrap();

    let mut cmd = Command::cargo_bin("listkeeper").unwrap();
    cmd.arg("--config").arg(file.path()).args(["config", "show"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid TOML"));
}

#[test]
fn test_unknown_subcommand_fails() {
    let mut cmd = Command::cargo_bin("listkeeper").unwrap();
    cmd.arg("frobnicate");
    cmd.assert().failure();
}
