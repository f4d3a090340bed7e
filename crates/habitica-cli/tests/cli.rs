// SPDX-License-Identifier: Apache-2.0

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("habitica").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("habitica"));
}

#[test]
fn test_help_contains_all_commands() {
    let mut cmd = Command::cargo_bin("habitica").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("habits"))
        .stdout(predicate::str::contains("dailies"))
        .stdout(predicate::str::contains("todos"))
        .stdout(predicate::str::contains("server"))
        .stdout(predicate::str::contains("home"))
        .stdout(predicate::str::contains("item"))
        .stdout(predicate::str::contains("feed"))
        .stdout(predicate::str::contains("hatch"))
        .stdout(predicate::str::contains("sell"))
        .stdout(predicate::str::contains("--difficulty"));
}

#[test]
fn test_habits_help_shows_up_and_down() {
    let mut cmd = Command::cargo_bin("habitica").unwrap();
    cmd.args(["habits", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("up"))
        .stdout(predicate::str::contains("down"));
}

#[test]
fn test_sell_requires_a_variant() {
    let mut cmd = Command::cargo_bin("habitica").unwrap();
    cmd.arg("sell").assert().failure();
}

#[test]
fn test_unknown_difficulty_is_rejected() {
    let mut cmd = Command::cargo_bin("habitica").unwrap();
    cmd.args(["todos", "add", "read", "--difficulty", "nightmare"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("difficulty"));
}
