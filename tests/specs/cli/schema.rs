// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `sq schema` command.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use yare::parameterized;

fn sq() -> Command {
    cargo_bin_cmd!("sq")
}

#[parameterized(
    compile = { "compile", "CompileOutputJson" },
    fields = { "fields", "FieldJson" },
)]
fn schema_outputs_json_schema(command: &str, type_name: &str) {
    let temp = TempDir::new().unwrap();
    let output = sq()
        .args(["schema", command])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");
    assert!(json.get("$schema").is_some());
    assert!(stdout.contains(type_name));
}

#[test]
fn schema_compile_describes_predicate() {
    sq().args(["schema", "compile"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Predicate\""))
        .stdout(predicate::str::contains("\"predicate\""));
}

#[test]
fn schema_requires_subcommand() {
    sq().arg("schema").assert().failure();
}

#[test]
fn help_lists_commands() {
    sq().arg("--help")
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("compile"))
        .stdout(predicate::str::contains("fields"))
        .stdout(predicate::str::contains("Query syntax:"));
}

#[test]
fn version_flag() {
    sq().arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
