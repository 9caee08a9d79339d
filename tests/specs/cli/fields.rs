// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `sq fields` command.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sq() -> Command {
    let mut cmd = cargo_bin_cmd!("sq");
    cmd.env_remove("SQ_SCHEMA");
    cmd
}

fn init_temp(schema: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("sq.toml"), schema).unwrap();
    temp
}

const PEOPLE: &str = r#"
[[field]]
key = "name"
type = "string"
path = "account.name"
description = "Full name"

[[field]]
key = "joined"
type = "date"
"#;

#[test]
fn fields_text_lists_keys_types_and_descriptions() {
    let temp = init_temp(PEOPLE);
    sq().arg("fields")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("name    string   Full name\njoined  date\n");
}

#[test]
fn fields_json_includes_paths() {
    let temp = init_temp(PEOPLE);
    let output = sq()
        .args(["fields", "-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(json[0]["path"], "account.name");
    assert_eq!(json[1]["key"], "joined");
    assert_eq!(json[1]["path"], "joined");
    assert_eq!(json[1]["type"], "date");
}

#[test]
fn fields_type_aliases_are_normalized() {
    let temp = init_temp("[[field]]\nkey = \"n\"\ntype = \"Number\"\n\n[[field]]\nkey = \"b\"\ntype = \"boolean\"\n");
    sq().arg("fields")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("n  numeric\nb  bool\n");
}

#[test]
fn fields_rejects_duplicate_keys() {
    let temp = init_temp("[[field]]\nkey = \"a\"\ntype = \"string\"\n\n[[field]]\nkey = \"a\"\ntype = \"string\"\n");
    sq().arg("fields")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate field key: 'a'"));
}

#[test]
fn fields_rejects_unknown_type() {
    let temp = init_temp("[[field]]\nkey = \"a\"\ntype = \"blob\"\n");
    sq().arg("fields")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid field type: 'blob'"))
        .stderr(predicate::str::contains("hint: valid types are"));
}

#[test]
fn fields_rejects_malformed_toml() {
    let temp = init_temp("[[field]\n");
    sq().arg("fields")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error: config error: failed to parse schema"));
}

#[test]
fn fields_uses_sq_schema_env() {
    let temp = init_temp(PEOPLE);
    let elsewhere = TempDir::new().unwrap();
    sq().arg("fields")
        .env("SQ_SCHEMA", temp.path().join("sq.toml"))
        .current_dir(elsewhere.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("joined"));
}
