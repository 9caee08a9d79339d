// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `sq compile` command.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use yare::parameterized;

const SCHEMA: &str = r#"
[[field]]
key = "name"
type = "string"
path = "account.name"
description = "Full name"

[[field]]
key = "age"
type = "numeric"

[[field]]
key = "created"
type = "date"
path = "created_at"

[[field]]
key = "active"
type = "bool"
path = "is_active"
"#;

fn sq() -> Command {
    let mut cmd = cargo_bin_cmd!("sq");
    cmd.env_remove("SQ_SCHEMA").env_remove("RUST_LOG");
    cmd
}

fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("sq.toml"), SCHEMA).unwrap();
    temp
}

fn compile(temp: &TempDir, query: &str) -> Command {
    let mut cmd = sq();
    cmd.arg("compile")
        .arg("--now")
        .arg("2023-06-01")
        .arg("--")
        .arg(query)
        .current_dir(temp.path());
    cmd
}

fn compile_json(temp: &TempDir, query: &str) -> serde_json::Value {
    let output = sq()
        .args(["compile", "-o", "json", "--now", "2023-06-01", "--", query])
        .current_dir(temp.path())
        .output()
        .unwrap();
    serde_json::from_slice(&output.stdout).expect("json output")
}

// =============================================================================
// Success
// =============================================================================

#[test]
fn compile_reads_sq_toml_from_working_directory() {
    let temp = init_temp();
    compile(&temp, "name:bob")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "predicate: account.name contains \"bob\"",
        ))
        .stdout(predicate::str::contains("name:bob (string)"));
}

#[parameterized(
    contains = { "name:bob", "name:bob" },
    gte = { "age>=30", "age>=30" },
    gt = { "age>5", "age>5" },
    null = { "active:none", "active=none" },
    list = { "age=[1,2,3]", "age=[1,2,3]" },
    year = { "created:2023", "created>=2023-01-01 AND created<2024-01-01" },
    month = { "created:jan", "created>=2023-01-01 AND created<2023-02-01" },
    month_rolls_back = { "created:dec", "created>=2022-12-01 AND created<2023-01-01" },
    explicit_year = { "created:jan_2024", "created>=2024-01-01 AND created<2024-02-01" },
    excluded_month = { "-created:jan", "created<2023-01-01 OR created>=2023-02-01" },
    generic = { "bob", "bob" },
)]
fn compile_renders_filter(query: &str, filter: &str) {
    let temp = init_temp();
    compile(&temp, query)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("  {filter} (")));
}

#[test]
fn compile_empty_query_matches_all() {
    let temp = init_temp();
    compile(&temp, "")
        .assert()
        .success()
        .stdout("predicate: ALL\n");
}

#[test]
fn compile_stopwords_are_warnings() {
    let temp = init_temp();
    compile(&temp, "name:bob and age>5")
        .assert()
        .success()
        .stdout(predicate::str::contains("warnings:\n  ignored: and"));
}

#[test]
fn compile_generic_number_fans_out() {
    let temp = init_temp();
    let json = compile_json(&temp, "5");
    let predicate = json["predicate"].to_string();
    assert!(predicate.contains("\"or\""));
    assert!(predicate.contains("account.name"));
    assert!(predicate.contains("\"age\""));
    assert!(!predicate.contains("created_at"));
    assert_eq!(json["filters"][0]["search_type"], "string");
}

#[test]
fn compile_json_shape() {
    let temp = init_temp();
    let json = compile_json(&temp, "age>=30");
    assert_eq!(json["query"], "age>=30");
    assert_eq!(json["today"], "2023-06-01");
    assert_eq!(
        json["predicate"],
        serde_json::json!({"leaf": {"path": "age", "op": "gte", "value": 30}})
    );
    assert_eq!(json["errors"], serde_json::json!([]));
    assert_eq!(json["meta"]["fields"]["name"], "Full name");
    assert_eq!(json["meta"]["query"], "age>=30");
}

#[test]
fn compile_schema_flag_overrides_env() {
    let temp = init_temp();
    let other = temp.path().join("other.toml");
    std::fs::write(&other, "[[field]]\nkey = \"title\"\ntype = \"string\"\n").unwrap();

    sq().args(["compile", "title:rust", "--schema"])
        .arg(&other)
        .env("SQ_SCHEMA", temp.path().join("sq.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("title:rust (string)"));
}

#[test]
fn compile_schema_from_env() {
    let temp = init_temp();
    sq().args(["compile", "age<5", "--now", "2023-06-01"])
        .env("SQ_SCHEMA", temp.path().join("sq.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("age<5 (numeric)"));
}

#[test]
fn compile_verbose_logs_to_stderr() {
    let temp = init_temp();
    sq().args(["-v", "compile", "name:bob"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("chunk"));
}

// =============================================================================
// Failure
// =============================================================================

#[test]
fn compile_unknown_field_fails() {
    let temp = init_temp();
    compile(&temp, "name:bob bogus:1")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("predicate: EMPTY"))
        .stdout(predicate::str::contains("name:bob (string)"))
        .stderr(predicate::str::contains("error: unknown field: bogus"))
        .stderr(predicate::str::contains("search failed with 1 error(s)"));
}

#[parameterized(
    bad_number = { "age=old", "invalid numeric value: 'old'" },
    bad_bool = { "active=maybe", "invalid bool value: 'maybe'" },
    bad_date = { "created:someday", "invalid date format: 'someday'" },
    list_op = { "age>[1,2]", "invalid operation in list search: '>'" },
    type_mismatch = { "name>bob", "invalid operator '>' for string field: name" },
    unterminated = { "name:\"bob", "invalid query" },
)]
fn compile_reports_chunk_error(query: &str, message: &str) {
    let temp = init_temp();
    compile(&temp, query)
        .assert()
        .failure()
        .stderr(predicate::str::contains(message));
}

#[test]
fn compile_json_still_prints_on_error() {
    let temp = init_temp();
    let json = compile_json(&temp, "bogus:1 nope:2");
    assert_eq!(json["predicate"], "empty");
    assert_eq!(
        json["errors"],
        serde_json::json!(["unknown field: bogus", "unknown field: nope"])
    );
    assert_eq!(
        json["meta"]["errors"],
        "unknown field: bogus, unknown field: nope"
    );

    sq().args(["compile", "-o", "json", "bogus:1"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("search failed with 1 error(s)"));
}

#[test]
fn compile_without_schema_file_fails() {
    let temp = TempDir::new().unwrap();
    sq().args(["compile", "name:bob"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("schema file not found: sq.toml"));
}

#[test]
fn compile_invalid_now_fails() {
    let temp = init_temp();
    sq().args(["compile", "created:jan", "--now", "2023-13-01"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date: '2023-13-01'"));
}

#[test]
fn compile_invalid_offset_fails() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("sq.toml"),
        "[search]\nutc_offset = \"Mars/Olympus\"\n",
    )
    .unwrap();
    sq().args(["compile", "bob"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid utc offset"));
}
