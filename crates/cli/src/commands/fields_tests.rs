// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use sq_core::SearchField;

fn render(schema: &Schema, output: OutputFormat) -> String {
    let mut buf = Vec::new();
    write(&mut buf, schema, output).unwrap();
    String::from_utf8(buf).unwrap()
}

fn schema() -> Schema {
    Schema::new([
        SearchField::string("name", "account.name").with_description("Full name"),
        SearchField::boolean("active", "is_active"),
        SearchField::date("created", "created_at").with_description("Signup date"),
    ])
    .unwrap()
}

#[test]
fn text_aligns_columns_in_schema_order() {
    let out = render(&schema(), OutputFormat::Text);
    assert_eq!(
        out,
        "name     string   Full name\n\
         active   bool\n\
         created  date     Signup date\n"
    );
}

#[test]
fn json_includes_paths() {
    let out = render(&schema(), OutputFormat::Json);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"key": "name", "type": "string", "path": "account.name", "description": "Full name"},
            {"key": "active", "type": "bool", "path": "is_active", "description": ""},
            {"key": "created", "type": "date", "path": "created_at", "description": "Signup date"},
        ])
    );
}

#[test]
fn empty_schema_prints_nothing_as_text() {
    let empty = Schema::default();
    assert_eq!(render(&empty, OutputFormat::Text), "");
    assert_eq!(render(&empty, OutputFormat::Json).trim(), "[]");
}
