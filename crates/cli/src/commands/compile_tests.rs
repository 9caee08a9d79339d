// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use sq_core::SearchField;
use yare::parameterized;

fn schema() -> Schema {
    Schema::new([
        SearchField::string("name", "account.name").with_description("Full name"),
        SearchField::numeric("age", "age"),
        SearchField::date("created", "created_at"),
    ])
    .unwrap()
}

fn june() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 6, 1).unwrap()
}

fn render(query: &str, output: OutputFormat) -> String {
    let schema = schema();
    let compiled = compile(&schema, query, june());
    let mut buf = Vec::new();
    write(&mut buf, &compiled, &schema, june(), output).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn text_output_lists_predicate_and_filters() {
    let out = render("name:bob age>=30", OutputFormat::Text);
    assert_eq!(
        out.as_str(),
        "predicate: (account.name contains \"bob\" AND age gte 30)\n\
         filters:\n  name:bob (string)\n  age>=30 (numeric)\n"
    );
}

#[test]
fn text_output_shows_warnings() {
    let out = render("name:bob or age>1", OutputFormat::Text);
    assert!(out.ends_with("warnings:\n  ignored: or\n"));
}

#[test]
fn text_output_for_empty_query() {
    assert_eq!(render("", OutputFormat::Text).as_str(), "predicate: ALL\n");
}

#[test]
fn json_output_shape() {
    let out = render("created:jan bogus:1", OutputFormat::Json);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["query"], "created:jan bogus:1");
    assert_eq!(json["today"], "2023-06-01");
    assert_eq!(json["predicate"], "empty");
    assert_eq!(
        json["filters"],
        serde_json::json!([{
            "filter": "created>=2023-01-01 AND created<2023-02-01",
            "search_type": "date",
        }])
    );
    assert_eq!(json["errors"], serde_json::json!(["unknown field: bogus"]));
    assert_eq!(json["meta"]["errors"], "unknown field: bogus");
    assert_eq!(json["meta"]["fields"]["name"], "Full name");
}

#[test]
fn json_predicate_is_tagged_tree() {
    let out = render("-age=5", OutputFormat::Json);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        json["predicate"],
        serde_json::json!({"not": {"leaf": {"path": "age", "op": "eq", "value": 5}}})
    );
}

#[parameterized(
    iso = { "2024-02-29", 2024, 2, 29 },
    padded = { " 2023-06-01 ", 2023, 6, 1 },
)]
fn parse_date_accepts(raw: &str, y: i32, m: u32, d: u32) {
    assert_eq!(parse_date(raw).unwrap(), NaiveDate::from_ymd_opt(y, m, d).unwrap());
}

#[parameterized(
    not_leap = { "2023-02-29" },
    words = { "yesterday" },
    us_order = { "06/01/2023" },
)]
fn parse_date_rejects(raw: &str) {
    assert!(matches!(parse_date(raw), Err(Error::InvalidDate(_))));
}
