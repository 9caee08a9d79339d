// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

// ─────────────────────────────────────────────────────────────────────────────
// Operator splitting
// ─────────────────────────────────────────────────────────────────────────────

#[parameterized(
    contains = { "name:bob", "name", Operator::Contains, "bob" },
    eq = { "status=archived", "status", Operator::Eq, "archived" },
    gte = { "age>=5", "age", Operator::Gte, "5" },
    gt = { "age>5", "age", Operator::Gt, "5" },
    lte = { "age<=5", "age", Operator::Lte, "5" },
    lt = { "age<5", "age", Operator::Lt, "5" },
    list = { "price=[1,2,3]", "price", Operator::Eq, "[1,2,3]" },
    empty_value = { "name:", "name", Operator::Contains, "" },
    empty_field = { ":bob", "", Operator::Contains, "bob" },
)]
fn parse_field_operator_value(token: &str, field: &str, op: Operator, value: &str) {
    let chunk = parse_chunk(token);
    assert!(!chunk.exclude);
    assert_eq!(chunk.field.as_deref(), Some(field));
    assert_eq!(chunk.operator, op);
    assert_eq!(chunk.value, value);
    assert_eq!(chunk.text, token);
}

#[test]
fn parse_longest_operator_is_tried_first() {
    // `>=` must win over `>` and `=`.
    let chunk = parse_chunk("age>=5");
    assert_eq!(chunk.operator, Operator::Gte);
    assert_eq!(chunk.field.as_deref(), Some("age"));
    assert_eq!(chunk.value, "5");
}

#[test]
fn parse_equals_beats_colon_anywhere_in_token() {
    // Table order decides, not position: `=` is tried before `:`.
    let chunk = parse_chunk("url:a=b");
    assert_eq!(chunk.operator, Operator::Eq);
    assert_eq!(chunk.field.as_deref(), Some("url:a"));
    assert_eq!(chunk.value, "b");
}

#[test]
fn parse_splits_on_first_occurrence() {
    let chunk = parse_chunk("note:a:b");
    assert_eq!(chunk.field.as_deref(), Some("note"));
    assert_eq!(chunk.value, "a:b");
}

#[test]
fn parse_keeps_spaces_from_quoted_tokens() {
    let chunk = parse_chunk("name:bob smith");
    assert_eq!(chunk.value, "bob smith");
}

// ─────────────────────────────────────────────────────────────────────────────
// Exclude and generic chunks
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn parse_exclude_prefix() {
    let chunk = parse_chunk("-status=archived");
    assert!(chunk.exclude);
    assert_eq!(chunk.field.as_deref(), Some("status"));
    assert_eq!(chunk.value, "archived");
    assert_eq!(chunk.text, "-status=archived");
}

#[parameterized(
    word = { "bob", false, "bob" },
    number = { "5.25", false, "5.25" },
    excluded = { "-bob", true, "bob" },
    excluded_number = { "-5", true, "5" },
    lone_dash = { "-", true, "" },
)]
fn parse_generic(token: &str, exclude: bool, value: &str) {
    let chunk = parse_chunk(token);
    assert!(chunk.is_generic());
    assert_eq!(chunk.exclude, exclude);
    assert_eq!(chunk.operator, Operator::Contains);
    assert_eq!(chunk.value, value);
}

#[test]
fn only_first_dash_is_exclude() {
    let chunk = parse_chunk("--x");
    assert!(chunk.exclude);
    assert_eq!(chunk.value, "-x");
}

// ─────────────────────────────────────────────────────────────────────────────
// Lists and the operator table
// ─────────────────────────────────────────────────────────────────────────────

#[parameterized(
    list = { "price=[1,2]", true },
    empty_list = { "price=[]", true },
    open_only = { "price=[1,2", false },
    bare_bracket = { "price=[", false },
    scalar = { "price=1", false },
)]
fn chunk_is_list(token: &str, expected: bool) {
    assert_eq!(parse_chunk(token).is_list(), expected);
}

#[parameterized(
    gt = { QueryOp::Gt, QueryOp::Lte },
    gte = { QueryOp::Gte, QueryOp::Lt },
    lte = { QueryOp::Lte, QueryOp::Gt },
    lt = { QueryOp::Lt, QueryOp::Gte },
)]
fn reverse_table_complements(op: QueryOp, expected: QueryOp) {
    let table = OperatorTable::standard();
    assert_eq!(table.reverse(op), Some(expected));
    assert_eq!(table.reverse(expected), Some(op));
}

#[test]
fn reverse_table_has_no_entry_for_equality() {
    assert_eq!(OperatorTable::standard().reverse(QueryOp::Eq), None);
}

#[test]
fn operator_symbols_roundtrip_through_parser() {
    for op in [
        Operator::Eq,
        Operator::Gt,
        Operator::Gte,
        Operator::Lt,
        Operator::Lte,
        Operator::Contains,
    ] {
        let chunk = parse_chunk(&format!("f{}v", op.symbol()));
        assert_eq!(chunk.operator, op);
        assert_eq!(op.to_string(), op.symbol());
    }
}
