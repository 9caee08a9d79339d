// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed values produced by resolving a chunk's raw text.
//!
//! [`TypedValue`] is what a chunk resolves to (a date keeps its whole
//! granularity range). [`Value`] is the operand stored in a predicate leaf
//! (a date is a single calendar day bound).

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::date::DateRange;

/// A number as the user typed it: integer or decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Int(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            // Keep a fractional part so `5.0` never displays as the integer `5`.
            Number::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{x:.1}"),
            Number::Float(x) => write!(f, "{x}"),
        }
    }
}

/// The resolved value of one chunk.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum TypedValue {
    Bool(bool),
    Number(Number),
    /// A date at the granularity the user typed (year, month or day).
    Date(DateRange),
    Str(String),
    /// The `none` / `null` literal.
    None,
    /// Members of a `[a,b,c]` list, duplicates removed.
    Set(Vec<TypedValue>),
}

impl TypedValue {
    /// Collects list members with set semantics, keeping first occurrences.
    pub fn set(members: impl IntoIterator<Item = TypedValue>) -> Self {
        let mut unique: Vec<TypedValue> = Vec::new();
        for member in members {
            if !unique.contains(&member) {
                unique.push(member);
            }
        }
        TypedValue::Set(unique)
    }

    /// Date ranges of a date or a non-empty set of dates.
    pub fn date_ranges(&self) -> Option<Vec<&DateRange>> {
        match self {
            TypedValue::Date(range) => Some(vec![range]),
            TypedValue::Set(members) if !members.is_empty() => members
                .iter()
                .map(|member| match member {
                    TypedValue::Date(range) => Some(range),
                    _ => None,
                })
                .collect(),
            _ => None,
        }
    }

    /// The operand a predicate leaf compares against.
    ///
    /// Dates collapse to the start of their range and the `none` literal
    /// becomes the `true` operand of an is-null test.
    pub fn to_value(&self) -> Value {
        match self {
            TypedValue::Bool(b) => Value::Bool(*b),
            TypedValue::Number(n) => Value::Number(*n),
            TypedValue::Date(range) => Value::Date(range.start),
            TypedValue::Str(s) => Value::Str(s.clone()),
            TypedValue::None => Value::Bool(true),
            TypedValue::Set(members) => Value::Set(members.iter().map(Self::to_value).collect()),
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::Bool(b) => write!(f, "{b}"),
            TypedValue::Number(n) => write!(f, "{n}"),
            TypedValue::Date(range) => write!(f, "{}", range.start.format("%Y-%m-%d")),
            TypedValue::Str(s) => f.write_str(s),
            TypedValue::None => f.write_str("none"),
            TypedValue::Set(members) => write_list(f, members),
        }
    }
}

/// Operand of a predicate leaf.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Number(Number),
    Date(NaiveDate),
    Str(String),
    Set(Vec<Value>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Value::Str(s) => f.write_str(s),
            Value::Set(members) => write_list(f, members),
        }
    }
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, members: &[T]) -> fmt::Result {
    f.write_str("[")?;
    for (i, member) in members.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{member}")?;
    }
    f.write_str("]")
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
