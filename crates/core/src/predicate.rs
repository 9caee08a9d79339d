// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter predicates handed to a storage backend.
//!
//! The compiler never executes a predicate. Backends walk the tree and
//! translate each [`Leaf`] into their own comparison on [`Leaf::path`].

use serde::Serialize;
use std::fmt;

use crate::chunk::{Operator, OperatorTable, RawChunk};
use crate::coerce::{self, Decimal};
use crate::date::{date_clauses, DateRange, Join};
use crate::resolve::ResolvedChunk;
use crate::schema::{FieldType, Schema, SearchField};
use crate::value::{Number, Value};

/// Comparison performed by a predicate leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum QueryOp {
    /// Case-insensitive equality.
    Eq,
    /// Membership in a set operand.
    In,
    /// Null test; the operand is `true`.
    IsNull,
    Gt,
    Gte,
    Lt,
    Lte,
    /// Case-insensitive substring match.
    Contains,
}

impl QueryOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryOp::Eq => "eq",
            QueryOp::In => "in",
            QueryOp::IsNull => "is_null",
            QueryOp::Gt => "gt",
            QueryOp::Gte => "gte",
            QueryOp::Lt => "lt",
            QueryOp::Lte => "lte",
            QueryOp::Contains => "contains",
        }
    }

    /// Symbol used in rendered filters. `In` and `IsNull` render as `=`.
    pub fn symbol(&self) -> &'static str {
        match self {
            QueryOp::Eq | QueryOp::In | QueryOp::IsNull => "=",
            QueryOp::Gt => ">",
            QueryOp::Gte => ">=",
            QueryOp::Lt => "<",
            QueryOp::Lte => "<=",
            QueryOp::Contains => ":",
        }
    }
}

impl fmt::Display for QueryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single comparison on one storage path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Leaf {
    pub path: String,
    pub op: QueryOp,
    pub value: Value,
}

/// Boolean filter expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    /// Matches every record (empty query).
    All,
    /// Matches no record (rejected query).
    Empty,
    Leaf(Leaf),
    Not(Box<Predicate>),
    And(Vec<Predicate>),
    Or(Vec<Predicate>),
}

impl Predicate {
    pub fn leaf(path: impl Into<String>, op: QueryOp, value: Value) -> Self {
        Predicate::Leaf(Leaf {
            path: path.into(),
            op,
            value,
        })
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(inner: Predicate) -> Self {
        Predicate::Not(Box::new(inner))
    }

    /// Conjunction; `All` when empty and the sole member when there is one.
    pub fn all_of(predicates: impl IntoIterator<Item = Predicate>) -> Self {
        let mut predicates: Vec<_> = predicates.into_iter().collect();
        match predicates.len() {
            0 => Predicate::All,
            1 => predicates.remove(0),
            _ => Predicate::And(predicates),
        }
    }

    /// Disjunction; `Empty` when empty and the sole member when there is one.
    pub fn any_of(predicates: impl IntoIterator<Item = Predicate>) -> Self {
        let mut predicates: Vec<_> = predicates.into_iter().collect();
        match predicates.len() {
            0 => Predicate::Empty,
            1 => predicates.remove(0),
            _ => Predicate::Or(predicates),
        }
    }

    fn joined(join: Join, predicates: Vec<Predicate>) -> Self {
        match join {
            Join::And => Self::all_of(predicates),
            Join::Or => Self::any_of(predicates),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Predicate::Empty)
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::All => f.write_str("ALL"),
            Predicate::Empty => f.write_str("EMPTY"),
            Predicate::Leaf(leaf) => match &leaf.value {
                Value::Str(s) => write!(f, "{} {} {:?}", leaf.path, leaf.op, s),
                value => write!(f, "{} {} {}", leaf.path, leaf.op, value),
            },
            Predicate::Not(inner) => write!(f, "NOT {inner}"),
            Predicate::And(members) => write_joined(f, members, " AND "),
            Predicate::Or(members) => write_joined(f, members, " OR "),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, members: &[Predicate], sep: &str) -> fmt::Result {
    f.write_str("(")?;
    for (i, member) in members.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{member}")?;
    }
    f.write_str(")")
}

/// Builds the predicate for one resolved chunk.
///
/// A chunk carrying an error builds [`Predicate::Empty`].
pub fn build(chunk: &ResolvedChunk, schema: &Schema, table: &OperatorTable) -> Predicate {
    if chunk.error.is_some() {
        return Predicate::Empty;
    }
    let Some(field) = &chunk.field else {
        return generic(&chunk.raw, schema, table);
    };
    let Some(value) = &chunk.value else {
        return Predicate::Empty;
    };
    let exclude = chunk.raw.exclude;

    // A date list is one range group per member (lists always use `=`).
    if let Some(ranges) = value.date_ranges() {
        let groups = ranges
            .into_iter()
            .map(|range| date_range(field, range, chunk.raw.operator, exclude, table));
        return if exclude {
            Predicate::all_of(groups)
        } else {
            Predicate::any_of(groups)
        };
    }

    if field.field_type == FieldType::Numeric && chunk.raw.operator == Operator::Contains {
        return match coerce::decimal(&chunk.raw.value) {
            Some(decimal) => {
                let negative_only = chunk.raw.value.starts_with('-');
                tolerance_window(&field.path, decimal, negative_only, exclude, table)
            }
            None => Predicate::Empty,
        };
    }

    let op = chunk.query_op.unwrap_or_else(|| chunk.raw.operator.query_op());
    let leaf = Predicate::leaf(&field.path, op, value.to_value());
    if exclude {
        Predicate::not(leaf)
    } else {
        leaf
    }
}

fn date_range(
    field: &SearchField,
    range: &DateRange,
    op: Operator,
    exclude: bool,
    table: &OperatorTable,
) -> Predicate {
    let clauses = date_clauses(range, op, exclude, table);
    let leaves = clauses
        .clauses
        .iter()
        .map(|clause| Predicate::leaf(&field.path, clause.op, Value::Date(clause.date)))
        .collect();
    Predicate::joined(clauses.join, leaves)
}

/// Fans a fieldless chunk out across the schema.
///
/// Every string field gets a containment test. When the text is a plain
/// decimal number every numeric field also gets a [`tolerance_window`].
/// Matches are OR-ed; an excluded chunk negates each test and ANDs them.
fn generic(raw: &RawChunk, schema: &Schema, table: &OperatorTable) -> Predicate {
    let exclude = raw.exclude;
    let mut tests: Vec<Predicate> = schema
        .of_type(FieldType::String)
        .map(|field| {
            let leaf = Predicate::leaf(&field.path, QueryOp::Contains, Value::Str(raw.value.clone()));
            if exclude {
                Predicate::not(leaf)
            } else {
                leaf
            }
        })
        .collect();

    if let Some(decimal) = coerce::decimal(&raw.value) {
        tests.extend(
            schema
                .of_type(FieldType::Numeric)
                .map(|field| tolerance_window(&field.path, decimal, false, exclude, table)),
        );
    }

    if exclude {
        Predicate::all_of(tests)
    } else {
        Predicate::any_of(tests)
    }
}

/// Matches numbers that start with the typed digits, on either sign.
///
/// For `5.2` that is `[5.2, 5.3)` or `(-5.3, -5.2]`: the width of the
/// window is one unit in the last typed decimal place. `negative_only`
/// keeps just the negative side. An excluded window is negated bound by
/// bound through `table`.
pub fn tolerance_window(
    path: &str,
    decimal: Decimal,
    negative_only: bool,
    exclude: bool,
    table: &OperatorTable,
) -> Predicate {
    let v = decimal.value.abs();
    let variance = variance(decimal.places);
    let negative = band(path, [(QueryOp::Lte, -v), (QueryOp::Gt, -v - variance)], exclude, table);
    if negative_only {
        return negative;
    }
    let positive = band(path, [(QueryOp::Gte, v), (QueryOp::Lt, v + variance)], exclude, table);
    if exclude {
        Predicate::all_of([positive, negative])
    } else {
        Predicate::any_of([positive, negative])
    }
}

/// `0.1^places` rounded to `places` decimals.
pub fn variance(places: u32) -> f64 {
    let places = i32::try_from(places).unwrap_or(i32::MAX);
    let width = 0.1f64.powi(places);
    let scale = 10f64.powi(places);
    if scale.is_finite() {
        (width * scale).round() / scale
    } else {
        width
    }
}

fn band(path: &str, bounds: [(QueryOp, f64); 2], exclude: bool, table: &OperatorTable) -> Predicate {
    let leaves = bounds.into_iter().map(|(op, n)| {
        let op = if exclude {
            table.reverse(op).unwrap_or(op)
        } else {
            op
        };
        Predicate::leaf(path, op, Value::Number(Number::Float(n)))
    });
    if exclude {
        Predicate::any_of(leaves)
    } else {
        Predicate::all_of(leaves)
    }
}

#[cfg(test)]
#[path = "predicate_tests.rs"]
mod tests;
