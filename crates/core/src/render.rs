// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Canonical display strings for resolved chunks.
//!
//! ```text
//! bob                 -> bob
//! -"bob smith"        -> -'bob smith'
//! age>=30             -> age>=30
//! status:null         -> status=none
//! created:jan         -> created>=2023-01-01 AND created<2023-02-01
//! -created:jan        -> created<2023-01-01 OR created>=2023-02-01
//! ```

use crate::chunk::{Operator, OperatorTable};
use crate::date::{date_clauses, DateRange};
use crate::resolve::ResolvedChunk;
use crate::value::TypedValue;

/// Renders a chunk, or `None` if it failed to resolve.
pub fn render(chunk: &ResolvedChunk, table: &OperatorTable) -> Option<String> {
    if chunk.error.is_some() {
        return None;
    }
    let prefix = if chunk.raw.exclude { "-" } else { "" };
    let Some(field) = &chunk.field else {
        return Some(format!("{prefix}{}", quoted(&chunk.raw.value)));
    };
    let value = chunk.value.as_ref()?;
    let key = field.key.as_str();

    if let Some(ranges) = value.date_ranges() {
        let operator = chunk.raw.operator;
        let exclude = chunk.raw.exclude;
        if let TypedValue::Date(range) = value {
            return Some(date_range(key, range, operator, exclude, table));
        }
        let groups: Vec<String> = ranges
            .into_iter()
            .map(|range| format!("({})", date_range(key, range, operator, exclude, table)))
            .collect();
        return Some(groups.join(if exclude { " AND " } else { " OR " }));
    }

    let op = chunk
        .query_op
        .map_or_else(|| chunk.raw.operator.symbol(), |op| op.symbol());
    Some(format!("{prefix}{key}{op}{}", quoted(&value.to_string())))
}

// Bounds are already reversed for an excluded chunk, so no `-` prefix.
fn date_range(
    key: &str,
    range: &DateRange,
    op: Operator,
    exclude: bool,
    table: &OperatorTable,
) -> String {
    let clauses = date_clauses(range, op, exclude, table);
    clauses
        .clauses
        .iter()
        .map(|c| format!("{key}{}{}", c.op.symbol(), c.date.format("%Y-%m-%d")))
        .collect::<Vec<_>>()
        .join(&format!(" {} ", clauses.join.as_str()))
}

fn quoted(value: &str) -> String {
    if value.contains(' ') {
        format!("'{value}'")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
