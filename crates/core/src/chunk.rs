// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parsing of a single search token into a [`RawChunk`].
//!
//! A token has the shape `[-][field<op>]value`:
//!
//! ```text
//! name:bob          field=name  op=:   value=bob
//! -status=archived  exclude     op==   value=archived
//! age>=30           field=age   op=>=  value=30
//! bob               generic search for "bob"
//! ```

use serde::Serialize;
use std::fmt;

use crate::predicate::QueryOp;

/// Comparison operator typed between field and value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// `=`
    Eq,
    /// `>`
    Gt,
    /// `>=`
    Gte,
    /// `<`
    Lt,
    /// `<=`
    Lte,
    /// `:`, also the implied operator of a generic search.
    Contains,
}

impl Operator {
    /// Returns the symbol users type for this operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Gt => ">",
            Operator::Gte => ">=",
            Operator::Lt => "<",
            Operator::Lte => "<=",
            Operator::Contains => ":",
        }
    }

    /// The leaf operation this operator maps to before any adjustment.
    pub fn query_op(&self) -> QueryOp {
        match self {
            Operator::Eq => QueryOp::Eq,
            Operator::Gt => QueryOp::Gt,
            Operator::Gte => QueryOp::Gte,
            Operator::Lt => QueryOp::Lt,
            Operator::Lte => QueryOp::Lte,
            Operator::Contains => QueryOp::Contains,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Operator symbols and their logical complements.
///
/// Symbols are kept longest first so `age>=5` is never read as `age>` with
/// value `=5`.
#[derive(Debug, Clone, Copy)]
pub struct OperatorTable {
    symbols: &'static [(&'static str, Operator)],
    reverse: &'static [(QueryOp, QueryOp)],
}

const STANDARD_SYMBOLS: &[(&str, Operator)] = &[
    (">=", Operator::Gte),
    ("<=", Operator::Lte),
    ("=", Operator::Eq),
    (">", Operator::Gt),
    ("<", Operator::Lt),
    (":", Operator::Contains),
];

const STANDARD_REVERSE: &[(QueryOp, QueryOp)] = &[
    (QueryOp::Gt, QueryOp::Lte),
    (QueryOp::Gte, QueryOp::Lt),
    (QueryOp::Lte, QueryOp::Gt),
    (QueryOp::Lt, QueryOp::Gte),
];

impl OperatorTable {
    /// The table for `= > >= < <= :`.
    pub const fn standard() -> Self {
        OperatorTable {
            symbols: STANDARD_SYMBOLS,
            reverse: STANDARD_REVERSE,
        }
    }

    /// Finds the operator to split `text` on.
    ///
    /// Symbols are tried in table order; the first symbol occurring anywhere
    /// in the text wins, at its first occurrence. Returns the byte offset,
    /// the symbol and its operator.
    pub fn find(&self, text: &str) -> Option<(usize, &'static str, Operator)> {
        self.symbols
            .iter()
            .find_map(|&(symbol, op)| text.find(symbol).map(|at| (at, symbol, op)))
    }

    /// The logical complement of a range comparison (`>` ↔ `<=`, `>=` ↔ `<`).
    pub fn reverse(&self, op: QueryOp) -> Option<QueryOp> {
        self.reverse
            .iter()
            .find(|(from, _)| *from == op)
            .map(|&(_, to)| to)
    }
}

impl Default for OperatorTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// One token split into its parts, before any schema lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawChunk {
    /// The token as produced by the tokenizer.
    pub text: String,
    /// Leading `-`: the chunk must not match.
    pub exclude: bool,
    /// Field key left of the operator; `None` for a generic search.
    pub field: Option<String>,
    pub operator: Operator,
    /// Text right of the operator (or the whole token for a generic search).
    pub value: String,
}

impl RawChunk {
    /// True when no field was given.
    pub fn is_generic(&self) -> bool {
        self.field.is_none()
    }

    /// True for `[a,b,c]` list syntax.
    pub fn is_list(&self) -> bool {
        self.value.len() >= 2 && self.value.starts_with('[') && self.value.ends_with(']')
    }
}

/// Splits tokens into chunks using an [`OperatorTable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ChunkParser {
    table: OperatorTable,
}

impl ChunkParser {
    pub fn new(table: OperatorTable) -> Self {
        ChunkParser { table }
    }

    pub fn table(&self) -> &OperatorTable {
        &self.table
    }

    /// Parse a single token.
    pub fn parse(&self, token: &str) -> RawChunk {
        let (exclude, rest) = match token.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, token),
        };

        match self.table.find(rest) {
            Some((at, symbol, operator)) => RawChunk {
                text: token.to_string(),
                exclude,
                field: Some(rest[..at].to_string()),
                operator,
                value: rest[at + symbol.len()..].to_string(),
            },
            None => RawChunk {
                text: token.to_string(),
                exclude,
                field: None,
                operator: Operator::Contains,
                value: rest.to_string(),
            },
        }
    }
}

/// Parse a token with the standard operator table.
pub fn parse_chunk(token: &str) -> RawChunk {
    ChunkParser::default().parse(token)
}

#[cfg(test)]
#[path = "chunk_tests.rs"]
mod tests;
