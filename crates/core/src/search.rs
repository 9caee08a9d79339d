// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compilation of a whole search string.
//!
//! Every token is parsed and resolved even after an error so the caller
//! sees all problems at once. A query with any error compiles to
//! [`Predicate::Empty`]: a rejected search matches nothing rather than
//! everything.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::chunk::{ChunkParser, OperatorTable};
use crate::clock::{Clock, SystemClock};
use crate::error::Error;
use crate::predicate::{build, Predicate};
use crate::render::render;
use crate::resolve::{resolve, ResolvedChunk};
use crate::schema::{FieldType, Schema};
use crate::token::tokenize;

/// Display string of one successfully resolved chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct RenderedFilter {
    pub filter: String,
    pub search_type: FieldType,
}

/// Result of compiling one search string.
#[derive(Debug, Clone)]
pub struct CompiledSearch {
    /// The search string as given.
    pub query: String,
    pub predicate: Predicate,
    pub chunks: Vec<ResolvedChunk>,
    /// One entry per chunk without an error, in token order.
    pub filters: Vec<RenderedFilter>,
    /// Ignored stopwords.
    pub warnings: Vec<String>,
    pub errors: Vec<Error>,
}

impl CompiledSearch {
    fn new(query: &str) -> Self {
        CompiledSearch {
            query: query.to_string(),
            predicate: Predicate::All,
            chunks: Vec::new(),
            filters: Vec::new(),
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Summary for search UIs: available fields plus what was applied.
    pub fn meta(&self, schema: &Schema) -> SearchMeta {
        let fields = schema
            .fields()
            .iter()
            .map(|f| (f.key.clone(), f.description.clone()))
            .collect();
        let mut meta = SearchMeta {
            fields,
            query: None,
            filters: None,
            warnings: None,
            errors: None,
        };
        if !self.query.is_empty() {
            meta.query = Some(self.query.clone());
            meta.filters = Some(self.filters.clone());
        }
        if !self.warnings.is_empty() {
            meta.warnings = Some(self.warnings.clone());
        }
        if !self.errors.is_empty() {
            meta.errors = Some(self.error_messages().join(", "));
        }
        meta
    }
}

/// Serializable summary returned by [`CompiledSearch::meta`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct SearchMeta {
    /// Field key to description.
    pub fields: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<RenderedFilter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
    /// Comma-joined error messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<String>,
}

/// A search context: schema, clock and operator table.
///
/// ```
/// use sq_core::{FixedClock, Search, Schema, SearchField};
/// use chrono::NaiveDate;
///
/// let schema = Schema::new([
///     SearchField::string("name", "name"),
///     SearchField::date("created", "created_at"),
/// ])?;
/// let today = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap_or_default();
/// let compiled = Search::new(&schema)
///     .with_clock(FixedClock::new(today))
///     .compile("name:bob created:jan");
/// assert!(compiled.is_ok());
/// # Ok::<(), sq_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Search<'a, C: Clock = SystemClock> {
    schema: &'a Schema,
    clock: C,
    parser: ChunkParser,
}

impl<'a> Search<'a> {
    /// Search over `schema` reading dates from the system clock in UTC.
    pub fn new(schema: &'a Schema) -> Self {
        Search {
            schema,
            clock: SystemClock::utc(),
            parser: ChunkParser::default(),
        }
    }
}

impl<'a, C: Clock> Search<'a, C> {
    pub fn with_clock<D: Clock>(self, clock: D) -> Search<'a, D> {
        Search {
            schema: self.schema,
            clock,
            parser: self.parser,
        }
    }

    pub fn with_operators(mut self, table: OperatorTable) -> Self {
        self.parser = ChunkParser::new(table);
        self
    }

    pub fn schema(&self) -> &Schema {
        self.schema
    }

    /// Compile a search string.
    pub fn compile(&self, raw: &str) -> CompiledSearch {
        let mut compiled = CompiledSearch::new(raw);

        let tokens = match tokenize(raw) {
            Ok(tokens) => tokens,
            Err(e) => {
                tracing::warn!("rejected search {:?}: {}", raw, e);
                compiled.predicate = Predicate::Empty;
                compiled.errors.push(e);
                return compiled;
            }
        };
        for warning in &tokens.warnings {
            tracing::warn!("search {:?}: {}", raw, warning);
        }
        compiled.warnings = tokens.warnings;

        let today = self.clock.today();
        let table = self.parser.table();
        for token in &tokens.tokens {
            let chunk = resolve(self.parser.parse(token), self.schema, today);
            tracing::debug!(
                "chunk {:?} -> {} {:?}",
                token,
                chunk.search_type,
                chunk.query_op
            );
            match (&chunk.error, render(&chunk, table)) {
                (Some(e), _) => compiled.errors.push(e.clone()),
                (None, Some(filter)) => compiled.filters.push(RenderedFilter {
                    filter,
                    search_type: chunk.search_type,
                }),
                (None, None) => {}
            }
            compiled.chunks.push(chunk);
        }

        compiled.predicate = if compiled.errors.is_empty() {
            Predicate::all_of(
                compiled
                    .chunks
                    .iter()
                    .map(|chunk| build(chunk, self.schema, table)),
            )
        } else {
            tracing::warn!(
                "{} errors found in search {:?}",
                compiled.errors.len(),
                raw
            );
            Predicate::Empty
        };
        tracing::debug!("compiled {:?} -> {}", raw, compiled.predicate);
        compiled
    }
}

/// Compile `raw` against `schema` with the UTC system clock.
pub fn compile(raw: &str, schema: &Schema) -> CompiledSearch {
    Search::new(schema).compile(raw)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
