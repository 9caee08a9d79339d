// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `sq compile` JSON output.

use schemars::JsonSchema;
use serde::Serialize;
use sq_core::{CompiledSearch, Predicate, RenderedFilter, Schema, SearchMeta};

/// JSON output structure for the compile command.
#[derive(Debug, JsonSchema, Serialize)]
pub struct CompileOutputJson {
    /// The search string as given.
    pub query: String,
    /// Date used to resolve relative dates, as YYYY-MM-DD.
    pub today: String,
    /// Predicate tree; `"empty"` when the search has errors.
    pub predicate: Predicate,
    /// Display string per valid chunk.
    pub filters: Vec<RenderedFilter>,
    /// Ignored tokens.
    pub warnings: Vec<String>,
    /// One message per rejected chunk.
    pub errors: Vec<String>,
    /// Summary for search UIs.
    pub meta: SearchMeta,
}

impl CompileOutputJson {
    pub fn new(compiled: &CompiledSearch, schema: &Schema, today: chrono::NaiveDate) -> Self {
        CompileOutputJson {
            query: compiled.query.clone(),
            today: today.format("%Y-%m-%d").to_string(),
            predicate: compiled.predicate.clone(),
            filters: compiled.filters.clone(),
            warnings: compiled.warnings.clone(),
            errors: compiled.error_messages(),
            meta: compiled.meta(schema),
        }
    }
}
