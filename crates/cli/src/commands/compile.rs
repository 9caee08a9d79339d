// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compile command implementation.

use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;
use sq_core::{Clock, CompiledSearch, FixedClock, Schema, Search, SystemClock};

use crate::cli::OutputFormat;
use crate::error::{Error, Result};
use crate::schema::compile::CompileOutputJson;

/// Run the compile command.
///
/// Output goes to stdout even when the search has errors; the errors are
/// repeated on stderr and the command fails.
pub fn run(
    schema_path: Option<&Path>,
    query: &str,
    now: Option<&str>,
    output: OutputFormat,
) -> Result<()> {
    let (config, schema) = super::load_schema(schema_path)?;
    let today = match now {
        Some(raw) => parse_date(raw)?,
        None => SystemClock::with_offset(config.utc_offset()?).today(),
    };

    let compiled = compile(&schema, query, today);
    let stdout = std::io::stdout();
    write(&mut stdout.lock(), &compiled, &schema, today, output)?;

    if compiled.is_ok() {
        return Ok(());
    }
    if matches!(output, OutputFormat::Text) {
        for message in compiled.error_messages() {
            eprintln!("error: {}", message);
        }
    }
    Err(Error::SearchFailed {
        count: compiled.errors.len(),
    })
}

/// Compile `query` with "today" pinned to `today`.
pub fn compile(schema: &Schema, query: &str, today: NaiveDate) -> CompiledSearch {
    Search::new(schema)
        .with_clock(FixedClock::new(today))
        .compile(query)
}

/// Parse the `--now` argument.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| Error::InvalidDate(raw.to_string()))
}

pub(crate) fn write(
    out: &mut impl Write,
    compiled: &CompiledSearch,
    schema: &Schema,
    today: NaiveDate,
    output: OutputFormat,
) -> Result<()> {
    match output {
        OutputFormat::Text => {
            writeln!(out, "predicate: {}", compiled.predicate)?;
            if !compiled.filters.is_empty() {
                writeln!(out, "filters:")?;
                for filter in &compiled.filters {
                    writeln!(out, "  {} ({})", filter.filter, filter.search_type)?;
                }
            }
            if !compiled.warnings.is_empty() {
                writeln!(out, "warnings:")?;
                for warning in &compiled.warnings {
                    writeln!(out, "  {}", warning)?;
                }
            }
        }
        OutputFormat::Json => {
            let json = CompileOutputJson::new(compiled, schema, today);
            writeln!(out, "{}", serde_json::to_string_pretty(&json)?)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "compile_tests.rs"]
mod tests;
