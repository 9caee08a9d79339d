// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fields command implementation.

use std::io::Write;
use std::path::Path;

use sq_core::Schema;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::schema::fields::{FieldJson, FieldsOutputJson};

/// Run the fields command.
pub fn run(schema_path: Option<&Path>, output: OutputFormat) -> Result<()> {
    let (_, schema) = super::load_schema(schema_path)?;
    let stdout = std::io::stdout();
    write(&mut stdout.lock(), &schema, output)
}

pub(crate) fn write(out: &mut impl Write, schema: &Schema, output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Text => {
            let width = schema.fields().iter().map(|f| f.key.len()).max().unwrap_or(0);
            for field in schema.fields() {
                let line = format!(
                    "{:<width$}  {:<7}  {}",
                    field.key,
                    field.field_type.as_str(),
                    field.description,
                    width = width
                );
                writeln!(out, "{}", line.trim_end())?;
            }
        }
        OutputFormat::Json => {
            let json = FieldsOutputJson(schema.fields().iter().map(FieldJson::from).collect());
            writeln!(out, "{}", serde_json::to_string_pretty(&json)?)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "fields_tests.rs"]
mod tests;
