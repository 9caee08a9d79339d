// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema command implementation.
//!
//! Prints the JSON Schema of each command's `-o json` output.

use crate::cli::SchemaCommand;
use crate::error::Result;
use crate::schema::{compile, fields};
use schemars::schema::RootSchema;
use schemars::schema_for;

/// JSON Schema for one command's `-o json` output.
pub fn schema(cmd: SchemaCommand) -> RootSchema {
    match cmd {
        SchemaCommand::Compile => schema_for!(compile::CompileOutputJson),
        SchemaCommand::Fields => schema_for!(fields::FieldsOutputJson),
    }
}

/// Run the schema command.
pub fn run(cmd: SchemaCommand) -> Result<()> {
    let json = serde_json::to_string_pretty(&schema(cmd))?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
