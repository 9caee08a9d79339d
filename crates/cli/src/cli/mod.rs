// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "sq")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compile human-typed search queries into typed filter predicates")]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
pub struct Cli {
    /// Schema file (default: $SQ_SCHEMA, then ./sq.toml)
    #[arg(long = "schema", global = true, value_name = "path")]
    pub schema: Option<PathBuf>,

    /// Log compilation steps to stderr
    #[arg(long = "verbose", short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compile a search query into a predicate
    #[command(after_help = colors::examples("\
Examples:
  sq compile \"name:bob age>=30\"          Two fields, both must match
  sq compile bob                         Search every string and numeric field
  sq compile --now 2024-06-01 -- -created:jan   Exclude a month, resolved against a fixed date
  sq compile \"price=[1,2]\" -o json      Print predicate, filters and meta as JSON"))]
    Compile {
        /// Search string; put it after `--` when it starts with `-`
        #[arg(allow_hyphen_values = true)]
        query: String,

        /// Resolve relative dates against this day (YYYY-MM-DD)
        #[arg(long = "now", value_name = "date")]
        now: Option<String>,

        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// List searchable fields
    #[command(after_help = colors::examples("\
Examples:
  sq fields                         Keys, types and descriptions
  sq fields -o json                 Fields with storage paths as JSON
  sq fields --schema people.toml    Fields from another schema file"))]
    Fields {
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Output JSON Schema for command output
    #[command(subcommand)]
    Schema(SchemaCommand),
}

#[derive(Clone, Copy, Debug, Subcommand)]
pub enum SchemaCommand {
    /// Schema for `sq compile -o json`
    Compile,
    /// Schema for `sq fields -o json`
    Fields,
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
