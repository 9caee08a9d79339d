// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! sqrs - the library behind the `sq` command.
//!
//! `sq` loads a field schema from a TOML file and compiles search strings
//! against it with [`sq_core`], printing the predicate tree, the display
//! filters and any warnings or errors as text or JSON. It never executes
//! predicates.
//!
//! ```rust,ignore
//! use sqrs::{Cli, run};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["sq", "compile", "name:bob", "--schema", "people.toml"]);
//! run(cli)?;
//! ```

mod cli;
pub mod colors;
mod commands;
pub mod config;
pub mod env;
pub mod error;
pub mod help;
pub mod logging;
mod schema;

pub use cli::{Cli, Command, OutputFormat, SchemaCommand};
pub use config::Config;
pub use error::{Error, Result};

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    let schema = cli.schema.as_deref();
    match cli.command {
        Command::Compile { query, now, output } => {
            commands::compile::run(schema, &query, now.as_deref(), output)
        }
        Command::Fields { output } => commands::fields::run(schema, output),
        Command::Schema(cmd) => commands::schema::run(cmd),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
