// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod compile;
pub mod fields;
pub mod schema;

use std::path::Path;

use sq_core::Schema;

use crate::config::{schema_path, Config};
use crate::error::Result;

/// Helper to load the schema file and build the search schema.
pub fn load_schema(explicit: Option<&Path>) -> Result<(Config, Schema)> {
    let path = schema_path(explicit);
    let config = Config::load(&path)?;
    let schema = config.schema()?;
    if schema.is_empty() {
        tracing::warn!("schema {} defines no fields", path.display());
    }
    Ok((config, schema))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
