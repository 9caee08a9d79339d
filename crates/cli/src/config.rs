// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema file loading.
//!
//! The schema file is TOML:
//!
//! ```toml
//! [search]
//! utc_offset = "+02:00"
//!
//! [[field]]
//! key = "name"
//! type = "string"
//! path = "account.name"
//! description = "Full name"
//! ```
//!
//! `path` defaults to the key and `description` to empty. The file is found
//! via `--schema`, then `SQ_SCHEMA`, then `./sq.toml`.

use chrono::FixedOffset;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sq_core::{FieldType, Schema, SearchField};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::env;
use crate::error::{Error, Result};

/// Default schema file name, looked up in the working directory.
pub const DEFAULT_SCHEMA_FILE: &str = "sq.toml";

static OFFSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"^([+-])(\d{2}):?(\d{2})$") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    }
});

/// Parsed schema file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default, rename = "field")]
    pub fields: Vec<FieldConfig>,
}

/// The `[search]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Offset used to read "today" from the system clock (default UTC).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc_offset: Option<String>,
}

/// One `[[field]]` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldConfig {
    pub key: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl Config {
    /// Parses a schema file's contents.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("failed to parse schema: {}", e)))
    }

    /// Loads the schema file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::SchemaNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        let config = Self::parse(&content)?;
        tracing::debug!(
            "loaded {} fields from {}",
            config.fields.len(),
            path.display()
        );
        Ok(config)
    }

    /// Builds the search schema, validating field types and keys.
    pub fn schema(&self) -> Result<Schema> {
        let mut fields = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            let field_type: FieldType = field.field_type.parse()?;
            let path = field.path.clone().unwrap_or_else(|| field.key.clone());
            fields.push(
                SearchField::new(field.key.clone(), field_type, path)
                    .with_description(field.description.clone()),
            );
        }
        Ok(Schema::new(fields)?)
    }

    /// The configured UTC offset, or UTC.
    pub fn utc_offset(&self) -> Result<FixedOffset> {
        match &self.search.utc_offset {
            Some(raw) => parse_offset(raw),
            None => parse_offset("UTC"),
        }
    }
}

/// Resolves which schema file to load.
pub fn schema_path(explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .or_else(env::schema_path)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SCHEMA_FILE))
}

/// Parses `+HH:MM`, `-HHMM`, `Z` or `UTC`.
pub fn parse_offset(raw: &str) -> Result<FixedOffset> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("utc") || trimmed == "Z" {
        return FixedOffset::east_opt(0).ok_or_else(|| Error::InvalidOffset(raw.to_string()));
    }
    let caps = OFFSET_RE
        .captures(trimmed)
        .ok_or_else(|| Error::InvalidOffset(raw.to_string()))?;
    let hours: i32 = caps[2].parse().map_err(|_| Error::InvalidOffset(raw.to_string()))?;
    let minutes: i32 = caps[3].parse().map_err(|_| Error::InvalidOffset(raw.to_string()))?;
    if hours > 23 || minutes > 59 {
        return Err(Error::InvalidOffset(raw.to_string()));
    }
    let seconds = (hours * 3600 + minutes * 60) * if &caps[1] == "-" { -1 } else { 1 };
    FixedOffset::east_opt(seconds).ok_or_else(|| Error::InvalidOffset(raw.to_string()))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
