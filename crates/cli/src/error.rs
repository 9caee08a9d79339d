// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the sqrs library.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Search(#[from] sq_core::Error),

    #[error("schema file not found: {0}\n  hint: pass --schema <path>, set SQ_SCHEMA, or create ./sq.toml")]
    SchemaNotFound(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("invalid date: '{0}'\n  hint: use YYYY-MM-DD")]
    InvalidDate(String),

    #[error("invalid utc offset: '{0}'\n  hint: use +HH:MM, -HH:MM or UTC")]
    InvalidOffset(String),

    #[error("search failed with {count} error(s)")]
    SearchFailed { count: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for sqrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
