// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for sq-core operations.

use thiserror::Error;

use crate::schema::FieldType;

/// All possible errors that can occur while building a schema or compiling
/// a search query.
///
/// Chunk-level errors are collected per token; they never abort the
/// resolution of sibling tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid query: {0}")]
    MalformedQuery(String),

    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("invalid operator '{op}' for {field_type} field: {field}")]
    TypeMismatch {
        field: String,
        field_type: FieldType,
        op: String,
    },

    #[error("invalid operation in list search: '{0}'\n  hint: lists like [a,b] only work with '='")]
    InvalidListOperation(String),

    #[error("invalid bool value: '{0}'\n  hint: use true/false, yes/no, t/f, y/n or 1/0")]
    InvalidBoolValue(String),

    #[error("invalid numeric value: '{0}'")]
    InvalidNumericValue(String),

    #[error("invalid date format: '{0}'")]
    InvalidDateFormat(String),

    #[error("invalid value for {field}: {message}")]
    Modifier { field: String, message: String },

    #[error("duplicate field key: '{0}'")]
    DuplicateField(String),

    #[error("invalid field type: '{0}'\n  hint: valid types are: bool, date, numeric, string")]
    InvalidFieldType(String),
}

/// A specialized Result type for sq-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
