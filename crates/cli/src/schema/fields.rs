// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `sq fields` JSON output.

use schemars::JsonSchema;
use serde::Serialize;
use sq_core::{FieldType, SearchField};

/// One searchable field.
#[derive(Debug, JsonSchema, Serialize)]
pub struct FieldJson {
    /// Key typed before the operator.
    pub key: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Storage path the predicate filters on.
    pub path: String,
    pub description: String,
}

impl From<&SearchField> for FieldJson {
    fn from(field: &SearchField) -> Self {
        FieldJson {
            key: field.key.clone(),
            field_type: field.field_type,
            path: field.path.clone(),
            description: field.description.clone(),
        }
    }
}

/// JSON output structure for the fields command.
///
/// The fields command returns an array in schema order.
#[derive(Debug, JsonSchema, Serialize)]
#[serde(transparent)]
pub struct FieldsOutputJson(pub Vec<FieldJson>);
