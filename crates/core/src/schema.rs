// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Searchable field definitions.
//!
//! A [`Schema`] maps the keys users type (`name`, `age`, `created`) to a
//! declared [`FieldType`] and the storage path a backend filters on. It is
//! built once per search context and only ever read during compilation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::chunk::Operator;
use crate::error::{Error, Result};
use crate::value::TypedValue;

/// Declared type of a searchable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Bool,
    Date,
    Numeric,
    String,
}

impl FieldType {
    /// Returns the string representation used in display and config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Bool => "bool",
            FieldType::Date => "date",
            FieldType::Numeric => "numeric",
            FieldType::String => "string",
        }
    }

    /// Whether a field of this type can be searched with `op`.
    ///
    /// | type    | `=` | `>` `>=` `<` `<=` | `:` |
    /// |---------|-----|-------------------|-----|
    /// | bool    | yes | no                | no  |
    /// | date    | yes | yes               | yes |
    /// | numeric | yes | yes               | yes |
    /// | string  | yes | no                | yes |
    pub fn accepts(&self, op: Operator) -> bool {
        match self {
            FieldType::Bool => op == Operator::Eq,
            FieldType::Date | FieldType::Numeric => true,
            FieldType::String => matches!(op, Operator::Eq | Operator::Contains),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bool" | "boolean" => Ok(FieldType::Bool),
            "date" => Ok(FieldType::Date),
            "numeric" | "number" | "num" => Ok(FieldType::Numeric),
            "string" | "str" => Ok(FieldType::String),
            _ => Err(Error::InvalidFieldType(s.to_string())),
        }
    }
}

type ModifierFn = dyn Fn(&str) -> std::result::Result<TypedValue, String> + Send + Sync;

/// Custom coercion for a field's raw value.
///
/// A modifier replaces the built-in coercion for its field. Returning `Err`
/// rejects the chunk with the given message.
#[derive(Clone)]
pub struct Modifier(Arc<ModifierFn>);

impl Modifier {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str) -> std::result::Result<TypedValue, String> + Send + Sync + 'static,
    {
        Modifier(Arc::new(f))
    }

    /// Run the modifier on a raw value.
    pub fn apply(&self, raw: &str) -> std::result::Result<TypedValue, String> {
        (self.0)(raw)
    }
}

impl fmt::Debug for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Modifier(..)")
    }
}

/// One searchable field.
#[derive(Debug, Clone)]
pub struct SearchField {
    /// Key the user types before the operator.
    pub key: String,
    /// Declared type driving coercion and operator checks.
    pub field_type: FieldType,
    /// Storage path handed to the backend (e.g. `account.first_name`).
    pub path: String,
    /// Optional custom coercion.
    pub modifier: Option<Modifier>,
    /// Human readable description.
    pub description: String,
}

impl SearchField {
    /// Creates a field without modifier or description.
    pub fn new(key: impl Into<String>, field_type: FieldType, path: impl Into<String>) -> Self {
        SearchField {
            key: key.into(),
            field_type,
            path: path.into(),
            modifier: None,
            description: String::new(),
        }
    }

    pub fn string(key: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(key, FieldType::String, path)
    }

    pub fn numeric(key: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(key, FieldType::Numeric, path)
    }

    pub fn date(key: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(key, FieldType::Date, path)
    }

    pub fn boolean(key: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(key, FieldType::Bool, path)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifier = Some(modifier);
        self
    }
}

/// Ordered, immutable set of searchable fields keyed by [`SearchField::key`].
///
/// Field order is preserved; generic searches fan out across fields in this
/// order.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<SearchField>,
    index: HashMap<String, usize>,
}

impl Schema {
    /// Builds a schema from fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateField`] if two fields share a key.
    pub fn new(fields: impl IntoIterator<Item = SearchField>) -> Result<Self> {
        let mut schema = Schema::default();
        for field in fields {
            if schema.index.contains_key(&field.key) {
                return Err(Error::DuplicateField(field.key));
            }
            schema.index.insert(field.key.clone(), schema.fields.len());
            schema.fields.push(field);
        }
        Ok(schema)
    }

    /// Looks up a field by its exact key.
    pub fn get(&self, key: &str) -> Option<&SearchField> {
        self.index.get(key).map(|&i| &self.fields[i])
    }

    /// All fields in declaration order.
    pub fn fields(&self) -> &[SearchField] {
        &self.fields
    }

    /// Fields of one declared type, in declaration order.
    pub fn of_type(&self, field_type: FieldType) -> impl Iterator<Item = &SearchField> {
        self.fields
            .iter()
            .filter(move |f| f.field_type == field_type)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
