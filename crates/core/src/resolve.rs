// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema lookup and typed value resolution for a parsed chunk.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. the field key must exist in the schema
//! 2. `none` / `null` is an is-null test on any field
//! 3. the operator must suit the field type
//! 4. list syntax requires `=`
//! 5. the value is coerced (modifier or built-in)

use chrono::NaiveDate;
use serde::Serialize;

use crate::chunk::{Operator, RawChunk};
use crate::coerce;
use crate::date::resolve_date;
use crate::error::{Error, Result};
use crate::predicate::QueryOp;
use crate::schema::{FieldType, Schema, SearchField};
use crate::value::{Number, TypedValue};

/// A chunk after schema lookup and value coercion.
///
/// On failure `error` is set and `value`/`query_op` are left empty; the
/// chunk still carries its field (when known) so callers can report it.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedChunk {
    pub raw: RawChunk,
    #[serde(skip)]
    pub field: Option<SearchField>,
    /// Type the chunk is searched as: the field's declared type, or
    /// `string` for a generic search.
    pub search_type: FieldType,
    pub value: Option<TypedValue>,
    pub query_op: Option<QueryOp>,
    #[serde(skip)]
    pub error: Option<Error>,
}

impl ResolvedChunk {
    fn new(raw: RawChunk) -> Self {
        ResolvedChunk {
            raw,
            field: None,
            search_type: FieldType::String,
            value: None,
            query_op: None,
            error: None,
        }
    }

    pub fn is_generic(&self) -> bool {
        self.raw.is_generic()
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Resolve a chunk against `schema`, reading relative dates from `today`.
pub fn resolve(raw: RawChunk, schema: &Schema, today: NaiveDate) -> ResolvedChunk {
    let mut chunk = ResolvedChunk::new(raw);

    let Some(key) = &chunk.raw.field else {
        chunk.value = Some(TypedValue::Str(chunk.raw.value.clone()));
        chunk.query_op = Some(QueryOp::Contains);
        return chunk;
    };
    let Some(field) = schema.get(key) else {
        tracing::debug!("unknown field {:?} in {:?}", key, chunk.raw.text);
        chunk.error = Some(Error::UnknownField(key.clone()));
        return chunk;
    };

    chunk.search_type = field.field_type;
    match typed_value(&chunk.raw, field, today) {
        Ok((value, op)) => {
            chunk.value = Some(value);
            chunk.query_op = Some(op);
        }
        Err(e) => {
            tracing::debug!("rejected chunk {:?}: {}", chunk.raw.text, e);
            chunk.error = Some(e);
        }
    }
    chunk.field = Some(field.clone());
    chunk
}

fn typed_value(
    raw: &RawChunk,
    field: &SearchField,
    today: NaiveDate,
) -> Result<(TypedValue, QueryOp)> {
    if coerce::is_none(&raw.value) {
        return Ok((TypedValue::None, QueryOp::IsNull));
    }

    if !field.field_type.accepts(raw.operator) {
        return Err(Error::TypeMismatch {
            field: field.key.clone(),
            field_type: field.field_type,
            op: raw.operator.symbol().to_string(),
        });
    }

    if raw.is_list() {
        if raw.operator != Operator::Eq {
            return Err(Error::InvalidListOperation(raw.operator.symbol().to_string()));
        }
        let members = coerce::list_members(&raw.value).unwrap_or_default();
        let values = members
            .into_iter()
            .map(|member| coerce_value(member, field, today))
            .collect::<Result<Vec<_>>>()?;
        return Ok((TypedValue::set(values), QueryOp::In));
    }

    // The window width comes from the typed precision, so modifiers are bypassed.
    if field.field_type == FieldType::Numeric && raw.operator == Operator::Contains {
        let decimal = coerce::decimal(&raw.value)
            .ok_or_else(|| Error::InvalidNumericValue(raw.value.clone()))?;
        let number = coerce::number(&raw.value).unwrap_or(Number::Float(decimal.value));
        return Ok((TypedValue::Number(number), QueryOp::Contains));
    }

    let value = coerce_value(&raw.value, field, today)?;
    Ok((value, raw.operator.query_op()))
}

fn coerce_value(raw: &str, field: &SearchField, today: NaiveDate) -> Result<TypedValue> {
    if let Some(modifier) = &field.modifier {
        return modifier.apply(raw).map_err(|message| Error::Modifier {
            field: field.key.clone(),
            message,
        });
    }
    match field.field_type {
        FieldType::Bool => coerce::boolean(raw).map(TypedValue::Bool),
        FieldType::Numeric => coerce::number(raw).map(TypedValue::Number),
        FieldType::Date => resolve_date(raw, today).map(TypedValue::Date),
        FieldType::String => Ok(TypedValue::Str(raw.to_string())),
    }
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
