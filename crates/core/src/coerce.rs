// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in coercions from raw chunk text to typed values.
//!
//! These run unless a field declares its own [`Modifier`](crate::Modifier).
//! They are public so custom modifiers can delegate to them.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::value::Number;

// Compile-time constant patterns, verified by the tests.
static INT_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"^-?\d+$") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});
static FLOAT_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"^-?\d+\.\d+$") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});
static DECIMAL_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"^[+-]?(?:\d+(?:\.(\d*))?|\.(\d+))$") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });

/// Literals that mean "no value" for any field.
pub const NONE_LITERALS: &[&str] = &["none", "null"];

const TRUE_LITERALS: &[&str] = &["t", "true", "1", "y", "yes"];
const FALSE_LITERALS: &[&str] = &["f", "false", "0", "n", "no"];

/// Returns true for `none` / `null` in any letter case.
pub fn is_none(raw: &str) -> bool {
    let lower = raw.to_lowercase();
    NONE_LITERALS.contains(&lower.as_str())
}

/// Coerce a boolean literal (case-insensitive).
pub fn boolean(raw: &str) -> Result<bool> {
    let lower = raw.to_lowercase();
    if TRUE_LITERALS.contains(&lower.as_str()) {
        Ok(true)
    } else if FALSE_LITERALS.contains(&lower.as_str()) {
        Ok(false)
    } else {
        Err(Error::InvalidBoolValue(raw.to_string()))
    }
}

/// Coerce an integer (`-?\d+`) or decimal (`-?\d+\.\d+`) literal.
pub fn number(raw: &str) -> Result<Number> {
    let invalid = || Error::InvalidNumericValue(raw.to_string());
    if INT_RE.is_match(raw) {
        return raw.parse::<i64>().map(Number::Int).map_err(|_| invalid());
    }
    if FLOAT_RE.is_match(raw) {
        return raw.parse::<f64>().map(Number::Float).map_err(|_| invalid());
    }
    Err(invalid())
}

/// A plain decimal number together with the precision it was typed with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decimal {
    pub value: f64,
    /// Digits after the decimal point (`0` if none).
    pub places: u32,
}

/// Reads text like `5`, `-5`, `5.25`, `.5` or `5.` as a decimal number.
///
/// Exponents, `inf` and `nan` are not numbers here.
pub fn decimal(raw: &str) -> Option<Decimal> {
    let caps = DECIMAL_RE.captures(raw)?;
    let places = caps
        .get(1)
        .or_else(|| caps.get(2))
        .map_or(0, |m| m.as_str().len());
    let value = raw.parse::<f64>().ok()?;
    Some(Decimal {
        value,
        places: u32::try_from(places).ok()?,
    })
}

/// Members of `[a, b, c]` list syntax, trimmed; `None` if not a list.
pub fn list_members(raw: &str) -> Option<Vec<&str>> {
    let inner = raw.strip_prefix('[')?.strip_suffix(']')?;
    Some(inner.split(',').map(str::trim).collect())
}

#[cfg(test)]
#[path = "coerce_tests.rs"]
mod tests;
