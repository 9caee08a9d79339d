// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shell-style splitting of the raw search string.
//!
//! Words are separated by whitespace. Single quotes keep their content
//! literally, double quotes allow `\"` and `\\` escapes, and a backslash
//! outside quotes escapes the next character. Quotes can start mid-word,
//! so `name:"bob smith"` is the single token `name:bob smith`.
//!
//! Boolean keywords (`and`, `or`, `&&`, ...) are not part of the language;
//! they are dropped and reported as warnings.

use crate::error::{Error, Result};

/// Tokens that are ignored wherever they appear (compared lowercased).
pub const STOPWORDS: &[&str] = &["and", "&&", "&", "or", "||", "|"];

/// Result of tokenizing a search string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens {
    /// Tokens to parse as chunks, in input order.
    pub tokens: Vec<String>,
    /// One `ignored: <token>` message per dropped stopword.
    pub warnings: Vec<String>,
}

/// Split a raw search string into chunk tokens.
///
/// # Errors
///
/// Returns [`Error::MalformedQuery`] on an unterminated quote or a trailing
/// backslash; no tokens are produced in that case.
pub fn tokenize(raw: &str) -> Result<Tokens> {
    let mut result = Tokens::default();
    for word in split_words(raw)? {
        if is_stopword(&word) {
            tracing::debug!("ignoring stopword {:?}", word);
            result.warnings.push(format!("ignored: {word}"));
        } else {
            result.tokens.push(word);
        }
    }
    Ok(result)
}

/// Returns true if the token is a boolean keyword the language ignores.
pub fn is_stopword(token: &str) -> bool {
    let lower = token.to_lowercase();
    STOPWORDS.contains(&lower.as_str())
}

fn split_words(raw: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        match c {
            c if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            '\'' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(ch) => current.push(ch),
                        None => return Err(no_closing_quotation()),
                    }
                }
            }
            '"' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(ch @ ('"' | '\\')) => current.push(ch),
                            Some(ch) => {
                                current.push('\\');
                                current.push(ch);
                            }
                            None => return Err(no_closing_quotation()),
                        },
                        Some(ch) => current.push(ch),
                        None => return Err(no_closing_quotation()),
                    }
                }
            }
            '\\' => {
                in_word = true;
                match chars.next() {
                    Some(ch) => current.push(ch),
                    None => {
                        return Err(Error::MalformedQuery("no escaped character".to_string()))
                    }
                }
            }
            ch => {
                in_word = true;
                current.push(ch);
            }
        }
    }

    if in_word {
        words.push(current);
    }
    Ok(words)
}

fn no_closing_quotation() -> Error {
    Error::MalformedQuery("no closing quotation".to_string())
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
