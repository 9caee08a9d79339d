// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Date values and their granularity ranges.
//!
//! A date typed in a search covers the whole period the user named:
//!
//! ```text
//! 2023              [2023-01-01, 2024-01-01)   year
//! jan, jan_2024     [2024-01-01, 2024-02-01)   month
//! 2023-01-05        [2023-01-05, 2023-01-06)   day
//! ```
//!
//! Month names without a year resolve to their most recent occurrence
//! relative to `today`.

use chrono::{Datelike, Months, NaiveDate};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use crate::chunk::{Operator, OperatorTable};
use crate::error::{Error, Result};
use crate::predicate::QueryOp;

// Compile-time constant patterns, verified by the tests.
static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"^20\d\d$") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});
static YEAR_MONTH_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"^(\d{4})-(\d{1,2})$")
{
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});
static YMD_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"^(\d{4})[-/](\d{1,2})[-/](\d{1,2})$") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });
static MDY_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"^(\d{1,2})[-/](\d{1,2})[-/](\d{4}|\d{2})$") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });
static COMPACT_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"^(\d{4})(\d{2})(\d{2})$")
{
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});
static DAY_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"^(\d{1,2})(?:st|nd|rd|th)?$")
{
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});

const MONTHS: &[(&str, u32)] = &[
    ("january", 1),
    ("jan", 1),
    ("february", 2),
    ("feb", 2),
    ("march", 3),
    ("mar", 3),
    ("april", 4),
    ("apr", 4),
    ("may", 5),
    ("june", 6),
    ("jun", 6),
    ("july", 7),
    ("jul", 7),
    ("august", 8),
    ("aug", 8),
    ("september", 9),
    ("sept", 9),
    ("sep", 9),
    ("october", 10),
    ("oct", 10),
    ("november", 11),
    ("nov", 11),
    ("december", 12),
    ("dec", 12),
];

/// How much of the calendar a typed date covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Year,
    Month,
    Day,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Year => "year",
            Granularity::Month => "month",
            Granularity::Day => "day",
        }
    }
}

/// Half-open interval `[start, end)` of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub granularity: Granularity,
}

impl DateRange {
    /// The whole calendar year. `None` outside chrono's date range.
    pub fn year(year: i32) -> Option<Self> {
        Some(DateRange {
            start: NaiveDate::from_ymd_opt(year, 1, 1)?,
            end: NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?,
            granularity: Granularity::Year,
        })
    }

    /// The whole month. `None` for an invalid month number.
    pub fn month(year: i32, month: u32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)?;
        Some(DateRange {
            start,
            end: start.checked_add_months(Months::new(1))?,
            granularity: Granularity::Month,
        })
    }

    /// A single day.
    pub fn day(date: NaiveDate) -> Option<Self> {
        Some(DateRange {
            start: date,
            end: date.succ_opt()?,
            granularity: Granularity::Day,
        })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }
}

/// Resolve date text to the range it names.
///
/// The text is lowercased, `_` is read as a space and runs of whitespace
/// are collapsed, so `Jan_2024`, `jan 2024` and `JAN  2024` agree.
///
/// # Errors
///
/// Returns [`Error::InvalidDateFormat`] if the text is not a recognised
/// year, month or day.
pub fn resolve_date(raw: &str, today: NaiveDate) -> Result<DateRange> {
    let normalized = raw.to_lowercase().replace('_', " ");
    let words: Vec<&str> = normalized
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|w| !w.is_empty())
        .collect();

    let range = match words.as_slice() {
        [word] if YEAR_RE.is_match(word) => word.parse().ok().and_then(DateRange::year),
        _ => month_range(&words, today).or_else(|| day_of(&words, today).and_then(DateRange::day)),
    };
    range.ok_or_else(|| Error::InvalidDateFormat(raw.to_string()))
}

/// Month number for a full or abbreviated English month name.
pub fn month_number(word: &str) -> Option<u32> {
    let lower = word.to_lowercase();
    MONTHS
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|&(_, n)| n)
}

fn month_range(words: &[&str], today: NaiveDate) -> Option<DateRange> {
    match words {
        [month] => {
            if let Some(caps) = YEAR_MONTH_RE.captures(month) {
                return DateRange::month(caps[1].parse().ok()?, caps[2].parse().ok()?);
            }
            let month = month_number(month)?;
            let range = DateRange::month(today.year(), month)?;
            // No year given: the most recent such month, never a future one.
            if range.start > today {
                DateRange::month(today.year() - 1, month)
            } else {
                Some(range)
            }
        }
        [first, second] if YEAR_RE.is_match(first) => {
            DateRange::month(first.parse().ok()?, month_number(second)?)
        }
        [first, second] if YEAR_RE.is_match(second) => {
            DateRange::month(second.parse().ok()?, month_number(first)?)
        }
        _ => None,
    }
}

fn day_of(words: &[&str], today: NaiveDate) -> Option<NaiveDate> {
    match words {
        ["today"] => Some(today),
        ["yesterday"] => today.pred_opt(),
        ["tomorrow"] => today.succ_opt(),
        [word] => numeric_day(word),
        [month, day] => ymd(today.year(), month_number(month)?, day_number(day)?),
        [first, second, third] => {
            if let Some(month) = month_number(first) {
                ymd(full_year(third)?, month, day_number(second)?)
            } else if let Some(month) = month_number(second) {
                match full_year(first) {
                    Some(year) => ymd(year, month, day_number(third)?),
                    None => ymd(full_year(third)?, month, day_number(first)?),
                }
            } else {
                None
            }
        }
        _ => None,
    }
}

fn numeric_day(word: &str) -> Option<NaiveDate> {
    if let Some(caps) = YMD_RE.captures(word).or_else(|| COMPACT_RE.captures(word)) {
        return ymd(caps[1].parse().ok()?, caps[2].parse().ok()?, caps[3].parse().ok()?);
    }
    let caps = MDY_RE.captures(word)?;
    let year = match &caps[3] {
        short if short.len() == 2 => two_digit_year(short.parse().ok()?),
        long => long.parse().ok()?,
    };
    ymd(year, caps[1].parse().ok()?, caps[2].parse().ok()?)
}

fn ymd(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

fn day_number(word: &str) -> Option<u32> {
    DAY_RE.captures(word)?[1].parse().ok()
}

fn full_year(word: &str) -> Option<i32> {
    if word.len() == 4 && word.bytes().all(|b| b.is_ascii_digit()) {
        word.parse().ok()
    } else {
        None
    }
}

// POSIX `%y`: 69-99 are 19xx, 00-68 are 20xx.
fn two_digit_year(yy: i32) -> i32 {
    if yy >= 69 {
        1900 + yy
    } else {
        2000 + yy
    }
}

/// How the clauses of a date comparison combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum Join {
    And,
    Or,
}

impl Join {
    /// Keyword used in rendered filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Join::And => "AND",
            Join::Or => "OR",
        }
    }
}

/// One bound of a date comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateClause {
    pub op: QueryOp,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateClauses {
    pub clauses: Vec<DateClause>,
    pub join: Join,
}

/// The bounds that compare a field against `range` with `op`.
///
/// `=` and `:` select the whole range. `>` behaves like `>=` and `<` like
/// `<=`, both against the range start. An excluded comparison reverses each
/// bound through `table` and joins them with OR.
pub fn date_clauses(
    range: &DateRange,
    op: Operator,
    exclude: bool,
    table: &OperatorTable,
) -> DateClauses {
    let bounds = match op {
        Operator::Eq | Operator::Contains => {
            vec![(QueryOp::Gte, range.start), (QueryOp::Lt, range.end)]
        }
        Operator::Gt | Operator::Gte => vec![(QueryOp::Gte, range.start)],
        Operator::Lt | Operator::Lte => vec![(QueryOp::Lte, range.start)],
    };

    let clauses = bounds
        .into_iter()
        .map(|(op, date)| DateClause {
            op: if exclude {
                table.reverse(op).unwrap_or(op)
            } else {
                op
            },
            date,
        })
        .collect();

    DateClauses {
        clauses,
        join: if exclude { Join::Or } else { Join::And },
    }
}

#[cfg(test)]
#[path = "date_tests.rs"]
mod tests;
