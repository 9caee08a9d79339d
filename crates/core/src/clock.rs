// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sources of "today" for date resolution.
//!
//! Month names without a year resolve to their most recent occurrence, and
//! words like `today` resolve relative to the clock, so every search carries
//! a [`Clock`]. Production code uses [`SystemClock`] in the caller's UTC
//! offset; tests pin the date with [`FixedClock`].

use chrono::{FixedOffset, NaiveDate, Offset, Utc};

/// Trait for obtaining the current calendar date.
pub trait Clock: Send + Sync {
    /// Returns today's date in the clock's time zone.
    fn today(&self) -> NaiveDate;
}

/// Wall clock in a fixed UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    /// System clock reading dates in UTC.
    pub fn utc() -> Self {
        SystemClock { offset: Utc.fix() }
    }

    /// System clock reading dates in the given offset.
    pub fn with_offset(offset: FixedOffset) -> Self {
        SystemClock { offset }
    }

    /// The offset dates are read in.
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::utc()
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.offset).date_naive()
    }
}

/// A clock frozen on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        FixedClock { date }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }
}

impl<C: Clock> Clock for &C {
    fn today(&self) -> NaiveDate {
        (*self).today()
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
