//! Calendar types for billing periods
//!
//! Billing works in whole calendar days and whole months: bill amounts are
//! derived from a day count, and ledger queries and reports are scoped to a
//! (year, month) pair.

use chrono::{DateTime, Datelike, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),
}

/// Number of calendar days from `start` to `end`.
///
/// This is the raw signed difference; callers are responsible for passing
/// the dates in order. A guest billed on the day they checked in gets zero
/// days, not an error.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// A calendar month in a specific year, used to scope bills, ledger
/// queries, and reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthRef {
    year: i32,
    month: u32,
}

impl MonthRef {
    /// Creates a month reference, rejecting months outside 1-12
    pub fn new(year: i32, month: u32) -> Result<Self, TemporalError> {
        if !(1..=12).contains(&month) {
            return Err(TemporalError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// The month containing the given date
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current month in local time
    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("validated month always yields a first day")
    }

    /// The following month
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Half-open UTC bounds `[start, end)` covering the month, for
    /// filtering recorded-at timestamps
    pub fn bounds(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        let start = self
            .first_day()
            .and_hms_opt(0, 0, 0)
            .expect("midnight always exists")
            .and_utc();
        let end = self
            .next()
            .first_day()
            .and_hms_opt(0, 0, 0)
            .expect("midnight always exists")
            .and_utc();
        (start, end)
    }

    /// Full month name, e.g. "August"
    pub fn month_name(&self) -> String {
        self.first_day().format("%B").to_string()
    }

    /// Display label, e.g. "August 2025"
    pub fn label(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }

    /// True if the date falls inside this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}
