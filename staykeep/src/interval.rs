//! Stay interval types for booking date ranges.
//!
//! A stay is modeled as a half-open range of calendar days: the check-in
//! day is occupied, the check-out day is not. Two stays on the same room
//! may share a boundary day (one guest leaves the morning another
//! arrives), which the half-open representation expresses directly.
//!
//! Dates are `chrono::NaiveDate` values. There is no time-of-day
//! component anywhere in the model, so midnight-normalization bugs are
//! unrepresentable.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when an interval would be empty or inverted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid interval: check-out {end} must be after check-in {start}")]
pub struct InvalidIntervalError {
    /// The rejected check-in date.
    pub start: NaiveDate,
    /// The rejected check-out date.
    pub end: NaiveDate,
}

/// A half-open date interval `[start, end)` representing a stay.
///
/// The first night is `start`; the last night is the day before `end`.
/// Construction rejects empty and inverted ranges, so every value of this
/// type covers at least one night.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use staykeep::StayInterval;
///
/// let date = |s: &str| s.parse::<NaiveDate>().unwrap();
/// let stay = StayInterval::new(date("2026-07-01"), date("2026-07-04")).unwrap();
/// assert_eq!(stay.nights(), 3);
/// assert!(stay.contains(date("2026-07-03")));
/// assert!(!stay.contains(date("2026-07-04")));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StayInterval {
    start: NaiveDate,
    end: NaiveDate,
}

impl StayInterval {
    /// Create a new interval, validating that `start < end`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIntervalError` if `start >= end`. Same-day
    /// "stays" are rejected; the shortest representable stay is one night.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, InvalidIntervalError> {
        if start >= end {
            return Err(InvalidIntervalError { start, end });
        }
        Ok(Self { start, end })
    }

    /// Get the check-in date (first occupied night).
    #[must_use]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Get the check-out date (first day no longer occupied).
    #[must_use]
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of nights covered by the interval. Always at least 1.
    #[must_use]
    pub fn nights(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Check whether two intervals share at least one night.
    ///
    /// Back-to-back stays do not overlap: `[a, b)` and `[b, c)` are
    /// disjoint, so a check-out day can be another booking's check-in day.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use staykeep::StayInterval;
    ///
    /// let date = |s: &str| s.parse::<NaiveDate>().unwrap();
    /// let first = StayInterval::new(date("2026-07-01"), date("2026-07-04")).unwrap();
    /// let second = StayInterval::new(date("2026-07-04"), date("2026-07-06")).unwrap();
    /// assert!(!first.overlaps(&second));
    /// ```
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Check whether a single calendar day is an occupied night of this
    /// stay. The check-out day is not occupied.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    /// Iterate over the occupied nights, in ascending order.
    ///
    /// Yields exactly `nights()` dates, from `start` up to but not
    /// including `end`.
    pub fn covered_dates(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        let end = self.end;
        std::iter::successors(Some(start), move |d| d.succ_opt()).take_while(move |d| *d < end)
    }
}

impl fmt::Display for StayInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
