//! Calendar date ranges used for availability and stays.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A range of calendar dates, `from` inclusive and `to` exclusive when
/// interpreted as nights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First date of the range.
    pub from: NaiveDate,
    /// Last date of the range.
    pub to: NaiveDate,
}

impl DateRange {
    /// Creates a range. Does not reorder its bounds.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// Whether `to` is strictly after `from`.
    pub fn is_valid(&self) -> bool {
        self.to > self.from
    }

    /// Number of nights between the bounds (0 for an empty or inverted range).
    pub fn nights(&self) -> u64 {
        (self.to - self.from).num_days().max(0) as u64
    }

    /// Whether `other` lies entirely within this range.
    pub fn contains_range(&self, other: &DateRange) -> bool {
        other.from >= self.from && other.to <= self.to
    }

    /// Whether two stays share at least one night. Back-to-back stays
    /// (one checks out the day the other checks in) do not overlap.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.from < other.to && other.from < self.to
    }
}
