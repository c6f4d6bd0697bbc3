//! Monthly aggregate model.
//!
//! This module defines the [`MonthlyAggregate`] accumulator that sums
//! shift records for one calendar month.

use serde::Serialize;

use super::ShiftRecord;

/// Accumulates shift records for one calendar month.
///
/// Records are kept in arrival order and the running sums are updated
/// as each record is added: total hours always, evening hours always,
/// Sunday hours only when the record falls on a Sunday. All sums are
/// monotonically non-decreasing.
///
/// An aggregate lives for the duration of one aggregation pass; a
/// fresh pass over the record set supersedes it.
///
/// # Example
///
/// ```
/// use salary_tracker::models::{MonthlyAggregate, ShiftRecord};
/// use chrono::NaiveDate;
///
/// let mut aggregate = MonthlyAggregate::new(3);
/// // 2024-03-03 is a Sunday
/// let record = ShiftRecord::new(
///     NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(),
///     9,
///     17,
/// ).unwrap();
/// aggregate.add(record);
///
/// assert_eq!(aggregate.total_hours(), 8);
/// assert_eq!(aggregate.sunday_hours(), 8);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyAggregate {
    month: u32,
    records: Vec<ShiftRecord>,
    total_hours: u32,
    evening_hours: u32,
    sunday_hours: u32,
}

impl MonthlyAggregate {
    /// Creates an empty aggregate for the given month (1-12).
    pub fn new(month: u32) -> Self {
        debug_assert!((1..=12).contains(&month));
        Self {
            month,
            records: Vec::new(),
            total_hours: 0,
            evening_hours: 0,
            sunday_hours: 0,
        }
    }

    /// Adds a shift record and updates the running sums.
    ///
    /// Always succeeds for a valid [`ShiftRecord`]; validation happens
    /// at record construction.
    pub fn add(&mut self, record: ShiftRecord) {
        self.total_hours += record.total_hours();
        self.evening_hours += record.evening_hours();
        if record.is_sunday() {
            self.sunday_hours += record.total_hours();
        }
        self.records.push(record);
    }

    /// Returns the month number (1-12) this aggregate covers.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the records in arrival order.
    pub fn records(&self) -> &[ShiftRecord] {
        &self.records
    }

    /// Returns the summed worked hours.
    pub fn total_hours(&self) -> u32 {
        self.total_hours
    }

    /// Returns the summed hours worked at or after 18:00.
    pub fn evening_hours(&self) -> u32 {
        self.evening_hours
    }

    /// Returns the summed hours worked on Sundays.
    pub fn sunday_hours(&self) -> u32 {
        self.sunday_hours
    }
}
