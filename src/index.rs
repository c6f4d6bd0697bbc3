//! Annual index of monthly aggregates.
//!
//! This module provides the [`AnnualIndex`], the month-keyed map of
//! [`MonthlyAggregate`]s built in a single pass over parsed shift
//! records.

use std::collections::BTreeMap;

use tracing::warn;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{MonthlyAggregate, ShiftRecord};

/// Maps month numbers (1-12) to their [`MonthlyAggregate`].
///
/// The index is a plain value owned by the caller: each aggregation
/// pass builds a fresh index from the full record set, and queries run
/// against that value. There is no shared or global lifecycle.
///
/// # Example
///
/// ```
/// use salary_tracker::index::AnnualIndex;
/// use salary_tracker::models::ShiftRecord;
/// use chrono::NaiveDate;
///
/// let records = vec![
///     ShiftRecord::new(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(), 9, 18).unwrap(),
///     ShiftRecord::new(NaiveDate::from_ymd_opt(2024, 3, 6).unwrap(), 9, 17).unwrap(),
/// ];
/// let index = AnnualIndex::from_records(records);
///
/// assert_eq!(index.lookup(3).unwrap().total_hours(), 17);
/// assert!(index.lookup(4).is_err()); // no data for April
/// ```
#[derive(Debug, Clone, Default)]
pub struct AnnualIndex {
    months: BTreeMap<u32, MonthlyAggregate>,
}

impl AnnualIndex {
    /// Builds an index from records in arrival order.
    ///
    /// Each record is routed to the aggregate for its date's month,
    /// creating the aggregate on first encounter. Two records for the
    /// same calendar date are both added; the double count is kept for
    /// compatibility with the source data but logged as a warning.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = ShiftRecord>,
    {
        use chrono::Datelike;

        let mut months: BTreeMap<u32, MonthlyAggregate> = BTreeMap::new();

        for record in records {
            let month = record.date().month();
            let aggregate = months
                .entry(month)
                .or_insert_with(|| MonthlyAggregate::new(month));

            if aggregate.records().iter().any(|r| r.date() == record.date()) {
                warn!(date = %record.date(), "duplicate shift date; hours will be double-counted");
            }
            aggregate.add(record);
        }

        Self { months }
    }

    /// Looks up the aggregate for a month.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidMonth`] when `month` is outside
    /// 1-12 and [`TrackerError::MonthNotFound`] when the month is valid
    /// but has no recorded shifts. An empty month is never reported as
    /// a zero-valued aggregate.
    pub fn lookup(&self, month: u32) -> TrackerResult<&MonthlyAggregate> {
        if !(1..=12).contains(&month) {
            return Err(TrackerError::InvalidMonth {
                input: month.to_string(),
            });
        }
        self.months
            .get(&month)
            .ok_or(TrackerError::MonthNotFound { month })
    }

    /// Returns the aggregates in month order.
    pub fn months(&self) -> impl Iterator<Item = &MonthlyAggregate> {
        self.months.values()
    }

    /// Returns the number of months with recorded shifts.
    pub fn len(&self) -> usize {
        self.months.len()
    }

    /// Returns `true` when no shifts have been recorded at all.
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}
