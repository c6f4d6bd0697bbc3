//! Tracker facade.
//!
//! This module provides the [`SalaryTracker`], the query surface
//! exposed to presentation collaborators (CLI, GUI). It owns the pay
//! rates, the shift log, and the current [`AnnualIndex`], and keeps
//! reloading decoupled from querying: queries never re-read the file,
//! callers invoke [`SalaryTracker::refresh`] when they want the index
//! rebuilt.

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::calculation::{after_tax_income, check_expected_hours, gross_salary};
use crate::config::PayRates;
use crate::error::TrackerResult;
use crate::index::AnnualIndex;
use crate::models::{MonthlyAggregate, MonthlySummary, ShiftRecord};
use crate::storage::ShiftLog;

/// The aggregation and query surface over one shift log.
///
/// # Example
///
/// ```no_run
/// use salary_tracker::config::PayRates;
/// use salary_tracker::storage::ShiftLog;
/// use salary_tracker::tracker::SalaryTracker;
///
/// let log = ShiftLog::new("input.txt", 2024);
/// let mut tracker = SalaryTracker::new(log, PayRates::default());
/// tracker.refresh()?;
///
/// let summary = tracker.summary(3)?;
/// println!("March gross: ${}", summary.gross_salary);
/// # Ok::<(), salary_tracker::error::TrackerError>(())
/// ```
#[derive(Debug)]
pub struct SalaryTracker {
    log: ShiftLog,
    rates: PayRates,
    index: AnnualIndex,
}

impl SalaryTracker {
    /// Creates a tracker with an empty index.
    ///
    /// Call [`SalaryTracker::refresh`] before querying; a fresh tracker
    /// reports every month as having no data.
    pub fn new(log: ShiftLog, rates: PayRates) -> Self {
        Self {
            log,
            rates,
            index: AnnualIndex::default(),
        }
    }

    /// Returns the configured pay rates.
    pub fn rates(&self) -> &PayRates {
        &self.rates
    }

    /// Re-reads the shift log and rebuilds the index from scratch.
    ///
    /// Returns the number of records loaded. The previous index is
    /// superseded wholesale; there is no incremental update.
    ///
    /// # Errors
    ///
    /// Propagates read and parse errors from the log. On error the
    /// existing index is left untouched.
    pub fn refresh(&mut self) -> TrackerResult<usize> {
        let records = self.log.read_all()?;
        let count = records.len();
        self.index = AnnualIndex::from_records(records);
        info!(records = count, months = self.index.len(), "rebuilt annual index");
        Ok(count)
    }

    /// Looks up the aggregate for a month in the current index.
    ///
    /// # Errors
    ///
    /// [`TrackerError::InvalidMonth`](crate::error::TrackerError::InvalidMonth)
    /// outside 1-12,
    /// [`TrackerError::MonthNotFound`](crate::error::TrackerError::MonthNotFound)
    /// when the month has no data.
    pub fn lookup(&self, month: u32) -> TrackerResult<&MonthlyAggregate> {
        self.index.lookup(month).inspect_err(|e| {
            warn!(month, error = %e, "month lookup failed");
        })
    }

    /// Builds the salary summary for a month.
    ///
    /// Combines the month's hour totals with the configured rates into
    /// a [`MonthlySummary`].
    pub fn summary(&self, month: u32) -> TrackerResult<MonthlySummary> {
        let aggregate = self.lookup(month)?;

        Ok(MonthlySummary {
            month: aggregate.month(),
            total_hours: aggregate.total_hours(),
            evening_hours: aggregate.evening_hours(),
            sunday_hours: aggregate.sunday_hours(),
            gross_salary: gross_salary(aggregate, &self.rates),
            after_tax_income: after_tax_income(aggregate, &self.rates),
            hours_status: check_expected_hours(aggregate, &self.rates),
        })
    }

    /// Validates and appends a new shift to the log.
    ///
    /// The live index is not mutated: the new record becomes visible on
    /// the next [`SalaryTracker::refresh`], keeping the index a pure
    /// function of the file.
    ///
    /// # Errors
    ///
    /// Returns
    /// [`TrackerError::InvalidShift`](crate::error::TrackerError::InvalidShift)
    /// for inconsistent hours and
    /// [`TrackerError::Io`](crate::error::TrackerError::Io) when the
    /// append fails.
    pub fn record_shift(
        &self,
        date: NaiveDate,
        start_hour: u32,
        end_hour: u32,
    ) -> TrackerResult<ShiftRecord> {
        let record = ShiftRecord::new(date, start_hour, end_hour)?;
        self.log.append(&record)?;
        Ok(record)
    }
}
