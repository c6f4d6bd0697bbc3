//! Shift record model.
//!
//! This module defines the [`ShiftRecord`] struct representing one
//! calendar day's work, with derived evening and Sunday metrics.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};

/// The 24-hour clock hour at which evening bonus hours begin.
pub const EVENING_START_HOUR: u32 = 18;

/// Represents one calendar day's work shift.
///
/// A `ShiftRecord` is immutable once constructed; the evening hours,
/// total hours, and Sunday flag are pure functions of the date and the
/// start/end hours. Shifts are whole-hour, same-day only: overnight
/// spans are not supported.
///
/// # Example
///
/// ```
/// use salary_tracker::models::ShiftRecord;
/// use chrono::NaiveDate;
///
/// let record = ShiftRecord::new(
///     NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
///     9,
///     20,
/// ).unwrap();
///
/// assert_eq!(record.total_hours(), 11);
/// assert_eq!(record.evening_hours(), 2); // 18:00 to 20:00
/// assert!(!record.is_sunday());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    date: NaiveDate,
    start_hour: u32,
    end_hour: u32,
}

impl ShiftRecord {
    /// Creates a new shift record, validating the hours.
    ///
    /// # Arguments
    ///
    /// * `date` - The calendar date of the shift.
    /// * `start_hour` - The 24-hour clock hour the shift starts (0-23).
    /// * `end_hour` - The 24-hour clock hour the shift ends (1-24).
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidShift`] when `start_hour` is not
    /// before `end_hour` or either hour is outside the 24-hour clock.
    pub fn new(date: NaiveDate, start_hour: u32, end_hour: u32) -> TrackerResult<Self> {
        if start_hour > 23 {
            return Err(TrackerError::InvalidShift {
                date,
                message: format!("start hour {} is outside the 24-hour clock", start_hour),
            });
        }
        if end_hour > 24 {
            return Err(TrackerError::InvalidShift {
                date,
                message: format!("end hour {} is outside the 24-hour clock", end_hour),
            });
        }
        if start_hour >= end_hour {
            return Err(TrackerError::InvalidShift {
                date,
                message: format!(
                    "start hour {} is not before end hour {}",
                    start_hour, end_hour
                ),
            });
        }

        Ok(Self {
            date,
            start_hour,
            end_hour,
        })
    }

    /// Returns the calendar date of the shift.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the hour the shift starts.
    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    /// Returns the hour the shift ends.
    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }

    /// Returns the total worked hours for the shift.
    pub fn total_hours(&self) -> u32 {
        self.end_hour - self.start_hour
    }

    /// Returns the hours worked at or after 18:00.
    ///
    /// # Example
    ///
    /// ```
    /// use salary_tracker::models::ShiftRecord;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    /// assert_eq!(ShiftRecord::new(date, 9, 17).unwrap().evening_hours(), 0);
    /// assert_eq!(ShiftRecord::new(date, 9, 20).unwrap().evening_hours(), 2);
    /// ```
    pub fn evening_hours(&self) -> u32 {
        self.end_hour.saturating_sub(EVENING_START_HOUR)
    }

    /// Returns whether the shift falls on a Sunday.
    pub fn is_sunday(&self) -> bool {
        self.date.weekday() == Weekday::Sun
    }
}
