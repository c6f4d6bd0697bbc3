//! Data models for the Salary Tracker.
//!
//! This module defines the core types: individual shift records,
//! per-month accumulators, and the summary snapshot handed to
//! presentation collaborators.

mod monthly_aggregate;
mod shift_record;
mod summary;

pub use monthly_aggregate::MonthlyAggregate;
pub use shift_record::{EVENING_START_HOUR, ShiftRecord};
pub use summary::{HoursStatus, MonthlySummary};
