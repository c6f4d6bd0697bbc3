//! Monthly summary models.
//!
//! This module contains the [`MonthlySummary`] type handed to
//! presentation collaborators, capturing a month's totals, salary
//! figures, and expected-hours status.

use rust_decimal::Decimal;
use serde::Serialize;

/// Whether a month met the configured expected working hours.
///
/// # Example
///
/// ```
/// use salary_tracker::models::HoursStatus;
///
/// let status = HoursStatus::Short { hours: 1 };
/// assert!(!status.is_met());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HoursStatus {
    /// The month reached the expected working hours.
    Met,
    /// The month fell short by the given number of hours.
    Short {
        /// The shortfall in hours.
        hours: u32,
    },
}

impl HoursStatus {
    /// Returns `true` when the expected working hours were reached.
    pub fn is_met(&self) -> bool {
        matches!(self, HoursStatus::Met)
    }
}

/// A snapshot of one month's totals and salary figures.
///
/// This is the query result exposed to presentation collaborators:
/// the accumulated hour totals plus the computed gross salary,
/// after-tax income, and expected-hours status.
///
/// # Example
///
/// ```
/// use salary_tracker::models::{HoursStatus, MonthlySummary};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let summary = MonthlySummary {
///     month: 3,
///     total_hours: 120,
///     evening_hours: 10,
///     sunday_hours: 8,
///     gross_salary: Decimal::from_str("1647.86").unwrap(),
///     after_tax_income: Decimal::from_str("1565.467").unwrap(),
///     hours_status: HoursStatus::Met,
/// };
/// assert!(summary.hours_status.is_met());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlySummary {
    /// The month number (1-12) this summary covers.
    pub month: u32,
    /// Total worked hours for the month.
    pub total_hours: u32,
    /// Hours worked at or after 18:00.
    pub evening_hours: u32,
    /// Hours worked on Sundays.
    pub sunday_hours: u32,
    /// Pre-tax salary for the month.
    pub gross_salary: Decimal,
    /// Gross salary reduced by the configured tax rate.
    pub after_tax_income: Decimal,
    /// Whether the expected working hours were reached.
    pub hours_status: HoursStatus,
}
