//! Configuration types for salary calculation.
//!
//! This module contains the strongly-typed pay-rate structure that is
//! deserialized from the YAML configuration file.

use rust_decimal::Decimal;
use serde::Deserialize;

/// The pay-rate and tax model applied to monthly totals.
///
/// All values are fixed configuration, not derived or persisted. The
/// [`Default`] implementation carries the documented defaults:
/// 12.77 per hour, 1.33 evening bonus, 120 expected hours, 5% tax.
///
/// # Example
///
/// ```
/// use salary_tracker::config::PayRates;
/// use rust_decimal::Decimal;
///
/// let rates = PayRates::default();
/// assert_eq!(rates.salary_per_hour, Decimal::new(1277, 2));
/// assert_eq!(rates.expected_working_hours, 120);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct PayRates {
    /// Base pay per worked hour.
    pub salary_per_hour: Decimal,
    /// Bonus paid per hour worked at or after 18:00.
    pub evening_bonus: Decimal,
    /// The monthly working-hours threshold.
    pub expected_working_hours: u32,
    /// Flat tax rate applied to gross salary (e.g. 0.05 for 5%).
    pub tax_rate: Decimal,
}

impl Default for PayRates {
    fn default() -> Self {
        Self {
            salary_per_hour: Decimal::new(1277, 2),
            evening_bonus: Decimal::new(133, 2),
            expected_working_hours: 120,
            tax_rate: Decimal::new(5, 2),
        }
    }
}
