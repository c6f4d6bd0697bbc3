//! Expected working hours check.

use crate::config::PayRates;
use crate::models::{HoursStatus, MonthlyAggregate};

/// Checks a month's total hours against the configured threshold.
///
/// Returns [`HoursStatus::Met`] when `total_hours >=
/// expected_working_hours`, otherwise [`HoursStatus::Short`] carrying
/// the shortfall.
///
/// # Example
///
/// ```
/// use salary_tracker::calculation::check_expected_hours;
/// use salary_tracker::config::PayRates;
/// use salary_tracker::models::{HoursStatus, MonthlyAggregate};
///
/// let aggregate = MonthlyAggregate::new(3);
/// let status = check_expected_hours(&aggregate, &PayRates::default());
/// assert_eq!(status, HoursStatus::Short { hours: 120 });
/// ```
pub fn check_expected_hours(aggregate: &MonthlyAggregate, rates: &PayRates) -> HoursStatus {
    let total = aggregate.total_hours();
    if total >= rates.expected_working_hours {
        HoursStatus::Met
    } else {
        HoursStatus::Short {
            hours: rates.expected_working_hours - total,
        }
    }
}
