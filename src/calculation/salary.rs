//! Gross and after-tax salary calculation.
//!
//! Sunday hours are paid at an effective double rate: once through the
//! total hours and once more through the Sunday hours, a full-rate
//! premium on top of standard pay. Evening hours earn a flat per-hour
//! bonus on top of whatever else they are paid.

use rust_decimal::Decimal;

use crate::config::PayRates;
use crate::models::MonthlyAggregate;

/// The components of one month's gross salary.
///
/// # Example
///
/// ```
/// use salary_tracker::calculation::salary_breakdown;
/// use salary_tracker::config::PayRates;
/// use salary_tracker::models::{MonthlyAggregate, ShiftRecord};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut aggregate = MonthlyAggregate::new(3);
/// // 2024-03-03 is a Sunday
/// let record = ShiftRecord::new(
///     NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(),
///     12,
///     20,
/// ).unwrap();
/// aggregate.add(record);
///
/// let breakdown = salary_breakdown(&aggregate, &PayRates::default());
/// // 8h base + 8h Sunday premium at 12.77, 2 evening hours at 1.33
/// assert_eq!(breakdown.gross, Decimal::new(20698, 2)); // 206.98
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryBreakdown {
    /// Total hours paid at the base rate.
    pub base_pay: Decimal,
    /// Sunday hours paid once more at the base rate.
    pub sunday_premium: Decimal,
    /// Evening hours times the per-hour bonus.
    pub evening_bonus: Decimal,
    /// Sum of the three components.
    pub gross: Decimal,
}

/// Computes the component breakdown of a month's gross salary.
pub fn salary_breakdown(aggregate: &MonthlyAggregate, rates: &PayRates) -> SalaryBreakdown {
    let base_pay = Decimal::from(aggregate.total_hours()) * rates.salary_per_hour;
    let sunday_premium = Decimal::from(aggregate.sunday_hours()) * rates.salary_per_hour;
    let evening_bonus = Decimal::from(aggregate.evening_hours()) * rates.evening_bonus;

    SalaryBreakdown {
        base_pay,
        sunday_premium,
        evening_bonus,
        gross: base_pay + sunday_premium + evening_bonus,
    }
}

/// Computes a month's gross salary.
///
/// `(total_hours + sunday_hours) * salary_per_hour +
/// evening_hours * evening_bonus`.
///
/// # Example
///
/// ```
/// use salary_tracker::calculation::gross_salary;
/// use salary_tracker::config::PayRates;
/// use salary_tracker::models::MonthlyAggregate;
/// use rust_decimal::Decimal;
///
/// let aggregate = MonthlyAggregate::new(3);
/// assert_eq!(gross_salary(&aggregate, &PayRates::default()), Decimal::ZERO);
/// ```
pub fn gross_salary(aggregate: &MonthlyAggregate, rates: &PayRates) -> Decimal {
    salary_breakdown(aggregate, rates).gross
}

/// Computes a month's after-tax income: gross reduced by the flat tax
/// rate.
pub fn after_tax_income(aggregate: &MonthlyAggregate, rates: &PayRates) -> Decimal {
    gross_salary(aggregate, rates) * (Decimal::ONE - rates.tax_rate)
}
