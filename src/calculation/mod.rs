//! Salary calculation logic.
//!
//! This module contains the pure functions that turn a month's
//! accumulated hours into money figures: gross salary with its Sunday
//! premium and evening bonus, after-tax income, and the
//! expected-hours check.

mod expected_hours;
mod salary;

pub use expected_hours::check_expected_hours;
pub use salary::{SalaryBreakdown, after_tax_income, gross_salary, salary_breakdown};
