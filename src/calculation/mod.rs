//! Calculation logic for the Payroll Engine.
//!
//! This module contains the pure payroll rules: attendance period validation,
//! working-day counting and rate derivation, the three contribution
//! aggregators (attendance, overtime, reimbursement), payslip eligibility and
//! the monetary rounding policy.

mod attendance;
mod contributions;
mod overtime;
mod period_validation;
mod rate_resolver;
mod reimbursement;
mod rounding;

pub use attendance::{AttendanceContribution, aggregate_attendance};
pub use contributions::EmployeeContributions;
pub use overtime::{MAX_OVERTIME_HOURS_PER_DAY, OvertimeContribution, aggregate_overtime};
pub use period_validation::{
    DATE_FORMAT, ValidatedPeriod, last_day_of_month, parse_date, validate_period,
};
pub use rate_resolver::{
    RateConfig, ResolvedRates, count_working_days, is_weekend, rates_for_working_days,
    resolve_rates,
};
pub use reimbursement::{
    MAX_REIMBURSEMENT_AMOUNT, ReimbursementContribution, aggregate_reimbursements,
};
pub use rounding::{MONEY_SCALE, fits_money_scale, round_money};
