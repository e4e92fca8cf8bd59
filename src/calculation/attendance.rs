//! Attendance contribution.
//!
//! Each attended day is paid as a full working day at the employee's hourly
//! rate: `amount = days * hours_per_day * hourly_rate`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AttendancePeriod, AttendanceRecord};

use super::rate_resolver::{RateConfig, ResolvedRates};
use super::rounding::round_money;

/// An employee's attendance contribution for a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttendanceContribution {
    /// Attended days within the period.
    pub days: u32,
    /// Pay for the attended days, rounded to cents.
    pub amount: Decimal,
}

/// Folds attendance records into one employee's contribution.
///
/// Only records belonging to `employee_id` with a date inside the period are
/// counted.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{aggregate_attendance, rates_for_working_days, RateConfig};
/// use payroll_engine::models::{AttendancePeriod, AttendanceRecord};
/// use chrono::{NaiveDate, Utc};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let period = AttendancePeriod {
///     id: "06-2025".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
///     created_at: Utc::now(),
///     created_by: "admin".to_string(),
/// };
/// let records = vec![AttendanceRecord {
///     id: Uuid::new_v4(),
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
///     period_id: "06-2025".to_string(),
///     created_at: Utc::now(),
/// }];
/// let config = RateConfig::default();
/// let rates = rates_for_working_days(Decimal::from(3360), 21, &config).unwrap();
///
/// let contribution = aggregate_attendance("emp_001", &records, &period, &rates, &config);
/// assert_eq!(contribution.days, 1);
/// assert_eq!(contribution.amount, Decimal::from(160));
/// ```
pub fn aggregate_attendance(
    employee_id: &str,
    records: &[AttendanceRecord],
    period: &AttendancePeriod,
    rates: &ResolvedRates,
    config: &RateConfig,
) -> AttendanceContribution {
    let days = records
        .iter()
        .filter(|r| r.employee_id == employee_id && period.contains_date(r.date))
        .count() as u32;

    let amount = round_money(Decimal::from(days) * config.hours_per_day * rates.hourly_rate);

    AttendanceContribution { days, amount }
}
