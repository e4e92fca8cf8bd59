//! Overtime contribution.
//!
//! `amount = total_hours * hourly_rate * overtime_multiplier`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AttendancePeriod, OvertimeRecord};

use super::rate_resolver::ResolvedRates;
use super::rounding::round_money;

/// Upper bound on overtime hours for a single date.
pub const MAX_OVERTIME_HOURS_PER_DAY: Decimal = Decimal::from_parts(3, 0, 0, false, 0);

/// An employee's overtime contribution for a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OvertimeContribution {
    /// Sum of overtime hours within the period.
    pub hours: Decimal,
    /// Pay for the overtime hours, rounded to cents.
    pub amount: Decimal,
}

/// Folds overtime records into one employee's contribution.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{aggregate_overtime, rates_for_working_days, RateConfig};
/// use payroll_engine::models::{AttendancePeriod, OvertimeRecord};
/// use chrono::{NaiveDate, Utc};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use uuid::Uuid;
///
/// let period = AttendancePeriod {
///     id: "06-2025".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
///     created_at: Utc::now(),
///     created_by: "admin".to_string(),
/// };
/// let records: Vec<OvertimeRecord> = (2..=6)
///     .map(|day| OvertimeRecord {
///         id: Uuid::new_v4(),
///         employee_id: "emp_001".to_string(),
///         date: NaiveDate::from_ymd_opt(2025, 6, day).unwrap(),
///         hours: Decimal::from(2),
///         created_at: Utc::now(),
///         updated_at: Utc::now(),
///     })
///     .collect();
/// let rates = rates_for_working_days(Decimal::from(3000), 21, &RateConfig::default()).unwrap();
///
/// let contribution = aggregate_overtime("emp_001", &records, &period, &rates);
/// assert_eq!(contribution.hours, Decimal::from(10));
/// assert_eq!(contribution.amount, Decimal::from_str("357.14").unwrap());
/// ```
pub fn aggregate_overtime(
    employee_id: &str,
    records: &[OvertimeRecord],
    period: &AttendancePeriod,
    rates: &ResolvedRates,
) -> OvertimeContribution {
    let hours: Decimal = records
        .iter()
        .filter(|r| r.employee_id == employee_id && period.contains_date(r.date))
        .map(|r| r.hours)
        .sum();

    OvertimeContribution {
        hours,
        amount: round_money(hours * rates.overtime_rate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{RateConfig, rates_for_working_days};
    use chrono::{NaiveDate, Utc};
    use std::str::FromStr;
    use uuid::Uuid;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn june() -> AttendancePeriod {
        AttendancePeriod {
            id: "06-2025".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            created_at: Utc::now(),
            created_by: "admin".to_string(),
        }
    }

    fn record(employee_id: &str, m: u32, d: u32, hours: &str) -> OvertimeRecord {
        OvertimeRecord {
            id: Uuid::new_v4(),
            employee_id: employee_id.to_string(),
            date: NaiveDate::from_ymd_opt(2025, m, d).unwrap(),
            hours: dec(hours),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn rates_3000() -> ResolvedRates {
        rates_for_working_days(dec("3000"), 21, &RateConfig::default()).unwrap()
    }

    #[test]
    fn test_ten_hours_at_3000_salary() {
        let records = vec![
            record("emp_001", 6, 2, "3"),
            record("emp_001", 6, 3, "3"),
            record("emp_001", 6, 4, "3"),
            record("emp_001", 6, 5, "1"),
        ];
        let result = aggregate_overtime("emp_001", &records, &june(), &rates_3000());
        assert_eq!(result.hours, dec("10"));
        assert_eq!(result.amount, dec("357.14"));
    }

    #[test]
    fn test_fractional_hours_are_summed() {
        let records = vec![record("emp_001", 6, 2, "1.5"), record("emp_001", 6, 7, "0.5")];
        let result = aggregate_overtime("emp_001", &records, &june(), &rates_3000());
        assert_eq!(result.hours, dec("2.0"));
        // 2 * 3000 / 168 * 2 = 71.428...
        assert_eq!(result.amount, dec("71.43"));
    }

    #[test]
    fn test_ignores_other_employees_and_months() {
        let records = vec![
            record("emp_002", 6, 2, "3"),
            record("emp_001", 7, 1, "3"),
            record("emp_001", 5, 30, "2"),
        ];
        let result = aggregate_overtime("emp_001", &records, &june(), &rates_3000());
        assert_eq!(result, OvertimeContribution::default());
        assert!(result.hours.is_zero());
        assert!(result.amount.is_zero());
    }

    #[test]
    fn test_max_overtime_hours_constant() {
        assert_eq!(MAX_OVERTIME_HOURS_PER_DAY, Decimal::from(3));
    }
}
