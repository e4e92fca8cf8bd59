//! Attendance period model.
//!
//! This module contains the [`AttendancePeriod`] type, the calendar-month span
//! that bounds attendance, overtime and reimbursement aggregation, together with
//! the [`PayrollStatus`] of a period.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A calendar-month attendance period.
///
/// Periods are addressed by a key derived from their month and year
/// (`MM-YYYY`), so two requests for the same month always resolve to the
/// same period.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AttendancePeriod;
///
/// assert_eq!(AttendancePeriod::key_for(6, 2025), "06-2025");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendancePeriod {
    /// The period key, e.g. `"06-2025"`.
    pub id: String,
    /// First calendar day of the month.
    pub start_date: NaiveDate,
    /// Last calendar day of the same month.
    pub end_date: NaiveDate,
    /// When the period was created.
    pub created_at: DateTime<Utc>,
    /// The admin who created the period.
    pub created_by: String,
}

impl AttendancePeriod {
    /// Derives the period key for a month and year.
    pub fn key_for(month: u32, year: i32) -> String {
        format!("{:02}-{}", month, year)
    }

    /// Returns true if the date falls within the period, inclusive of both ends.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

/// Payroll processing state of a period.
///
/// A period moves from `NotRun` to `Completed` exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayrollStatus {
    /// No payslips have been generated for the period.
    NotRun,
    /// Payslips have been generated; the period is closed for payroll.
    Completed,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn june_2025() -> AttendancePeriod {
        AttendancePeriod {
            id: "06-2025".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            created_at: Utc::now(),
            created_by: "admin".to_string(),
        }
    }

    #[test]
    fn test_key_is_zero_padded_month_and_year() {
        assert_eq!(AttendancePeriod::key_for(1, 2026), "01-2026");
        assert_eq!(AttendancePeriod::key_for(12, 2025), "12-2025");
    }

    #[test]
    fn test_contains_date_on_boundaries() {
        let period = june_2025();
        assert!(period.contains_date(period.start_date));
        assert!(period.contains_date(period.end_date));
    }

    #[test]
    fn test_contains_date_outside_period() {
        let period = june_2025();
        assert!(!period.contains_date(NaiveDate::from_ymd_opt(2025, 5, 31).unwrap()));
        assert!(!period.contains_date(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()));
    }

    #[test]
    fn test_payroll_status_serialization() {
        assert_eq!(
            serde_json::to_string(&PayrollStatus::NotRun).unwrap(),
            "\"not_run\""
        );
        assert_eq!(
            serde_json::to_string(&PayrollStatus::Completed).unwrap(),
            "\"completed\""
        );
    }
}
