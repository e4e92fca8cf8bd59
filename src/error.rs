//! Error types for the Payroll Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while recording attendance data
//! and generating payslips.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Payroll Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::PeriodNotFound {
///     period_id: "06-2025".to_string(),
/// };
/// assert_eq!(error.to_string(), "Attendance period not found: 06-2025");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or is inconsistent.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A date was not in `YYYY-MM-DD` form.
    #[error("Malformed date '{value}': expected YYYY-MM-DD")]
    MalformedDate {
        /// The rejected input.
        value: String,
    },

    /// The period end date precedes its start date.
    #[error("End date {end} cannot be earlier than start date {start}")]
    EndBeforeStart {
        /// The proposed start date.
        start: NaiveDate,
        /// The proposed end date.
        end: NaiveDate,
    },

    /// The period start and end fall in different calendar months.
    #[error("Start date {start} and end date {end} must be in the same month")]
    CrossMonthSpan {
        /// The proposed start date.
        start: NaiveDate,
        /// The proposed end date.
        end: NaiveDate,
    },

    /// The period does not begin on the first day of the month.
    #[error("Start date {start} must be the first day of the month")]
    NotFirstOfMonth {
        /// The proposed start date.
        start: NaiveDate,
    },

    /// The period does not end on the last day of the month.
    #[error("End date {end} must be the last day of the month ({expected})")]
    NotLastOfMonth {
        /// The proposed end date.
        end: NaiveDate,
        /// The last day of the month the period starts in.
        expected: NaiveDate,
    },

    /// A period already exists for the month.
    #[error("Attendance period for {period_id} already exists")]
    DuplicatePeriod {
        /// The key of the existing period.
        period_id: String,
    },

    /// No period exists with the given key.
    #[error("Attendance period not found: {period_id}")]
    PeriodNotFound {
        /// The requested period key.
        period_id: String,
    },

    /// Attendance was submitted for a Saturday or Sunday.
    #[error("Cannot submit attendance on a weekend ({date})")]
    WeekendAttendance {
        /// The rejected date.
        date: NaiveDate,
    },

    /// Attendance date falls outside the referenced period.
    #[error("Attendance date {date} is not within attendance period {period_id}")]
    DateOutsidePeriod {
        /// The rejected date.
        date: NaiveDate,
        /// The referenced period key.
        period_id: String,
    },

    /// Attendance already exists for the employee on that date.
    #[error("Attendance already submitted by '{employee_id}' for {date}")]
    DuplicateAttendance {
        /// The submitting employee.
        employee_id: String,
        /// The conflicting date.
        date: NaiveDate,
    },

    /// Overtime hours outside (0, 3] or finer than hundredths.
    #[error(
        "Overtime hours must be greater than 0 and at most {max}, with at most 2 decimal places, got {hours}"
    )]
    InvalidOvertimeHours {
        /// The rejected hours value.
        hours: Decimal,
        /// The upper bound.
        max: Decimal,
    },

    /// Reimbursement amount outside (0, max] or finer than cents.
    #[error(
        "Reimbursement amount must be greater than 0 and at most {max}, with at most 2 decimal places, got {amount}"
    )]
    InvalidReimbursementAmount {
        /// The rejected amount.
        amount: Decimal,
        /// The upper bound.
        max: Decimal,
    },

    /// The employee is not on the roster.
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound {
        /// The requested employee id.
        employee_id: String,
    },

    /// An employee references a level that does not exist.
    #[error("Employee level '{level_id}' not found for employee '{employee_id}'")]
    LevelNotFound {
        /// The employee whose level is missing.
        employee_id: String,
        /// The missing level id.
        level_id: String,
    },

    /// The period has no Monday-Friday dates, so no hourly rate can be derived.
    #[error("Period {start}..={end} contains no working days")]
    DegeneratePeriod {
        /// Start of the range.
        start: NaiveDate,
        /// End of the range.
        end: NaiveDate,
    },

    /// Payslips were already generated for the period.
    #[error("Payroll for period {period_id} has already been processed")]
    PeriodAlreadyProcessed {
        /// The period key.
        period_id: String,
    },

    /// No payslip exists for the employee in the period.
    #[error("Payslip not found for employee '{employee_id}' in period {period_id}")]
    PayslipNotFound {
        /// The employee id.
        employee_id: String,
        /// The period key.
        period_id: String,
    },

    /// The actor's role does not permit the operation.
    #[error("Operation '{operation}' requires the admin role")]
    Forbidden {
        /// The rejected operation.
        operation: String,
    },

    /// The storage layer failed.
    #[error("Storage error: {message}")]
    Storage {
        /// A description of the storage failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/levels.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/levels.yaml"
        );
    }

    #[test]
    fn test_malformed_date_displays_value() {
        let error = EngineError::MalformedDate {
            value: "2025/06/01".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Malformed date '2025/06/01': expected YYYY-MM-DD"
        );
    }

    #[test]
    fn test_not_last_of_month_displays_expected_date() {
        let error = EngineError::NotLastOfMonth {
            end: date(2025, 6, 29),
            expected: date(2025, 6, 30),
        };
        assert_eq!(
            error.to_string(),
            "End date 2025-06-29 must be the last day of the month (2025-06-30)"
        );
    }

    #[test]
    fn test_weekend_attendance_displays_date() {
        let error = EngineError::WeekendAttendance {
            date: date(2025, 6, 7),
        };
        assert_eq!(
            error.to_string(),
            "Cannot submit attendance on a weekend (2025-06-07)"
        );
    }

    #[test]
    fn test_invalid_overtime_hours_displays_bounds() {
        let error = EngineError::InvalidOvertimeHours {
            hours: Decimal::new(35, 1),
            max: Decimal::from(3),
        };
        assert_eq!(
            error.to_string(),
            "Overtime hours must be greater than 0 and at most 3, with at most 2 decimal places, got 3.5"
        );
    }

    #[test]
    fn test_payslip_not_found_displays_employee_and_period() {
        let error = EngineError::PayslipNotFound {
            employee_id: "emp_001".to_string(),
            period_id: "06-2025".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Payslip not found for employee 'emp_001' in period 06-2025"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_period_not_found() -> EngineResult<()> {
            Err(EngineError::PeriodNotFound {
                period_id: "01-2020".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_period_not_found()?;
            Ok(())
        }

        assert!(matches!(
            propagates_error(),
            Err(EngineError::PeriodNotFound { .. })
        ));
    }
}
