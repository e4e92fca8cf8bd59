//! Raw input records.
//!
//! Attendance, overtime and reimbursement submissions as they are stored,
//! before any aggregation into payslip amounts.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One day of attendance for an employee.
///
/// At most one record exists per (employee, date).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Record id.
    pub id: Uuid,
    /// The attending employee.
    pub employee_id: String,
    /// The attended weekday.
    pub date: NaiveDate,
    /// The period the date belongs to.
    pub period_id: String,
    /// When the record was submitted.
    pub created_at: DateTime<Utc>,
}

/// Overtime hours worked by an employee on a date.
///
/// At most one record exists per (employee, date); a resubmission replaces
/// `hours` and keeps the original `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeRecord {
    /// Record id.
    pub id: Uuid,
    /// The employee who worked overtime.
    pub employee_id: String,
    /// The date the overtime was worked.
    pub date: NaiveDate,
    /// Hours of overtime, in (0, 3].
    pub hours: Decimal,
    /// When the record was first submitted.
    pub created_at: DateTime<Utc>,
    /// When the hours were last replaced.
    pub updated_at: DateTime<Utc>,
}

/// A reimbursement claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReimbursementRecord {
    /// Record id.
    pub id: Uuid,
    /// The claiming employee.
    pub employee_id: String,
    /// The date of the expense.
    pub date: NaiveDate,
    /// Amount claimed, always positive.
    pub amount: Decimal,
    /// Free-form description.
    pub description: String,
    /// When the claim was submitted.
    pub created_at: DateTime<Utc>,
}
