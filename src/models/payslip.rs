//! Payslip models for the Payroll Engine.
//!
//! This module separates the frozen [`Payslip`] snapshot written by a payroll
//! run from the [`PayslipDetail`] projection the reader builds on demand. The
//! snapshot's amounts never change; the detail's rates are recomputed from the
//! employee's current salary every time it is requested.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A generated payslip.
///
/// Exactly one payslip exists per (employee, period) once payroll has run.
/// `total_take_home` is always the exact sum of the three amount components.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Payslip;
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
/// use std::str::FromStr;
///
/// let payslip = Payslip {
///     id: Uuid::new_v4(),
///     employee_id: "emp_001".to_string(),
///     username: "alice".to_string(),
///     period_id: "06-2025".to_string(),
///     base_salary: Decimal::from_str("3000.00").unwrap(),
///     attendance_days: 20,
///     attendance_amount: Decimal::from_str("2857.14").unwrap(),
///     overtime_hours: Decimal::from_str("10").unwrap(),
///     overtime_amount: Decimal::from_str("357.14").unwrap(),
///     reimbursement_amount: Decimal::from_str("50.00").unwrap(),
///     total_take_home: Decimal::from_str("3264.28").unwrap(),
///     created_at: Utc::now(),
///     created_by: "admin".to_string(),
/// };
/// assert_eq!(
///     payslip.total_take_home,
///     payslip.attendance_amount + payslip.overtime_amount + payslip.reimbursement_amount
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payslip {
    /// Unique identifier for this payslip.
    pub id: Uuid,
    /// The employee the payslip belongs to.
    pub employee_id: String,
    /// The employee's username at generation time.
    pub username: String,
    /// The attendance period key.
    pub period_id: String,
    /// Monthly base salary at generation time.
    pub base_salary: Decimal,
    /// Number of attended days in the period.
    pub attendance_days: u32,
    /// Pay earned for attended days.
    pub attendance_amount: Decimal,
    /// Total overtime hours in the period.
    pub overtime_hours: Decimal,
    /// Pay earned for overtime.
    pub overtime_amount: Decimal,
    /// Reimbursements paid at face value.
    pub reimbursement_amount: Decimal,
    /// Sum of the three amount components.
    pub total_take_home: Decimal,
    /// When the payslip was generated.
    pub created_at: DateTime<Utc>,
    /// The admin who ran payroll.
    pub created_by: String,
}

/// Attendance section of a payslip breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceBreakdown {
    /// Monday-Friday dates in the period.
    pub working_days: u32,
    /// Days actually attended.
    pub attendance_days: u32,
    /// Stored attendance amount.
    pub attendance_amount: Decimal,
}

/// Overtime section of a payslip breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeBreakdown {
    /// Stored overtime hours.
    pub overtime_hours: Decimal,
    /// Hourly rate derived from the current base salary.
    pub hourly_rate: Decimal,
    /// Overtime rate derived from the current base salary.
    pub overtime_rate: Decimal,
    /// Stored overtime amount.
    pub overtime_amount: Decimal,
}

/// A reimbursement claim as shown on a payslip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReimbursementLine {
    /// Claim id.
    pub id: Uuid,
    /// Date of the expense.
    pub date: NaiveDate,
    /// Claim description.
    pub description: String,
    /// Claimed amount.
    pub amount: Decimal,
    /// When the claim was submitted.
    pub submitted_at: DateTime<Utc>,
}

/// A payslip together with its live breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipDetail {
    /// The stored snapshot.
    pub payslip: Payslip,
    /// Attendance breakdown.
    pub attendance: AttendanceBreakdown,
    /// Overtime breakdown.
    pub overtime: OvertimeBreakdown,
    /// Claims within the period range.
    pub reimbursements: Vec<ReimbursementLine>,
}

/// One employee's line in a period summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipSummaryLine {
    /// The employee's username.
    pub username: String,
    /// The employee id.
    pub employee_id: String,
    /// The payslip's total take-home pay.
    pub total_take_home: Decimal,
}

/// Take-home pay of every employee paid in a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipSummary {
    /// The period key.
    pub period_id: String,
    /// Lines ordered by username.
    pub employees: Vec<PayslipSummaryLine>,
    /// Sum of every line's take-home pay.
    pub grand_total: Decimal,
}

/// Outcome of a completed payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRun {
    /// The period key.
    pub period_id: String,
    /// Monday-Friday dates in the period.
    pub working_days: u32,
    /// Number of payslips written.
    pub payslips_generated: usize,
    /// Sum of take-home pay over all payslips written.
    pub total_disbursed: Decimal,
    /// When the run finished.
    pub completed_at: DateTime<Utc>,
}
