//! Combined contributions and payslip eligibility.

use rust_decimal::Decimal;

use super::attendance::AttendanceContribution;
use super::overtime::OvertimeContribution;
use super::reimbursement::ReimbursementContribution;

/// The three contributions of one employee in one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmployeeContributions {
    /// Attendance contribution.
    pub attendance: AttendanceContribution,
    /// Overtime contribution.
    pub overtime: OvertimeContribution,
    /// Reimbursement contribution.
    pub reimbursement: ReimbursementContribution,
}

impl EmployeeContributions {
    /// Returns true if the employee should receive a payslip.
    ///
    /// Eligibility looks at the rounded amounts, so a contribution that
    /// rounds to zero cents never yields an all-zero payslip.
    pub fn is_eligible(&self) -> bool {
        self.attendance.amount > Decimal::ZERO
            || self.overtime.amount > Decimal::ZERO
            || self.reimbursement.amount > Decimal::ZERO
    }

    /// Sum of the three rounded amounts.
    pub fn total_take_home(&self) -> Decimal {
        self.attendance.amount + self.overtime.amount + self.reimbursement.amount
    }
}
