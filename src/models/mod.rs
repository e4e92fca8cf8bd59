//! Core data models for the Payroll Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod payslip;
mod period;
mod records;

pub use employee::{Actor, Employee, EmployeeLevel, Role};
pub use payslip::{
    AttendanceBreakdown, OvertimeBreakdown, PayrollRun, Payslip, PayslipDetail, PayslipSummary,
    PayslipSummaryLine, ReimbursementLine,
};
pub use period::{AttendancePeriod, PayrollStatus};
pub use records::{AttendanceRecord, OvertimeRecord, ReimbursementRecord};
