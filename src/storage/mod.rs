//! Storage for periods, raw records and payslips.
//!
//! The engine talks to storage only through [`PayrollStore`]. Implementations
//! must enforce the uniqueness rules the engine relies on:
//!
//! - one period per key,
//! - one attendance record per (employee, date),
//! - one overtime record per (employee, date), replaced on resubmission,
//! - payslips for a period written all at once, and only once.

mod memory;

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::{
    AttendancePeriod, AttendanceRecord, Employee, EmployeeLevel, OvertimeRecord, Payslip,
    ReimbursementRecord,
};

pub use memory::InMemoryStore;

/// Persistence operations used by the payroll engine.
pub trait PayrollStore: Send + Sync {
    /// Looks up a period by key.
    fn find_period(&self, period_id: &str) -> EngineResult<Option<AttendancePeriod>>;

    /// Inserts a period. Fails with `DuplicatePeriod` if the key is taken.
    fn insert_period(&self, period: AttendancePeriod) -> EngineResult<()>;

    /// Looks up an employee by id.
    fn find_employee(&self, employee_id: &str) -> EngineResult<Option<Employee>>;

    /// Returns every employee, ordered by id.
    fn list_employees(&self) -> EngineResult<Vec<Employee>>;

    /// Looks up a salary level by id.
    fn find_level(&self, level_id: &str) -> EngineResult<Option<EmployeeLevel>>;

    /// Inserts an attendance record. Fails with `DuplicateAttendance` if the
    /// employee already has a record for that date.
    fn insert_attendance(&self, record: AttendanceRecord) -> EngineResult<()>;

    /// Inserts or replaces the overtime for (employee, date) and returns the
    /// stored record.
    fn upsert_overtime(&self, record: OvertimeRecord) -> EngineResult<OvertimeRecord>;

    /// Appends a reimbursement claim.
    fn insert_reimbursement(&self, record: ReimbursementRecord) -> EngineResult<()>;

    /// Attendance records dated within `[start, end]`.
    fn attendance_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<AttendanceRecord>>;

    /// Overtime records dated within `[start, end]`.
    fn overtime_between(&self, start: NaiveDate, end: NaiveDate)
    -> EngineResult<Vec<OvertimeRecord>>;

    /// Reimbursement claims dated within `[start, end]`, in submission order.
    fn reimbursements_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<ReimbursementRecord>>;

    /// Returns true if any payslip exists for the period.
    fn has_payslips(&self, period_id: &str) -> EngineResult<bool>;

    /// Writes every payslip of a payroll run in one step.
    ///
    /// Either all payslips become visible or none do. Fails with
    /// `PeriodAlreadyProcessed` if the period already has payslips.
    fn insert_payslips(&self, period_id: &str, payslips: Vec<Payslip>) -> EngineResult<()>;

    /// Looks up the payslip of an employee for a period.
    fn find_payslip(&self, employee_id: &str, period_id: &str) -> EngineResult<Option<Payslip>>;

    /// Returns every payslip of a period.
    fn payslips_for_period(&self, period_id: &str) -> EngineResult<Vec<Payslip>>;
}
