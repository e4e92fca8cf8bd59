//! Recording periods and raw records.

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, info};
use uuid::Uuid;

use crate::audit::AuditEntry;
use crate::calculation::{
    MAX_OVERTIME_HOURS_PER_DAY, MAX_REIMBURSEMENT_AMOUNT, fits_money_scale, is_weekend,
    parse_date, validate_period,
};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    Actor, AttendancePeriod, AttendanceRecord, OvertimeRecord, ReimbursementRecord,
};

use super::PayrollEngine;

impl PayrollEngine {
    /// Creates the attendance period for a calendar month. Admin only.
    ///
    /// # Errors
    ///
    /// Any period validation error, `DuplicatePeriod` if the month already has
    /// a period, or `Forbidden` for non-admins.
    pub fn create_period(
        &self,
        actor: &Actor,
        start: &str,
        end: &str,
    ) -> EngineResult<AttendancePeriod> {
        Self::require_admin(actor, "create_period")?;

        let validated = validate_period(start, end, |key| {
            Ok(self.store.find_period(key)?.is_some())
        })?;

        let period = AttendancePeriod {
            id: validated.id,
            start_date: validated.start_date,
            end_date: validated.end_date,
            created_at: Utc::now(),
            created_by: actor.employee_id.clone(),
        };
        self.store.insert_period(period.clone())?;

        info!(
            period_id = %period.id,
            created_by = %actor.employee_id,
            "Attendance period created"
        );
        self.audit(AuditEntry::new(
            "CREATE",
            "attendance_period",
            period.id.clone(),
            actor,
            serde_json::json!({
                "period_start": period.start_date,
                "period_end": period.end_date,
            }),
        ));

        Ok(period)
    }

    /// Records the actor's attendance for a weekday within a period.
    ///
    /// # Errors
    ///
    /// `MalformedDate`, `WeekendAttendance`, `EmployeeNotFound`,
    /// `PeriodNotFound`, `DateOutsidePeriod` or `DuplicateAttendance`.
    pub fn submit_attendance(
        &self,
        actor: &Actor,
        period_id: &str,
        date: &str,
    ) -> EngineResult<AttendanceRecord> {
        let date = parse_date(date)?;
        if is_weekend(date) {
            return Err(EngineError::WeekendAttendance { date });
        }

        let employee = self.require_employee(&actor.employee_id)?;
        let period = self
            .store
            .find_period(period_id)?
            .ok_or_else(|| EngineError::PeriodNotFound {
                period_id: period_id.to_string(),
            })?;
        if !period.contains_date(date) {
            return Err(EngineError::DateOutsidePeriod {
                date,
                period_id: period.id,
            });
        }

        let record = AttendanceRecord {
            id: Uuid::new_v4(),
            employee_id: employee.id,
            date,
            period_id: period.id,
            created_at: Utc::now(),
        };
        self.store.insert_attendance(record.clone())?;

        debug!(
            employee_id = %record.employee_id,
            date = %record.date,
            period_id = %record.period_id,
            "Attendance recorded"
        );
        self.audit(AuditEntry::new(
            "INSERT",
            "attendance",
            record.id.to_string(),
            actor,
            serde_json::json!({ "period_id": record.period_id, "date": record.date }),
        ));

        Ok(record)
    }

    /// Records or replaces the actor's overtime for a date.
    ///
    /// Hours must be greater than zero and at most three. A second submission
    /// for the same date replaces the hours rather than adding to them.
    pub fn submit_overtime(
        &self,
        actor: &Actor,
        date: &str,
        hours: Decimal,
    ) -> EngineResult<OvertimeRecord> {
        if hours <= Decimal::ZERO || hours > MAX_OVERTIME_HOURS_PER_DAY || !fits_money_scale(hours) {
            return Err(EngineError::InvalidOvertimeHours {
                hours,
                max: MAX_OVERTIME_HOURS_PER_DAY,
            });
        }
        let date = parse_date(date)?;
        let employee = self.require_employee(&actor.employee_id)?;

        let now = Utc::now();
        let record = self.store.upsert_overtime(OvertimeRecord {
            id: Uuid::new_v4(),
            employee_id: employee.id,
            date,
            hours,
            created_at: now,
            updated_at: now,
        })?;

        debug!(
            employee_id = %record.employee_id,
            date = %record.date,
            hours = %record.hours,
            "Overtime recorded"
        );
        self.audit(AuditEntry::new(
            "UPSERT",
            "overtime",
            record.id.to_string(),
            actor,
            serde_json::json!({ "date": record.date, "hours": record.hours }),
        ));

        Ok(record)
    }

    /// Records a reimbursement claim for the actor.
    ///
    /// Any number of claims may be filed for the same date.
    pub fn submit_reimbursement(
        &self,
        actor: &Actor,
        date: &str,
        amount: Decimal,
        description: &str,
    ) -> EngineResult<ReimbursementRecord> {
        if amount <= Decimal::ZERO || amount > MAX_REIMBURSEMENT_AMOUNT || !fits_money_scale(amount)
        {
            return Err(EngineError::InvalidReimbursementAmount {
                amount,
                max: MAX_REIMBURSEMENT_AMOUNT,
            });
        }
        let date = parse_date(date)?;
        let employee = self.require_employee(&actor.employee_id)?;

        let record = ReimbursementRecord {
            id: Uuid::new_v4(),
            employee_id: employee.id,
            date,
            amount,
            description: description.to_string(),
            created_at: Utc::now(),
        };
        self.store.insert_reimbursement(record.clone())?;

        debug!(
            employee_id = %record.employee_id,
            date = %record.date,
            amount = %record.amount,
            "Reimbursement recorded"
        );
        self.audit(AuditEntry::new(
            "INSERT",
            "reimbursement",
            record.id.to_string(),
            actor,
            serde_json::json!({
                "employee_id": record.employee_id,
                "date": record.date,
                "amount": record.amount,
                "description": record.description,
            }),
        ));

        Ok(record)
    }
}
