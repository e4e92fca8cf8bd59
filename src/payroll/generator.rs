//! Payroll runs.
//!
//! A run resolves the period, derives every employee's rates from their level
//! salary, folds the three input streams into contributions and writes one
//! payslip per eligible employee in a single batch.

use std::collections::HashMap;
use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, info};
use uuid::Uuid;

use crate::audit::AuditEntry;
use crate::calculation::{
    EmployeeContributions, aggregate_attendance, aggregate_overtime, aggregate_reimbursements,
    count_working_days, rates_for_working_days,
};
use crate::error::{EngineError, EngineResult};
use crate::models::{Actor, AttendancePeriod, PayrollRun, PayrollStatus, Payslip};

use super::PayrollEngine;

/// Splits records into per-employee buckets.
fn group_by_employee<T, F>(records: Vec<T>, employee_of: F) -> HashMap<String, Vec<T>>
where
    F: Fn(&T) -> &str,
{
    let mut grouped: HashMap<String, Vec<T>> = HashMap::new();
    for record in records {
        grouped
            .entry(employee_of(&record).to_string())
            .or_default()
            .push(record);
    }
    grouped
}

impl PayrollEngine {
    /// Generates payslips for every eligible employee in a period. Admin only.
    ///
    /// Employees with no attendance, overtime or reimbursements in the period
    /// receive no payslip. The payslips are written in one batch; if anything
    /// fails, nothing is written.
    ///
    /// # Errors
    ///
    /// - `Forbidden` for non-admins
    /// - `PeriodNotFound` if the period does not exist
    /// - `PeriodAlreadyProcessed` if payroll already ran for the period
    /// - `DegeneratePeriod` if the period has no working days
    /// - `LevelNotFound` if an employee's salary level is missing
    pub fn run_payroll(&self, actor: &Actor, period_id: &str) -> EngineResult<PayrollRun> {
        Self::require_admin(actor, "run_payroll")?;
        let started = Instant::now();

        let period = self.find_period(period_id)?;
        if self.store.has_payslips(&period.id)? {
            return Err(EngineError::PeriodAlreadyProcessed {
                period_id: period.id,
            });
        }

        let working_days = count_working_days(period.start_date, period.end_date);
        if working_days == 0 {
            return Err(EngineError::DegeneratePeriod {
                start: period.start_date,
                end: period.end_date,
            });
        }

        let payslips = self.compute_payslips(actor, &period, working_days)?;
        let total_disbursed: Decimal = payslips.iter().map(|p| p.total_take_home).sum();
        let audit_entries: Vec<AuditEntry> = payslips
            .iter()
            .map(|p| {
                AuditEntry::new(
                    "INSERT",
                    "payslip",
                    p.id.to_string(),
                    actor,
                    serde_json::json!({
                        "employee_id": p.employee_id,
                        "period_id": p.period_id,
                        "total_take_home": p.total_take_home,
                    }),
                )
            })
            .collect();
        let payslips_generated = payslips.len();

        self.store.insert_payslips(&period.id, payslips)?;
        for entry in audit_entries {
            self.audit(entry);
        }

        info!(
            period_id = %period.id,
            working_days,
            payslips_generated,
            total_disbursed = %total_disbursed,
            duration_us = started.elapsed().as_micros(),
            "Payroll run completed"
        );

        Ok(PayrollRun {
            period_id: period.id,
            working_days,
            payslips_generated,
            total_disbursed,
            completed_at: Utc::now(),
        })
    }

    /// Reports whether payroll has run for a period. Admin only.
    pub fn payroll_status(&self, actor: &Actor, period_id: &str) -> EngineResult<PayrollStatus> {
        Self::require_admin(actor, "payroll_status")?;
        let period = self.find_period(period_id)?;

        Ok(if self.store.has_payslips(&period.id)? {
            PayrollStatus::Completed
        } else {
            PayrollStatus::NotRun
        })
    }

    pub(super) fn find_period(&self, period_id: &str) -> EngineResult<AttendancePeriod> {
        self.store
            .find_period(period_id)?
            .ok_or_else(|| EngineError::PeriodNotFound {
                period_id: period_id.to_string(),
            })
    }

    fn compute_payslips(
        &self,
        actor: &Actor,
        period: &AttendancePeriod,
        working_days: u32,
    ) -> EngineResult<Vec<Payslip>> {
        let (start, end) = (period.start_date, period.end_date);
        let mut attendance = group_by_employee(self.store.attendance_between(start, end)?, |r| {
            r.employee_id.as_str()
        });
        let mut overtime = group_by_employee(self.store.overtime_between(start, end)?, |r| {
            r.employee_id.as_str()
        });
        let mut reimbursements =
            group_by_employee(self.store.reimbursements_between(start, end)?, |r| {
                r.employee_id.as_str()
            });

        let created_at = Utc::now();
        let mut payslips = Vec::new();

        for employee in self.store.list_employees()? {
            let level = self.level_of(&employee)?;
            let rates = rates_for_working_days(level.base_salary, working_days, &self.rates)
                .ok_or(EngineError::DegeneratePeriod { start, end })?;

            let contributions = EmployeeContributions {
                attendance: aggregate_attendance(
                    &employee.id,
                    &attendance.remove(&employee.id).unwrap_or_default(),
                    period,
                    &rates,
                    &self.rates,
                ),
                overtime: aggregate_overtime(
                    &employee.id,
                    &overtime.remove(&employee.id).unwrap_or_default(),
                    period,
                    &rates,
                ),
                reimbursement: aggregate_reimbursements(
                    &employee.id,
                    &reimbursements.remove(&employee.id).unwrap_or_default(),
                    period,
                ),
            };

            if !contributions.is_eligible() {
                debug!(employee_id = %employee.id, period_id = %period.id, "No contributions, skipping");
                continue;
            }

            payslips.push(Payslip {
                id: Uuid::new_v4(),
                employee_id: employee.id,
                username: employee.username,
                period_id: period.id.clone(),
                base_salary: level.base_salary,
                attendance_days: contributions.attendance.days,
                attendance_amount: contributions.attendance.amount,
                overtime_hours: contributions.overtime.hours,
                overtime_amount: contributions.overtime.amount,
                reimbursement_amount: contributions.reimbursement.amount,
                total_take_home: contributions.total_take_home(),
                created_at,
                created_by: actor.employee_id.clone(),
            });
        }

        Ok(payslips)
    }
}
