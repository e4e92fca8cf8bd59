//! Payslip breakdowns and period summaries.
//!
//! The stored payslip is returned exactly as generated. Rates shown next to it
//! are recomputed from the employee's current salary, so they can drift from
//! the stored amounts if the salary changed after payroll ran.

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculation::{resolve_rates, round_money};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    Actor, AttendanceBreakdown, OvertimeBreakdown, PayslipDetail, PayslipSummary,
    PayslipSummaryLine, ReimbursementLine,
};

use super::PayrollEngine;

impl PayrollEngine {
    /// Returns the actor's payslip for a period with its live breakdown.
    ///
    /// # Errors
    ///
    /// `PayslipNotFound` if payroll produced no payslip for the actor in that
    /// period (including when the period itself does not exist).
    pub fn get_payslip(&self, actor: &Actor, period_id: &str) -> EngineResult<PayslipDetail> {
        let payslip = self
            .store
            .find_payslip(&actor.employee_id, period_id)?
            .ok_or_else(|| EngineError::PayslipNotFound {
                employee_id: actor.employee_id.clone(),
                period_id: period_id.to_string(),
            })?;

        let period = self.find_period(period_id)?;
        let employee = self.require_employee(&actor.employee_id)?;
        let level = self.level_of(&employee)?;
        let rates = resolve_rates(
            level.base_salary,
            period.start_date,
            period.end_date,
            &self.rates,
        )?;

        let mut claims: Vec<_> = self
            .store
            .reimbursements_between(period.start_date, period.end_date)?
            .into_iter()
            .filter(|r| r.employee_id == employee.id)
            .collect();
        claims.sort_by(|a, b| (a.date, a.created_at).cmp(&(b.date, b.created_at)));

        debug!(
            employee_id = %employee.id,
            period_id = %period.id,
            claims = claims.len(),
            "Payslip breakdown built"
        );

        Ok(PayslipDetail {
            attendance: AttendanceBreakdown {
                working_days: rates.working_days,
                attendance_days: payslip.attendance_days,
                attendance_amount: payslip.attendance_amount,
            },
            overtime: OvertimeBreakdown {
                overtime_hours: payslip.overtime_hours,
                hourly_rate: round_money(rates.hourly_rate),
                overtime_rate: round_money(rates.overtime_rate),
                overtime_amount: payslip.overtime_amount,
            },
            reimbursements: claims
                .into_iter()
                .map(|r| ReimbursementLine {
                    id: r.id,
                    date: r.date,
                    description: r.description,
                    amount: r.amount,
                    submitted_at: r.created_at,
                })
                .collect(),
            payslip,
        })
    }

    /// Lists every payslip's take-home pay for a period. Admin only.
    ///
    /// Returns an empty summary if payroll has not run for the period.
    pub fn get_payslip_summary(
        &self,
        actor: &Actor,
        period_id: &str,
    ) -> EngineResult<PayslipSummary> {
        Self::require_admin(actor, "get_payslip_summary")?;
        let period = self.find_period(period_id)?;

        let mut employees: Vec<PayslipSummaryLine> = self
            .store
            .payslips_for_period(&period.id)?
            .into_iter()
            .map(|p| PayslipSummaryLine {
                username: p.username,
                employee_id: p.employee_id,
                total_take_home: p.total_take_home,
            })
            .collect();
        employees.sort_by(|a, b| {
            a.username
                .cmp(&b.username)
                .then_with(|| a.employee_id.cmp(&b.employee_id))
        });

        let grand_total: Decimal = employees.iter().map(|line| line.total_take_home).sum();

        Ok(PayslipSummary {
            period_id: period.id,
            employees,
            grand_total,
        })
    }
}
