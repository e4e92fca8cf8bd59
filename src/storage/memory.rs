//! In-memory [`PayrollStore`] guarded by a single read-write lock.
//!
//! Every trait method takes the lock exactly once, so each call behaves as one
//! transaction: uniqueness checks and the writes they guard cannot interleave
//! with another caller.

use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendancePeriod, AttendanceRecord, Employee, EmployeeLevel, OvertimeRecord, Payslip,
    ReimbursementRecord,
};

use super::PayrollStore;

type DayKey = (String, NaiveDate);

#[derive(Debug, Default)]
struct StoreState {
    periods: BTreeMap<String, AttendancePeriod>,
    levels: HashMap<String, EmployeeLevel>,
    employees: BTreeMap<String, Employee>,
    attendance: HashMap<DayKey, AttendanceRecord>,
    overtime: HashMap<DayKey, OvertimeRecord>,
    reimbursements: Vec<ReimbursementRecord>,
    payslips: HashMap<String, Vec<Payslip>>,
}

/// A process-local store, seeded from configuration.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: RwLock<StoreState>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the configured levels and roster.
    pub fn from_config(config: &ConfigLoader) -> Self {
        let state = StoreState {
            levels: config.config().levels().clone(),
            employees: config
                .employees()
                .iter()
                .map(|e| (e.id.clone(), e.clone()))
                .collect(),
            ..StoreState::default()
        };
        Self {
            state: RwLock::new(state),
        }
    }

    /// Adds or replaces a salary level.
    pub fn put_level(&self, level: EmployeeLevel) -> EngineResult<()> {
        self.write()?.levels.insert(level.id.clone(), level);
        Ok(())
    }

    /// Adds or replaces an employee.
    pub fn put_employee(&self, employee: Employee) -> EngineResult<()> {
        self.write()?.employees.insert(employee.id.clone(), employee);
        Ok(())
    }

    /// Changes the base salary of a level. Existing payslips are unaffected.
    pub fn update_base_salary(&self, level_id: &str, base_salary: Decimal) -> EngineResult<()> {
        let mut state = self.write()?;
        let level = state
            .levels
            .get_mut(level_id)
            .ok_or_else(|| EngineError::Storage {
                message: format!("unknown level '{}'", level_id),
            })?;
        level.base_salary = base_salary;
        Ok(())
    }

    fn read(&self) -> EngineResult<RwLockReadGuard<'_, StoreState>> {
        self.state.read().map_err(|_| EngineError::Storage {
            message: "store lock poisoned".to_string(),
        })
    }

    fn write(&self) -> EngineResult<RwLockWriteGuard<'_, StoreState>> {
        self.state.write().map_err(|_| EngineError::Storage {
            message: "store lock poisoned".to_string(),
        })
    }
}

impl PayrollStore for InMemoryStore {
    fn find_period(&self, period_id: &str) -> EngineResult<Option<AttendancePeriod>> {
        Ok(self.read()?.periods.get(period_id).cloned())
    }

    fn insert_period(&self, period: AttendancePeriod) -> EngineResult<()> {
        let mut state = self.write()?;
        if state.periods.contains_key(&period.id) {
            return Err(EngineError::DuplicatePeriod {
                period_id: period.id,
            });
        }
        state.periods.insert(period.id.clone(), period);
        Ok(())
    }

    fn find_employee(&self, employee_id: &str) -> EngineResult<Option<Employee>> {
        Ok(self.read()?.employees.get(employee_id).cloned())
    }

    fn list_employees(&self) -> EngineResult<Vec<Employee>> {
        Ok(self.read()?.employees.values().cloned().collect())
    }

    fn find_level(&self, level_id: &str) -> EngineResult<Option<EmployeeLevel>> {
        Ok(self.read()?.levels.get(level_id).cloned())
    }

    fn insert_attendance(&self, record: AttendanceRecord) -> EngineResult<()> {
        let mut state = self.write()?;
        let key = (record.employee_id.clone(), record.date);
        if state.attendance.contains_key(&key) {
            return Err(EngineError::DuplicateAttendance {
                employee_id: record.employee_id,
                date: record.date,
            });
        }
        state.attendance.insert(key, record);
        Ok(())
    }

    fn upsert_overtime(&self, record: OvertimeRecord) -> EngineResult<OvertimeRecord> {
        let mut state = self.write()?;
        let key = (record.employee_id.clone(), record.date);
        let hours = record.hours;
        let stored = state
            .overtime
            .entry(key)
            .and_modify(|existing| {
                existing.hours = hours;
                existing.updated_at = Utc::now();
            })
            .or_insert(record);
        Ok(stored.clone())
    }

    fn insert_reimbursement(&self, record: ReimbursementRecord) -> EngineResult<()> {
        self.write()?.reimbursements.push(record);
        Ok(())
    }

    fn attendance_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<AttendanceRecord>> {
        Ok(self
            .read()?
            .attendance
            .values()
            .filter(|r| r.date >= start && r.date <= end)
            .cloned()
            .collect())
    }

    fn overtime_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<OvertimeRecord>> {
        Ok(self
            .read()?
            .overtime
            .values()
            .filter(|r| r.date >= start && r.date <= end)
            .cloned()
            .collect())
    }

    fn reimbursements_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<ReimbursementRecord>> {
        Ok(self
            .read()?
            .reimbursements
            .iter()
            .filter(|r| r.date >= start && r.date <= end)
            .cloned()
            .collect())
    }

    fn has_payslips(&self, period_id: &str) -> EngineResult<bool> {
        Ok(self
            .read()?
            .payslips
            .get(period_id)
            .is_some_and(|slips| !slips.is_empty()))
    }

    fn insert_payslips(&self, period_id: &str, payslips: Vec<Payslip>) -> EngineResult<()> {
        let mut state = self.write()?;
        if state
            .payslips
            .get(period_id)
            .is_some_and(|slips| !slips.is_empty())
        {
            return Err(EngineError::PeriodAlreadyProcessed {
                period_id: period_id.to_string(),
            });
        }
        if let Some(stray) = payslips.iter().find(|p| p.period_id != period_id) {
            return Err(EngineError::Storage {
                message: format!(
                    "payslip {} belongs to period {}, not {}",
                    stray.id, stray.period_id, period_id
                ),
            });
        }
        state.payslips.insert(period_id.to_string(), payslips);
        Ok(())
    }

    fn find_payslip(&self, employee_id: &str, period_id: &str) -> EngineResult<Option<Payslip>> {
        Ok(self
            .read()?
            .payslips
            .get(period_id)
            .and_then(|slips| slips.iter().find(|p| p.employee_id == employee_id))
            .cloned())
    }

    fn payslips_for_period(&self, period_id: &str) -> EngineResult<Vec<Payslip>> {
        Ok(self
            .read()?
            .payslips
            .get(period_id)
            .cloned()
            .unwrap_or_default())
    }
}
