//! The payroll engine.
//!
//! [`PayrollEngine`] ties the pure calculation rules to storage and the audit
//! trail. Its operations are split by concern:
//!
//! - `submission` records periods, attendance, overtime and reimbursements,
//! - `generator` runs payroll for a period,
//! - `reader` builds payslip breakdowns and period summaries.

mod generator;
mod reader;
mod submission;

use std::net::IpAddr;
use std::sync::Arc;

use tracing::warn;

use crate::audit::{AuditEntry, AuditSink};
use crate::calculation::RateConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{Actor, Employee, EmployeeLevel};
use crate::storage::PayrollStore;

/// Payroll operations over a store and an audit sink.
///
/// The engine holds no mutable state of its own; all coordination between
/// concurrent callers happens inside the store.
#[derive(Clone)]
pub struct PayrollEngine {
    store: Arc<dyn PayrollStore>,
    audit: Arc<dyn AuditSink>,
    rates: RateConfig,
}

impl PayrollEngine {
    /// Creates an engine with the default rate constants.
    pub fn new(store: Arc<dyn PayrollStore>, audit: Arc<dyn AuditSink>) -> Self {
        Self {
            store,
            audit,
            rates: RateConfig::default(),
        }
    }

    /// Replaces the rate constants.
    pub fn with_rate_config(mut self, rates: RateConfig) -> Self {
        self.rates = rates;
        self
    }

    /// Returns the rate constants in use.
    pub fn rate_config(&self) -> &RateConfig {
        &self.rates
    }

    /// Builds the actor for a rostered employee. The role comes from the
    /// roster, never from the caller.
    ///
    /// # Errors
    ///
    /// `EmployeeNotFound` if the id is not on the roster.
    pub fn authenticate(&self, employee_id: &str, origin: Option<IpAddr>) -> EngineResult<Actor> {
        let employee = self.require_employee(employee_id)?;
        let mut actor = Actor::new(employee.id, employee.role);
        actor.origin = origin;
        Ok(actor)
    }

    fn require_admin(actor: &Actor, operation: &str) -> EngineResult<()> {
        if actor.is_admin() {
            Ok(())
        } else {
            Err(EngineError::Forbidden {
                operation: operation.to_string(),
            })
        }
    }

    fn require_employee(&self, employee_id: &str) -> EngineResult<Employee> {
        self.store
            .find_employee(employee_id)?
            .ok_or_else(|| EngineError::EmployeeNotFound {
                employee_id: employee_id.to_string(),
            })
    }

    fn level_of(&self, employee: &Employee) -> EngineResult<EmployeeLevel> {
        self.store
            .find_level(&employee.level_id)?
            .ok_or_else(|| EngineError::LevelNotFound {
                employee_id: employee.id.clone(),
                level_id: employee.level_id.clone(),
            })
    }

    /// Hands an entry to the audit sink. Failures are logged, never returned.
    fn audit(&self, entry: AuditEntry) {
        let action = entry.action.clone();
        let record_id = entry.record_id.clone();
        if let Err(err) = self.audit.record(entry) {
            warn!(
                action = %action,
                record_id = %record_id,
                error = %err,
                "Failed to write audit log entry"
            );
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::str::FromStr;
    use std::sync::Arc;

    use rust_decimal::Decimal;

    use crate::audit::MemoryAuditSink;
    use crate::models::{Actor, Employee, EmployeeLevel, Role};
    use crate::storage::InMemoryStore;

    use super::PayrollEngine;

    pub fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    pub struct Harness {
        pub engine: PayrollEngine,
        pub store: Arc<InMemoryStore>,
        pub audit: Arc<MemoryAuditSink>,
    }

    /// Engine over a store with one admin and three employees.
    ///
    /// alice and carol are on `staff` (3000), bob on `senior` (4200).
    pub fn harness() -> Harness {
        let store = Arc::new(InMemoryStore::new());
        for (id, salary) in [("staff", "3000"), ("senior", "4200"), ("manager", "5600")] {
            store
                .put_level(EmployeeLevel {
                    id: id.to_string(),
                    name: id.to_string(),
                    base_salary: dec(salary),
                })
                .unwrap();
        }
        for (id, username, level, role) in [
            ("admin", "admin", "manager", Role::Admin),
            ("emp_001", "alice", "staff", Role::Employee),
            ("emp_002", "bob", "senior", Role::Employee),
            ("emp_003", "carol", "staff", Role::Employee),
        ] {
            store
                .put_employee(Employee {
                    id: id.to_string(),
                    username: username.to_string(),
                    level_id: level.to_string(),
                    role,
                })
                .unwrap();
        }

        let audit = Arc::new(MemoryAuditSink::new());
        let engine = PayrollEngine::new(store.clone(), audit.clone());
        Harness {
            engine,
            store,
            audit,
        }
    }

    pub fn admin() -> Actor {
        Actor::new("admin", Role::Admin)
    }

    pub fn employee(id: &str) -> Actor {
        Actor::new(id, Role::Employee)
    }
}
