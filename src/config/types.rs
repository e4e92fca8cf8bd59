//! Configuration types for the payroll engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::models::{Employee, EmployeeLevel, Role};

/// Metadata about the paying company.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyMetadata {
    /// The company's display name.
    pub name: String,
    /// ISO 4217 code all amounts are expressed in.
    pub currency: String,
}

/// A salary level as written in `levels.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct LevelEntry {
    /// Human-readable level name.
    pub name: String,
    /// Monthly base salary.
    pub base_salary: Decimal,
}

/// Levels configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct LevelsConfig {
    /// Map of level id to level details.
    pub levels: HashMap<String, LevelEntry>,
}

/// A roster entry as written in `employees.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeEntry {
    /// Unique identifier for the employee.
    pub id: String,
    /// Login name.
    pub username: String,
    /// Level id, must be defined in `levels.yaml`.
    pub level: String,
    /// Role granted to the employee.
    #[serde(default = "default_role")]
    pub role: Role,
}

fn default_role() -> Role {
    Role::Employee
}

/// Roster configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeesConfig {
    /// All employees on the payroll.
    pub employees: Vec<EmployeeEntry>,
}

/// The complete payroll configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    /// Company metadata.
    company: CompanyMetadata,
    /// Salary levels keyed by id.
    levels: HashMap<String, EmployeeLevel>,
    /// Employees in roster order.
    employees: Vec<Employee>,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    pub fn new(
        company: CompanyMetadata,
        levels: HashMap<String, EmployeeLevel>,
        employees: Vec<Employee>,
    ) -> Self {
        Self {
            company,
            levels,
            employees,
        }
    }

    /// Returns the company metadata.
    pub fn company(&self) -> &CompanyMetadata {
        &self.company
    }

    /// Returns all salary levels.
    pub fn levels(&self) -> &HashMap<String, EmployeeLevel> {
        &self.levels
    }

    /// Returns all employees.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }
}
