//! Employee, level and actor models.
//!
//! This module defines the [`Employee`] roster entry, the [`EmployeeLevel`] that
//! carries the monthly base salary, and the [`Actor`] identity supplied with
//! every operation.

use std::net::IpAddr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The role granted to an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// May create periods, run payroll and read period summaries.
    Admin,
    /// May submit records and read their own payslips.
    Employee,
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "employee" => Ok(Role::Employee),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}

/// A salary level.
///
/// Salary is level-scoped: every employee on the same level earns the same
/// monthly base salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeLevel {
    /// Level identifier (e.g., "staff").
    pub id: String,
    /// Human-readable level name.
    pub name: String,
    /// Monthly base salary.
    pub base_salary: Decimal,
}

/// An employee on the payroll roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Login name, used to order summaries.
    pub username: String,
    /// The level this employee is paid at.
    pub level_id: String,
    /// The employee's role.
    pub role: Role,
}

/// The authenticated identity performing an operation.
///
/// Supplied by the identity provider and trusted as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// The employee id of the caller.
    pub employee_id: String,
    /// The caller's role.
    pub role: Role,
    /// The address the request originated from, if known.
    pub origin: Option<IpAddr>,
}

impl Actor {
    /// Creates an actor with no known origin address.
    pub fn new(employee_id: impl Into<String>, role: Role) -> Self {
        Self {
            employee_id: employee_id.into(),
            role,
            origin: None,
        }
    }

    /// Returns true if the actor holds the admin role.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{Actor, Role};
    ///
    /// assert!(Actor::new("admin", Role::Admin).is_admin());
    /// assert!(!Actor::new("emp_001", Role::Employee).is_admin());
    /// ```
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_str_is_case_insensitive() {
        assert_eq!("Admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!(" employee ".parse::<Role>(), Ok(Role::Employee));
        assert!("manager".parse::<Role>().is_err());
    }

    #[test]
    fn test_deserialize_employee() {
        let json = r#"{
            "id": "emp_001",
            "username": "alice",
            "level_id": "staff",
            "role": "employee"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "emp_001");
        assert_eq!(employee.username, "alice");
        assert_eq!(employee.level_id, "staff");
        assert_eq!(employee.role, Role::Employee);
    }

    #[test]
    fn test_deserialize_level_with_string_salary() {
        let json = r#"{ "id": "staff", "name": "Staff", "base_salary": "3000.00" }"#;
        let level: EmployeeLevel = serde_json::from_str(json).unwrap();
        assert_eq!(level.base_salary, Decimal::new(300000, 2));
    }

    #[test]
    fn test_actor_new_has_no_origin() {
        let actor = Actor::new("emp_001", Role::Employee);
        assert_eq!(actor.origin, None);
        assert!(!actor.is_admin());
    }
}
