//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from YAML files.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, EmployeeLevel};

use super::types::{CompanyMetadata, EmployeesConfig, LevelsConfig, PayrollConfig};

/// Loads and provides access to payroll configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query salary levels and the employee roster.
///
/// # Directory Structure
///
/// ```text
/// config/payroll/
/// ├── company.yaml    # Company name and currency
/// ├── levels.yaml     # Salary levels
/// └── employees.yaml  # Employee roster
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll").unwrap();
/// let level = loader.get_level("staff").unwrap();
/// println!("{} earns {}", level.name, level.base_salary);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - A level has a non-positive base salary
    /// - An employee id is repeated or references an undefined level
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let company = Self::load_yaml::<CompanyMetadata>(&path.join("company.yaml"))?;

        let levels_path = path.join("levels.yaml");
        let levels_config = Self::load_yaml::<LevelsConfig>(&levels_path)?;
        let levels = Self::build_levels(&levels_path, levels_config)?;

        let employees_path = path.join("employees.yaml");
        let employees_config = Self::load_yaml::<EmployeesConfig>(&employees_path)?;
        let employees = Self::build_roster(&employees_path, employees_config, &levels)?;

        Ok(Self::from_config(PayrollConfig::new(company, levels, employees)))
    }

    /// Wraps an already assembled configuration.
    pub fn from_config(config: PayrollConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn build_levels(
        path: &Path,
        config: LevelsConfig,
    ) -> EngineResult<HashMap<String, EmployeeLevel>> {
        let mut levels = HashMap::with_capacity(config.levels.len());

        for (id, entry) in config.levels {
            if entry.base_salary <= Decimal::ZERO {
                return Err(EngineError::ConfigParseError {
                    path: path.display().to_string(),
                    message: format!("level '{}' must have a positive base_salary", id),
                });
            }
            levels.insert(
                id.clone(),
                EmployeeLevel {
                    id,
                    name: entry.name,
                    base_salary: entry.base_salary,
                },
            );
        }

        Ok(levels)
    }

    fn build_roster(
        path: &Path,
        config: EmployeesConfig,
        levels: &HashMap<String, EmployeeLevel>,
    ) -> EngineResult<Vec<Employee>> {
        let mut seen = HashSet::new();
        let mut employees = Vec::with_capacity(config.employees.len());

        for entry in config.employees {
            if !levels.contains_key(&entry.level) {
                return Err(EngineError::ConfigParseError {
                    path: path.display().to_string(),
                    message: format!(
                        "employee '{}' references undefined level '{}'",
                        entry.id, entry.level
                    ),
                });
            }
            if !seen.insert(entry.id.clone()) {
                return Err(EngineError::ConfigParseError {
                    path: path.display().to_string(),
                    message: format!("duplicate employee id '{}'", entry.id),
                });
            }
            employees.push(Employee {
                id: entry.id,
                username: entry.username,
                level_id: entry.level,
                role: entry.role,
            });
        }

        Ok(employees)
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the company metadata.
    pub fn company(&self) -> &CompanyMetadata {
        self.config.company()
    }

    /// Returns every employee on the roster.
    pub fn employees(&self) -> &[Employee] {
        self.config.employees()
    }

    /// Gets a salary level by id.
    pub fn get_level(&self, id: &str) -> Option<&EmployeeLevel> {
        self.config.levels().get(id)
    }

    /// Gets an employee by id.
    pub fn get_employee(&self, id: &str) -> Option<&Employee> {
        self.config.employees().iter().find(|e| e.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use std::path::PathBuf;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/payroll"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "payroll-config-{}-{}",
            name,
            uuid::Uuid::new_v4()
        ));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("company.yaml"), "name: Test Co\ncurrency: USD\n").unwrap();
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.company().currency, "USD");
        assert!(!loader.employees().is_empty());
    }

    #[test]
    fn test_get_level() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let level = loader.get_level("staff").unwrap();
        assert_eq!(level.base_salary, dec("3000.00"));
    }

    #[test]
    fn test_get_employee_and_admin_role() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let admin = loader.get_employee("admin").unwrap();
        assert_eq!(admin.role, Role::Admin);
        assert!(loader.get_employee("nobody").is_none());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("company.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_undefined_level_is_rejected() {
        let dir = scratch_dir("undefined-level");
        fs::write(
            dir.join("levels.yaml"),
            "levels:\n  staff:\n    name: Staff\n    base_salary: \"3000.00\"\n",
        )
        .unwrap();
        fs::write(
            dir.join("employees.yaml"),
            "employees:\n  - id: emp_001\n    username: alice\n    level: manager\n",
        )
        .unwrap();

        let result = ConfigLoader::load(&dir);
        match result {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("manager"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_non_positive_salary_is_rejected() {
        let dir = scratch_dir("zero-salary");
        fs::write(
            dir.join("levels.yaml"),
            "levels:\n  intern:\n    name: Intern\n    base_salary: \"0\"\n",
        )
        .unwrap();
        fs::write(dir.join("employees.yaml"), "employees: []\n").unwrap();

        let result = ConfigLoader::load(&dir);
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_duplicate_employee_id_is_rejected() {
        let dir = scratch_dir("duplicate-employee");
        fs::write(
            dir.join("levels.yaml"),
            "levels:\n  staff:\n    name: Staff\n    base_salary: \"3000.00\"\n",
        )
        .unwrap();
        fs::write(
            dir.join("employees.yaml"),
            "employees:\n  - id: emp_001\n    username: alice\n    level: staff\n  - id: emp_001\n    username: bob\n    level: staff\n",
        )
        .unwrap();

        let result = ConfigLoader::load(&dir);
        match result {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("duplicate"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let dir = scratch_dir("bad-yaml");
        fs::write(dir.join("levels.yaml"), "levels: [not, a, map").unwrap();

        let result = ConfigLoader::load(&dir);
        match result {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("levels.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
        fs::remove_dir_all(dir).ok();
    }
}
