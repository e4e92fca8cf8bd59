//! Configuration loading and management for the Payroll Engine.
//!
//! This module provides functionality to load payroll configuration from YAML
//! files: company metadata, salary levels and the employee roster.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll").unwrap();
//! println!("Paying {} employees", config.employees().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CompanyMetadata, EmployeeEntry, EmployeesConfig, LevelEntry, LevelsConfig, PayrollConfig,
};
