//! Payroll Computation Engine
//!
//! This crate records monthly attendance periods, employee attendance,
//! overtime and reimbursement claims, and turns them into immutable payslips
//! when an administrator runs payroll for a period.

#![warn(missing_docs)]

pub mod api;
pub mod audit;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod payroll;
pub mod storage;
