//! HTTP API module for the Payroll Engine.
//!
//! This module exposes the payroll operations as REST endpoints. Caller
//! identity comes from headers set by an upstream gateway; see
//! [`request::EMPLOYEE_ID_HEADER`].

mod handlers;
pub mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AttendanceRequest, CreatePeriodRequest, OvertimeRequest, ReimbursementRequest,
    RunPayrollRequest,
};
pub use response::{ApiError, ApiErrorResponse, HealthResponse, PayrollStatusResponse};
pub use state::AppState;
