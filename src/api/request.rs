//! Request types for the payroll API.
//!
//! Dates travel as `YYYY-MM-DD` strings and are parsed by the engine, so a bad
//! date surfaces as `MALFORMED_DATE` rather than a JSON error.
//!
//! The caller is identified by `x-employee-id`. Roles always come from the
//! roster; an `x-employee-role` header is only checked against it.

use std::net::IpAddr;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts, http::StatusCode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{Actor, Role};

use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Header carrying the caller's employee id.
pub const EMPLOYEE_ID_HEADER: &str = "x-employee-id";
/// Header carrying the caller's role (`admin` or `employee`).
pub const EMPLOYEE_ROLE_HEADER: &str = "x-employee-role";
/// Header carrying the client address chain.
pub const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

/// Body of `POST /attendance-periods`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePeriodRequest {
    /// First day of the month.
    pub period_start: String,
    /// Last day of the same month.
    pub period_end: String,
}

/// Body of `POST /attendance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRequest {
    /// Period key, e.g. `06-2025`.
    pub period_id: String,
    /// The day attended.
    pub date: String,
}

/// Body of `POST /overtime`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OvertimeRequest {
    /// The day the overtime was worked.
    pub date: String,
    /// Hours worked beyond the normal day.
    pub hours: Decimal,
}

/// Body of `POST /reimbursements`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReimbursementRequest {
    /// The day the expense was incurred.
    pub date: String,
    /// Amount claimed.
    pub amount: Decimal,
    /// Free text shown on the payslip.
    #[serde(default)]
    pub description: String,
}

/// Body of `POST /payroll`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunPayrollRequest {
    /// Period to run.
    pub period_id: String,
}

/// Resolves the caller from gateway headers against the roster.
///
/// `x-employee-id` is required and must name a rostered employee. An
/// `x-employee-role` header, if sent, must match the roster role.
#[async_trait]
impl FromRequestParts<AppState> for Actor {
    type Rejection = ApiErrorResponse;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = |name: &str| {
            parts
                .headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::trim)
                .filter(|value| !value.is_empty())
        };

        let employee_id = header(EMPLOYEE_ID_HEADER).ok_or_else(|| {
            unauthorized(format!("missing {} header", EMPLOYEE_ID_HEADER))
        })?;

        let claimed_role = header(EMPLOYEE_ROLE_HEADER)
            .map(|raw| raw.parse::<Role>().map_err(unauthorized))
            .transpose()?;

        let origin = header(FORWARDED_FOR_HEADER)
            .and_then(|chain| chain.split(',').next())
            .and_then(|first| first.trim().parse::<IpAddr>().ok());

        let actor = state
            .engine()
            .authenticate(employee_id, origin)
            .map_err(|err| match err {
                EngineError::EmployeeNotFound { employee_id } => {
                    unauthorized(format!("unknown employee '{}'", employee_id))
                }
                other => ApiErrorResponse::from(other),
            })?;

        match claimed_role {
            Some(role) if role != actor.role => Err(unauthorized(format!(
                "role header does not match the roster for '{}'",
                actor.employee_id
            ))),
            _ => Ok(actor),
        }
    }
}

fn unauthorized(details: String) -> ApiErrorResponse {
    ApiErrorResponse::new(StatusCode::UNAUTHORIZED, ApiError::unauthenticated(details))
}
