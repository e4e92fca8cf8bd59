//! Response types for the payroll API.
//!
//! This module defines the error body every failed request returns and the
//! mapping from engine errors to HTTP status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::EngineError;
use crate::models::PayrollStatus;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an error for a request without a usable caller identity.
    pub fn unauthenticated(details: impl Into<String>) -> Self {
        Self::with_details("UNAUTHENTICATED", "Caller identity is missing or invalid", details)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Pairs an error body with a status.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        let (status, code) = match &error {
            EngineError::MalformedDate { .. } => (StatusCode::BAD_REQUEST, "MALFORMED_DATE"),
            EngineError::EndBeforeStart { .. } => (StatusCode::BAD_REQUEST, "END_BEFORE_START"),
            EngineError::CrossMonthSpan { .. } => (StatusCode::BAD_REQUEST, "CROSS_MONTH_SPAN"),
            EngineError::NotFirstOfMonth { .. } => {
                (StatusCode::BAD_REQUEST, "NOT_FIRST_OF_MONTH")
            }
            EngineError::NotLastOfMonth { .. } => (StatusCode::BAD_REQUEST, "NOT_LAST_OF_MONTH"),
            EngineError::WeekendAttendance { .. } => {
                (StatusCode::BAD_REQUEST, "WEEKEND_ATTENDANCE")
            }
            EngineError::DateOutsidePeriod { .. } => {
                (StatusCode::BAD_REQUEST, "DATE_OUTSIDE_PERIOD")
            }
            EngineError::InvalidOvertimeHours { .. } => {
                (StatusCode::BAD_REQUEST, "INVALID_OVERTIME_HOURS")
            }
            EngineError::InvalidReimbursementAmount { .. } => {
                (StatusCode::BAD_REQUEST, "INVALID_REIMBURSEMENT_AMOUNT")
            }
            EngineError::DuplicatePeriod { .. } => (StatusCode::CONFLICT, "DUPLICATE_PERIOD"),
            EngineError::DuplicateAttendance { .. } => {
                (StatusCode::CONFLICT, "DUPLICATE_ATTENDANCE")
            }
            EngineError::PeriodAlreadyProcessed { .. } => {
                (StatusCode::CONFLICT, "PERIOD_ALREADY_PROCESSED")
            }
            EngineError::PeriodNotFound { .. } => (StatusCode::NOT_FOUND, "PERIOD_NOT_FOUND"),
            EngineError::PayslipNotFound { .. } => (StatusCode::NOT_FOUND, "PAYSLIP_NOT_FOUND"),
            EngineError::EmployeeNotFound { .. } => (StatusCode::NOT_FOUND, "EMPLOYEE_NOT_FOUND"),
            EngineError::Forbidden { .. } => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            EngineError::DegeneratePeriod { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "DEGENERATE_PERIOD")
            }
            EngineError::LevelNotFound { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "LEVEL_NOT_FOUND")
            }
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR")
            }
            EngineError::Storage { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR"),
        };

        // Internal causes are logged, never sent to the client.
        let error = if status.is_server_error() {
            error!(code, cause = %message, "Internal error");
            ApiError::new(code, "Internal server error")
        } else {
            ApiError::new(code, message)
        };
        ApiErrorResponse { status, error }
    }
}

/// Body of `GET /payroll/:period_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollStatusResponse {
    /// The period asked about.
    pub period_id: String,
    /// Whether payroll has run for it.
    pub status: PayrollStatus,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the server answers.
    pub status: String,
    /// Configured company name.
    pub company: String,
    /// Currency all amounts are expressed in.
    pub currency: String,
}
