//! HTTP request handlers for the payroll API.
//!
//! Every handler tags its request with a correlation id, delegates to the
//! [`PayrollEngine`](crate::payroll::PayrollEngine) and maps engine errors
//! through [`ApiErrorResponse`].

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::Actor;

use super::request::{
    AttendanceRequest, CreatePeriodRequest, OvertimeRequest, ReimbursementRequest,
    RunPayrollRequest,
};
use super::response::{ApiError, ApiErrorResponse, HealthResponse, PayrollStatusResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/attendance-periods", post(create_period_handler))
        .route("/attendance", post(attendance_handler))
        .route("/overtime", post(overtime_handler))
        .route("/reimbursements", post(reimbursement_handler))
        .route("/payroll", post(run_payroll_handler))
        .route("/payroll/:period_id", get(payroll_status_handler))
        .route("/payslips/:period_id", get(payslip_handler))
        .route(
            "/admin/payslips/:period_id/summary",
            get(payslip_summary_handler),
        )
        .with_state(state)
}

/// Handler for GET /health.
async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let company = state.company();
    Json(HealthResponse {
        status: "ok".to_string(),
        company: company.name.clone(),
        currency: company.currency.clone(),
    })
}

/// Handler for POST /attendance-periods. Admin only.
async fn create_period_handler(
    State(state): State<AppState>,
    actor: Actor,
    payload: Result<Json<CreatePeriodRequest>, JsonRejection>,
) -> Response {
    let correlation_id = begin("create_period", &actor);
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection(correlation_id, rejection),
    };

    let started = Instant::now();
    let result =
        state
            .engine()
            .create_period(&actor, &request.period_start, &request.period_end);
    respond(correlation_id, "create_period", started, StatusCode::CREATED, result)
}

/// Handler for POST /attendance.
async fn attendance_handler(
    State(state): State<AppState>,
    actor: Actor,
    payload: Result<Json<AttendanceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = begin("submit_attendance", &actor);
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection(correlation_id, rejection),
    };

    let started = Instant::now();
    let result = state
        .engine()
        .submit_attendance(&actor, &request.period_id, &request.date);
    respond(
        correlation_id,
        "submit_attendance",
        started,
        StatusCode::CREATED,
        result,
    )
}

/// Handler for POST /overtime. Resubmitting a date replaces its hours.
async fn overtime_handler(
    State(state): State<AppState>,
    actor: Actor,
    payload: Result<Json<OvertimeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = begin("submit_overtime", &actor);
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection(correlation_id, rejection),
    };

    let started = Instant::now();
    let result = state
        .engine()
        .submit_overtime(&actor, &request.date, request.hours);
    respond(correlation_id, "submit_overtime", started, StatusCode::OK, result)
}

/// Handler for POST /reimbursements.
async fn reimbursement_handler(
    State(state): State<AppState>,
    actor: Actor,
    payload: Result<Json<ReimbursementRequest>, JsonRejection>,
) -> Response {
    let correlation_id = begin("submit_reimbursement", &actor);
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection(correlation_id, rejection),
    };

    let started = Instant::now();
    let result = state.engine().submit_reimbursement(
        &actor,
        &request.date,
        request.amount,
        &request.description,
    );
    respond(
        correlation_id,
        "submit_reimbursement",
        started,
        StatusCode::CREATED,
        result,
    )
}

/// Handler for POST /payroll. Admin only.
async fn run_payroll_handler(
    State(state): State<AppState>,
    actor: Actor,
    payload: Result<Json<RunPayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = begin("run_payroll", &actor);
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection(correlation_id, rejection),
    };

    let started = Instant::now();
    let result = state.engine().run_payroll(&actor, &request.period_id);
    respond(correlation_id, "run_payroll", started, StatusCode::OK, result)
}

/// Handler for GET /payroll/:period_id. Admin only.
async fn payroll_status_handler(
    State(state): State<AppState>,
    actor: Actor,
    Path(period_id): Path<String>,
) -> Response {
    let correlation_id = begin("payroll_status", &actor);
    let started = Instant::now();
    let result = state
        .engine()
        .payroll_status(&actor, &period_id)
        .map(|status| PayrollStatusResponse { period_id, status });
    respond(correlation_id, "payroll_status", started, StatusCode::OK, result)
}

/// Handler for GET /payslips/:period_id. Returns the caller's own payslip.
async fn payslip_handler(
    State(state): State<AppState>,
    actor: Actor,
    Path(period_id): Path<String>,
) -> Response {
    let correlation_id = begin("get_payslip", &actor);
    let started = Instant::now();
    let result = state.engine().get_payslip(&actor, &period_id);
    respond(correlation_id, "get_payslip", started, StatusCode::OK, result)
}

/// Handler for GET /admin/payslips/:period_id/summary. Admin only.
async fn payslip_summary_handler(
    State(state): State<AppState>,
    actor: Actor,
    Path(period_id): Path<String>,
) -> Response {
    let correlation_id = begin("get_payslip_summary", &actor);
    let started = Instant::now();
    let result = state.engine().get_payslip_summary(&actor, &period_id);
    respond(
        correlation_id,
        "get_payslip_summary",
        started,
        StatusCode::OK,
        result,
    )
}

/// Generates a correlation id and logs the start of a request.
fn begin(operation: &str, actor: &Actor) -> Uuid {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        operation,
        employee_id = %actor.employee_id,
        origin = ?actor.origin,
        "Processing request"
    );
    correlation_id
}

/// Turns an engine result into a JSON response and logs the outcome.
fn respond<T: Serialize>(
    correlation_id: Uuid,
    operation: &str,
    started: Instant,
    status: StatusCode,
    result: EngineResult<T>,
) -> Response {
    let duration_us = started.elapsed().as_micros();
    match result {
        Ok(body) => {
            info!(
                correlation_id = %correlation_id,
                operation,
                duration_us,
                "Request completed successfully"
            );
            (status, Json(body)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                operation,
                duration_us,
                error = %err,
                "Request failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Maps a JSON body rejection to a 400 response.
fn json_rejection(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's message, e.g. "missing field `date`".
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::new(StatusCode::BAD_REQUEST, error).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::{EMPLOYEE_ID_HEADER, EMPLOYEE_ROLE_HEADER};
    use crate::config::ConfigLoader;
    use axum::{body::Body, http::Request};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/payroll").expect("Failed to load config");
        AppState::from_config(&config)
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn post_as(employee_id: &str, role: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .header(EMPLOYEE_ID_HEADER, employee_id)
            .header(EMPLOYEE_ROLE_HEADER, role)
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_company() {
        let router = create_router(create_test_state());
        let (status, body) = send(
            router,
            Request::builder().uri("/health").body(Body::empty()).unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["currency"], "USD");
    }

    #[tokio::test]
    async fn test_create_period_returns_201() {
        let router = create_router(create_test_state());
        let body = json!({ "period_start": "2025-06-01", "period_end": "2025-06-30" });
        let (status, body) = send(
            router,
            post_as("admin", "admin", "/attendance-periods", &body.to_string()),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], "06-2025");
        assert_eq!(body["created_by"], "admin");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());
        let (status, body) = send(
            router,
            post_as("admin", "admin", "/attendance-periods", "{invalid json"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_field_returns_validation_error() {
        let router = create_router(create_test_state());
        let (status, body) = send(
            router,
            post_as("emp_001", "employee", "/overtime", r#"{ "hours": 2 }"#),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert!(body["message"].as_str().unwrap().contains("missing field"));
    }

    #[tokio::test]
    async fn test_employee_cannot_run_payroll() {
        let router = create_router(create_test_state());
        let (status, body) = send(
            router,
            post_as("emp_001", "employee", "/payroll", r#"{ "period_id": "06-2025" }"#),
        )
        .await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["code"], "FORBIDDEN");
    }

    #[tokio::test]
    async fn test_request_without_identity_returns_401() {
        let router = create_router(create_test_state());
        let (status, body) = send(
            router,
            Request::builder()
                .uri("/payslips/06-2025")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["code"], "UNAUTHENTICATED");
    }
}
