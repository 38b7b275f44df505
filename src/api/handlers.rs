//! HTTP request handlers for the payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::PayrollError;
use crate::models::WorkSubmission;

use super::request::{EmployeeRequest, WorkEntryRequest};
use super::response::{ApiError, ApiErrorResponse, CalculationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/employees",
            get(list_employees_handler).post(register_employee_handler),
        )
        .route(
            "/employees/:id",
            put(update_employee_handler).delete(remove_employee_handler),
        )
        .route(
            "/employees/:id/work-entries",
            get(employee_work_entries_handler),
        )
        .route("/calculate", post(calculate_handler))
        .route("/work-entries", get(list_work_entries_handler))
        .route("/work-entries/:id/result", get(work_entry_result_handler))
        .with_state(state)
}

/// Handler for GET /employees.
async fn list_employees_handler(State(state): State<AppState>) -> Response {
    let employees = state.payroll().employees().to_vec();
    (StatusCode::OK, Json(employees)).into_response()
}

/// Handler for POST /employees.
async fn register_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing employee registration");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let registered = state.payroll().register_employee(request.into());
    match registered {
        Ok(employee) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee.id,
                "Employee registered"
            );
            (StatusCode::CREATED, Json(employee)).into_response()
        }
        Err(err) => error_response(err, correlation_id, "Employee registration failed"),
    }
}

/// Handler for PUT /employees/:id.
async fn update_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %id, "Processing employee update");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let updated = state.payroll().update_employee(&id, request.into());
    match updated {
        Ok(employee) => (StatusCode::OK, Json(employee)).into_response(),
        Err(err) => error_response(err, correlation_id, "Employee update failed"),
    }
}

/// Handler for DELETE /employees/:id.
async fn remove_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let removed = state.payroll().remove_employee(&id);
    match removed {
        Ok(employee) => {
            info!(correlation_id = %correlation_id, employee_id = %id, "Employee removed");
            (StatusCode::OK, Json(employee)).into_response()
        }
        Err(err) => error_response(err, correlation_id, "Employee removal failed"),
    }
}

/// Handler for GET /employees/:id/work-entries.
async fn employee_work_entries_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let entries = state.payroll().work_entries_for(&id);
    match entries {
        Ok(entries) => (StatusCode::OK, Json(entries)).into_response(),
        Err(err) => error_response(err, correlation_id, "Employee work entries lookup failed"),
    }
}

/// Handler for POST /calculate.
///
/// Validates the submission, calculates the shift, appends the entry to the
/// work log dated today (UTC), and returns both.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<WorkEntryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let submission = match WorkSubmission::try_from(request) {
        Ok(submission) => submission,
        Err(err) => return error_response(err, correlation_id, "Invalid work entry"),
    };

    let today = Utc::now().date_naive();
    let submitted = state.payroll().submit_work_entry(submission, today);
    match submitted {
        Ok((entry, result)) => {
            info!(
                correlation_id = %correlation_id,
                entry_id = %entry.id,
                employee_id = %entry.employee_id,
                working_minutes = result.working_minutes,
                rounded_minutes = result.rounded_minutes,
                total_salary = %result.total_salary,
                "Calculation completed successfully"
            );
            (StatusCode::OK, Json(CalculationResponse { entry, result })).into_response()
        }
        Err(err) => error_response(err, correlation_id, "Calculation failed"),
    }
}

/// Handler for GET /work-entries.
async fn list_work_entries_handler(State(state): State<AppState>) -> Response {
    let entries = state.payroll().work_entries().to_vec();
    (StatusCode::OK, Json(entries)).into_response()
}

/// Handler for GET /work-entries/:id/result.
async fn work_entry_result_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let recalculated = state.payroll().recalculate(&id);
    match recalculated {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => error_response(err, correlation_id, "Recalculation failed"),
    }
}

fn error_response(err: PayrollError, correlation_id: Uuid, context: &str) -> Response {
    warn!(correlation_id = %correlation_id, error = %err, "{}", context);
    ApiErrorResponse::from(err).into_response()
}

fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
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
