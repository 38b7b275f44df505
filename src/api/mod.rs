//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoints for managing employees,
//! submitting shifts for calculation and reading back the work log.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EmployeeRequest, WorkEntryRequest};
pub use response::{ApiError, ApiErrorResponse, CalculationResponse};
pub use state::AppState;
