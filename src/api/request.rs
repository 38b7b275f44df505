//! Request types for the payroll API.
//!
//! Request bodies carry raw user input. Conversion into the domain types
//! performs the required-field and `HH:MM` checks before anything reaches
//! the calculation core.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};
use crate::models::{ClockTime, EmployeeDraft, WorkSubmission};

/// Request body for registering or editing an employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Display name; surrounding whitespace is ignored.
    pub name: String,
    /// Pay per hour, must be positive.
    pub hourly_rate: Decimal,
}

impl From<EmployeeRequest> for EmployeeDraft {
    fn from(req: EmployeeRequest) -> Self {
        EmployeeDraft::new(req.name, req.hourly_rate)
    }
}

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkEntryRequest {
    /// The employee who worked the shift.
    pub employee_id: String,
    /// Clock-in time as `HH:MM`.
    pub start_time: String,
    /// Clock-out time as `HH:MM`.
    pub end_time: String,
    /// Transportation reimbursement; 0 when omitted.
    #[serde(default)]
    pub transportation_fee: Option<Decimal>,
}

impl TryFrom<WorkEntryRequest> for WorkSubmission {
    type Error = PayrollError;

    fn try_from(req: WorkEntryRequest) -> PayrollResult<Self> {
        let employee_id = required("employee_id", req.employee_id)?;
        let start_time: ClockTime = required("start_time", req.start_time)?.parse()?;
        let end_time: ClockTime = required("end_time", req.end_time)?.parse()?;

        Ok(WorkSubmission {
            employee_id,
            start_time,
            end_time,
            transportation_fee: req.transportation_fee.unwrap_or(Decimal::ZERO),
        })
    }
}

fn required(field: &str, value: String) -> PayrollResult<String> {
    if value.trim().is_empty() {
        return Err(PayrollError::InvalidWorkEntry {
            field: field.to_string(),
            message: "is required".to_string(),
        });
    }
    Ok(value)
}
