//! Work entry model and the submission that produces one.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ClockTime;

/// A single recorded shift.
///
/// Entries are created once per calculation submission and never modified.
/// The end time may be earlier than the start time, in which case the shift
/// crosses midnight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkEntry {
    /// Unique identifier for the entry.
    pub id: String,
    /// The employee who worked the shift.
    pub employee_id: String,
    /// Clock-in time.
    pub start_time: ClockTime,
    /// Clock-out time.
    pub end_time: ClockTime,
    /// Flat transportation reimbursement for the shift.
    #[serde(default)]
    pub transportation_fee: Decimal,
    /// Calendar date the entry was recorded on.
    pub date: NaiveDate,
}

/// Validated input for one payroll calculation.
///
/// # Examples
///
/// ```
/// use shift_payroll::models::{ClockTime, WorkSubmission};
/// use rust_decimal::Decimal;
///
/// let submission = WorkSubmission {
///     employee_id: "emp_001".to_string(),
///     start_time: "09:00".parse::<ClockTime>().unwrap(),
///     end_time: "17:30".parse::<ClockTime>().unwrap(),
///     transportation_fee: Decimal::new(500, 0),
/// };
/// assert_eq!(submission.end_time.to_string(), "17:30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkSubmission {
    /// The employee who worked the shift.
    pub employee_id: String,
    /// Clock-in time.
    pub start_time: ClockTime,
    /// Clock-out time.
    pub end_time: ClockTime,
    /// Flat transportation reimbursement for the shift.
    #[serde(default)]
    pub transportation_fee: Decimal,
}
