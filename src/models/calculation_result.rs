//! Calculation result model.
//!
//! A [`CalculationResult`] is derived data. It is shown to the user and can be
//! recomputed at any time from a work entry and the employee's rate, so it is
//! never persisted as a source of truth.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::clock_time::MINUTES_PER_HOUR;

/// The outcome of one shift calculation.
///
/// # Example
///
/// ```
/// use shift_payroll::models::CalculationResult;
/// use rust_decimal::Decimal;
///
/// let result = CalculationResult {
///     working_minutes: 512,
///     rounded_minutes: 510,
///     base_salary: Decimal::new(10200, 0),
///     total_salary: Decimal::new(10700, 0),
/// };
/// assert_eq!(result.rounded_hours_and_minutes(), (8, 30));
/// assert_eq!(result.transportation_fee(), Decimal::new(500, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Raw elapsed minutes between clock-in and clock-out.
    pub working_minutes: u32,
    /// Working minutes truncated to completed quarter hours.
    pub rounded_minutes: u32,
    /// Wage for the billable minutes, excluding reimbursement.
    pub base_salary: Decimal,
    /// Base salary plus transportation reimbursement.
    pub total_salary: Decimal,
}

impl CalculationResult {
    /// Working minutes split into whole hours and remaining minutes.
    pub fn working_hours_and_minutes(&self) -> (u32, u32) {
        split_minutes(self.working_minutes)
    }

    /// Rounded minutes split into whole hours and remaining minutes.
    pub fn rounded_hours_and_minutes(&self) -> (u32, u32) {
        split_minutes(self.rounded_minutes)
    }

    /// The reimbursement included in the total.
    pub fn transportation_fee(&self) -> Decimal {
        self.total_salary - self.base_salary
    }
}

fn split_minutes(minutes: u32) -> (u32, u32) {
    (minutes / MINUTES_PER_HOUR, minutes % MINUTES_PER_HOUR)
}
