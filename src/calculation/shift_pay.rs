//! Full shift calculation: elapsed time, rounding, then pay.

use rust_decimal::Decimal;

use crate::models::{CalculationResult, ClockTime, Employee, WorkEntry};

use super::rounding::round_down_to_quarter_hour;
use super::salary::compute_salary;
use super::time_arithmetic::elapsed_minutes;

/// Calculates the pay for one shift.
///
/// Runs the three calculation steps in order: elapsed minutes between the
/// clock times, truncation to completed quarter hours, then base and total
/// salary for the rounded minutes with the reimbursement added.
///
/// # Examples
///
/// ```
/// use shift_payroll::calculation::calculate_shift;
/// use shift_payroll::models::ClockTime;
/// use rust_decimal::Decimal;
///
/// let start: ClockTime = "09:00".parse().unwrap();
/// let end: ClockTime = "17:30".parse().unwrap();
/// let result = calculate_shift(Decimal::new(1200, 0), start, end, Decimal::new(500, 0));
///
/// assert_eq!(result.working_minutes, 510);
/// assert_eq!(result.rounded_minutes, 510);
/// assert_eq!(result.base_salary, Decimal::new(10200, 0));
/// assert_eq!(result.total_salary, Decimal::new(10700, 0));
/// ```
pub fn calculate_shift(
    hourly_rate: Decimal,
    start: ClockTime,
    end: ClockTime,
    transportation_fee: Decimal,
) -> CalculationResult {
    let working_minutes = elapsed_minutes(start, end);
    let rounded_minutes = round_down_to_quarter_hour(working_minutes);
    let pay = compute_salary(hourly_rate, rounded_minutes, transportation_fee);

    CalculationResult {
        working_minutes,
        rounded_minutes,
        base_salary: pay.base_salary,
        total_salary: pay.total_salary,
    }
}

/// Recomputes the result of a recorded entry with the employee's rate.
pub fn calculate_work_entry(entry: &WorkEntry, employee: &Employee) -> CalculationResult {
    calculate_shift(
        employee.hourly_rate,
        entry.start_time,
        entry.end_time,
        entry.transportation_fee,
    )
}
