//! Base and total salary from billable minutes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::rounding::quarter_hour_blocks;

/// Quarter hours per hour, the divisor for the per-block rate.
const BLOCKS_PER_HOUR: u32 = 4;

/// Base and total pay for one shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Wage for completed quarter-hour blocks.
    pub base_salary: Decimal,
    /// Base salary plus the transportation fee.
    pub total_salary: Decimal,
}

/// Computes the pay for a number of worked minutes.
///
/// The per-block rate is `hourly_rate / 4`. The block count is derived from
/// `minutes` here, so passing raw or already-rounded minutes gives the same
/// result. No currency rounding is applied.
///
/// Registration and submission cap the rate and fee, which keeps this
/// arithmetic far below the `Decimal` range.
///
/// # Arguments
///
/// * `hourly_rate` - Pay per hour, expected to be positive
/// * `minutes` - Worked minutes, raw or rounded
/// * `transportation_fee` - Flat reimbursement added on top of the base
///
/// # Examples
///
/// ```
/// use shift_payroll::calculation::compute_salary;
/// use rust_decimal::Decimal;
///
/// let pay = compute_salary(Decimal::new(1200, 0), 510, Decimal::new(500, 0));
/// assert_eq!(pay.base_salary, Decimal::new(10200, 0));
/// assert_eq!(pay.total_salary, Decimal::new(10700, 0));
/// ```
pub fn compute_salary(
    hourly_rate: Decimal,
    minutes: u32,
    transportation_fee: Decimal,
) -> SalaryBreakdown {
    debug_assert!(
        !hourly_rate.is_sign_negative(),
        "hourly rate must not be negative"
    );

    let block_rate = hourly_rate / Decimal::from(BLOCKS_PER_HOUR);
    let base_salary = block_rate * Decimal::from(quarter_hour_blocks(minutes));

    SalaryBreakdown {
        base_salary,
        total_salary: base_salary + transportation_fee,
    }
}
