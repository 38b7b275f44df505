//! Calculation logic for the payroll engine.
//!
//! This module contains the pure calculation core: elapsed minutes between
//! two clock times with overnight wraparound, truncation to completed
//! quarter hours, and the base/total salary formula. None of these functions
//! perform I/O or hold state.

mod rounding;
mod salary;
mod shift_pay;
mod time_arithmetic;

pub use rounding::{QUARTER_HOUR_MINUTES, quarter_hour_blocks, round_down_to_quarter_hour};
pub use salary::{SalaryBreakdown, compute_salary};
pub use shift_pay::{calculate_shift, calculate_work_entry};
pub use time_arithmetic::{MINUTES_PER_DAY, elapsed_minutes};
