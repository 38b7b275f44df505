//! Core data models for the payroll engine.
//!
//! This module contains the plain value records shared by the calculation
//! core, the registry, the store and the API.

mod calculation_result;
mod clock_time;
mod employee;
mod work_entry;

pub use calculation_result::CalculationResult;
pub use clock_time::{ClockTime, MINUTES_PER_HOUR};
pub use employee::{Employee, EmployeeDraft};
pub use work_entry::{WorkEntry, WorkSubmission};
