//! In-memory record keeping: the employee registry and the work log.

mod employees;
mod work_log;

pub use employees::{EmployeeRegistry, MAX_HOURLY_RATE};
pub use work_log::{MAX_TRANSPORTATION_FEE, WorkLog, check_transportation_fee};
