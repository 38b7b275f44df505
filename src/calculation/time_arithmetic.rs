//! Elapsed time between two clock readings.

use crate::models::ClockTime;

/// Number of minutes in one day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Returns the minutes worked between a clock-in and a clock-out time.
///
/// When the end time is numerically earlier than the start time the shift is
/// taken to cross midnight once, so one day is added. Equal times give 0, not
/// a full day: a zero-length shift is valid input. The result is always in
/// `0..MINUTES_PER_DAY`.
///
/// # Examples
///
/// ```
/// use shift_payroll::calculation::elapsed_minutes;
/// use shift_payroll::models::ClockTime;
///
/// let start: ClockTime = "22:00".parse().unwrap();
/// let end: ClockTime = "06:15".parse().unwrap();
/// assert_eq!(elapsed_minutes(start, end), 495);
/// assert_eq!(elapsed_minutes(start, start), 0);
/// ```
pub fn elapsed_minutes(start: ClockTime, end: ClockTime) -> u32 {
    let start = start.minutes_since_midnight();
    let end = end.minutes_since_midnight();

    if end >= start {
        end - start
    } else {
        MINUTES_PER_DAY - (start - end)
    }
}
