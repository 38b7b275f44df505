//! Quarter-hour billing granularity.

/// Length of one paid block in minutes.
pub const QUARTER_HOUR_MINUTES: u32 = 15;

/// Truncates a minute count to the last completed quarter hour.
///
/// Always rounds down: only completed 15-minute blocks are paid.
///
/// # Examples
///
/// ```
/// use shift_payroll::calculation::round_down_to_quarter_hour;
///
/// assert_eq!(round_down_to_quarter_hour(14), 0);
/// assert_eq!(round_down_to_quarter_hour(44), 30);
/// assert_eq!(round_down_to_quarter_hour(45), 45);
/// ```
pub fn round_down_to_quarter_hour(minutes: u32) -> u32 {
    quarter_hour_blocks(minutes) * QUARTER_HOUR_MINUTES
}

/// Number of completed quarter-hour blocks in a minute count.
pub fn quarter_hour_blocks(minutes: u32) -> u32 {
    minutes / QUARTER_HOUR_MINUTES
}
