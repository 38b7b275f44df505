//! Time-of-day values in 24-hour `HH:MM` form.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// Number of minutes in one hour.
pub const MINUTES_PER_HOUR: u32 = 60;

const CLOCK_FORMAT: &str = "%H:%M";

/// A wall-clock time of day with minute precision.
///
/// Only valid hour (0-23) and minute (0-59) pairs can be constructed, so the
/// calculation functions that take a `ClockTime` never see malformed input.
///
/// # Examples
///
/// ```
/// use shift_payroll::models::ClockTime;
///
/// let start: ClockTime = "09:30".parse().unwrap();
/// assert_eq!(start.hour(), 9);
/// assert_eq!(start.minute(), 30);
/// assert_eq!(start.minutes_since_midnight(), 570);
/// assert_eq!(start.to_string(), "09:30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Builds a clock time from an hour and a minute.
    ///
    /// Returns `InvalidClockTime` if the hour is above 23 or the minute above 59.
    pub fn new(hour: u8, minute: u8) -> PayrollResult<Self> {
        if hour > 23 || minute > 59 {
            return Err(PayrollError::InvalidClockTime {
                value: format!("{:02}:{:02}", hour, minute),
                message: "hour must be 0-23 and minute 0-59".to_string(),
            });
        }
        Ok(Self { hour, minute })
    }

    /// The hour component, 0-23.
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// The minute component, 0-59.
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes elapsed since `00:00` on the same day, 0-1439.
    pub fn minutes_since_midnight(&self) -> u32 {
        u32::from(self.hour) * MINUTES_PER_HOUR + u32::from(self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = PayrollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // chrono tolerates single digits and leading spaces; require exactly HH:MM
        if !has_clock_shape(s) {
            return Err(PayrollError::InvalidClockTime {
                value: s.to_string(),
                message: "expected 24-hour HH:MM".to_string(),
            });
        }

        let time =
            NaiveTime::parse_from_str(s, CLOCK_FORMAT).map_err(|e| {
                PayrollError::InvalidClockTime {
                    value: s.to_string(),
                    message: format!("expected 24-hour HH:MM ({})", e),
                }
            })?;

        // hour() and minute() are bounded by NaiveTime itself
        Ok(Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        })
    }
}

fn has_clock_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 5
        && bytes[2] == b':'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || b.is_ascii_digit())
}

impl TryFrom<String> for ClockTime {
    type Error = PayrollError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_times() {
        let time: ClockTime = "17:30".parse().unwrap();
        assert_eq!(time.hour(), 17);
        assert_eq!(time.minute(), 30);

        let midnight: ClockTime = "00:00".parse().unwrap();
        assert_eq!(midnight.minutes_since_midnight(), 0);

        let last: ClockTime = "23:59".parse().unwrap();
        assert_eq!(last.minutes_since_midnight(), 1439);
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!("24:00".parse::<ClockTime>().is_err());
        assert!("12:60".parse::<ClockTime>().is_err());
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for input in [
            "", "0900", "9h00", "ab:cd", "09:00:00", "09:", "9:00", "09:5", "9:5", " 09:00",
            "09:00 ", "+9:00", "09:+5", "０9:00",
        ] {
            let result = input.parse::<ClockTime>();
            match result {
                Err(PayrollError::InvalidClockTime { value, .. }) => assert_eq!(value, input),
                other => panic!("Expected InvalidClockTime for {:?}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_new_validates_components() {
        assert!(ClockTime::new(23, 59).is_ok());
        assert!(ClockTime::new(24, 0).is_err());
        assert!(ClockTime::new(0, 60).is_err());
    }

    #[test]
    fn test_display_zero_pads() {
        let time = ClockTime::new(6, 5).unwrap();
        assert_eq!(time.to_string(), "06:05");
    }

    #[test]
    fn test_serializes_as_string() {
        let time = ClockTime::new(22, 0).unwrap();
        assert_eq!(serde_json::to_string(&time).unwrap(), "\"22:00\"");

        let parsed: ClockTime = serde_json::from_str("\"06:15\"").unwrap();
        assert_eq!(parsed, ClockTime::new(6, 15).unwrap());
    }

    #[test]
    fn test_deserialize_rejects_invalid_string() {
        let result: Result<ClockTime, _> = serde_json::from_str("\"25:61\"");
        assert!(result.is_err());
    }
}
