//! Wall-clock times in the fixed `HH:MM` format used by course listings.

use std::{fmt, str::FromStr};

use jiff::civil::Time;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// A 24-hour `HH:MM` time of day.
///
/// The textual form is always zero padded to five characters, so comparing two
/// values orders them exactly like comparing their `HH:MM` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(Time);

impl ClockTime {
    /// Builds a time from hour and minute components.
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(ScheduleError::invalid_input("time")
                .with_reason(format!("{hour:02}:{minute:02} is not a valid time of day")));
        }
        // Both components were range checked above.
        Time::new(hour as i8, minute as i8, 0, 0)
            .map(Self)
            .map_err(|e| ScheduleError::invalid_input("time").with_reason(e.to_string()))
    }

    pub(crate) fn from_civil(time: Time) -> Self {
        Self(time)
    }

    pub fn hour(&self) -> u8 {
        self.0.hour() as u8
    }

    pub fn minute(&self) -> u8 {
        self.0.minute() as u8
    }
}

impl FromStr for ClockTime {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || {
            ScheduleError::invalid_input("time")
                .with_reason(format!("'{s}' is not a zero-padded HH:MM time"))
        };

        let bytes = s.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(invalid());
        }
        let digits = [bytes[0], bytes[1], bytes[3], bytes[4]];
        if !digits.iter().all(u8::is_ascii_digit) {
            return Err(invalid());
        }
        let [h1, h2, m1, m2] = digits.map(|b| b - b'0');
        Self::new(h1 * 10 + h2, m1 * 10 + m2)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ScheduleError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}
