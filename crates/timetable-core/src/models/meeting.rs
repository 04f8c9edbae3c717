//! Weekly meeting slots.

use serde::{Deserialize, Serialize};

use super::{ClockTime, Day};
use crate::error::{Result, ScheduleError};

/// One weekly occurrence of a class: a day plus a half-open `[start, end)`
/// time interval. `start_time < end_time` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMeeting", rename_all = "camelCase")]
pub struct Meeting {
    pub(crate) day: Day,
    pub(crate) start_time: ClockTime,
    pub(crate) end_time: ClockTime,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMeeting {
    day: Day,
    start_time: ClockTime,
    end_time: ClockTime,
}

impl TryFrom<RawMeeting> for Meeting {
    type Error = ScheduleError;

    fn try_from(raw: RawMeeting) -> Result<Self> {
        Meeting::new(raw.day, raw.start_time, raw.end_time)
    }
}

impl Meeting {
    /// Creates a meeting, rejecting empty or inverted intervals.
    pub fn new(day: Day, start_time: ClockTime, end_time: ClockTime) -> Result<Self> {
        if start_time >= end_time {
            return Err(ScheduleError::invalid_input("endTime").with_reason(format!(
                "meeting must end after it starts ({start_time} >= {end_time})"
            )));
        }
        Ok(Self {
            day,
            start_time,
            end_time,
        })
    }

    /// Parses a meeting from its textual parts, e.g. `("Lunes", "09:30", "09:50")`.
    pub fn parse(day: &str, start_time: &str, end_time: &str) -> Result<Self> {
        let day = day
            .parse::<Day>()
            .map_err(|reason| ScheduleError::invalid_input("day").with_reason(reason))?;
        Self::new(day, start_time.parse()?, end_time.parse()?)
    }

    pub fn day(&self) -> Day {
        self.day
    }

    pub fn start_time(&self) -> ClockTime {
        self.start_time
    }

    pub fn end_time(&self) -> ClockTime {
        self.end_time
    }

    /// Half-open interval overlap on the same day.
    ///
    /// Touching intervals (`a.end == b.start`) do not overlap; identical slots
    /// do.
    pub fn overlaps(&self, other: &Meeting) -> bool {
        self.day == other.day
            && self.start_time < other.end_time
            && other.start_time < self.end_time
    }

    /// Whether the meeting is in progress at `time` without starting at it.
    pub fn runs_through(&self, time: ClockTime) -> bool {
        self.start_time < time && time < self.end_time
    }
}
