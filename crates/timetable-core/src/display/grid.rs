//! Weekly grid rendering.

use std::{collections::BTreeSet, fmt};

use crate::models::{ClockTime, Day, PlannedCourse};

/// Row labels always present in the grid, in addition to any start time
/// that appears in the schedule.
pub const DEFAULT_SLOTS: [(u8, u8); 12] = [
    (7, 30),
    (8, 30),
    (9, 30),
    (10, 30),
    (11, 30),
    (12, 0),
    (13, 0),
    (14, 0),
    (15, 0),
    (16, 0),
    (17, 0),
    (18, 0),
];

/// Markdown table of the week: one column per day, one row per time slot.
///
/// A cell lists the entries that start in its slot. When at least one entry
/// starts there, entries that started earlier and are still running follow,
/// prefixed with `…`; a slot with no starter stays empty.
pub struct WeeklyGrid<'a>(pub &'a [PlannedCourse]);

impl WeeklyGrid<'_> {
    fn slots(&self) -> Vec<ClockTime> {
        let mut slots: BTreeSet<ClockTime> = DEFAULT_SLOTS
            .iter()
            .filter_map(|&(h, m)| ClockTime::new(h, m).ok())
            .collect();
        slots.extend(self.0.iter().map(|c| c.meeting.start_time()));
        slots.into_iter().collect()
    }

    fn cell(&self, day: Day, slot: ClockTime) -> String {
        let on_day = || self.0.iter().filter(move |c| c.meeting.day() == day);

        let starters: Vec<String> = on_day()
            .filter(|c| c.meeting.start_time() == slot)
            .map(|c| {
                format!(
                    "**{}** {}-{}{}",
                    c.code,
                    c.meeting.start_time(),
                    c.meeting.end_time(),
                    c.tags()
                )
            })
            .collect();
        if starters.is_empty() {
            return String::new();
        }
        let ongoing = on_day()
            .filter(|c| c.meeting.runs_through(slot))
            .map(|c| format!("… {}", c.code));

        starters.into_iter().chain(ongoing).collect::<Vec<_>>().join("; ")
    }
}

impl fmt::Display for WeeklyGrid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "| Time |")?;
        for day in Day::ALL {
            write!(f, " {day} |")?;
        }
        writeln!(f)?;
        write!(f, "|------|")?;
        for _ in Day::ALL {
            write!(f, "---|")?;
        }
        writeln!(f)?;

        for slot in self.slots() {
            write!(f, "| {slot} |")?;
            for day in Day::ALL {
                write!(f, " {} |", self.cell(day, slot))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
