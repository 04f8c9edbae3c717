//! Collection wrapper types for displaying schedules, catalogs and templates.
//!
//! Each wrapper handles the empty case with a short sentence instead of an
//! empty section.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};
use serde::Serialize;

use super::grid::WeeklyGrid;
use crate::{
    engine::ScheduleConflictEngine,
    models::{CourseOffering, EntryId, PlannedCourse, ScheduleTemplate},
};

/// Point-in-time view of the visible schedule.
///
/// `label` is the semester the view is about: the enrolled term while
/// current-term entries are shown and known, otherwise the planning term.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleView {
    pub label: String,
    pub entries: Vec<PlannedCourse>,
    pub show_current: bool,
    pub current_term: Option<String>,
    pub conflicts: Vec<(EntryId, EntryId)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
    /// Render a flat list instead of the weekly grid.
    #[serde(skip)]
    pub list: bool,
}

impl ScheduleView {
    pub fn new(engine: &ScheduleConflictEngine, planning_term: &str) -> Self {
        let label = match (engine.show_current(), engine.current_term()) {
            (true, Some(term)) => term.to_string(),
            _ => planning_term.to_string(),
        };
        Self {
            label,
            entries: engine.schedule().to_vec(),
            show_current: engine.show_current(),
            current_term: engine.current_term().map(str::to_string),
            conflicts: engine.conflicts(),
            updated_at: None,
            list: false,
        }
    }

    pub fn with_updated_at(mut self, updated_at: Option<Timestamp>) -> Self {
        self.updated_at = updated_at;
        self
    }

    pub fn as_list(mut self) -> Self {
        self.list = true;
        self
    }

    pub fn conflict_count(&self) -> usize {
        self.entries.iter().filter(|e| e.has_conflict()).count()
    }
}

impl fmt::Display for ScheduleView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Schedule {}", self.label)?;
        writeln!(f)?;

        let current = self.entries.iter().filter(|e| e.is_current).count();
        let planned = self.entries.len() - current;
        write!(f, "{planned} planned")?;
        match (&self.current_term, self.show_current) {
            (Some(_), true) => write!(f, ", {current} enrolled")?,
            (Some(_), false) => write!(f, ", enrolled courses hidden")?,
            (None, _) => {}
        }
        writeln!(f)?;
        if let Some(updated_at) = &self.updated_at {
            let local = updated_at.to_zoned(TimeZone::system());
            writeln!(f, "Last saved: {}", local.strftime("%a %Y-%m-%d %H:%M %Z"))?;
        }
        writeln!(f)?;

        if self.entries.is_empty() {
            return writeln!(f, "No courses on the schedule.");
        }

        if self.list {
            write!(f, "{}", EntryList(&self.entries))?;
        } else {
            write!(f, "{}", WeeklyGrid(&self.entries))?;
        }

        if !self.conflicts.is_empty() {
            writeln!(f)?;
            writeln!(f, "## Conflicts ({})", self.conflicts.len())?;
            writeln!(f)?;
            for (a, b) in &self.conflicts {
                writeln!(f, "- `{a}` overlaps `{b}`")?;
            }
        }
        Ok(())
    }
}

/// Flat list of schedule entries in schedule order.
pub struct EntryList<'a>(pub &'a [PlannedCourse]);

impl fmt::Display for EntryList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.0 {
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

/// Catalog search results.
pub struct Offerings<'a>(pub Vec<&'a CourseOffering>);

impl Offerings<'_> {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Offerings<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No matching courses.");
        }
        for offering in &self.0 {
            write!(f, "{offering}")?;
        }
        Ok(())
    }
}

/// Available schedule templates.
pub struct Templates<'a>(pub &'a [ScheduleTemplate]);

impl fmt::Display for Templates<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No templates available.");
        }
        for template in self.0 {
            write!(f, "{template}")?;
        }
        Ok(())
    }
}
