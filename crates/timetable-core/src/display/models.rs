//! Display implementations for domain models.
//!
//! All output is markdown so the CLI renderer can style it and the MCP
//! server can hand it to clients verbatim.

use std::fmt;

use crate::models::{
    CourseOffering, CurrentTermEntry, Day, Meeting, NoOp, Outcome, PlannedCourse,
    ScheduleTemplate,
};

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Meeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-{}", self.day, self.start_time, self.end_time)
    }
}

/// Joins meetings as `Monday 07:30-09:20 | Thursday 07:30-09:20`.
pub fn format_meetings<'a>(meetings: impl IntoIterator<Item = &'a Meeting>) -> String {
    meetings
        .into_iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" | ")
}

impl PlannedCourse {
    /// Short status tag used in lists and grid cells.
    pub(crate) fn tags(&self) -> String {
        let mut tags = Vec::new();
        if self.is_current {
            tags.push("current");
        }
        if self.has_conflict {
            tags.push("⚠ conflict");
        }
        if tags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", tags.join(", "))
        }
    }
}

impl fmt::Display for PlannedCourse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} {}{}", self.code, self.name, self.tags())?;
        writeln!(f)?;
        writeln!(f, "- ID: `{}`", self.id)?;
        writeln!(f, "- When: {}", self.meeting)?;
        if !self.professor.is_empty() {
            writeln!(f, "- Professor: {}", self.professor)?;
        }
        if let Some(location) = &self.location {
            writeln!(f, "- Location: {location}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for CourseOffering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} {} ({} cr)", self.code, self.name, self.credits_or_default())?;
        writeln!(f)?;
        writeln!(f, "- Professor: {}", self.professor)?;
        if self.has_dependencies() {
            writeln!(f, "- Depends on: {}", self.depends_on.join(", "))?;
        }
        for group in &self.groups {
            write!(f, "- Group {}: {} ({})", group.id, group.meeting, group.name)?;
            if let Some(location) = &group.location {
                write!(f, " • {location}")?;
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for ScheduleTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} (`{}`)", self.name, self.id)?;
        writeln!(f)?;
        if !self.description.is_empty() {
            writeln!(f, "{}", self.description)?;
            writeln!(f)?;
        }
        for course in &self.courses {
            writeln!(f, "- {} {}: {}", course.code, course.name, course.meeting)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for CurrentTermEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (section {}, {}): {}",
            self.code,
            self.name,
            self.section,
            self.term,
            format_meetings(&self.meetings)
        )
    }
}

impl fmt::Display for NoOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoOp::AlreadyPlanned { code } => write!(f, "{code} is already on the schedule"),
            NoOp::CurrentTermEntry { id } => write!(
                f,
                "{id} belongs to the current term; hide current courses instead"
            ),
            NoOp::UnknownEntry { id } => write!(f, "no schedule entry with ID {id}"),
            NoOp::VisibilityUnchanged { visible: true } => {
                write!(f, "current-term courses are already shown")
            }
            NoOp::VisibilityUnchanged { visible: false } => {
                write!(f, "current-term courses are already hidden")
            }
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Applied => write!(f, "applied"),
            Outcome::Unchanged { reason } => write!(f, "unchanged: {reason}"),
        }
    }
}
