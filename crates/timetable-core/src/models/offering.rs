//! Courses available for planning and the templates built from them.

use serde::{Deserialize, Serialize};

use super::Meeting;

/// Credit value shown for offerings that do not state one.
pub const DEFAULT_CREDITS: u32 = 4;

/// A named section of an offering with its weekly meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseGroup {
    pub id: u32,
    /// Section label, e.g. "Grupo 01"
    pub name: String,
    pub meeting: Meeting,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// A course offered in the upcoming term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseOffering {
    pub code: String,
    pub name: String,
    pub professor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits: Option<u32>,
    pub groups: Vec<CourseGroup>,
    /// Prerequisite course codes, shown as advice and never enforced
    #[serde(default)]
    pub depends_on: Vec<String>,
}

impl CourseOffering {
    /// Looks up one of the offering's groups by ID.
    pub fn group(&self, id: u32) -> Option<&CourseGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn has_dependencies(&self) -> bool {
        !self.depends_on.is_empty()
    }

    pub fn credits_or_default(&self) -> u32 {
        self.credits.unwrap_or(DEFAULT_CREDITS)
    }

    /// Case-insensitive substring match against code or name.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.code.to_lowercase().contains(&query)
            || self.name.to_lowercase().contains(&query)
    }
}

/// One placement inside a schedule template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateCourse {
    pub code: String,
    pub name: String,
    pub professor: String,
    pub meeting: Meeting,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// A predefined bundle of course placements applied in one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleTemplate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub courses: Vec<TemplateCourse>,
}
