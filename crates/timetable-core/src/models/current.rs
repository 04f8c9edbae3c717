//! Wire shape of the enrolled-term schedule returned by the API.

use serde::{Deserialize, Serialize};

use super::{EntryId, Meeting, PlannedCourse};

/// One enrolled section with all of its weekly meetings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentTermEntry {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub professor: Option<String>,
    pub section: String,
    pub term: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub meetings: Vec<Meeting>,
}

/// Flattens enrolled sections into one current-term schedule entry per
/// meeting, in input order.
pub fn flatten_current_term(entries: &[CurrentTermEntry]) -> Vec<PlannedCourse> {
    entries
        .iter()
        .enumerate()
        .flat_map(|(entry_index, entry)| {
            entry
                .meetings
                .iter()
                .enumerate()
                .map(move |(meeting_index, meeting)| PlannedCourse {
                    id: EntryId::current(&entry.code, &entry.section, entry_index, meeting_index),
                    code: entry.code.clone(),
                    name: entry.name.clone(),
                    professor: entry.professor.clone().unwrap_or_default(),
                    meeting: *meeting,
                    has_conflict: false,
                    is_current: true,
                    location: entry.location.clone().filter(|l| !l.is_empty()),
                })
        })
        .collect()
}
