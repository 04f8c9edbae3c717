//! Entries placed on the weekly schedule.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Meeting;

/// Identifier of a schedule entry.
///
/// Speculative entries live under the `planned:` prefix and current-term
/// entries under `current:`, so the two never collide.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub(crate) fn planned(code: &str, source: impl fmt::Display, seq: u64) -> Self {
        Self(format!("planned:{code}-{source}-{seq}"))
    }

    pub(crate) fn current(code: &str, section: &str, entry: usize, meeting: usize) -> Self {
        Self(format!("current:{code}-{section}-{entry}-{meeting}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EntryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A course section placed on the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedCourse {
    pub id: EntryId,
    pub code: String,
    pub name: String,
    pub professor: String,
    pub meeting: Meeting,
    /// Derived by the conflict engine on every recompute.
    #[serde(default, skip_deserializing)]
    pub(crate) has_conflict: bool,
    /// True when sourced from the already-enrolled term.
    pub is_current: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl PlannedCourse {
    /// Whether this entry overlaps another visible entry. Only meaningful on
    /// entries read back from the engine.
    pub fn has_conflict(&self) -> bool {
        self.has_conflict
    }

    /// Whether the student may remove this entry individually.
    pub fn is_removable(&self) -> bool {
        !self.is_current
    }
}
