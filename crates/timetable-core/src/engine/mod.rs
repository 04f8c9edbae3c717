//! The schedule conflict engine.
//!
//! [`ScheduleConflictEngine`] owns the two sets of entries that make up a
//! student's week and keeps the conflict flags of the visible schedule
//! consistent with them:
//!
//! ```text
//!  current-term entries ──┐ (only while visible)
//!                         ├──▶ compute_conflicts ──▶ schedule()
//!  speculative entries ───┘
//! ```
//!
//! Every mutation runs to completion synchronously and ends with a full
//! recompute over exactly the visible set. Mutations never fail; a rejected
//! mutation returns [`Outcome::Unchanged`] and leaves the engine untouched.
//!
//! # Examples
//!
//! ```rust
//! use timetable_core::{Catalog, ScheduleConflictEngine};
//!
//! let catalog = Catalog::demo();
//! let ai = catalog.offering("IC6200").unwrap();
//!
//! let mut engine = ScheduleConflictEngine::new();
//! assert!(engine.add_course(ai, ai.group(1).unwrap()).is_applied());
//! // A second group of the same course is rejected.
//! assert!(!engine.add_course(ai, ai.group(2).unwrap()).is_applied());
//! assert_eq!(engine.schedule().len(), 1);
//! ```

use std::collections::HashSet;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{
    conflicts::{compute_conflicts, conflicting_pairs},
    models::{
        flatten_current_term, CourseGroup, CourseOffering, CurrentTermEntry, EntryId, NoOp,
        Outcome, PlannedCourse, ScheduleTemplate,
    },
};

#[cfg(test)]
mod tests;

/// Serializable engine state.
///
/// Conflict flags are not part of the snapshot; they are recomputed when the
/// engine is restored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    #[serde(default)]
    pub current: Vec<PlannedCourse>,
    #[serde(default)]
    pub planned: Vec<PlannedCourse>,
    #[serde(default = "default_show_current")]
    pub show_current: bool,
    #[serde(default)]
    pub current_term: Option<String>,
    #[serde(default)]
    pub next_seq: u64,
}

fn default_show_current() -> bool {
    true
}

impl Default for EngineSnapshot {
    fn default() -> Self {
        Self {
            current: Vec::new(),
            planned: Vec::new(),
            show_current: true,
            current_term: None,
            next_seq: 0,
        }
    }
}

/// Maintains the planned week and its conflict flags.
#[derive(Debug, Clone)]
pub struct ScheduleConflictEngine {
    current: Vec<PlannedCourse>,
    planned: Vec<PlannedCourse>,
    show_current: bool,
    current_term: Option<String>,
    next_seq: u64,
    visible: Vec<PlannedCourse>,
}

impl Default for ScheduleConflictEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleConflictEngine {
    /// Creates an empty engine with current-term entries visible.
    pub fn new() -> Self {
        Self::from_snapshot(EngineSnapshot::default())
    }

    /// Restores an engine from persisted state.
    ///
    /// Entries are normalized to their set (`is_current` follows the list
    /// they were stored in) and flags are recomputed.
    pub fn from_snapshot(snapshot: EngineSnapshot) -> Self {
        let mark = |entries: Vec<PlannedCourse>, is_current: bool| {
            entries
                .into_iter()
                .map(|mut entry| {
                    entry.is_current = is_current;
                    entry.has_conflict = false;
                    entry
                })
                .collect::<Vec<_>>()
        };

        let mut engine = Self {
            current: mark(snapshot.current, true),
            planned: mark(snapshot.planned, false),
            show_current: snapshot.show_current,
            current_term: snapshot.current_term,
            next_seq: snapshot.next_seq,
            visible: Vec::new(),
        };
        engine.recompute();
        engine
    }

    /// Captures the engine state for persistence.
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            current: self.current.clone(),
            planned: self.planned.clone(),
            show_current: self.show_current,
            current_term: self.current_term.clone(),
            next_seq: self.next_seq,
        }
    }

    /// The visible schedule: current-term entries (when shown) followed by
    /// speculative entries, with authoritative conflict flags.
    pub fn schedule(&self) -> &[PlannedCourse] {
        &self.visible
    }

    /// Speculative entries in insertion order. Flags are not meaningful here;
    /// read [`Self::schedule`] for those.
    pub fn planned(&self) -> &[PlannedCourse] {
        &self.planned
    }

    /// All current-term entries, whether visible or not.
    pub fn current(&self) -> &[PlannedCourse] {
        &self.current
    }

    pub fn show_current(&self) -> bool {
        self.show_current
    }

    /// Term label of the loaded current-term data, if any.
    pub fn current_term(&self) -> Option<&str> {
        self.current_term.as_deref()
    }

    /// Whether a course code is already on the schedule, counting hidden
    /// current-term entries. Mirrors the guard in [`Self::add_course`].
    pub fn is_planned(&self, code: &str) -> bool {
        self.planned
            .iter()
            .chain(self.current.iter())
            .any(|entry| entry.code == code)
    }

    /// Every conflicting pair of visible entries.
    pub fn conflicts(&self) -> Vec<(EntryId, EntryId)> {
        conflicting_pairs(&self.visible)
    }

    /// Places a group of an offering on the schedule.
    ///
    /// Rejected when the course code is already present, either as a
    /// speculative entry or as a current-term entry.
    pub fn add_course(&mut self, offering: &CourseOffering, group: &CourseGroup) -> Outcome {
        if self.is_planned(&offering.code) {
            debug!("Rejecting {}: already on the schedule", offering.code);
            return Outcome::unchanged(NoOp::AlreadyPlanned {
                code: offering.code.clone(),
            });
        }

        let id = EntryId::planned(&offering.code, group.id, self.bump_seq());
        debug!("Adding {} group {} as {}", offering.code, group.id, id);
        self.planned.push(PlannedCourse {
            id,
            code: offering.code.clone(),
            name: offering.name.clone(),
            professor: offering.professor.clone(),
            meeting: group.meeting,
            has_conflict: false,
            is_current: false,
            location: group.location.clone(),
        });
        self.recompute();
        Outcome::Applied
    }

    /// Removes a speculative entry. Current-term entries are only ever
    /// hidden in bulk, so removing one is a no-op.
    pub fn remove_course(&mut self, id: &EntryId) -> Outcome {
        match self.current.iter().chain(&self.planned).find(|entry| &entry.id == id) {
            None => return Outcome::unchanged(NoOp::UnknownEntry { id: id.clone() }),
            Some(entry) if !entry.is_removable() => {
                return Outcome::unchanged(NoOp::CurrentTermEntry { id: id.clone() });
            }
            Some(entry) => debug!("Removing {} ({})", entry.id, entry.code),
        }

        self.planned.retain(|entry| &entry.id != id);
        self.recompute();
        Outcome::Applied
    }

    /// Replaces every speculative entry with the template's placements.
    /// Current-term entries are left alone. A code repeated in the template
    /// is placed once, at its first position.
    pub fn apply_template(&mut self, template: &ScheduleTemplate) -> Outcome {
        let mut planned = Vec::with_capacity(template.courses.len());
        let mut seen = HashSet::new();
        for course in &template.courses {
            if !seen.insert(course.code.as_str()) {
                warn!(
                    "Template '{}' lists {} more than once; keeping the first placement",
                    template.id, course.code
                );
                continue;
            }
            planned.push(PlannedCourse {
                id: EntryId::planned(&course.code, &template.id, self.bump_seq()),
                code: course.code.clone(),
                name: course.name.clone(),
                professor: course.professor.clone(),
                meeting: course.meeting,
                has_conflict: false,
                is_current: false,
                location: course.location.clone(),
            });
        }

        debug!(
            "Applying template '{}': {} entries replace {}",
            template.id,
            planned.len(),
            self.planned.len()
        );
        self.planned = planned;
        self.recompute();
        Outcome::Applied
    }

    /// Shows or hides the current-term entries. Hidden entries are kept so
    /// that showing them again restores the same entries without a fetch.
    pub fn set_current_visible(&mut self, visible: bool) -> Outcome {
        if self.show_current == visible {
            return Outcome::unchanged(NoOp::VisibilityUnchanged { visible });
        }

        self.show_current = visible;
        self.recompute();
        Outcome::Applied
    }

    /// Replaces the current-term entries with freshly fetched data, one entry
    /// per meeting. The term label is taken from the first section.
    pub fn load_current_term(&mut self, entries: &[CurrentTermEntry]) {
        self.current = flatten_current_term(entries);
        self.current_term = entries.first().map(|entry| entry.term.clone());
        debug!(
            "Loaded {} current-term meetings for {:?}",
            self.current.len(),
            self.current_term
        );
        self.recompute();
    }

    /// Drops all current-term entries.
    pub fn clear_current_term(&mut self) {
        self.current.clear();
        self.current_term = None;
        self.recompute();
    }

    fn bump_seq(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    fn recompute(&mut self) {
        let base: &[PlannedCourse] = if self.show_current { &self.current } else { &[] };
        let merged: Vec<PlannedCourse> = base.iter().chain(self.planned.iter()).cloned().collect();
        self.visible = compute_conflicts(&merged);
    }
}
