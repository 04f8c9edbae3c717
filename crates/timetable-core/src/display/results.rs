//! Result wrapper for displaying mutation outcomes.

use std::fmt;

use serde::Serialize;

use super::collections::ScheduleView;
use crate::models::Outcome;

/// The outcome of a schedule mutation together with the schedule it left
/// behind.
///
/// A rejected mutation is not an error: the outcome says why nothing changed
/// and the view shows the untouched schedule.
#[derive(Debug, Clone, Serialize)]
pub struct MutationResult {
    /// Short description of what was attempted, e.g. "Add IC6200 group 1".
    pub action: String,
    pub outcome: Outcome,
    pub view: ScheduleView,
}

impl MutationResult {
    pub fn new(action: impl Into<String>, outcome: Outcome, view: ScheduleView) -> Self {
        Self {
            action: action.into(),
            outcome,
            view,
        }
    }

    pub fn is_applied(&self) -> bool {
        self.outcome.is_applied()
    }
}

impl fmt::Display for MutationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Applied => writeln!(f, "{}: done", self.action)?,
            Outcome::Unchanged { reason } => {
                writeln!(f, "{}: nothing changed ({reason})", self.action)?;
            }
        }
        writeln!(f)?;
        write!(f, "{}", self.view)
    }
}
