//! Observable results of engine mutations.

use serde::{Deserialize, Serialize};

use super::EntryId;

/// Result of a schedule mutation. Rejections are not errors: they leave the
/// schedule exactly as it was and say why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
#[must_use]
pub enum Outcome {
    /// The schedule changed and conflicts were recomputed
    Applied,
    /// Nothing changed
    Unchanged { reason: NoOp },
}

impl Outcome {
    pub fn unchanged(reason: NoOp) -> Self {
        Outcome::Unchanged { reason }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

/// Why a mutation was a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NoOp {
    /// The course code is already on the schedule
    AlreadyPlanned { code: String },
    /// Current-term entries can only be hidden, not removed
    CurrentTermEntry { id: EntryId },
    /// No entry with that ID
    UnknownEntry { id: EntryId },
    /// Current-term visibility already had the requested value
    VisibilityUnchanged { visible: bool },
}
