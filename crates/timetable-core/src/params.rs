//! Parameter structures for timetable operations
//!
//! Shared parameter structures used by every interface (CLI, MCP) to call
//! into the [`crate::Planner`]. They carry no framework-specific derives
//! beyond serde; JSON schema generation is enabled with the `schema` feature
//! for the MCP server.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! CLI wrappers convert with `From` impls; the MCP server takes these types
//! directly as tool parameters.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Show the visible schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ShowSchedule {
    /// List entries one by one (with their IDs) instead of the weekly grid
    #[serde(default)]
    pub list: bool,
}

/// Place one group of a catalog course on the schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AddCourse {
    /// Course code from the catalog, e.g. "IC6200" (case-insensitive)
    pub code: String,
    /// Group (section) ID within the course
    pub group: u32,
}

/// Remove a planned entry from the schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct RemoveCourse {
    /// Entry ID as shown in the schedule, e.g. "planned:IC6200-1-1"
    pub id: String,
}

/// Replace the planned entries with a template.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ApplyTemplate {
    /// Template ID, e.g. "balanced"
    pub id: String,
}

/// Show or hide the enrolled term's meetings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SetCurrentVisible {
    pub visible: bool,
}

/// Search the catalog by course code or name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SearchCatalog {
    /// Case-insensitive text matched against code and name; empty lists all
    #[serde(default)]
    pub query: String,
}

/// Parameters that take no input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Empty {}
