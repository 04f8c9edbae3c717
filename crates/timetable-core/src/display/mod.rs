//! Display formatting for schedules and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly; collections and
//! operation results go through wrapper types. Every formatter produces
//! markdown, which the CLI styles for the terminal and the MCP server returns
//! verbatim.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers & Grid │    │   Formatted     │
//! │ (PlannedCourse) │───▶│ (ScheduleView)  │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: [`ScheduleView`], [`EntryList`], [`Offerings`], [`Templates`]
//! - [`grid`]: the [`WeeklyGrid`] table
//! - [`results`]: [`MutationResult`]
//! - [`models`]: Display implementations for domain models
//!
//! # Examples
//!
//! ```rust
//! use timetable_core::{display::ScheduleView, Catalog, ScheduleConflictEngine};
//!
//! let catalog = Catalog::demo();
//! let mut engine = ScheduleConflictEngine::new();
//! let _ = engine.apply_template(catalog.template("morning").unwrap());
//!
//! let output = ScheduleView::new(&engine, &catalog.term).to_string();
//! assert!(output.contains("# Schedule I-2025"));
//! assert!(output.contains("| Time | Monday |"));
//! ```

pub mod collections;
pub mod grid;
pub mod models;
pub mod results;

pub use collections::{EntryList, Offerings, ScheduleView, Templates};
pub use grid::{WeeklyGrid, DEFAULT_SLOTS};
pub use models::format_meetings;
pub use results::MutationResult;
