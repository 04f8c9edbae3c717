//! Core library for the timetable planner.
//!
//! A student builds next semester's week from catalog offerings and
//! ready-made templates, optionally layered over the meetings they are
//! already enrolled in. Every change recomputes which entries overlap.
//!
//! - [`engine`]: the [`ScheduleConflictEngine`], which owns the schedule and
//!   its conflict flags
//! - [`conflicts`]: the pure overlap computation
//! - [`catalog`]: offerings and templates to plan with
//! - [`client`]: fetching the enrolled term with an explicit [`Session`]
//! - [`planner`]: the persisted, interface-facing [`Planner`]
//! - [`display`]: markdown formatting for the CLI and the MCP server
//!
//! # Quick Start
//!
//! ```rust
//! use timetable_core::{Catalog, ScheduleConflictEngine};
//!
//! let catalog = Catalog::demo();
//! let mut engine = ScheduleConflictEngine::new();
//!
//! let ai = catalog.offering("IC6200").unwrap();
//! let networks = catalog.offering("IC7602").unwrap();
//! let _ = engine.add_course(ai, ai.group(1).unwrap());
//! let _ = engine.add_course(networks, networks.group(1).unwrap());
//!
//! // Monday 09:30-09:50 and Monday 13:00-14:50 do not overlap.
//! assert!(engine.schedule().iter().all(|entry| !entry.has_conflict()));
//! ```
//!
//! With persistence:
//!
//! ```rust,no_run
//! use timetable_core::{params::ApplyTemplate, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_state_path(Some("plan.json"))
//!     .build()
//!     .await?;
//!
//! let result = planner
//!     .apply_template(&ApplyTemplate {
//!         id: "balanced".to_string(),
//!     })
//!     .await?;
//! println!("{result}");
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod client;
pub mod conflicts;
pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod params;
pub mod planner;

// Re-export commonly used types
pub use catalog::Catalog;
pub use client::{ApiClient, CurrentTermSource, JsonFileSource, Session};
pub use conflicts::compute_conflicts;
pub use display::{MutationResult, Offerings, ScheduleView, Templates, WeeklyGrid};
pub use engine::{EngineSnapshot, ScheduleConflictEngine};
pub use error::{Result, ScheduleError};
pub use models::{EntryId, NoOp, Outcome, PlannedCourse};
pub use planner::{Planner, PlannerBuilder};
