//! High-level planner API over a persisted schedule.
//!
//! The [`Planner`] ties the pieces together for interfaces such as the CLI
//! and the MCP server: it looks courses and templates up in a [`Catalog`],
//! restores a [`crate::ScheduleConflictEngine`] from the state file, applies
//! one mutation and saves the result.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │     Engine      │    │   State file    │
//! │ (catalog lookup,│───▶│ (conflicts,     │───▶│  (plan.json     │
//! │  MutationResult)│    │  Outcome)       │    │   via store)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for [`Planner`] instances
//! - [`handlers`]: Schedule, catalog and current-term operations
//! - [`store`]: Reading and writing the state file
//!
//! The state file is only rewritten when a mutation reports
//! [`crate::models::Outcome::Applied`].
//!
//! # Examples
//!
//! ```rust,no_run
//! use timetable_core::{params::AddCourse, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new().build().await?;
//!
//! let result = planner
//!     .add_course(&AddCourse {
//!         code: "IC6200".to_string(),
//!         group: 1,
//!     })
//!     .await?;
//! println!("{result}");
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use crate::catalog::Catalog;

pub mod builder;
pub mod handlers;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::PlannerBuilder;

/// Main planner interface for a student's schedule.
#[derive(Debug, Clone)]
pub struct Planner {
    pub(crate) state_path: PathBuf,
    pub(crate) catalog: Catalog,
}

impl Planner {
    pub(crate) fn new(state_path: PathBuf, catalog: Catalog) -> Self {
        Self {
            state_path,
            catalog,
        }
    }

    /// Location of the state file.
    pub fn state_path(&self) -> &Path {
        &self.state_path
    }

    /// The catalog courses and templates are looked up in.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
