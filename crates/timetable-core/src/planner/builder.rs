//! Builder for creating and configuring Planner instances.

use std::path::{Path, PathBuf};

use log::debug;

use super::{store, Planner};
use crate::{
    catalog::Catalog,
    error::{Result, ScheduleError},
};

/// Builder for creating and configuring Planner instances.
#[derive(Debug, Clone)]
pub struct PlannerBuilder {
    state_path: Option<PathBuf>,
    catalog: Option<Catalog>,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            state_path: None,
            catalog: None,
        }
    }

    /// Sets a custom state file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/timetable/plan.json` or
    /// `~/.local/share/timetable/plan.json`
    pub fn with_state_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.state_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the catalog to plan against. Defaults to [`Catalog::demo`].
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::XdgDirectory` if no default location is available
    /// Returns `ScheduleError::FileSystem` if the state directory cannot be created
    /// Returns `ScheduleError::Serialization` if an existing state file is corrupt
    pub async fn build(self) -> Result<Planner> {
        let state_path = if let Some(path) = self.state_path {
            path
        } else {
            Self::default_state_path()?
        };

        if let Some(parent) = state_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ScheduleError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let catalog = self.catalog.unwrap_or_else(Catalog::demo);
        debug!(
            "Planning {} with state at {}",
            catalog.term,
            state_path.display()
        );

        let planner = Planner::new(state_path, catalog);
        // Refuse to start on a state file we could not save back.
        store::load(planner.state_path.clone()).await?;
        Ok(planner)
    }

    /// Returns the default state file path following XDG Base Directory
    /// specification.
    fn default_state_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("timetable")
            .place_data_file("plan.json")
            .map_err(|e| ScheduleError::XdgDirectory(e.to_string()))
    }
}

impl Default for PlannerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
