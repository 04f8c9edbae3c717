//! Schedule operations that return formatted wrapper types for the Planner.

use jiff::Timestamp;
use log::{debug, info};

use super::{store, Planner};
use crate::{
    client::{CurrentTermSource, Session},
    display::{MutationResult, Offerings, ScheduleView, Templates},
    engine::ScheduleConflictEngine,
    error::{Result, ScheduleError},
    models::{EntryId, Outcome},
    params::{AddCourse, ApplyTemplate, RemoveCourse, SearchCatalog, SetCurrentVisible},
};

impl Planner {
    /// Restores the engine from the state file.
    async fn load_engine(&self) -> Result<(ScheduleConflictEngine, Option<Timestamp>)> {
        let file = store::load(self.state_path.clone()).await?;
        Ok((
            ScheduleConflictEngine::from_snapshot(file.engine),
            file.updated_at,
        ))
    }

    fn view(&self, engine: &ScheduleConflictEngine, updated_at: Option<Timestamp>) -> ScheduleView {
        ScheduleView::new(engine, &self.catalog.term).with_updated_at(updated_at)
    }

    /// Applies one engine mutation and saves the state when it changed
    /// anything.
    async fn mutate<F>(&self, action: String, apply: F) -> Result<MutationResult>
    where
        F: FnOnce(&mut ScheduleConflictEngine) -> Outcome,
    {
        let (mut engine, mut updated_at) = self.load_engine().await?;
        let outcome = apply(&mut engine);

        if outcome.is_applied() {
            let saved = store::save(self.state_path.clone(), engine.snapshot()).await?;
            updated_at = saved.updated_at;
        } else {
            debug!("{action}: {outcome}");
        }

        Ok(MutationResult::new(action, outcome, self.view(&engine, updated_at)))
    }

    /// The visible schedule with conflict flags.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use timetable_core::PlannerBuilder;
    /// # async {
    /// let planner = PlannerBuilder::new().build().await?;
    /// let view = planner.schedule().await?;
    /// println!("{view}");
    /// # Result::<(), timetable_core::ScheduleError>::Ok(())
    /// # };
    /// ```
    pub async fn schedule(&self) -> Result<ScheduleView> {
        let (engine, updated_at) = self.load_engine().await?;
        Ok(self.view(&engine, updated_at))
    }

    /// Catalog offerings whose code or name match the query.
    pub fn search_catalog(&self, params: &SearchCatalog) -> Offerings<'_> {
        Offerings(self.catalog.search(&params.query))
    }

    /// Templates available in the catalog.
    pub fn templates(&self) -> Templates<'_> {
        Templates(&self.catalog.templates)
    }

    /// Places a group of a catalog course on the schedule.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::CourseNotFound` or `ScheduleError::GroupNotFound`
    /// when the catalog has no such course or group. A course that is already
    /// on the schedule is not an error; the result reports it as unchanged.
    pub async fn add_course(&self, params: &AddCourse) -> Result<MutationResult> {
        let offering =
            self.catalog
                .offering(&params.code)
                .ok_or_else(|| ScheduleError::CourseNotFound {
                    code: params.code.clone(),
                })?;
        let group = offering
            .group(params.group)
            .ok_or_else(|| ScheduleError::GroupNotFound {
                code: offering.code.clone(),
                group: params.group,
            })?;

        let action = format!("Add {} group {}", offering.code, group.id);
        self.mutate(action, |engine| engine.add_course(offering, group))
            .await
    }

    /// Removes a planned entry by ID.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::InvalidInput` for a blank ID.
    pub async fn remove_course(&self, params: &RemoveCourse) -> Result<MutationResult> {
        let id = params.id.trim();
        if id.is_empty() {
            return Err(ScheduleError::invalid_input("id").with_reason("Entry ID cannot be empty"));
        }

        let id = EntryId::from(id);
        self.mutate(format!("Remove {id}"), |engine| engine.remove_course(&id))
            .await
    }

    /// Replaces the planned entries with a catalog template.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::TemplateNotFound` for an unknown template ID.
    pub async fn apply_template(&self, params: &ApplyTemplate) -> Result<MutationResult> {
        let template =
            self.catalog
                .template(&params.id)
                .ok_or_else(|| ScheduleError::TemplateNotFound {
                    id: params.id.clone(),
                })?;

        let action = format!("Apply template '{}'", template.id);
        self.mutate(action, |engine| engine.apply_template(template))
            .await
    }

    /// Shows or hides the current-term entries.
    pub async fn set_current_visible(&self, params: &SetCurrentVisible) -> Result<MutationResult> {
        let action = if params.visible {
            "Show current-term courses"
        } else {
            "Hide current-term courses"
        };
        self.mutate(action.to_string(), |engine| {
            engine.set_current_visible(params.visible)
        })
        .await
    }

    /// Fetches the enrolled term from `source` and replaces the stored
    /// current-term entries with it.
    ///
    /// # Errors
    ///
    /// Propagates the source's error; the stored schedule is left untouched
    /// when the fetch fails.
    pub async fn sync_current_term<S>(&self, source: &S, session: &Session) -> Result<MutationResult>
    where
        S: CurrentTermSource,
    {
        let entries = source.fetch_current_term(session).await?;
        info!("Fetched {} enrolled sections", entries.len());

        let action = format!("Sync current term ({} sections)", entries.len());
        self.mutate(action, |engine| {
            engine.load_current_term(&entries);
            Outcome::Applied
        })
        .await
    }

    /// Forgets the stored schedule.
    pub async fn reset(&self) -> Result<ScheduleView> {
        if store::delete(self.state_path.clone()).await? {
            info!("Deleted {}", self.state_path.display());
        }
        Ok(self.view(&ScheduleConflictEngine::new(), None))
    }
}
