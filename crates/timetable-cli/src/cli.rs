//! Command handlers and their clap argument wrappers
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types with `From` impls, so `timetable-core` stays free of CLI
//! concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```
//!
//! Every handler renders the markdown produced by the core display types.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use log::info;
use timetable_core::{
    params::{
        AddCourse, ApplyTemplate, RemoveCourse, SearchCatalog, SetCurrentVisible, ShowSchedule,
    },
    ApiClient, JsonFileSource, MutationResult, Planner, ScheduleError, Session,
};

use crate::renderer::TerminalRenderer;

// ============================================================================
// CLI Argument Wrappers
// ============================================================================

/// Show the schedule
#[derive(Args, Default)]
pub struct ShowArgs {
    /// List entries one by one instead of drawing the weekly grid
    #[arg(short, long)]
    pub list: bool,
}

impl From<ShowArgs> for ShowSchedule {
    fn from(val: ShowArgs) -> Self {
        ShowSchedule { list: val.list }
    }
}

/// Search the course catalog
#[derive(Args)]
pub struct CatalogArgs {
    /// Text matched against course code and name; lists everything when omitted
    pub query: Option<String>,
}

impl From<CatalogArgs> for SearchCatalog {
    fn from(val: CatalogArgs) -> Self {
        SearchCatalog {
            query: val.query.unwrap_or_default(),
        }
    }
}

/// Add a course group to the schedule
#[derive(Args)]
pub struct AddArgs {
    /// Course code, e.g. IC6200
    pub code: String,
    /// Group number within the course
    pub group: u32,
}

impl From<AddArgs> for AddCourse {
    fn from(val: AddArgs) -> Self {
        AddCourse {
            code: val.code,
            group: val.group,
        }
    }
}

/// Remove a planned course
#[derive(Args)]
pub struct RemoveArgs {
    /// Entry ID as printed by `show --list`, e.g. planned:IC6200-1-1
    pub id: String,
}

impl From<RemoveArgs> for RemoveCourse {
    fn from(val: RemoveArgs) -> Self {
        RemoveCourse { id: val.id }
    }
}

/// Apply a schedule template
#[derive(Args)]
pub struct ApplyTemplateArgs {
    /// Template ID, e.g. balanced
    pub id: String,
}

impl From<ApplyTemplateArgs> for ApplyTemplate {
    fn from(val: ApplyTemplateArgs) -> Self {
        ApplyTemplate { id: val.id }
    }
}

/// Fetch the enrolled term
#[derive(Args)]
pub struct SyncArgs {
    /// Read the enrolled-term JSON from a file instead of the API
    #[arg(long)]
    pub from: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum TemplateCommands {
    /// List available templates
    #[command(alias = "ls")]
    List,
    /// Replace the planned courses with a template
    Apply(ApplyTemplateArgs),
}

#[derive(Subcommand)]
pub enum CurrentCommands {
    /// Show enrolled courses on the schedule
    Show,
    /// Hide enrolled courses from the schedule
    Hide,
    /// Fetch enrolled courses from the planning API
    Sync(SyncArgs),
}

// ============================================================================
// Handlers
// ============================================================================

/// Runs one command against the planner and renders its output.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    fn render_result(&self, result: &MutationResult) -> Result<()> {
        self.renderer.render(&result.to_string())
    }

    pub async fn show(&self, args: ShowArgs) -> Result<()> {
        let params = ShowSchedule::from(args);
        let view = self
            .planner
            .schedule()
            .await
            .context("Failed to load schedule")?;
        let view = if params.list { view.as_list() } else { view };
        self.renderer.render(&view.to_string())
    }

    pub fn catalog(&self, args: CatalogArgs) -> Result<()> {
        let params = SearchCatalog::from(args);
        let offerings = self.planner.search_catalog(&params);
        let markdown = format!(
            "# Catalog {}\n\n{}",
            self.planner.catalog().term,
            offerings
        );
        self.renderer.render(&markdown)
    }

    pub async fn add(&self, args: AddArgs) -> Result<()> {
        let result = self
            .planner
            .add_course(&args.into())
            .await
            .context("Failed to add course")?;
        self.render_result(&result)
    }

    pub async fn remove(&self, args: RemoveArgs) -> Result<()> {
        let result = self
            .planner
            .remove_course(&args.into())
            .await
            .context("Failed to remove course")?;
        self.render_result(&result)
    }

    pub async fn handle_template_command(&self, command: TemplateCommands) -> Result<()> {
        match command {
            TemplateCommands::List => {
                let markdown = format!("# Templates\n\n{}", self.planner.templates());
                self.renderer.render(&markdown)
            }
            TemplateCommands::Apply(args) => {
                let result = self
                    .planner
                    .apply_template(&args.into())
                    .await
                    .context("Failed to apply template")?;
                self.render_result(&result)
            }
        }
    }

    pub async fn handle_current_command(
        &self,
        command: CurrentCommands,
        session: &Session,
    ) -> Result<()> {
        let result = match command {
            CurrentCommands::Show => self.set_current_visible(true).await?,
            CurrentCommands::Hide => self.set_current_visible(false).await?,
            CurrentCommands::Sync(SyncArgs { from: Some(path) }) => {
                info!("Syncing current term from {}", path.display());
                self.planner
                    .sync_current_term(&JsonFileSource::new(path), session)
                    .await
                    .context("Failed to sync current term")?
            }
            CurrentCommands::Sync(SyncArgs { from: None }) => {
                info!("Syncing current term from {}", session.base_url());
                let client = ApiClient::new().context("Failed to create API client")?;
                self.planner
                    .sync_current_term(&client, session)
                    .await
                    .map_err(|e| reauth_hint(e, session))?
            }
        };
        self.render_result(&result)
    }

    async fn set_current_visible(&self, visible: bool) -> Result<MutationResult> {
        self.planner
            .set_current_visible(&SetCurrentVisible { visible })
            .await
            .context("Failed to change current-term visibility")
    }

    pub async fn reset(&self) -> Result<()> {
        let view = self
            .planner
            .reset()
            .await
            .context("Failed to reset schedule")?;
        self.renderer
            .render(&format!("Schedule cleared.\n\n{view}"))
    }
}

fn reauth_hint(error: ScheduleError, session: &Session) -> anyhow::Error {
    let context = if !error.needs_reauth() {
        "Failed to sync current term"
    } else if session.is_authenticated() {
        "The API rejected the token; pass a fresh one with --token or TIMETABLE_TOKEN"
    } else {
        "The API requires a token; pass one with --token or TIMETABLE_TOKEN"
    };
    anyhow::Error::new(error).context(context)
}
