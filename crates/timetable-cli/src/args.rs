use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{AddArgs, CatalogArgs, CurrentCommands, RemoveArgs, ShowArgs, TemplateCommands};

/// Plan next semester's weekly class schedule and catch time conflicts
///
/// Courses come from a catalog (a built-in demo term unless `--catalog` is
/// given) and can be layered over the courses you are already enrolled in.
/// Every change recomputes which classes overlap. The `serve` command exposes
/// the same operations as an MCP (Model Context Protocol) server.
#[derive(Parser)]
#[command(version, about, name = "tt")]
pub struct Args {
    /// Path to the schedule state file. Defaults to
    /// $XDG_DATA_HOME/timetable/plan.json
    #[arg(long, global = true)]
    pub state_file: Option<PathBuf>,

    /// JSON catalog of offerings and templates to plan with instead of the
    /// built-in demo term
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Base URL of the planning API used by `current sync`
    #[arg(
        long,
        global = true,
        env = "TIMETABLE_API_URL",
        default_value = "http://localhost:5000/api"
    )]
    pub api_url: String,

    /// Bearer token for the planning API
    #[arg(long, global = true, env = "TIMETABLE_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the timetable CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Show the schedule with conflicts (the default command)
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Search the course catalog
    #[command(alias = "c")]
    Catalog(CatalogArgs),
    /// Add a course group to the schedule
    #[command(alias = "a")]
    Add(AddArgs),
    /// Remove a planned course by entry ID
    #[command(alias = "rm")]
    Remove(RemoveArgs),
    /// List or apply schedule templates
    #[command(alias = "t")]
    Template {
        #[command(subcommand)]
        command: TemplateCommands,
    },
    /// Manage the courses you are currently enrolled in
    Current {
        #[command(subcommand)]
        command: CurrentCommands,
    },
    /// Forget the stored schedule
    Reset,
    /// Start the MCP server
    Serve,
}
