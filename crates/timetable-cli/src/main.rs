//! Timetable CLI Application
//!
//! Command-line interface and MCP server for planning a weekly class
//! schedule.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{Cli, ShowArgs};
use log::info;
use mcp::{run_stdio_server, TimetableMcpServer};
use renderer::TerminalRenderer;
use timetable_core::{Catalog, PlannerBuilder, Session};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        state_file,
        catalog,
        api_url,
        token,
        no_color,
        command,
    } = Args::parse();

    let mut builder = PlannerBuilder::new().with_state_path(state_file);
    if let Some(path) = catalog {
        let catalog = Catalog::load(&path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?;
        builder = builder.with_catalog(catalog);
    }
    let planner = builder
        .build()
        .await
        .context("Failed to initialize planner")?;

    let session = Session::new(api_url, token);
    let renderer = TerminalRenderer::new(!no_color);

    info!("Planning {}", planner.catalog().term);

    match command {
        Some(Commands::Serve) => {
            info!("Starting timetable MCP server");
            run_stdio_server(TimetableMcpServer::new(planner))
                .await
                .context("MCP server failed")
        }
        Some(Commands::Show(args)) => Cli::new(planner, renderer).show(args).await,
        Some(Commands::Catalog(args)) => Cli::new(planner, renderer).catalog(args),
        Some(Commands::Add(args)) => Cli::new(planner, renderer).add(args).await,
        Some(Commands::Remove(args)) => Cli::new(planner, renderer).remove(args).await,
        Some(Commands::Template { command }) => {
            Cli::new(planner, renderer)
                .handle_template_command(command)
                .await
        }
        Some(Commands::Current { command }) => {
            Cli::new(planner, renderer)
                .handle_current_command(command, &session)
                .await
        }
        Some(Commands::Reset) => Cli::new(planner, renderer).reset().await,
        None => Cli::new(planner, renderer).show(ShowArgs::default()).await,
    }
}
