//! MCP server implementation for the timetable planner
//!
//! Exposes the planner's schedule operations as Model Context Protocol
//! tools so that an assistant can build a student's week. Every tool returns
//! the same markdown the CLI prints.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use timetable_core::{
    params::{
        AddCourse, ApplyTemplate, Empty, RemoveCourse, SearchCatalog, SetCurrentVisible,
        ShowSchedule,
    },
    Planner,
};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};

pub mod errors;

use errors::to_mcp_error;

/// Result type for MCP tool methods
pub type McpResult = Result<CallToolResult, McpError>;

fn markdown(text: impl ToString) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(text.to_string())]))
}

/// MCP server for the timetable planner
#[derive(Clone)]
pub struct TimetableMcpServer {
    planner: Arc<Mutex<Planner>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl TimetableMcpServer {
    pub fn new(planner: Planner) -> Self {
        Self {
            planner: Arc::new(Mutex::new(planner)),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        name = "show_schedule",
        description = "Show the student's weekly schedule: enrolled courses (when visible) and planned courses, with overlapping classes marked as conflicts. Use list=true to get one entry per meeting with the entry IDs needed by remove_course."
    )]
    async fn show_schedule(&self, Parameters(params): Parameters<ShowSchedule>) -> McpResult {
        debug!("show_schedule: {params:?}");

        let planner = self.planner.lock().await;
        let view = planner
            .schedule()
            .await
            .map_err(|e| to_mcp_error("Failed to load schedule", &e))?;
        let view = if params.list { view.as_list() } else { view };
        markdown(view)
    }

    #[tool(
        name = "search_catalog",
        description = "Search next term's course offerings by code or name (case-insensitive). An empty query lists every offering with its groups, meeting times, locations and prerequisite courses."
    )]
    async fn search_catalog(&self, Parameters(params): Parameters<SearchCatalog>) -> McpResult {
        debug!("search_catalog: {params:?}");

        let planner = self.planner.lock().await;
        let offerings = planner.search_catalog(&params);
        markdown(format!("# Catalog {}\n\n{}", planner.catalog().term, offerings))
    }

    #[tool(
        name = "list_templates",
        description = "List ready-made schedule templates. Applying one with apply_template replaces all planned courses at once."
    )]
    async fn list_templates(&self, Parameters(_): Parameters<Empty>) -> McpResult {
        let planner = self.planner.lock().await;
        markdown(format!("# Templates\n\n{}", planner.templates()))
    }

    #[tool(
        name = "add_course",
        description = "Add one group of a catalog course to the planned schedule. A course that is already planned or enrolled is left unchanged; the reply says so. Returns the updated schedule with conflicts."
    )]
    async fn add_course(&self, Parameters(params): Parameters<AddCourse>) -> McpResult {
        debug!("add_course: {params:?}");

        let planner = self.planner.lock().await;
        let result = planner
            .add_course(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to add course", &e))?;
        markdown(result)
    }

    #[tool(
        name = "remove_course",
        description = "Remove a planned course by entry ID (as listed by show_schedule with list=true). Enrolled courses cannot be removed individually; hide them with set_current_visible instead."
    )]
    async fn remove_course(&self, Parameters(params): Parameters<RemoveCourse>) -> McpResult {
        debug!("remove_course: {params:?}");

        let planner = self.planner.lock().await;
        let result = planner
            .remove_course(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to remove course", &e))?;
        markdown(result)
    }

    #[tool(
        name = "apply_template",
        description = "Replace every planned course with the courses of a template. Enrolled courses are not affected."
    )]
    async fn apply_template(&self, Parameters(params): Parameters<ApplyTemplate>) -> McpResult {
        debug!("apply_template: {params:?}");

        let planner = self.planner.lock().await;
        let result = planner
            .apply_template(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to apply template", &e))?;
        markdown(result)
    }

    #[tool(
        name = "set_current_visible",
        description = "Show or hide the courses the student is currently enrolled in. Hidden courses do not take part in conflict detection and come back unchanged when shown again."
    )]
    async fn set_current_visible(
        &self,
        Parameters(params): Parameters<SetCurrentVisible>,
    ) -> McpResult {
        debug!("set_current_visible: {params:?}");

        let planner = self.planner.lock().await;
        let result = planner
            .set_current_visible(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to change visibility", &e))?;
        markdown(result)
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for TimetableMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "timetable".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(
                r#"Timetable helps a student plan next term's weekly class schedule.

## Core Concepts
- **Catalog**: next term's course offerings, each with one or more groups (sections) meeting at a fixed weekly time
- **Planned courses**: groups the student is considering; at most one group per course
- **Enrolled courses**: the current term's classes, which can be shown or hidden
- **Conflict**: two visible classes on the same day whose times overlap (back-to-back classes do not conflict)

## Workflow
1. `search_catalog` to see what is offered
2. `add_course` with a course code and group, or `apply_template` to start from a template (`list_templates`)
3. `show_schedule` to review conflicts; `remove_course` to drop a planned course
4. `set_current_visible` to compare with or without the enrolled classes"#
                    .to_string(),
            ),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: TimetableMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting timetable MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
