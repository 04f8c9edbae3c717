//! Error handling utilities for MCP server

use rmcp::ErrorData;
use timetable_core::ScheduleError;

/// Converts planner errors to MCP errors. Lookups that fail because of the
/// caller's arguments are reported as invalid parameters.
pub fn to_mcp_error(message: &str, error: &ScheduleError) -> ErrorData {
    let message = format!("{message}: {error}");
    if error.is_not_found() || matches!(error, ScheduleError::InvalidInput { .. }) {
        ErrorData::invalid_params(message, None)
    } else {
        ErrorData::internal_error(message, None)
    }
}
