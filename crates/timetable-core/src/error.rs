//! Error types for the timetable library.
//!
//! The conflict engine itself never fails: its rejected mutations are reported
//! through [`crate::models::Outcome`]. Everything around it (parsing, catalog
//! lookups, the current-term fetch, the state file) reports through
//! [`ScheduleError`].

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all timetable operations.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// No offering with the given course code in the catalog
    #[error("Course {code} not found in the catalog")]
    CourseNotFound { code: String },
    /// The offering exists but has no group with the given ID
    #[error("Course {code} has no group {group}")]
    GroupNotFound { code: String, group: u32 },
    /// No schedule template with the given ID
    #[error("Schedule template '{id}' not found")]
    TemplateNotFound { id: String },
    /// The schedule API answered with a non-success status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
    /// The schedule API could not be reached
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: reqwest::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> ScheduleError {
        ScheduleError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl ScheduleError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Wraps a transport-level HTTP failure.
    pub fn network(message: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            message: message.into(),
            source,
        }
    }

    /// Returns true for lookup failures caused by the caller's arguments.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ScheduleError::CourseNotFound { .. }
                | ScheduleError::GroupNotFound { .. }
                | ScheduleError::TemplateNotFound { .. }
        )
    }

    /// Returns true if the API rejected the session's credentials.
    pub fn needs_reauth(&self) -> bool {
        matches!(self, ScheduleError::Api { status: 401 | 403, .. })
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to ScheduleError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| ScheduleError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }
}

/// Result type alias for timetable operations
pub type Result<T> = std::result::Result<T, ScheduleError>;
