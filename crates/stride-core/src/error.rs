//! Error types for the stride library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all stride operations.
#[derive(Error, Debug)]
pub enum StrideError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// No plan template exists for the given ID
    #[error("Plan '{id}' not found")]
    PlanNotFound { id: String },
    /// Plan template could not be read
    #[error("Failed to load plan from {path}: {reason}")]
    PlanLoad { path: PathBuf, reason: String },
    /// Plan template failed schema validation
    #[error("Plan validation failed at '{field}': {reason}")]
    Validation { field: String, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Calendar arithmetic left the supported date range
    #[error("Date out of range: {source}")]
    DateOutOfRange {
        #[from]
        source: jiff::Error,
    },
    /// JSON serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// YAML plan template parse errors
    #[error("YAML error: {source}")]
    Yaml {
        #[from]
        source: serde_yaml::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> StrideError {
        StrideError::Database {
            message: self.message,
            source,
        }
    }
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
    pub fn with_reason(self, reason: impl Into<String>) -> StrideError {
        StrideError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl StrideError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a plan template validation error.
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Wraps a task join failure from `spawn_blocking`.
    pub(crate) fn join(error: tokio::task::JoinError) -> Self {
        Self::Configuration {
            message: format!("Task join error: {error}"),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| StrideError::database(message).with_source(e))
    }
}

/// Result type alias for stride operations
pub type Result<T> = std::result::Result<T, StrideError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_names_field() {
        let err = StrideError::validation("schedule[2].workouts", "expected 7 workouts, found 6");
        assert_eq!(
            err.to_string(),
            "Plan validation failed at 'schedule[2].workouts': expected 7 workouts, found 6"
        );
    }

    #[test]
    fn test_invalid_input_builder() {
        let err = StrideError::invalid_input("race_date").with_reason("not a date");
        assert!(matches!(err, StrideError::InvalidInput { ref field, .. } if field == "race_date"));
        assert!(err.to_string().contains("not a date"));
    }

    #[test]
    fn test_db_context_wraps_source() {
        let result: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::QueryReturnedNoRows);
        let err = result.db_context("Failed to load state").unwrap_err();
        assert!(err.to_string().starts_with("Database error: Failed to load state"));
    }
}
