//! Error types for the task list library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all task list operations.
#[derive(Error, Debug)]
pub enum PlanitError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Task not found for the given ID
    #[error("Task with ID {id} not found")]
    TaskNotFound { id: String },
    /// An edit was requested while the list holds no tasks
    #[error("There are no tasks to edit")]
    NoTasks,
    /// The edit dialog is already open for another task
    #[error("An edit is already in progress for task {id}")]
    EditInProgress { id: String },
    /// A dialog action was requested while no edit is open
    #[error("No edit is in progress")]
    NoActiveEdit,
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Key-value store failures that are not database errors (quota, etc.)
    #[error("Storage error: {message}")]
    Storage { message: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
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
    pub fn with_source(self, source: rusqlite::Error) -> PlanitError {
        PlanitError::Database {
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
    pub fn with_reason(self, reason: impl Into<String>) -> PlanitError {
        PlanitError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PlanitError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a task-not-found error for the given id.
    pub fn task_not_found(id: impl Into<String>) -> Self {
        Self::TaskNotFound { id: id.into() }
    }

    /// Whether this error comes from user input rather than the environment.
    ///
    /// Validation errors abort the operation and are shown to the user;
    /// everything else is an infrastructure failure.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::TaskNotFound { .. }
                | Self::NoTasks
                | Self::EditInProgress { .. }
                | Self::NoActiveEdit
                | Self::InvalidInput { .. }
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| PlanitError::database(message).with_source(e))
    }
}

/// Result type alias for task list operations
pub type Result<T> = std::result::Result<T, PlanitError>;
