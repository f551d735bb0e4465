//! Error types for the study planner library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all study planner operations.
#[derive(Error, Debug)]
pub enum StudyError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// No user is signed in
    #[error("User not authenticated")]
    Unauthenticated,
    /// The signed-in user does not own the subject
    #[error("Unauthorized access to subject {id}")]
    Unauthorized { id: String },
    /// Subject not found for the given ID
    #[error("Subject with ID {id} not found")]
    SubjectNotFound { id: String },
    /// Sign-in or sign-up was rejected
    #[error("Authentication failed: {reason}")]
    AuthenticationFailed { reason: String },
    /// The generative text service failed or returned nothing usable
    #[error("Error generating revision plan: {message}")]
    Generation { message: String },
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
    pub fn with_source(self, source: rusqlite::Error) -> StudyError {
        StudyError::Database {
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
    pub fn with_reason(self, reason: impl Into<String>) -> StudyError {
        StudyError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl StudyError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a generation error from anything displayable.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Creates an authentication failure with the given reason.
    pub fn authentication(reason: impl Into<String>) -> Self {
        Self::AuthenticationFailed {
            reason: reason.into(),
        }
    }

    /// Whether this error means the caller has to sign in first.
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, Self::Unauthenticated)
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| StudyError::database(message).with_source(e))
    }
}

/// Converts a tokio join failure into a configuration error.
pub(crate) fn join_error(e: tokio::task::JoinError) -> StudyError {
    StudyError::Configuration {
        message: format!("Task join error: {e}"),
    }
}

/// Result type alias for study planner operations
pub type Result<T> = std::result::Result<T, StudyError>;
