//! Error types for the task engine.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Comprehensive error type for all task engine operations.
#[derive(Error, Debug)]
pub enum TaskError {
    /// Input validation failures (title/description rules)
    #[error("Invalid input for field '{field}': {reason}")]
    Validation { field: String, reason: String },
    /// Task not found for the given ID
    #[error("Task not found: {id}")]
    TaskNotFound { id: String },
    /// Status value outside the legal set
    #[error("Invalid status '{value}'. Must be: todo, in-progress, or done")]
    InvalidStatus { value: String },
    /// Priority value outside the legal set
    #[error("Invalid priority '{value}'. Must be: high, medium, or low")]
    InvalidPriority { value: String },
    /// Operations attempted before the project was initialized
    #[error("Not a Devtask project. Run 'devtask init' to initialize")]
    NotInitialized,
    /// Unreadable or malformed on-disk documents
    #[error("Failed to read '{path}': {message}")]
    StorageRead { path: PathBuf, message: String },
    /// Failed or incomplete writes
    #[error("Failed to write '{path}': {message}")]
    StorageWrite { path: PathBuf, message: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Runtime errors outside the storage and validation taxonomy
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct ValidationBuilder {
    field: String,
}

impl ValidationBuilder {
    /// Create a new validation error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TaskError {
        TaskError::Validation {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TaskError {
    /// Creates a builder for validation errors.
    pub fn validation(field: impl Into<String>) -> ValidationBuilder {
        ValidationBuilder::new(field)
    }

    /// Creates a not-found error for the given task id.
    pub fn task_not_found(id: impl Into<String>) -> Self {
        TaskError::TaskNotFound { id: id.into() }
    }
}

/// Extension trait for mapping I/O and serialization failures into
/// storage errors carrying path context.
pub trait StorageResultExt<T> {
    /// Map the error into a `StorageRead` for the given path.
    fn read_context(self, path: &Path) -> Result<T>;

    /// Map the error into a `StorageWrite` for the given path.
    fn write_context(self, path: &Path) -> Result<T>;
}

impl<T, E> StorageResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn read_context(self, path: &Path) -> Result<T> {
        self.map_err(|e| TaskError::StorageRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    fn write_context(self, path: &Path) -> Result<T> {
        self.map_err(|e| TaskError::StorageWrite {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Result type alias for task engine operations
pub type Result<T> = std::result::Result<T, TaskError>;
