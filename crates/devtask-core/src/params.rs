//! Parameter structures for Devtask operations
//!
//! This module contains shared parameter structures that can be used
//! across different interfaces (CLI, future front ends) without
//! framework-specific derives. Interface layers define their own wrapper
//! structs (e.g. clap argument structs) and convert into these via
//! `From`, keeping the core free of UI framework dependencies.
//!
//! Parameters that carry raw string values expose a `validate` method
//! that parses them into typed domain values, returning the matching
//! [`TaskError`] variant on failure. Validation always runs before any
//! document is persisted.

use std::str::FromStr;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TaskError},
    models::{TaskFilter, TaskPriority, TaskStatus},
};

/// Maximum title length in characters.
pub const TITLE_MAX_CHARS: usize = 200;

/// Maximum description length in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 1000;

fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(TaskError::validation("title")
            .with_reason("Task title is required (1-200 characters)"));
    }
    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(TaskError::validation("title")
            .with_reason("Task title must be 200 characters or less"));
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<()> {
    if description.chars().count() > DESCRIPTION_MAX_CHARS {
        return Err(TaskError::validation("description")
            .with_reason("Description must be 1000 characters or less"));
    }
    Ok(())
}

/// Generic parameters for operations requiring just a task ID.
///
/// Used for operations like show_task and delete_task_by_id. The ID is
/// the full hyphenated form; prefix resolution is a front-end concern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the task to operate on
    pub id: String,
}

/// Parameters for creating a new task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTask {
    /// Title of the task (required, 1-200 characters)
    pub title: String,
    /// Optional detailed description (up to 1000 characters)
    pub description: Option<String>,
    /// Priority; defaults to medium when unspecified
    pub priority: Option<TaskPriority>,
    /// Optional calendar due date
    pub due_date: Option<Date>,
}

impl CreateTask {
    /// Validate title and description rules.
    pub fn validate(&self) -> Result<()> {
        validate_title(&self.title)?;
        if let Some(description) = &self.description {
            validate_description(description)?;
        }
        Ok(())
    }
}

/// Parameters for partially updating an existing task.
///
/// A `None` field is left untouched. Status changes go through
/// [`ChangeStatus`] instead so the status history stays complete.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTask {
    /// Task ID to update (required)
    pub id: String,
    /// Updated title
    pub title: Option<String>,
    /// Updated description
    pub description: Option<String>,
    /// Updated user-set priority
    pub priority: Option<TaskPriority>,
    /// Updated due date
    pub due_date: Option<Date>,
}

impl UpdateTask {
    /// Validate any touched title or description.
    pub fn validate(&self) -> Result<()> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        if let Some(description) = &self.description {
            validate_description(description)?;
        }
        Ok(())
    }

    /// Whether the update touches no field at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
    }
}

/// Parameters for listing tasks with optional filters.
///
/// Status and priority arrive as raw strings (as typed at a command
/// line) and are parsed into typed values by [`ListTasks::validate`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListTasks {
    /// Filter by status ('todo', 'in-progress', or 'done')
    pub status: Option<String>,
    /// Filter by priority ('high', 'medium', or 'low')
    pub priority: Option<String>,
    /// Case-insensitive keyword search over title and description
    pub search: Option<String>,
}

impl ListTasks {
    /// Parse the raw filter values into a typed filter.
    ///
    /// # Errors
    ///
    /// * `TaskError::InvalidStatus` - When the status string is invalid
    /// * `TaskError::InvalidPriority` - When the priority string is invalid
    pub fn validate(&self) -> Result<TaskFilter> {
        let status = match &self.status {
            Some(value) => Some(TaskStatus::from_str(value).map_err(|_| {
                TaskError::InvalidStatus {
                    value: value.clone(),
                }
            })?),
            None => None,
        };

        let priority = match &self.priority {
            Some(value) => Some(TaskPriority::from_str(value).map_err(|_| {
                TaskError::InvalidPriority {
                    value: value.clone(),
                }
            })?),
            None => None,
        };

        Ok(TaskFilter {
            status,
            priority,
            search: self.search.clone(),
        })
    }
}

/// Parameters for changing a task's status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChangeStatus {
    /// Task ID to update (required)
    pub id: String,
    /// New status ('todo', 'in-progress', or 'done')
    pub status: String,
}

impl ChangeStatus {
    /// Parse the status string into a typed value.
    pub fn validate(&self) -> Result<TaskStatus> {
        TaskStatus::from_str(&self.status).map_err(|_| TaskError::InvalidStatus {
            value: self.status.clone(),
        })
    }
}

/// Parameters for changing a task's user-set priority.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChangePriority {
    /// Task ID to update (required)
    pub id: String,
    /// New priority ('high', 'medium', or 'low')
    pub priority: String,
}

impl ChangePriority {
    /// Parse the priority string into a typed value.
    pub fn validate(&self) -> Result<TaskPriority> {
        TaskPriority::from_str(&self.priority).map_err(|_| TaskError::InvalidPriority {
            value: self.priority.clone(),
        })
    }
}

/// Parameters for permanently deleting a task.
///
/// Requires explicit confirmation to prevent accidental deletion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteTask {
    /// Task ID to delete (required)
    pub id: String,
    /// Confirm the deletion
    pub confirmed: bool,
}
