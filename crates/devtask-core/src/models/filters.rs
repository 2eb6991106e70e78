//! Filter types for querying tasks.

use super::{Task, TaskPriority, TaskStatus};

/// Filter options for querying the task collection.
///
/// All present predicates must match for a task to pass; an empty
/// filter passes everything. Filters are ephemeral and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Filter by lifecycle stage
    pub status: Option<TaskStatus>,

    /// Filter by user-set priority
    pub priority: Option<TaskPriority>,

    /// Case-insensitive substring search over title and description
    pub search: Option<String>,
}

impl TaskFilter {
    /// Whether no predicate is set.
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.priority.is_none() && self.search.is_none()
    }

    /// Whether `task` passes every present predicate.
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(status) = self.status {
            if task.status != status {
                return false;
            }
        }

        if let Some(priority) = self.priority {
            if task.priority != priority {
                return false;
            }
        }

        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let in_title = task.title.to_lowercase().contains(&needle);
            let in_description = task
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle));
            if !in_title && !in_description {
                return false;
            }
        }

        true
    }
}
