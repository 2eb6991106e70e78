//! Collection wrapper types for displaying groups of tasks.

use std::{fmt, ops::Index};

use super::datetime::{DueDate, LocalDateTime};
use crate::models::Task;

/// Newtype wrapper for displaying collections of tasks.
///
/// Formats each task as a compact summary block rather than its full
/// standalone display, and handles empty collections gracefully with a
/// "No tasks found." line.
pub struct Tasks(pub Vec<Task>);

impl Tasks {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of tasks in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the task at the given index.
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.0.get(index)
    }

    /// Get an iterator over the tasks.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.0.iter()
    }
}

impl Index<usize> for Tasks {
    type Output = Task;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Tasks {
    type Item = Task;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Tasks {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Tasks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No tasks found.")
        } else {
            for task in &self.0 {
                writeln!(f, "## {} (ID: {})", task.title, task.short_id())?;
                writeln!(f)?;
                writeln!(f, "- **Status**: {}", task.status.with_icon())?;
                write!(f, "- **Priority**: {}", task.priority)?;
                if let Some(estimated) = task.estimated_priority {
                    write!(f, " (estimated: {estimated})")?;
                }
                writeln!(f)?;
                if task.due_date.is_some() {
                    writeln!(f, "- **Due**: {}", DueDate(task.due_date))?;
                }
                writeln!(f, "- **Created**: {}", LocalDateTime(&task.created_at))?;
                writeln!(f)?;
            }
            Ok(())
        }
    }
}
