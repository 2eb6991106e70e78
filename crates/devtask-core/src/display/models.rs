//! Display implementations for domain models.
//!
//! All implementations produce markdown for rich terminal display,
//! with consistent status icons and structured sections. Data lives in
//! [`crate::models`]; only presentation logic lives here.

use std::fmt;

use super::datetime::{DueDate, LocalDateTime};
use crate::models::{PriorityScore, StatusChange, Task, TaskPriority, TaskStats, TaskStatus};

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} ({})", self.title, self.status.with_icon())?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Priority: {}", self.priority)?;
        if let Some(estimated) = self.estimated_priority {
            writeln!(f, "- Estimated priority: {estimated}")?;
        }
        writeln!(f, "- Due: {}", DueDate(self.due_date))?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        // Description as a paragraph
        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        if !self.status_history.is_empty() {
            writeln!(f, "\n## History")?;
            writeln!(f)?;
            for change in &self.status_history {
                write!(f, "{change}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for StatusChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {} to {} ({})",
            self.from,
            self.to,
            LocalDateTime(&self.changed_at)
        )
    }
}

impl fmt::Display for TaskStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Task Statistics")?;
        writeln!(f)?;
        writeln!(f, "- Total: {}", self.total)?;
        writeln!(f, "- Overdue: {}", self.overdue)?;

        writeln!(f, "\n## By Status")?;
        writeln!(f)?;
        writeln!(f, "- {}: {}", TaskStatus::Todo, self.by_status.todo)?;
        writeln!(
            f,
            "- {}: {}",
            TaskStatus::InProgress,
            self.by_status.in_progress
        )?;
        writeln!(f, "- {}: {}", TaskStatus::Done, self.by_status.done)?;

        writeln!(f, "\n## By Priority")?;
        writeln!(f)?;
        writeln!(f, "- {}: {}", TaskPriority::High, self.by_priority.high)?;
        writeln!(f, "- {}: {}", TaskPriority::Medium, self.by_priority.medium)?;
        writeln!(f, "- {}: {}", TaskPriority::Low, self.by_priority.low)?;

        Ok(())
    }
}

impl fmt::Display for PriorityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Due date score: {}", self.due_date_score)?;
        writeln!(f, "- Age score: {}", self.age_score)?;
        writeln!(f, "- Status score: {}", self.status_score)?;
        writeln!(
            f,
            "- Total: {} ({})",
            self.total_score, self.estimated_priority
        )
    }
}
