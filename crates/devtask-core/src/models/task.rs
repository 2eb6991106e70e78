//! Task model definition and related functionality.

use jiff::{civil::Date, civil::Time, tz::TimeZone, Timestamp};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{TaskPriority, TaskStatus};

/// A single recorded status transition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatusChange {
    /// Status the task held before the transition
    pub from: TaskStatus,

    /// Status the task transitioned into
    pub to: TaskStatus,

    /// Timestamp of the transition (UTC)
    pub changed_at: Timestamp,
}

/// Represents a tracked unit of work.
///
/// Field names serialize in camelCase, matching the on-disk document
/// layout. Unknown fields in persisted documents are ignored on read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, assigned at creation and never changed
    pub id: Uuid,

    /// Title of the task (1-200 characters)
    pub title: String,

    /// Optional detailed description (up to 1000 characters)
    #[serde(default)]
    pub description: Option<String>,

    /// Current lifecycle stage
    pub status: TaskStatus,

    /// User-set priority
    pub priority: TaskPriority,

    /// System-derived priority recommendation; absent until estimation
    /// has run for this task
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_priority: Option<TaskPriority>,

    /// Calendar due date; absent means no deadline
    #[serde(default)]
    pub due_date: Option<Date>,

    /// Timestamp when the task was created (UTC), immutable
    pub created_at: Timestamp,

    /// Timestamp of the last mutation (UTC)
    pub updated_at: Timestamp,

    /// Append-only audit log of status transitions
    pub status_history: Vec<StatusChange>,
}

impl Task {
    /// Whether the task's due date has passed as of `now`.
    ///
    /// A task is overdue when the start of its due date (UTC) lies
    /// strictly before `now`; a due date whose midnight coincides with
    /// `now` exactly is not yet overdue. Tasks without a due date are
    /// never overdue.
    pub fn is_overdue_at(&self, now: Timestamp) -> bool {
        match self.due_date {
            Some(due) => {
                let now_dt = now.to_zoned(TimeZone::UTC).datetime();
                due.to_datetime(Time::midnight()) < now_dt
            }
            None => false,
        }
    }

    /// Records a status transition.
    ///
    /// The history entry is appended before the status field itself
    /// changes, so the entry's `from` always names the outgoing status.
    pub fn transition_to(&mut self, new_status: TaskStatus, now: Timestamp) {
        self.status_history.push(StatusChange {
            from: self.status,
            to: new_status,
            changed_at: now,
        });
        self.status = new_status;
        self.updated_at = now;
    }

    /// First eight characters of the id, for compact list display.
    pub fn short_id(&self) -> String {
        let id = self.id.to_string();
        id[..8].to_string()
    }
}
