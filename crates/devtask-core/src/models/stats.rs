//! Aggregate statistics over the task collection.

use jiff::Timestamp;

use super::{Task, TaskPriority, TaskStatus};

/// Task counts broken down by lifecycle stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub todo: usize,
    pub in_progress: usize,
    pub done: usize,
}

/// Task counts broken down by user-set priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriorityCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// Ephemeral aggregate over the full collection. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    /// Total number of tasks
    pub total: usize,

    /// Counts per lifecycle stage
    pub by_status: StatusCounts,

    /// Counts per user-set priority
    pub by_priority: PriorityCounts,

    /// Tasks whose due date lies strictly before `now`
    pub overdue: usize,
}

impl TaskStats {
    /// Computes all aggregates in a single pass over the collection.
    pub fn collect_at(tasks: &[Task], now: Timestamp) -> Self {
        let mut stats = Self::default();

        for task in tasks {
            stats.total += 1;

            match task.status {
                TaskStatus::Todo => stats.by_status.todo += 1,
                TaskStatus::InProgress => stats.by_status.in_progress += 1,
                TaskStatus::Done => stats.by_status.done += 1,
            }

            match task.priority {
                TaskPriority::High => stats.by_priority.high += 1,
                TaskPriority::Medium => stats.by_priority.medium += 1,
                TaskPriority::Low => stats.by_priority.low += 1,
            }

            if task.is_overdue_at(now) {
                stats.overdue += 1;
            }
        }

        stats
    }
}
