//! Priority score breakdown produced by the estimator.

use super::TaskPriority;

/// Detailed scoring result for a single task.
///
/// Sub-scores are each on a 0-100 scale; the total is their weighted,
/// rounded combination (due date 50%, age 20%, status 30%).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityScore {
    /// Urgency derived from the due date
    pub due_date_score: u32,

    /// Urgency derived from days since creation
    pub age_score: u32,

    /// Urgency derived from the lifecycle stage
    pub status_score: u32,

    /// Weighted total of the sub-scores
    pub total_score: u32,

    /// Priority level the total maps onto
    pub estimated_priority: TaskPriority,
}
