//! Priority estimation scoring.
//!
//! A pure, deterministic scoring function with no side effects and no
//! dependency on the store. Each task is scored on three axes (due
//! date, age, lifecycle stage), each on a 0-100 scale; the weighted
//! total maps onto a recommended priority level.
//!
//! The bucket boundaries and the score-to-priority mapping are exact
//! contract values, not tunable heuristics.

use jiff::{tz::TimeZone, Timestamp};

use crate::models::{PriorityScore, Task, TaskPriority, TaskStatus};

const DUE_DATE_WEIGHT: f64 = 0.5;
const AGE_WEIGHT: f64 = 0.2;
const STATUS_WEIGHT: f64 = 0.3;

const SECONDS_PER_DAY: i64 = 86_400;

/// Scores a task as of the current instant.
pub fn estimate(task: &Task) -> PriorityScore {
    estimate_at(task, Timestamp::now())
}

/// Scores a task as of the given instant.
///
/// Deterministic: the same task and the same `now` always produce the
/// same score breakdown.
pub fn estimate_at(task: &Task, now: Timestamp) -> PriorityScore {
    let due_date_score = due_date_score(task, now);
    let age_score = age_score(task.created_at, now);
    let status_score = status_score(task.status);
    let total_score = total_score(due_date_score, age_score, status_score);

    PriorityScore {
        due_date_score,
        age_score,
        status_score,
        total_score,
        estimated_priority: score_to_priority(total_score),
    }
}

/// Due-date urgency on a 0-100 scale, weighted at 50%.
///
/// Buckets are mutually exclusive and checked in descending urgency:
/// overdue first, then whole days until the due date.
fn due_date_score(task: &Task, now: Timestamp) -> u32 {
    let Some(due) = task.due_date else {
        return 0;
    };

    if task.is_overdue_at(now) {
        return 100;
    }

    let today = now.to_zoned(TimeZone::UTC).date();
    let days_until = (due - today).get_days();

    match days_until {
        d if d <= 1 => 90,
        d if d <= 3 => 70,
        d if d <= 7 => 50,
        d if d <= 14 => 30,
        _ => 10,
    }
}

/// Task age on a 0-100 scale, weighted at 20%, bucketed by whole days
/// since creation.
fn age_score(created_at: Timestamp, now: Timestamp) -> u32 {
    let age_days = (now.as_second() - created_at.as_second()) / SECONDS_PER_DAY;

    match age_days {
        d if d >= 30 => 100,
        d if d >= 14 => 70,
        d if d >= 7 => 50,
        _ => 30,
    }
}

/// Lifecycle-stage urgency on a 0-100 scale, weighted at 30%.
fn status_score(status: TaskStatus) -> u32 {
    match status {
        TaskStatus::InProgress => 100,
        TaskStatus::Todo => 50,
        TaskStatus::Done => 0,
    }
}

fn total_score(due: u32, age: u32, status: u32) -> u32 {
    let weighted = f64::from(due) * DUE_DATE_WEIGHT
        + f64::from(age) * AGE_WEIGHT
        + f64::from(status) * STATUS_WEIGHT;
    weighted.round() as u32
}

/// Maps a weighted total onto the three priority levels.
fn score_to_priority(score: u32) -> TaskPriority {
    if score >= 70 {
        TaskPriority::High
    } else if score >= 40 {
        TaskPriority::Medium
    } else {
        TaskPriority::Low
    }
}

#[cfg(test)]
mod tests {
    use jiff::{civil::Date, ToSpan};
    use uuid::Uuid;

    use super::*;

    // 2023-11-14 22:13:20 UTC
    const NOW_SECOND: i64 = 1_700_000_000;

    fn now() -> Timestamp {
        Timestamp::from_second(NOW_SECOND).unwrap()
    }

    fn today() -> Date {
        now().to_zoned(TimeZone::UTC).date()
    }

    fn test_task(status: TaskStatus, due_date: Option<Date>, created_at: Timestamp) -> Task {
        Task {
            id: Uuid::new_v4(),
            title: "Scoring fixture".to_string(),
            description: None,
            status,
            priority: TaskPriority::Medium,
            estimated_priority: None,
            due_date,
            created_at,
            updated_at: created_at,
            status_history: Vec::new(),
        }
    }

    #[test]
    fn test_due_tomorrow_todo_fresh_scores_medium() {
        let task = test_task(TaskStatus::Todo, Some(today() + 1.days()), now());
        let score = estimate_at(&task, now());

        assert_eq!(score.due_date_score, 90);
        assert_eq!(score.age_score, 30);
        assert_eq!(score.status_score, 50);
        // round(90*0.5 + 30*0.2 + 50*0.3) = round(45 + 6 + 15) = 66
        assert_eq!(score.total_score, 66);
        assert_eq!(score.estimated_priority, TaskPriority::Medium);
    }

    #[test]
    fn test_in_progress_no_due_date_scores_low() {
        let task = test_task(TaskStatus::InProgress, None, now());
        let score = estimate_at(&task, now());

        assert_eq!(score.due_date_score, 0);
        assert_eq!(score.age_score, 30);
        assert_eq!(score.status_score, 100);
        // round(0 + 6 + 30) = 36
        assert_eq!(score.total_score, 36);
        assert_eq!(score.estimated_priority, TaskPriority::Low);
    }

    #[test]
    fn test_overdue_task_scores_high() {
        let task = test_task(TaskStatus::Todo, Some(today() - 2.days()), now());
        let score = estimate_at(&task, now());

        assert_eq!(score.due_date_score, 100);
        // round(50 + 6 + 15) = 71
        assert_eq!(score.total_score, 71);
        assert_eq!(score.estimated_priority, TaskPriority::High);
    }

    #[test]
    fn test_due_date_buckets() {
        for (days_ahead, expected) in [(1, 90), (3, 70), (4, 50), (7, 50), (8, 30), (14, 30), (15, 10)]
        {
            let task = test_task(TaskStatus::Todo, Some(today() + days_ahead.days()), now());
            let score = estimate_at(&task, now());
            assert_eq!(
                score.due_date_score, expected,
                "due in {days_ahead} days should score {expected}"
            );
        }
    }

    #[test]
    fn test_overdue_boundary_is_strict() {
        // Midnight of the due date exactly: not overdue yet.
        let due = Date::new(2023, 11, 15).unwrap();
        let midnight = Timestamp::from_second(1_700_006_400).unwrap();
        let task = test_task(TaskStatus::Todo, Some(due), midnight);
        assert!(!task.is_overdue_at(midnight));
        assert_eq!(estimate_at(&task, midnight).due_date_score, 90);

        // One microsecond past midnight: overdue.
        let just_after = Timestamp::new(1_700_006_400, 1_000).unwrap();
        assert!(task.is_overdue_at(just_after));
        assert_eq!(estimate_at(&task, just_after).due_date_score, 100);
    }

    #[test]
    fn test_age_buckets() {
        for (age_days, expected) in [(0, 30), (6, 30), (7, 50), (13, 50), (14, 70), (29, 70), (30, 100)]
        {
            let created = Timestamp::from_second(NOW_SECOND - age_days * SECONDS_PER_DAY).unwrap();
            let task = test_task(TaskStatus::Done, None, created);
            let score = estimate_at(&task, now());
            assert_eq!(
                score.age_score, expected,
                "{age_days} day old task should score {expected}"
            );
        }
    }

    #[test]
    fn test_status_scores() {
        for (status, expected) in [
            (TaskStatus::InProgress, 100),
            (TaskStatus::Todo, 50),
            (TaskStatus::Done, 0),
        ] {
            let task = test_task(status, None, now());
            assert_eq!(estimate_at(&task, now()).status_score, expected);
        }
    }

    #[test]
    fn test_score_to_priority_boundaries() {
        assert_eq!(score_to_priority(70), TaskPriority::High);
        assert_eq!(score_to_priority(69), TaskPriority::Medium);
        assert_eq!(score_to_priority(40), TaskPriority::Medium);
        assert_eq!(score_to_priority(39), TaskPriority::Low);
        assert_eq!(score_to_priority(0), TaskPriority::Low);
    }

    #[test]
    fn test_estimate_is_deterministic() {
        let task = test_task(TaskStatus::Todo, Some(today() + 5.days()), now());
        let first = estimate_at(&task, now());
        let second = estimate_at(&task, now());
        assert_eq!(first, second);
    }
}
