//! Status, priority, statistics, and bulk estimation operations.

use jiff::Timestamp;
use tokio::task;

use super::TaskManager;
use crate::{
    error::{Result, TaskError},
    estimator,
    models::{Task, TaskStats},
    params::{ChangePriority, ChangeStatus},
    store::FileStore,
};

impl TaskManager {
    /// Changes a task's status.
    ///
    /// The history entry is appended before the status field itself is
    /// updated. All status values are mutually reachable; no transition
    /// graph is enforced (`done` back to `todo` is legal).
    pub async fn change_status(&self, params: &ChangeStatus) -> Result<Task> {
        let new_status = params.validate()?;

        let data_dir = self.data_dir.clone();
        let id = params.id.clone();

        task::spawn_blocking(move || {
            let store = FileStore::new(&data_dir);
            let config = store.load_config()?;
            let mut tasks = store.load_tasks()?;

            let index = tasks
                .iter()
                .position(|t| t.id.to_string() == id)
                .ok_or_else(|| TaskError::task_not_found(&id))?;

            let now = Timestamp::now();
            let task = &mut tasks[index];
            task.transition_to(new_status, now);
            Self::refresh_estimate(&config, task, now);

            let updated = task.clone();
            store.save_tasks(&tasks)?;

            Ok(updated)
        })
        .await
        .map_err(|e| TaskError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Changes a task's user-set priority.
    ///
    /// The derived estimate is never touched by this operation.
    pub async fn change_priority(&self, params: &ChangePriority) -> Result<Task> {
        let new_priority = params.validate()?;

        let data_dir = self.data_dir.clone();
        let id = params.id.clone();

        task::spawn_blocking(move || {
            let store = FileStore::new(&data_dir);
            let mut tasks = store.load_tasks()?;

            let index = tasks
                .iter()
                .position(|t| t.id.to_string() == id)
                .ok_or_else(|| TaskError::task_not_found(&id))?;

            let task = &mut tasks[index];
            task.priority = new_priority;
            task.updated_at = Timestamp::now();

            let updated = task.clone();
            store.save_tasks(&tasks)?;

            Ok(updated)
        })
        .await
        .map_err(|e| TaskError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Computes aggregate statistics over the full collection in a
    /// single pass. Never mutates anything.
    pub async fn get_stats(&self) -> Result<TaskStats> {
        let data_dir = self.data_dir.clone();

        task::spawn_blocking(move || {
            let store = FileStore::new(&data_dir);
            let tasks = store.load_tasks()?;
            Ok(TaskStats::collect_at(&tasks, Timestamp::now()))
        })
        .await
        .map_err(|e| TaskError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Recomputes the estimated priority for every task.
    ///
    /// When the auto-priority toggle was off it is turned on and the
    /// config persisted first. Every task's update timestamp is
    /// refreshed even when its estimate did not change. This is the only
    /// operation that mutates many tasks in one call.
    pub async fn estimate_priorities(&self) -> Result<Vec<Task>> {
        let data_dir = self.data_dir.clone();

        task::spawn_blocking(move || {
            let store = FileStore::new(&data_dir);
            let mut config = store.load_config()?;
            let mut tasks = store.load_tasks()?;

            if !config.auto_priority {
                config.auto_priority = true;
                store.save_config(&config)?;
            }

            let now = Timestamp::now();
            for task in &mut tasks {
                task.estimated_priority =
                    Some(estimator::estimate_at(task, now).estimated_priority);
                task.updated_at = now;
            }

            store.save_tasks(&tasks)?;

            Ok(tasks)
        })
        .await
        .map_err(|e| TaskError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
