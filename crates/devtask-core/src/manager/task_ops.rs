//! Task CRUD operations for the TaskManager.

use jiff::Timestamp;
use tokio::task;
use uuid::Uuid;

use super::TaskManager;
use crate::{
    error::{Result, TaskError},
    models::{Task, TaskFilter, TaskStatus},
    params::{CreateTask, Id, UpdateTask},
    store::FileStore,
};

impl TaskManager {
    /// Creates a new task with a fresh unique id, `todo` status, empty
    /// status history, and creation/update timestamps set to now. The
    /// priority defaults to medium when unspecified. When the project's
    /// auto-priority toggle is on, the estimate is computed immediately.
    ///
    /// Requires an initialized project; validation failures surface
    /// before anything is persisted.
    pub async fn create_task(&self, params: &CreateTask) -> Result<Task> {
        params.validate()?;

        let data_dir = self.data_dir.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let store = FileStore::new(&data_dir);
            let config = store.load_config()?;
            let mut tasks = store.load_tasks()?;

            let now = Timestamp::now();
            let mut task = Task {
                id: Uuid::new_v4(),
                title: params.title,
                description: params.description,
                status: TaskStatus::Todo,
                priority: params.priority.unwrap_or_default(),
                estimated_priority: None,
                due_date: params.due_date,
                created_at: now,
                updated_at: now,
                status_history: Vec::new(),
            };
            Self::refresh_estimate(&config, &mut task, now);

            tasks.push(task.clone());
            store.save_tasks(&tasks)?;

            Ok(task)
        })
        .await
        .map_err(|e| TaskError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists tasks with optional filtering.
    ///
    /// Filters compose conjunctively; with no filter the full collection
    /// is returned unmodified in its stored order.
    pub async fn get_tasks(&self, filter: Option<TaskFilter>) -> Result<Vec<Task>> {
        let data_dir = self.data_dir.clone();

        task::spawn_blocking(move || {
            let store = FileStore::new(&data_dir);
            let tasks = store.load_tasks()?;

            Ok(match filter {
                Some(filter) if !filter.is_empty() => {
                    tasks.into_iter().filter(|t| filter.matches(t)).collect()
                }
                _ => tasks,
            })
        })
        .await
        .map_err(|e| TaskError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a task by its full ID.
    ///
    /// Absence is not an error at this layer; callers decide how to
    /// react to `None`.
    pub async fn get_task(&self, params: &Id) -> Result<Option<Task>> {
        let data_dir = self.data_dir.clone();
        let id = params.id.clone();

        task::spawn_blocking(move || {
            let store = FileStore::new(&data_dir);
            let tasks = store.load_tasks()?;
            Ok(tasks.into_iter().find(|t| t.id.to_string() == id))
        })
        .await
        .map_err(|e| TaskError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Applies a partial update to an existing task.
    ///
    /// Touched title/description values are revalidated; untouched
    /// fields keep their values. The update timestamp is refreshed and
    /// the estimate recomputed when auto-priority is on.
    pub async fn update_task(&self, params: &UpdateTask) -> Result<Task> {
        params.validate()?;

        let data_dir = self.data_dir.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let store = FileStore::new(&data_dir);
            let config = store.load_config()?;
            let mut tasks = store.load_tasks()?;

            let index = tasks
                .iter()
                .position(|t| t.id.to_string() == params.id)
                .ok_or_else(|| TaskError::task_not_found(&params.id))?;

            let now = Timestamp::now();
            let task = &mut tasks[index];
            if let Some(title) = params.title {
                task.title = title;
            }
            if let Some(description) = params.description {
                task.description = Some(description);
            }
            if let Some(priority) = params.priority {
                task.priority = priority;
            }
            if let Some(due_date) = params.due_date {
                task.due_date = Some(due_date);
            }
            task.updated_at = now;
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

    /// Removes a task from the collection and persists the remainder.
    pub async fn delete_task_by_id(&self, params: &Id) -> Result<Task> {
        let data_dir = self.data_dir.clone();
        let id = params.id.clone();

        task::spawn_blocking(move || {
            let store = FileStore::new(&data_dir);
            let mut tasks = store.load_tasks()?;

            let index = tasks
                .iter()
                .position(|t| t.id.to_string() == id)
                .ok_or_else(|| TaskError::task_not_found(&id))?;

            let removed = tasks.remove(index);
            store.save_tasks(&tasks)?;

            Ok(removed)
        })
        .await
        .map_err(|e| TaskError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
