//! Handler operations that return formatted wrapper types for the TaskManager.

use super::TaskManager;
use crate::{
    display::{CreateResult, DeleteResult, Tasks, UpdateResult},
    error::{Result, TaskError},
    models::Task,
    params::{CreateTask, DeleteTask, Id, ListTasks, UpdateTask},
};

impl TaskManager {
    /// Handle creating a task, wrapped for display.
    pub async fn create_task_result(&self, params: &CreateTask) -> Result<CreateResult<Task>> {
        Ok(CreateResult::new(self.create_task(params).await?))
    }

    /// Handle listing tasks with raw filter values.
    ///
    /// Parses the filter strings, then queries; an empty filter returns
    /// the full collection in stored order.
    pub async fn list_tasks(&self, params: &ListTasks) -> Result<Tasks> {
        let filter = params.validate()?;
        let filter = if filter.is_empty() { None } else { Some(filter) };
        Ok(Tasks(self.get_tasks(filter).await?))
    }

    /// Handle showing a single task by its full ID.
    pub async fn show_task(&self, params: &Id) -> Result<Option<Task>> {
        self.get_task(params).await
    }

    /// Handle updating a task, reporting which fields changed.
    pub async fn update_task_result(&self, params: &UpdateTask) -> Result<UpdateResult<Task>> {
        let mut changes = Vec::new();
        if params.title.is_some() {
            changes.push("Updated title".to_string());
        }
        if params.description.is_some() {
            changes.push("Updated description".to_string());
        }
        if let Some(priority) = params.priority {
            changes.push(format!("Changed priority to {priority}"));
        }
        if let Some(due_date) = params.due_date {
            changes.push(format!("Changed due date to {due_date}"));
        }

        let task = self.update_task(params).await?;
        Ok(UpdateResult::with_changes(task, changes))
    }

    /// Handle permanently deleting a task.
    ///
    /// Requires explicit confirmation via the `confirmed` field to
    /// prevent accidental deletion; front ends map their own
    /// confirmation affordance (a `--yes` flag, a dialog) onto it.
    pub async fn delete_task(&self, params: &DeleteTask) -> Result<DeleteResult<Task>> {
        if !params.confirmed {
            return Err(TaskError::validation("confirmed").with_reason(
                "Task deletion requires explicit confirmation. Confirm to proceed with permanent deletion.",
            ));
        }

        let id = Id {
            id: params.id.clone(),
        };
        let task = self.delete_task_by_id(&id).await?;
        Ok(DeleteResult::new(task))
    }

    /// Handle bulk re-estimation, wrapped for display.
    pub async fn estimate_priorities_result(&self) -> Result<Tasks> {
        Ok(Tasks(self.estimate_priorities().await?))
    }
}
