//! Command handlers bridging parsed arguments to the core manager.
//!
//! The handlers own the front-end responsibilities the engine leaves to
//! its callers: resolving partial task ids against the full collection,
//! mapping the `--yes` flag onto the confirmed-deletion guard, and
//! rendering the markdown the core produces.

use anyhow::{bail, Result};
use devtask_core::{
    params::{DeleteTask, Id, ListTasks, UpdateTask},
    OperationStatus, Task, TaskManager,
};
use log::info;

use crate::args::{
    AddTaskArgs, ChangePriorityArgs, ChangeStatusArgs, Commands, DeleteTaskArgs, EditTaskArgs,
    InitArgs, ListTasksArgs, ShowTaskArgs,
};
use crate::renderer::TerminalRenderer;

/// Command dispatcher holding the manager and renderer.
pub struct Cli {
    manager: TaskManager,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Create a new CLI handler.
    pub fn new(manager: TaskManager, renderer: TerminalRenderer) -> Self {
        Self { manager, renderer }
    }

    /// Dispatch a parsed command.
    pub async fn handle_command(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Init(args) => self.init(args).await,
            Commands::Add(args) => self.add_task(args).await,
            Commands::List(args) => self.list_tasks(args).await,
            Commands::Show(args) => self.show_task(args).await,
            Commands::Edit(args) => self.edit_task(args).await,
            Commands::Status(args) => self.change_status(args).await,
            Commands::Priority(args) => self.change_priority(args).await,
            Commands::Delete(args) => self.delete_task(args).await,
            Commands::Stats => self.stats().await,
            Commands::Estimate => self.estimate().await,
        }
    }

    async fn init(&self, args: InitArgs) -> Result<()> {
        if self.manager.is_initialized() {
            self.renderer
                .render("Already initialized as a Devtask project.\n")?;
            return Ok(());
        }

        let config = self.manager.initialize(&args.name).await?;
        info!("initialized project '{}'", config.project_name);
        self.renderer.render(&format!(
            "{}",
            OperationStatus::success(format!(
                "Initialized Devtask project: {}",
                config.project_name
            ))
        ))
    }

    async fn add_task(&self, args: AddTaskArgs) -> Result<()> {
        let result = self.manager.create_task_result(&args.into()).await?;
        self.renderer.render(&result.to_string())
    }

    async fn list_tasks(&self, args: ListTasksArgs) -> Result<()> {
        let params: ListTasks = args.into();
        let tasks = self.manager.list_tasks(&params).await?;
        self.renderer.render(&tasks.to_string())?;
        if !tasks.is_empty() {
            self.renderer.render(&format!("Total: {}\n", tasks.len()))?;
        }
        Ok(())
    }

    async fn show_task(&self, args: ShowTaskArgs) -> Result<()> {
        let task = self.resolve_task(&args.id).await?;
        self.renderer.render(&task.to_string())
    }

    async fn edit_task(&self, args: EditTaskArgs) -> Result<()> {
        let mut params: UpdateTask = args.into();
        if params.is_empty() {
            bail!(
                "No changes specified. Pass at least one of --title, --description, \
                 --priority, or --due."
            );
        }

        let task = self.resolve_task(&params.id).await?;
        params.id = task.id.to_string();

        let result = self.manager.update_task_result(&params).await?;
        self.renderer.render(&result.to_string())
    }

    async fn change_status(&self, args: ChangeStatusArgs) -> Result<()> {
        let task = self.resolve_task(&args.id).await?;
        let old_status = task.status;

        let mut params: devtask_core::params::ChangeStatus = args.into();
        params.id = task.id.to_string();
        let updated = self.manager.change_status(&params).await?;

        self.renderer.render(&format!(
            "{}",
            OperationStatus::success(format!(
                "Status changed: {old_status} to {}",
                updated.status
            ))
        ))?;
        if let Some(estimated) = updated.estimated_priority {
            self.renderer
                .render(&format!("Estimated priority updated: {estimated}\n"))?;
        }
        Ok(())
    }

    async fn change_priority(&self, args: ChangePriorityArgs) -> Result<()> {
        let task = self.resolve_task(&args.id).await?;

        let mut params: devtask_core::params::ChangePriority = args.into();
        params.id = task.id.to_string();
        let updated = self.manager.change_priority(&params).await?;

        self.renderer.render(&format!(
            "{}",
            OperationStatus::success(format!("Priority changed to {}", updated.priority))
        ))
    }

    async fn delete_task(&self, args: DeleteTaskArgs) -> Result<()> {
        let task = self.resolve_task(&args.id).await?;

        let params = DeleteTask {
            id: task.id.to_string(),
            confirmed: args.yes,
        };
        let result = self.manager.delete_task(&params).await?;
        self.renderer.render(&result.to_string())
    }

    async fn stats(&self) -> Result<()> {
        let stats = self.manager.get_stats().await?;
        self.renderer.render(&stats.to_string())
    }

    async fn estimate(&self) -> Result<()> {
        let tasks = self.manager.estimate_priorities_result().await?;
        self.renderer.render(&format!(
            "{}",
            OperationStatus::success(format!(
                "Re-estimated priorities for {} tasks",
                tasks.len()
            ))
        ))?;
        self.renderer.render(&tasks.to_string())
    }

    /// Resolves a full or partial task id to a concrete task.
    ///
    /// An exact id match wins; otherwise the prefix must identify
    /// exactly one task.
    async fn resolve_task(&self, id_or_prefix: &str) -> Result<Task> {
        if let Some(task) = self
            .manager
            .show_task(&Id {
                id: id_or_prefix.to_string(),
            })
            .await?
        {
            return Ok(task);
        }

        let tasks = self.manager.get_tasks(None).await?;
        let mut matches = tasks
            .into_iter()
            .filter(|t| t.id.to_string().starts_with(id_or_prefix));

        match (matches.next(), matches.next()) {
            (Some(task), None) => Ok(task),
            (Some(_), Some(_)) => bail!(
                "Task id prefix '{id_or_prefix}' is ambiguous; use more characters"
            ),
            (None, _) => bail!("Task not found: {id_or_prefix}"),
        }
    }
}
