//! Command-line argument definitions using clap
//!
//! This module implements the CLI side of the parameter wrapper
//! pattern: each command defines a clap argument struct that converts
//! into the matching core parameter type via `From`, keeping the core
//! free of CLI framework concerns.
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Business Logic
//! ```

use std::fmt;
use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use devtask_core::{
    params::{ChangePriority, ChangeStatus, CreateTask, ListTasks, UpdateTask},
    TaskPriority,
};
use jiff::civil::Date;

fn parse_date(s: &str) -> Result<Date, String> {
    s.parse::<Date>()
        .map_err(|e| format!("invalid date '{s}' (expected YYYY-MM-DD): {e}"))
}

/// Main command-line interface for the Devtask task management tool
///
/// Devtask is a local, file-persisted task tracker. Tasks live in a
/// hidden `.devtask` directory at the project root, discovered by
/// walking upward from the current working directory, so any
/// subdirectory of a project works as a starting point.
#[derive(Parser)]
#[command(version, about, name = "devtask")]
pub struct Args {
    /// Project root to operate on. Defaults to discovering a .devtask
    /// directory upward from the current working directory
    #[arg(long, global = true)]
    pub project_root: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Devtask CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new Devtask project
    Init(InitArgs),
    /// Add a new task
    #[command(alias = "a")]
    Add(AddTaskArgs),
    /// List tasks, with optional filters
    #[command(aliases = ["l", "ls"])]
    List(ListTasksArgs),
    /// Show details of a single task
    #[command(alias = "s")]
    Show(ShowTaskArgs),
    /// Edit a task's fields
    #[command(alias = "e")]
    Edit(EditTaskArgs),
    /// Change a task's status
    Status(ChangeStatusArgs),
    /// Change a task's priority
    Priority(ChangePriorityArgs),
    /// Delete a task permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteTaskArgs),
    /// Show task statistics
    Stats,
    /// Recompute estimated priorities for every task
    Estimate,
}

/// Initialize a new Devtask project
///
/// Creates the `.devtask` data directory with a fresh configuration and
/// an empty task collection. Running init inside an already initialized
/// project is a no-op with a warning.
#[derive(ClapArgs)]
pub struct InitArgs {
    /// Name of the project
    #[arg(default_value = "My Project")]
    pub name: String,
}

/// Add a new task
#[derive(ClapArgs)]
pub struct AddTaskArgs {
    /// Title of the task (1-200 characters)
    pub title: String,
    /// Optional description providing more context about the task
    #[arg(short, long)]
    pub description: Option<String>,
    /// Priority for the task; defaults to medium
    #[arg(short, long)]
    pub priority: Option<PriorityArg>,
    /// Due date in YYYY-MM-DD form
    #[arg(long = "due", value_parser = parse_date)]
    pub due_date: Option<Date>,
}

impl From<AddTaskArgs> for CreateTask {
    fn from(val: AddTaskArgs) -> Self {
        CreateTask {
            title: val.title,
            description: val.description,
            priority: val.priority.map(Into::into),
            due_date: val.due_date,
        }
    }
}

/// List tasks
///
/// Filters compose conjunctively: a task must match every filter that
/// is present. Without filters the whole collection is shown in its
/// stored order.
#[derive(ClapArgs)]
pub struct ListTasksArgs {
    /// Filter by status
    #[arg(short, long)]
    pub status: Option<StatusArg>,
    /// Filter by priority
    #[arg(short, long)]
    pub priority: Option<PriorityArg>,
    /// Case-insensitive keyword search over title and description
    #[arg(long)]
    pub search: Option<String>,
}

impl From<ListTasksArgs> for ListTasks {
    fn from(val: ListTasksArgs) -> Self {
        ListTasks {
            status: val.status.map(|s| s.to_string()),
            priority: val.priority.map(|p| p.to_string()),
            search: val.search,
        }
    }
}

/// Show details of a specific task
#[derive(ClapArgs)]
pub struct ShowTaskArgs {
    /// Full task ID, or a unique prefix of one
    pub id: String,
}

/// Edit a task's fields
///
/// Only the fields passed as flags are touched; everything else keeps
/// its value. Status changes go through `devtask status` instead so
/// the status history stays complete.
#[derive(ClapArgs)]
pub struct EditTaskArgs {
    /// Full task ID, or a unique prefix of one
    pub id: String,
    /// New title for the task
    #[arg(long)]
    pub title: Option<String>,
    /// New description for the task
    #[arg(short, long)]
    pub description: Option<String>,
    /// New priority for the task
    #[arg(short, long)]
    pub priority: Option<PriorityArg>,
    /// New due date in YYYY-MM-DD form
    #[arg(long = "due", value_parser = parse_date)]
    pub due_date: Option<Date>,
}

impl From<EditTaskArgs> for UpdateTask {
    fn from(val: EditTaskArgs) -> Self {
        UpdateTask {
            id: val.id,
            title: val.title,
            description: val.description,
            priority: val.priority.map(Into::into),
            due_date: val.due_date,
        }
    }
}

/// Change a task's status
#[derive(ClapArgs)]
pub struct ChangeStatusArgs {
    /// Full task ID, or a unique prefix of one
    pub id: String,
    /// New status for the task
    pub status: StatusArg,
}

impl From<ChangeStatusArgs> for ChangeStatus {
    fn from(val: ChangeStatusArgs) -> Self {
        ChangeStatus {
            id: val.id,
            status: val.status.to_string(),
        }
    }
}

/// Change a task's priority
#[derive(ClapArgs)]
pub struct ChangePriorityArgs {
    /// Full task ID, or a unique prefix of one
    pub id: String,
    /// New priority for the task
    pub priority: PriorityArg,
}

impl From<ChangePriorityArgs> for ChangePriority {
    fn from(val: ChangePriorityArgs) -> Self {
        ChangePriority {
            id: val.id,
            priority: val.priority.to_string(),
        }
    }
}

/// Delete a task permanently
#[derive(ClapArgs)]
pub struct DeleteTaskArgs {
    /// Full task ID, or a unique prefix of one
    pub id: String,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub yes: bool,
}

/// Command-line argument representation of task status values
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum StatusArg {
    /// Mark task as todo
    Todo,
    /// Mark task as in progress
    InProgress,
    /// Mark task as done
    Done,
}

impl fmt::Display for StatusArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusArg::Todo => write!(f, "todo"),
            StatusArg::InProgress => write!(f, "in-progress"),
            StatusArg::Done => write!(f, "done"),
        }
    }
}

/// Command-line argument representation of task priority values
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum PriorityArg {
    /// Urgent work
    High,
    /// Normal work
    Medium,
    /// Work that can wait
    Low,
}

impl fmt::Display for PriorityArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriorityArg::High => write!(f, "high"),
            PriorityArg::Medium => write!(f, "medium"),
            PriorityArg::Low => write!(f, "low"),
        }
    }
}

impl From<PriorityArg> for TaskPriority {
    fn from(val: PriorityArg) -> Self {
        match val {
            PriorityArg::High => TaskPriority::High,
            PriorityArg::Medium => TaskPriority::Medium,
            PriorityArg::Low => TaskPriority::Low,
        }
    }
}
