//! Core library for the Devtask task tracking engine.
//!
//! This crate provides the business logic for a local, file-persisted
//! task tracker: the data model and validation, the persistence store,
//! the priority estimator, and the task lifecycle manager. Presentation
//! concerns (argument parsing, terminal rendering) live in the CLI
//! crate; the engine only produces markdown via `Display`
//! implementations and wrapper types in [`display`].
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use devtask_core::{params::CreateTask, TaskManagerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a manager; discovery walks upward from the project root
//! let manager = TaskManagerBuilder::new()
//!     .with_project_root(Some("/home/user/project"))
//!     .build()?;
//!
//! // One-time project setup
//! let config = manager.initialize("My Project").await?;
//! println!("Initialized: {}", config.project_name);
//!
//! // Create a task
//! let params = CreateTask {
//!     title: "Write the release notes".to_string(),
//!     ..Default::default()
//! };
//! let task = manager.create_task(&params).await?;
//! println!("Created task: {}", task.id);
//!
//! // List everything
//! let tasks = manager.get_tasks(None).await?;
//! for task in &tasks {
//!     println!("{}: {}", task.short_id(), task.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod error;
pub mod estimator;
pub mod manager;
pub mod models;
pub mod params;
pub mod store;

// Re-export commonly used types
pub use display::{CreateResult, DeleteResult, DueDate, LocalDateTime, OperationStatus, Tasks, UpdateResult};
pub use error::{Result, TaskError};
pub use estimator::{estimate, estimate_at};
pub use manager::{TaskManager, TaskManagerBuilder};
pub use models::{
    PriorityScore, ProjectConfig, StatusChange, Task, TaskFilter, TaskPriority, TaskStats,
    TaskStatus,
};
pub use params::{
    ChangePriority, ChangeStatus, CreateTask, DeleteTask, Id, ListTasks, UpdateTask,
};
pub use store::{find_data_dir, FileStore};
