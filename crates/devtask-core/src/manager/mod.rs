//! High-level task lifecycle manager.
//!
//! This module provides the main [`TaskManager`] interface, the sole
//! mutator of task state. Every operation performs one full
//! load → mutate → save cycle against the [`crate::store::FileStore`];
//! no task objects are cached across calls.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │     Store       │
//! │  (handlers.rs)  │───▶│ (task_ops,      │───▶│  (via store/)   │
//! │                 │    │  query_ops)     │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!     Display types       Business logic        Data persistence
//! ```
//!
//! The store performs synchronous blocking I/O; the operations wrap each
//! cycle in [`tokio::task::spawn_blocking`] so callers get an async
//! surface without the engine needing any in-process coordination.
//!
//! The project-level `auto_priority` toggle acts as an observer over
//! task mutations: after every mutation that can change scoring inputs,
//! the manager invokes [`TaskManager::refresh_estimate`], which
//! recomputes the derived estimate only while the toggle is on.

use std::path::PathBuf;

use jiff::Timestamp;
use tokio::task;

pub mod builder;
pub mod handlers;
pub mod query_ops;
pub mod task_ops;


pub use builder::TaskManagerBuilder;

use crate::{
    error::{Result, TaskError},
    estimator,
    models::{ProjectConfig, Task},
    store::FileStore,
};

/// Main interface for managing the task collection.
pub struct TaskManager {
    pub(crate) data_dir: PathBuf,
}

impl TaskManager {
    /// Creates a new manager bound to the given data directory.
    pub(crate) fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Initializes the project: creates the data directory, a fresh
    /// config with auto-priority enabled, and an empty task collection.
    pub async fn initialize(&self, project_name: &str) -> Result<ProjectConfig> {
        let data_dir = self.data_dir.clone();
        let project_name = project_name.to_string();

        task::spawn_blocking(move || FileStore::new(&data_dir).initialize(&project_name))
            .await
            .map_err(|e| TaskError::Configuration {
                message: format!("Task join error: {e}"),
            })?
    }

    /// Whether a config document exists for this project.
    pub fn is_initialized(&self) -> bool {
        FileStore::new(&self.data_dir).is_initialized()
    }

    /// Post-mutation hook keeping `estimated_priority` consistent with
    /// the project's `auto_priority` toggle.
    pub(crate) fn refresh_estimate(config: &ProjectConfig, task: &mut Task, now: Timestamp) {
        if config.auto_priority {
            task.estimated_priority = Some(estimator::estimate_at(task, now).estimated_priority);
        }
    }
}
