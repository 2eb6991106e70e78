//! Builder for creating and configuring TaskManager instances.

use std::path::{Path, PathBuf};

use super::TaskManager;
use crate::{
    error::{Result, TaskError},
    store::{find_data_dir, DATA_DIR},
};

/// Builder for creating and configuring TaskManager instances.
#[derive(Debug, Clone)]
pub struct TaskManagerBuilder {
    project_root: Option<PathBuf>,
}

impl TaskManagerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self { project_root: None }
    }

    /// Sets an explicit project root to start discovery from.
    ///
    /// If not specified, discovery starts from the current working
    /// directory.
    pub fn with_project_root<P: AsRef<Path>>(mut self, root: Option<P>) -> Self {
        if let Some(root) = root {
            self.project_root = Some(root.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured manager instance.
    ///
    /// The data directory is located by walking upward from the start
    /// path; when no ancestor carries one, a fresh `.devtask` directly
    /// under the start path is targeted, to be created by `initialize`.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::FileSystem` when no project root was given
    /// and the current working directory cannot be resolved.
    pub fn build(self) -> Result<TaskManager> {
        let start = match self.project_root {
            Some(root) => root,
            None => std::env::current_dir().map_err(|e| TaskError::FileSystem {
                path: PathBuf::from("."),
                source: e,
            })?,
        };

        let data_dir = find_data_dir(&start).unwrap_or_else(|| start.join(DATA_DIR));
        Ok(TaskManager::new(data_dir))
    }
}

impl Default for TaskManagerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
