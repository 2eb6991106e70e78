//! File-backed persistence for the task collection and project config.
//!
//! The store owns the on-disk layout: a hidden `.devtask` directory
//! holding `tasks.json` (the full ordered task collection) and
//! `config.json` (a single project config document). Writes are
//! all-or-nothing: the document is serialized fully in memory, written
//! to a temporary sibling file, synced, and renamed over the target, so
//! a failed write never leaves a partial document behind.
//!
//! A missing task document is a valid, empty store. A missing config
//! document means the project was never initialized. A document that
//! exists but cannot be parsed is always an error, never coerced to an
//! empty collection.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use jiff::Timestamp;
use log::debug;
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    error::{Result, StorageResultExt, TaskError},
    models::{ProjectConfig, Task},
};

pub mod discovery;

pub use discovery::find_data_dir;

/// Name of the hidden data directory marking a project root.
pub const DATA_DIR: &str = ".devtask";

const TASKS_FILE: &str = "tasks.json";
const CONFIG_FILE: &str = "config.json";

/// Temporary file suffix for atomic writes.
const TMP_SUFFIX: &str = ".tmp";

/// File-system backed store for tasks and configuration.
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at the given data directory.
    ///
    /// Nothing is touched on disk until a load or save runs; the
    /// directory itself is created lazily on first write.
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// The data directory this store reads and writes.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn tasks_path(&self) -> PathBuf {
        self.data_dir.join(TASKS_FILE)
    }

    fn config_path(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILE)
    }

    /// Loads the full task collection in stored order.
    ///
    /// A missing document yields an empty collection; a malformed one
    /// fails with `StorageRead`.
    pub fn load_tasks(&self) -> Result<Vec<Task>> {
        let path = self.tasks_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let tasks: Vec<Task> = Self::read_document(&path)?;
        debug!("loaded {} tasks from {}", tasks.len(), path.display());
        Ok(tasks)
    }

    /// Persists the complete collection, fully replacing prior contents.
    pub fn save_tasks(&self, tasks: &[Task]) -> Result<()> {
        let path = self.tasks_path();
        self.write_document(&path, &tasks)?;
        debug!("saved {} tasks to {}", tasks.len(), path.display());
        Ok(())
    }

    /// Loads the project configuration.
    ///
    /// # Errors
    ///
    /// * `TaskError::NotInitialized` - When no config document exists
    /// * `TaskError::StorageRead` - When the document cannot be parsed
    pub fn load_config(&self) -> Result<ProjectConfig> {
        let path = self.config_path();
        if !path.exists() {
            return Err(TaskError::NotInitialized);
        }
        Self::read_document(&path)
    }

    /// Persists the project configuration.
    pub fn save_config(&self, config: &ProjectConfig) -> Result<()> {
        self.write_document(&self.config_path(), config)
    }

    /// Creates the data directory and writes a fresh config with
    /// auto-priority enabled, alongside an empty task collection.
    ///
    /// Callers wanting init to be a no-op on repeat runs should check
    /// [`FileStore::is_initialized`] first.
    pub fn initialize(&self, project_name: &str) -> Result<ProjectConfig> {
        let config = ProjectConfig::new(project_name, Timestamp::now());
        self.save_config(&config)?;
        self.save_tasks(&[])?;
        debug!("initialized project '{project_name}' at {}", self.data_dir.display());
        Ok(config)
    }

    /// Whether a config document exists for this data directory.
    pub fn is_initialized(&self) -> bool {
        self.config_path().exists()
    }

    fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
        let contents = fs::read_to_string(path).read_context(path)?;
        serde_json::from_str(&contents).read_context(path)
    }

    /// Serializes the value fully in memory, writes it to a temporary
    /// sibling file, syncs, and renames over the target.
    fn write_document<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        self.ensure_data_dir()?;

        let json = serde_json::to_string_pretty(value).write_context(path)?;

        let tmp_path = Self::tmp_path(path);
        let mut tmp_file = File::create(&tmp_path).write_context(&tmp_path)?;
        tmp_file.write_all(json.as_bytes()).write_context(&tmp_path)?;
        tmp_file.sync_all().write_context(&tmp_path)?;

        fs::rename(&tmp_path, path).write_context(path)
    }

    fn ensure_data_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.data_dir).map_err(|e| TaskError::FileSystem {
            path: self.data_dir.clone(),
            source: e,
        })
    }

    fn tmp_path(path: &Path) -> PathBuf {
        let mut name = path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(TMP_SUFFIX);
        path.with_file_name(name)
    }
}
