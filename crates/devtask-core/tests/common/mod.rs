use devtask_core::{TaskManager, TaskManagerBuilder};
use tempfile::TempDir;

/// Helper function to create an initialized test manager
pub async fn create_test_manager() -> (TempDir, TaskManager) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let manager = TaskManagerBuilder::new()
        .with_project_root(Some(temp_dir.path()))
        .build()
        .expect("Failed to build manager");
    manager
        .initialize("Test Project")
        .await
        .expect("Failed to initialize project");
    (temp_dir, manager)
}
