use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary project root for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command bound to the given project root
fn devtask_cmd(root: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("devtask").expect("Failed to find devtask binary");
    cmd.args([
        "--no-color",
        "--project-root",
        root.path().to_str().unwrap(),
    ]);
    cmd
}

fn init_project(root: &TempDir) {
    devtask_cmd(root)
        .args(["init", "Test Project"])
        .assert()
        .success();
}

/// Extract the full task id from `add` output
fn add_task(root: &TempDir, title: &str) -> String {
    let output = devtask_cmd(root)
        .args(["add", title])
        .output()
        .expect("Failed to run add");
    assert!(output.status.success(), "add failed: {output:?}");

    let stdout = String::from_utf8(output.stdout).expect("stdout is utf-8");
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("Created task with ID: "))
        .expect("add output should name the new id")
        .trim()
        .to_string()
}

#[test]
fn test_cli_init_success() {
    let root = create_cli_test_environment();

    devtask_cmd(&root)
        .args(["init", "Test Project"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Initialized Devtask project: Test Project",
        ));
}

#[test]
fn test_cli_init_twice_warns() {
    let root = create_cli_test_environment();
    init_project(&root);

    devtask_cmd(&root)
        .args(["init", "Another Name"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Already initialized"));
}

#[test]
fn test_cli_add_task_success() {
    let root = create_cli_test_environment();
    init_project(&root);

    devtask_cmd(&root)
        .args(["add", "Write docs", "--description", "Cover the store"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created task with ID:"))
        .stdout(predicate::str::contains("Write docs"))
        .stdout(predicate::str::contains("Cover the store"));
}

#[test]
fn test_cli_add_without_init_fails() {
    let root = create_cli_test_environment();

    devtask_cmd(&root)
        .args(["add", "Too early"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a Devtask project"));
}

#[test]
fn test_cli_add_rejects_overlong_title() {
    let root = create_cli_test_environment();
    init_project(&root);

    let title = "x".repeat(201);
    devtask_cmd(&root)
        .args(["add", title.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("200 characters or less"));
}

#[test]
fn test_cli_list_empty() {
    let root = create_cli_test_environment();
    init_project(&root);

    devtask_cmd(&root)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks found."));
}

#[test]
fn test_cli_list_shows_tasks_and_total() {
    let root = create_cli_test_environment();
    init_project(&root);
    add_task(&root, "First task");
    add_task(&root, "Second task");

    devtask_cmd(&root)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("First task"))
        .stdout(predicate::str::contains("Second task"))
        .stdout(predicate::str::contains("Total: 2"));
}

#[test]
fn test_cli_list_filters_by_status() {
    let root = create_cli_test_environment();
    init_project(&root);
    let id = add_task(&root, "Active work");
    add_task(&root, "Waiting work");

    devtask_cmd(&root)
        .args(["status", id.as_str(), "in-progress"])
        .assert()
        .success();

    devtask_cmd(&root)
        .args(["list", "--status", "in-progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Active work"))
        .stdout(predicate::str::contains("Waiting work").not());
}

#[test]
fn test_cli_show_accepts_id_prefix() {
    let root = create_cli_test_environment();
    init_project(&root);
    let id = add_task(&root, "Find me");

    devtask_cmd(&root)
        .args(["show", &id[..8]])
        .assert()
        .success()
        .stdout(predicate::str::contains("Find me"))
        .stdout(predicate::str::contains(id.as_str()));
}

#[test]
fn test_cli_show_unknown_id_fails() {
    let root = create_cli_test_environment();
    init_project(&root);

    devtask_cmd(&root)
        .args(["show", "deadbeef"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Task not found: deadbeef"));
}

#[test]
fn test_cli_status_change_reports_transition() {
    let root = create_cli_test_environment();
    init_project(&root);
    let id = add_task(&root, "Move me");

    devtask_cmd(&root)
        .args(["status", id.as_str(), "done"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status changed: todo to done"));
}

#[test]
fn test_cli_status_rejects_bad_value() {
    let root = create_cli_test_environment();
    init_project(&root);
    let id = add_task(&root, "Stable");

    devtask_cmd(&root)
        .args(["status", id.as_str(), "paused"])
        .assert()
        .failure();
}

#[test]
fn test_cli_priority_change() {
    let root = create_cli_test_environment();
    init_project(&root);
    let id = add_task(&root, "Bump me");

    devtask_cmd(&root)
        .args(["priority", id.as_str(), "high"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Priority changed to high"));
}

#[test]
fn test_cli_edit_updates_fields() {
    let root = create_cli_test_environment();
    init_project(&root);
    let id = add_task(&root, "Old title");

    devtask_cmd(&root)
        .args(["edit", id.as_str(), "--title", "New title", "--priority", "low"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated task with ID:"))
        .stdout(predicate::str::contains("Updated title"))
        .stdout(predicate::str::contains("New title"));
}

#[test]
fn test_cli_edit_without_changes_fails() {
    let root = create_cli_test_environment();
    init_project(&root);
    let id = add_task(&root, "Unchanged");

    devtask_cmd(&root)
        .args(["edit", id.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No changes specified"));
}

#[test]
fn test_cli_delete_requires_yes() {
    let root = create_cli_test_environment();
    init_project(&root);
    let id = add_task(&root, "Protected");

    devtask_cmd(&root)
        .args(["delete", id.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("confirmation"));

    // The task survives the refused deletion.
    devtask_cmd(&root)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Protected"));
}

#[test]
fn test_cli_delete_with_yes() {
    let root = create_cli_test_environment();
    init_project(&root);
    let id = add_task(&root, "Doomed");

    devtask_cmd(&root)
        .args(["delete", id.as_str(), "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted task 'Doomed'"));

    devtask_cmd(&root)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks found."));
}

#[test]
fn test_cli_stats_empty_project() {
    let root = create_cli_test_environment();
    init_project(&root);

    devtask_cmd(&root)
        .args(["stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 0"))
        .stdout(predicate::str::contains("Overdue: 0"));
}

#[test]
fn test_cli_estimate_reports_count() {
    let root = create_cli_test_environment();
    init_project(&root);
    add_task(&root, "One");
    add_task(&root, "Two");

    devtask_cmd(&root)
        .args(["estimate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Re-estimated priorities for 2 tasks"));
}

#[test]
fn test_cli_discovers_project_from_subdirectory() {
    let root = create_cli_test_environment();
    init_project(&root);
    add_task(&root, "Visible from below");

    let nested = root.path().join("src").join("deep");
    std::fs::create_dir_all(&nested).expect("create nested dirs");

    let mut cmd = Command::cargo_bin("devtask").expect("Failed to find devtask binary");
    cmd.args([
        "--no-color",
        "--project-root",
        nested.to_str().unwrap(),
        "list",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Visible from below"));
}
