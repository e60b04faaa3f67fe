//! High-level task management interface
//!
//! This module provides the [`TaskManager`] which serves as the primary interface
//! for all devtask operations. It resolves the workspace root, loads the optional
//! task file on top of the built-in tasks, and runs tasks with the task environment.
//!
//! ## Example
//!
//! ```rust,no_run
//! use devtask_core::task_manager::{TaskManager, TaskManagerConfig};
//! use std::path::PathBuf;
//!
//! # fn example() -> devtask_core::types::TaskResult<()> {
//! let manager = TaskManager::new(TaskManagerConfig {
//!     workspace_root: PathBuf::from("."),
//!     task_file: None,
//! })?;
//!
//! // Show what would run
//! let plan = manager.get_execution_plan(&["goget"])?;
//!
//! // Run it
//! manager.run_tasks(&["build_dev", "run_dev"])?;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::configs::tasks::{load_tasks_file, TASKS_FILE_NAME};
use crate::environment::TaskEnvironment;
use crate::execution::{ProcessSpawner, SystemSpawner, TaskRunner, TaskRunnerConfig};
use crate::results::{TaskInfo, TaskListResult, TaskRunResult};
use crate::task_execution::{resolve_task_execution_plan, TaskExecutionPlan};
use crate::tasks::TaskRegistry;
use crate::types::{TaskError, TaskResult};

/// High-level manager owning the registry and the task environment
pub struct TaskManager {
    pub root: PathBuf,
    pub registry: TaskRegistry,
    pub env: TaskEnvironment,
    pub task_file: Option<PathBuf>,
}

/// Configuration for initializing a task manager
pub struct TaskManagerConfig {
    pub workspace_root: PathBuf,
    /// Explicit task file; when unset, `devtask.yml` at the root is used if present
    pub task_file: Option<PathBuf>,
}

impl TaskManager {
    /// Initialize a new task manager from the given workspace root
    pub fn new(config: TaskManagerConfig) -> TaskResult<Self> {
        let root = Self::resolve_root(&config.workspace_root)?;
        let env = TaskEnvironment::standard();

        let mut registry = TaskRegistry::builtin();
        let task_file = Self::locate_task_file(&root, config.task_file)?;
        if let Some(path) = &task_file {
            let file_config = load_tasks_file(path)?;
            registry.merge_file_config(&file_config)?;
            info!(path = %path.display(), tasks = file_config.tasks.len(), "loaded task file");
        }

        debug!(root = %root.display(), tasks = registry.len(), "task manager ready");
        Ok(Self {
            root,
            registry,
            env,
            task_file,
        })
    }

    /// List all registered tasks, sorted by name
    pub fn list_tasks(&self) -> TaskListResult {
        TaskListResult {
            tasks: self.registry.iter().map(TaskInfo::from).collect(),
            task_file: self.task_file.clone(),
        }
    }

    /// Resolve the tasks that would run, without spawning anything
    pub fn get_execution_plan<S: AsRef<str>>(
        &self,
        task_names: &[S],
    ) -> TaskResult<TaskExecutionPlan> {
        resolve_task_execution_plan(&self.registry, task_names)
    }

    /// Run the named tasks as real child processes
    pub fn run_tasks<S: AsRef<str>>(&self, task_names: &[S]) -> TaskResult<TaskRunResult> {
        self.run_tasks_with(&SystemSpawner, task_names)
    }

    /// Run the named tasks through the given spawner
    pub fn run_tasks_with<S: AsRef<str>>(
        &self,
        spawner: &dyn ProcessSpawner,
        task_names: &[S],
    ) -> TaskResult<TaskRunResult> {
        let runner = TaskRunner::new(
            &self.registry,
            spawner,
            TaskRunnerConfig {
                working_dir: self.root.clone(),
                env: self.env.clone(),
            },
        );
        runner.run_tasks(task_names)
    }

    // Private helper methods

    fn resolve_root(workspace_root: &Path) -> TaskResult<PathBuf> {
        let root = std::fs::canonicalize(workspace_root).map_err(|e| {
            TaskError::Config(format!(
                "Failed to resolve workspace root {}: {}",
                workspace_root.display(),
                e
            ))
        })?;

        if !root.is_dir() {
            return Err(TaskError::Config(format!(
                "Workspace root {} is not a directory",
                root.display()
            )));
        }
        Ok(root)
    }

    fn locate_task_file(root: &Path, explicit: Option<PathBuf>) -> TaskResult<Option<PathBuf>> {
        match explicit {
            Some(path) => {
                let path = if path.is_relative() { root.join(path) } else { path };
                if !path.is_file() {
                    return Err(TaskError::Config(format!(
                        "Task file {} not found",
                        path.display()
                    )));
                }
                Ok(Some(path))
            }
            None => {
                let default_path = root.join(TASKS_FILE_NAME);
                Ok(default_path.is_file().then_some(default_path))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::TaskSource;

    fn manager_in(root: &Path) -> TaskResult<TaskManager> {
        TaskManager::new(TaskManagerConfig {
            workspace_root: root.to_path_buf(),
            task_file: None,
        })
    }

    #[test]
    fn test_builtins_without_task_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let manager = manager_in(temp_dir.path()).unwrap();

        assert!(manager.task_file.is_none());
        assert!(manager.root.is_absolute());
        let names: Vec<_> = manager.list_tasks().tasks.into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["build_dev", "goget", "run_dev"]);
    }

    #[test]
    fn test_default_task_file_is_merged() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(
            temp_dir.path().join(TASKS_FILE_NAME),
            "tasks:\n  - name: vet\n    description: runs go vet\n    command: go vet ./...\n",
        )
        .unwrap();

        let manager = manager_in(temp_dir.path()).unwrap();
        let listed = manager.list_tasks();

        assert!(listed.task_file.is_some());
        let vet = listed.tasks.iter().find(|t| t.name == "vet").unwrap();
        assert_eq!(vet.source, TaskSource::TaskFile);
        assert_eq!(listed.tasks.len(), 4);
    }

    #[test]
    fn test_explicit_task_file_relative_to_root() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(
            temp_dir.path().join("ci.yml"),
            "tasks:\n  - name: test\n    command: go test ./...\n",
        )
        .unwrap();

        let manager = TaskManager::new(TaskManagerConfig {
            workspace_root: temp_dir.path().to_path_buf(),
            task_file: Some(PathBuf::from("ci.yml")),
        })
        .unwrap();

        assert!(manager.registry.contains("test"));
    }

    #[test]
    fn test_missing_explicit_task_file_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = TaskManager::new(TaskManagerConfig {
            workspace_root: temp_dir.path().to_path_buf(),
            task_file: Some(PathBuf::from("missing.yml")),
        });
        assert!(matches!(result, Err(TaskError::Config(_))));
    }

    #[test]
    fn test_invalid_task_file_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join(TASKS_FILE_NAME), "tasks: [").unwrap();
        let result = manager_in(temp_dir.path());
        assert!(matches!(result, Err(TaskError::Config(_))));
    }

    #[test]
    fn test_missing_root_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = manager_in(&temp_dir.path().join("does-not-exist"));
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_run_tasks_from_task_file_in_root() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(
            temp_dir.path().join(TASKS_FILE_NAME),
            "tasks:\n  - name: docs\n    commands:\n      - \"printf '%s' \\\"$__GEN_DOCS__\\\" > docs.txt\"\n      - \"touch done\"\n",
        )
        .unwrap();

        let manager = manager_in(temp_dir.path()).unwrap();
        let result = manager.run_tasks(&["docs"]).unwrap();

        assert_eq!(result.commands_run, 2);
        let written = std::fs::read_to_string(temp_dir.path().join("docs.txt")).unwrap();
        assert_eq!(written, "1");
        assert!(temp_dir.path().join("done").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_run_tasks_propagates_exit_code() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(
            temp_dir.path().join(TASKS_FILE_NAME),
            "tasks:\n  - name: broken\n    command: exit 5\n",
        )
        .unwrap();

        let manager = manager_in(temp_dir.path()).unwrap();
        let err = manager.run_tasks(&["broken"]).unwrap_err();
        assert!(matches!(
            err,
            TaskError::ExternalCommandFailed { code: Some(5), .. }
        ));
    }

    #[test]
    fn test_plan_does_not_need_spawner() {
        let temp_dir = tempfile::tempdir().unwrap();
        let manager = manager_in(temp_dir.path()).unwrap();
        let plan = manager.get_execution_plan(&["goget", "build_dev"]).unwrap();
        assert_eq!(plan.command_count(), 3);
        assert_eq!(plan.tasks[0].name, "goget");
    }
}
