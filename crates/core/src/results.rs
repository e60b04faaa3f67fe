//! Result types for task manager operations

use std::path::PathBuf;

use crate::configs::tasks::Command;
use crate::tasks::{TaskDefinition, TaskSource};

/// Information about a registered task
#[derive(Debug, Clone)]
pub struct TaskInfo {
    pub name: String,
    pub description: String,
    pub source: TaskSource,
    pub commands: Vec<Command>,
}

/// Result of listing the available tasks
#[derive(Debug)]
pub struct TaskListResult {
    pub tasks: Vec<TaskInfo>,
    /// Task file that was merged into the registry, if any
    pub task_file: Option<PathBuf>,
}

/// Result of a successful run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskRunResult {
    pub tasks_run: Vec<String>,
    pub commands_run: usize,
}

impl From<&TaskDefinition> for TaskInfo {
    fn from(task: &TaskDefinition) -> Self {
        Self {
            name: task.name.clone(),
            description: task.description.clone(),
            source: task.source,
            commands: task.steps.clone(),
        }
    }
}
