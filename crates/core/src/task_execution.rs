use crate::configs::tasks::Command;
use crate::tasks::{TaskRegistry, TaskSource};
use crate::types::{TaskError, TaskResult};

/// One resolved task with the commands it will run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedTask {
    pub name: String,
    pub description: String,
    pub source: TaskSource,
    pub commands: Vec<Command>,
}

/// Ordered list of tasks to run, fully resolved before anything is spawned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskExecutionPlan {
    pub tasks: Vec<PlannedTask>,
}

impl TaskExecutionPlan {
    pub fn command_count(&self) -> usize {
        self.tasks.iter().map(|t| t.commands.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Resolve the requested task names, in order, against the registry
pub fn resolve_task_execution_plan<S: AsRef<str>>(
    registry: &TaskRegistry,
    task_names: &[S],
) -> TaskResult<TaskExecutionPlan> {
    if task_names.is_empty() {
        return Err(TaskError::Config("No task requested".to_string()));
    }

    let tasks = registry
        .resolve(task_names)?
        .into_iter()
        .map(|task| PlannedTask {
            name: task.name.clone(),
            description: task.description.clone(),
            source: task.source,
            commands: task.steps.clone(),
        })
        .collect();

    Ok(TaskExecutionPlan { tasks })
}
