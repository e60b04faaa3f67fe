//! High-level task runner
//!
//! Resolves every requested task before spawning anything, then runs the tasks
//! one after another, stopping at the first failing command.

use std::path::PathBuf;

use colored::*;
use tracing::{info, warn};

use crate::environment::TaskEnvironment;
use crate::execution::command::{CommandExecutor, ProcessSpawner};
use crate::results::TaskRunResult;
use crate::task_execution::{resolve_task_execution_plan, PlannedTask};
use crate::tasks::{get_task_color, TaskRegistry, TaskSource};
use crate::types::TaskResult;

/// Configuration for the task runner
#[derive(Debug, Clone)]
pub struct TaskRunnerConfig {
    /// Working directory of every spawned command
    pub working_dir: PathBuf,
    pub env: TaskEnvironment,
}

impl Default for TaskRunnerConfig {
    fn default() -> Self {
        Self {
            working_dir: PathBuf::from("."),
            env: TaskEnvironment::standard(),
        }
    }
}

/// Runs resolved tasks sequentially through a [`ProcessSpawner`]
pub struct TaskRunner<'a> {
    registry: &'a TaskRegistry,
    spawner: &'a dyn ProcessSpawner,
    config: TaskRunnerConfig,
}

impl<'a> TaskRunner<'a> {
    pub fn new(
        registry: &'a TaskRegistry,
        spawner: &'a dyn ProcessSpawner,
        config: TaskRunnerConfig,
    ) -> Self {
        Self {
            registry,
            spawner,
            config,
        }
    }

    /// Run the named tasks left to right; unknown names fail before anything runs
    pub fn run_tasks<S: AsRef<str>>(&self, task_names: &[S]) -> TaskResult<TaskRunResult> {
        let plan = resolve_task_execution_plan(self.registry, task_names)?;
        info!(tasks = plan.tasks.len(), "resolved tasks");

        let executor = CommandExecutor::new(
            self.spawner,
            &self.config.env,
            &self.config.working_dir,
        );

        let mut result = TaskRunResult::default();
        for task in &plan.tasks {
            self.print_header(task);
            info!(task = %task.name, "running task");

            if let Err(e) = executor.execute_all(&task.commands) {
                warn!(task = %task.name, error = %e, "task failed, aborting run");
                return Err(e);
            }

            result.tasks_run.push(task.name.clone());
            result.commands_run += task.commands.len();
            info!(task = %task.name, "task finished");
        }

        Ok(result)
    }

    fn print_header(&self, task: &PlannedTask) {
        let task_color = get_task_color(&task.name);
        let task_source = match task.source {
            TaskSource::TaskFile => "task file".bright_blue(),
            TaskSource::Builtin => "builtin".bright_black(),
        };

        println!();
        println!(
            "┌─ {} {}",
            "Running task".bold(),
            task.name.color(task_color).bold()
        );
        println!("└─ {} {}", "Source:".bright_black(), task_source);
    }
}
