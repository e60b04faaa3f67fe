use std::fmt;
use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::{TaskError, TaskResult};

/// Default task file name, looked up at the workspace root
pub const TASKS_FILE_NAME: &str = "devtask.yml";

/// A single command step: a shell line or an argv vector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Command {
    Single(String),
    Multiple(Vec<String>),
}

impl Command {
    pub fn shell(line: impl Into<String>) -> Self {
        Command::Single(line.into())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Command::Single(line) => line.trim().is_empty(),
            Command::Multiple(argv) => argv.is_empty(),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Single(line) => f.write_str(line),
            Command::Multiple(argv) => f.write_str(&argv.join(" ")),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, JsonSchema, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TaskConfig {
    pub name: String,
    pub description: Option<String>,
    /// A single command step
    pub command: Option<Command>,
    /// Several command steps, run in order and stopping at the first failure
    pub commands: Option<Vec<Command>>,
}

impl TaskConfig {
    /// Collect the command steps of this task, rejecting tasks with nothing to run
    pub fn steps(&self) -> TaskResult<Vec<Command>> {
        let steps = match (&self.command, &self.commands) {
            (Some(_), Some(_)) => {
                return Err(TaskError::Config(format!(
                    "Task '{}' sets both 'command' and 'commands'",
                    self.name
                )))
            }
            (Some(command), None) => vec![command.clone()],
            (None, Some(commands)) => commands.clone(),
            (None, None) => Vec::new(),
        };

        if steps.is_empty() {
            return Err(TaskError::Config(format!(
                "Task '{}' has no command to execute",
                self.name
            )));
        }
        if steps.iter().any(Command::is_empty) {
            return Err(TaskError::Config(format!(
                "Task '{}' contains an empty command",
                self.name
            )));
        }
        Ok(steps)
    }
}

#[derive(Debug, Deserialize, Serialize, JsonSchema, Clone, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TasksFileConfig {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub tasks: Vec<TaskConfig>,
}

pub fn parse_tasks_config(yaml_str: &str) -> TaskResult<TasksFileConfig> {
    let config: TasksFileConfig = serde_yaml::from_str(yaml_str)?;
    Ok(config)
}

/// Read and parse a task file from disk
pub fn load_tasks_file(path: &Path) -> TaskResult<TasksFileConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        TaskError::Config(format!(
            "Failed to read task file {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_tasks_config(&content).map_err(|e| {
        TaskError::Config(format!(
            "Failed to parse task file {}: {}",
            path.display(),
            e
        ))
    })
}

/// JSON Schema describing the task file
pub fn tasks_file_schema() -> TaskResult<String> {
    let schema = schemars::schema_for!(TasksFileConfig);
    serde_json::to_string_pretty(&schema)
        .map_err(|e| TaskError::Config(format!("Failed to render schema: {}", e)))
}
