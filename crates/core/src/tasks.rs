//! Task definitions and the name-keyed task registry

use std::collections::{BTreeMap, HashSet};

use colored::*;
use tracing::debug;

use crate::configs::tasks::{Command, TasksFileConfig};
use crate::types::{TaskError, TaskResult};

/// Where a registered task came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskSource {
    Builtin,
    TaskFile,
}

/// A named, parameterless unit of work
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDefinition {
    pub name: String,
    pub description: String,
    pub steps: Vec<Command>,
    pub source: TaskSource,
}

impl TaskDefinition {
    pub fn builtin(name: &str, description: &str, steps: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            steps: steps.iter().map(|line| Command::shell(*line)).collect(),
            source: TaskSource::Builtin,
        }
    }
}

/// Tasks for developing the TS2 sim server
pub fn builtin_tasks() -> Vec<TaskDefinition> {
    vec![
        TaskDefinition::builtin(
            "build_dev",
            "uses go-bindata to package assets in -debug mode, ie live to file",
            &["go-bindata -debug -pkg server -o server/bindata_templates.go templates/"],
        ),
        TaskDefinition::builtin(
            "run_dev",
            "runs the server in -debug mode against the demo simulation",
            &["go run main.go -debug ./simulation/test_data/demo.json"],
        ),
        TaskDefinition::builtin(
            "goget",
            "fetches and upgrades the server's third-party packages",
            &[
                "go get -u -v github.com/gorilla/websocket",
                "go get -u -v github.com/jteeuwen/go-bindata/...",
            ],
        ),
    ]
}

/// Exact-name lookup table of every task available to this process
#[derive(Debug, Clone, Default)]
pub struct TaskRegistry {
    tasks: BTreeMap<String, TaskDefinition>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding only the built-in tasks
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for task in builtin_tasks() {
            registry.register(task);
        }
        registry
    }

    /// Add a task, replacing any task registered under the same name
    pub fn register(&mut self, task: TaskDefinition) -> Option<TaskDefinition> {
        self.tasks.insert(task.name.clone(), task)
    }

    pub fn get(&self, name: &str) -> Option<&TaskDefinition> {
        self.tasks.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tasks.contains_key(name)
    }

    /// Task names in sorted order
    pub fn names(&self) -> Vec<&str> {
        self.tasks.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TaskDefinition> {
        self.tasks.values()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Resolve every requested name up front; nothing is returned unless all names exist
    pub fn resolve<S: AsRef<str>>(&self, names: &[S]) -> TaskResult<Vec<&TaskDefinition>> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.get(name)
                    .ok_or_else(|| TaskError::TaskNotFound(name.to_string()))
            })
            .collect()
    }

    /// Overlay the tasks declared in a task file; file tasks win over built-ins
    pub fn merge_file_config(&mut self, config: &TasksFileConfig) -> TaskResult<()> {
        let mut seen = HashSet::new();
        let mut parsed = Vec::with_capacity(config.tasks.len());

        for task in &config.tasks {
            if task.name.trim().is_empty() {
                return Err(TaskError::Config("Task name must not be empty".to_string()));
            }
            if !seen.insert(task.name.as_str()) {
                return Err(TaskError::Config(format!(
                    "Task '{}' is declared more than once",
                    task.name
                )));
            }
            parsed.push(TaskDefinition {
                name: task.name.clone(),
                description: task.description.clone().unwrap_or_default(),
                steps: task.steps()?,
                source: TaskSource::TaskFile,
            });
        }

        for task in parsed {
            if let Some(previous) = self.register(task) {
                debug!(task = %previous.name, "task file overrides existing task");
            }
        }
        Ok(())
    }
}

/// Get a consistent color for a task name
pub fn get_task_color(task_name: &str) -> Color {
    let hash = task_name
        .bytes()
        .fold(0u64, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u64));

    let colors = [
        Color::TrueColor {
            r: 147,
            g: 112,
            b: 219,
        },
        Color::TrueColor {
            r: 64,
            g: 224,
            b: 208,
        },
        Color::TrueColor {
            r: 255,
            g: 140,
            b: 0,
        },
        Color::TrueColor {
            r: 199,
            g: 21,
            b: 133,
        },
    ];

    colors[(hash % colors.len() as u64) as usize]
}
