//! devtask Core Library
//!
//! This is the core library for devtask, the local task runner used while
//! developing the TS2 sim server. It provides the task registry, the optional
//! task file, the environment injected into child processes, and the
//! sequential, fail-fast execution of external commands.
//!
//! ## Architecture
//!
//! - [`task_manager`] - High-level interface used by the command line
//! - [`execution`] - Command spawning and the sequential task runner
//! - [`task_execution`] - Eager resolution of requested tasks into a plan
//! - [`tasks`] - Built-in task definitions and the task registry
//! - [`configs`] - Task file parsing
//! - [`environment`] - Variables injected into every child process
//! - [`results`] - Result types for task manager operations
//! - [`types`] - Common error types and type aliases
//!
//! ## Usage
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
//! manager.run_tasks(&["build_dev"])?;
//! # Ok(())
//! # }
//! ```

pub mod configs;
pub mod environment;
pub mod execution;
pub mod results;
pub mod task_execution;
pub mod task_manager;
pub mod tasks;
pub mod types;

// Re-export the main types for easier usage
pub use task_manager::{TaskManager, TaskManagerConfig};
pub use types::{TaskError, TaskResult};
