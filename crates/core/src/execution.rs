//! Task execution module
//!
//! This module handles the actual execution of tasks: spawning external commands
//! with the task environment and running resolved tasks in order.

pub mod command;
pub mod runner;

pub use command::{CommandExecutor, CommandInvocation, ExitOutcome, ProcessSpawner, SystemSpawner};
pub use runner::{TaskRunner, TaskRunnerConfig};
