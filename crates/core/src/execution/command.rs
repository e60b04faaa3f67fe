//! Command execution utilities
//!
//! Spawning goes through [`ProcessSpawner`] so the runner never touches
//! `std::process` directly. [`SystemSpawner`] is the real implementation.

use std::path::{Path, PathBuf};
use std::process::Command as ProcessCommand;

use colored::*;
use tracing::{debug, error};

use crate::configs::tasks::Command;
use crate::environment::TaskEnvironment;
use crate::types::{TaskError, TaskResult};

/// Everything needed to start one child process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    pub command: Command,
    pub env: TaskEnvironment,
    pub cwd: PathBuf,
}

/// How a child process ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitOutcome {
    pub success: bool,
    /// `None` when the child was terminated by a signal
    pub code: Option<i32>,
}

impl ExitOutcome {
    pub fn from_code(code: i32) -> Self {
        Self {
            success: code == 0,
            code: Some(code),
        }
    }
}

/// Starts a child process and blocks until it exits
pub trait ProcessSpawner {
    fn spawn(&self, invocation: &CommandInvocation) -> TaskResult<ExitOutcome>;
}

/// Spawns real processes with inherited stdio
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemSpawner;

impl SystemSpawner {
    fn build(invocation: &CommandInvocation) -> TaskResult<ProcessCommand> {
        let mut command = match &invocation.command {
            Command::Single(line) => {
                if cfg!(target_family = "windows") {
                    let mut command = ProcessCommand::new("cmd");
                    command.arg("/C").arg(line);
                    command
                } else {
                    let mut command = ProcessCommand::new("sh");
                    command.arg("-c").arg(line);
                    command
                }
            }
            Command::Multiple(argv) => {
                let (program, args) = argv.split_first().ok_or_else(|| {
                    TaskError::Config("Cannot execute an empty command".to_string())
                })?;
                let mut command = ProcessCommand::new(program);
                command.args(args);
                command
            }
        };

        command.current_dir(&invocation.cwd);
        command.envs(invocation.env.iter());
        Ok(command)
    }
}

impl ProcessSpawner for SystemSpawner {
    fn spawn(&self, invocation: &CommandInvocation) -> TaskResult<ExitOutcome> {
        let mut command = Self::build(invocation)?;
        let status = command.status().map_err(|source| TaskError::Spawn {
            command: invocation.command.to_string(),
            source,
        })?;

        Ok(ExitOutcome {
            success: status.success(),
            code: status.code(),
        })
    }
}

/// Runs command steps in one working directory with one environment
pub struct CommandExecutor<'a> {
    spawner: &'a dyn ProcessSpawner,
    env: &'a TaskEnvironment,
    cwd: &'a Path,
}

impl<'a> CommandExecutor<'a> {
    pub fn new(spawner: &'a dyn ProcessSpawner, env: &'a TaskEnvironment, cwd: &'a Path) -> Self {
        Self { spawner, env, cwd }
    }

    /// Run a single step to completion, failing on a non-zero exit status
    pub fn execute(&self, command: &Command) -> TaskResult<()> {
        println!(
            "{} {} {}",
            "[localhost]".bright_black(),
            "local:".bold(),
            command.to_string().cyan()
        );

        let invocation = CommandInvocation {
            command: command.clone(),
            env: self.env.clone(),
            cwd: self.cwd.to_path_buf(),
        };
        debug!(command = %command, cwd = %self.cwd.display(), "spawning command");

        let outcome = self.spawner.spawn(&invocation)?;
        if !outcome.success {
            error!(command = %command, code = ?outcome.code, "command failed");
            return Err(TaskError::ExternalCommandFailed {
                command: command.to_string(),
                code: outcome.code,
            });
        }

        debug!(command = %command, "command finished");
        Ok(())
    }

    /// Run steps in order, stopping at the first failure
    pub fn execute_all(&self, commands: &[Command]) -> TaskResult<()> {
        for command in commands {
            self.execute(command)?;
        }
        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn invocation(command: Command, cwd: &Path) -> CommandInvocation {
        CommandInvocation {
            command,
            env: TaskEnvironment::standard(),
            cwd: cwd.to_path_buf(),
        }
    }

    #[test]
    fn test_system_spawner_success() {
        let temp_dir = tempfile::tempdir().unwrap();
        let outcome = SystemSpawner
            .spawn(&invocation(Command::shell("true"), temp_dir.path()))
            .unwrap();
        assert_eq!(outcome, ExitOutcome::from_code(0));
    }

    #[test]
    fn test_system_spawner_reports_exit_code() {
        let temp_dir = tempfile::tempdir().unwrap();
        let outcome = SystemSpawner
            .spawn(&invocation(Command::shell("exit 7"), temp_dir.path()))
            .unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.code, Some(7));
    }

    #[test]
    fn test_system_spawner_injects_gen_docs_and_cwd() {
        let temp_dir = tempfile::tempdir().unwrap();
        let outcome = SystemSpawner
            .spawn(&invocation(
                Command::shell("printf '%s' \"$__GEN_DOCS__\" > gen_docs.txt"),
                temp_dir.path(),
            ))
            .unwrap();
        assert!(outcome.success);

        let written = std::fs::read_to_string(temp_dir.path().join("gen_docs.txt")).unwrap();
        assert_eq!(written, "1");
    }

    #[test]
    fn test_system_spawner_argv_form() {
        let temp_dir = tempfile::tempdir().unwrap();
        let argv = Command::Multiple(vec!["touch".to_string(), "marker".to_string()]);
        let outcome = SystemSpawner
            .spawn(&invocation(argv, temp_dir.path()))
            .unwrap();
        assert!(outcome.success);
        assert!(temp_dir.path().join("marker").exists());
    }

    #[test]
    fn test_system_spawner_missing_program() {
        let temp_dir = tempfile::tempdir().unwrap();
        let argv = Command::Multiple(vec!["devtask-no-such-program-xyz".to_string()]);
        let err = SystemSpawner
            .spawn(&invocation(argv, temp_dir.path()))
            .unwrap_err();
        assert!(matches!(err, TaskError::Spawn { .. }));
    }

    #[test]
    fn test_executor_fail_fast() {
        let temp_dir = tempfile::tempdir().unwrap();
        let env = TaskEnvironment::standard();
        let spawner = SystemSpawner;
        let executor = CommandExecutor::new(&spawner, &env, temp_dir.path());

        let err = executor
            .execute_all(&[Command::shell("exit 4"), Command::shell("touch second")])
            .unwrap_err();

        assert!(matches!(
            err,
            TaskError::ExternalCommandFailed { code: Some(4), .. }
        ));
        assert!(!temp_dir.path().join("second").exists());
    }
}
