use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use devtask_core::task_manager::{TaskManager, TaskManagerConfig};
use devtask_core::TaskError;

mod commands;
mod logging;

/// devtask - local task runner for the TS2 sim server
#[derive(Parser)]
#[command(name = "devtask")]
#[command(about = "Run the development tasks of the TS2 sim server")]
#[command(version)]
struct Cli {
    /// Path to the workspace root (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    workspace: PathBuf,

    /// Task file to load instead of devtask.yml (relative paths resolve against the workspace root)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one or more tasks, in the order given
    Run {
        /// Task names, e.g. "build_dev run_dev"
        #[arg(required = true)]
        tasks: Vec<String>,
    },
    /// List available tasks
    List,
    /// Show the commands tasks would run without running them
    Plan {
        #[arg(required = true)]
        tasks: Vec<String>,
    },
    /// Print the JSON Schema of the task file
    Schema,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            exit_code_for(&e)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        workspace,
        config,
        command,
        ..
    } = cli;

    match command {
        Commands::Run { tasks } => {
            commands::run::execute(&load_manager(workspace, config)?, &tasks)
        }
        Commands::List => commands::list::execute(&load_manager(workspace, config)?),
        Commands::Plan { tasks } => {
            commands::plan::execute(&load_manager(workspace, config)?, &tasks)
        }
        // Schema needs no workspace
        Commands::Schema => commands::schema::execute(),
    }
}

fn load_manager(workspace_root: PathBuf, task_file: Option<PathBuf>) -> Result<TaskManager> {
    let manager = TaskManager::new(TaskManagerConfig {
        workspace_root,
        task_file,
    })?;
    Ok(manager)
}

/// Exit with the failing command's own status where there is one
fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<TaskError>() {
        Some(TaskError::ExternalCommandFailed {
            code: Some(code), ..
        }) => u8::try_from(*code)
            .ok()
            .filter(|code| *code != 0)
            .map(ExitCode::from)
            .unwrap_or(ExitCode::FAILURE),
        Some(e) if e.is_usage_error() => ExitCode::from(2),
        _ => ExitCode::FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_multiple_tasks() {
        let cli = Cli::try_parse_from(["devtask", "run", "build_dev", "run_dev"]).unwrap();
        match cli.command {
            Commands::Run { tasks } => assert_eq!(tasks, vec!["build_dev", "run_dev"]),
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_cli_run_requires_a_task() {
        assert!(Cli::try_parse_from(["devtask", "run"]).is_err());
    }

    #[test]
    fn test_cli_verbosity_counts() {
        let cli = Cli::try_parse_from(["devtask", "-vv", "list"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_exit_code_mapping() {
        let failed = anyhow::Error::new(TaskError::ExternalCommandFailed {
            command: "go run main.go".to_string(),
            code: Some(3),
        });
        assert_eq!(exit_code_for(&failed), ExitCode::from(3));

        let not_found = anyhow::Error::new(TaskError::TaskNotFound("deploy".to_string()));
        assert_eq!(exit_code_for(&not_found), ExitCode::from(2));

        let signalled = anyhow::Error::new(TaskError::ExternalCommandFailed {
            command: "go run main.go".to_string(),
            code: None,
        });
        assert_eq!(exit_code_for(&signalled), ExitCode::FAILURE);
    }
}
