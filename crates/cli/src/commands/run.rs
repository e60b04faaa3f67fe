use anyhow::{Context, Result};
use colored::*;
use devtask_core::task_manager::TaskManager;

pub fn execute(manager: &TaskManager, tasks: &[String]) -> Result<()> {
    println!("{} {}", "Running".bold(), tasks.join(" ").cyan());

    let result = manager
        .run_tasks(tasks)
        .context("Failed to run tasks")?;

    println!();
    println!(
        "{} {}",
        "✓".green().bold(),
        format!(
            "Done: {} task(s), {} command(s)",
            result.tasks_run.len(),
            result.commands_run
        )
        .green()
        .bold()
    );

    Ok(())
}
