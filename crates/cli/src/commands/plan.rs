use anyhow::{Context, Result};
use colored::*;
use devtask_core::task_manager::TaskManager;

pub fn execute(manager: &TaskManager, tasks: &[String]) -> Result<()> {
    println!("{} {}", "Execution plan for".bold(), tasks.join(" ").cyan());

    let plan = manager
        .get_execution_plan(tasks)
        .context("Failed to get execution plan")?;

    println!("\n{} {}", "Working directory:".bold(), manager.root.display());
    for (key, value) in manager.env.iter() {
        println!("{} {}={}", "Environment:".bold(), key, value);
    }

    println!("\n{}:", "Execution order".bold());
    let mut step = 1;
    for task in &plan.tasks {
        for command in &task.commands {
            println!("  {}. {} {}", step, format!("[{}]", task.name).dimmed(), command);
            step += 1;
        }
    }

    Ok(())
}
