use anyhow::Result;
use colored::*;
use devtask_core::task_manager::TaskManager;
use devtask_core::tasks::{get_task_color, TaskSource};

pub fn execute(manager: &TaskManager) -> Result<()> {
    let result = manager.list_tasks();

    println!("{}", "Available tasks".bold().underline());
    if let Some(path) = &result.task_file {
        println!("{}", format!("(including {})", path.display()).dimmed());
    }
    println!();

    let width = result
        .tasks
        .iter()
        .map(|t| t.name.len())
        .max()
        .unwrap_or(0);

    for task in &result.tasks {
        let marker = match task.source {
            TaskSource::TaskFile => " [devtask.yml]".green(),
            TaskSource::Builtin => "".normal(),
        };
        println!(
            "    {}  {}{}",
            format!("{:<width$}", task.name)
                .color(get_task_color(&task.name))
                .bold(),
            task.description.dimmed(),
            marker
        );
    }

    Ok(())
}
