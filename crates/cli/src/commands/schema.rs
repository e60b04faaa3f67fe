use anyhow::Result;
use devtask_core::configs::tasks::tasks_file_schema;

pub fn execute() -> Result<()> {
    println!("{}", tasks_file_schema()?);
    Ok(())
}
