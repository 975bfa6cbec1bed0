use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::table::{Column, Table};

/// Print the task catalog in form order.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut table = Table::new(vec![Column::left("Task Type"), Column::right("Minutes/Task")]);
    for t in cfg.task_types.iter() {
        table.add_row(vec![t.name.clone(), format!("{}", t.minutes_per_task)]);
    }
    print!("{}", table.render());
    Ok(())
}
