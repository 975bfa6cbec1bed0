use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        filter,
        force,
    } = cmd
    {
        // Exports cover every date unless a date option narrows them.
        let task_filter = filter.to_filter(None)?;
        ExportLogic::export(&cfg.database, &task_filter, *format, file, *force)?;
    }
    Ok(())
}
