use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::save::{SaveLogic, SaveRequest, parse_task_spec};
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date;

/// Save one batch of task counts.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date: date_arg,
        account,
        tasks,
    } = cmd
    {
        //
        // 1. Parse date (default = today)
        //
        let d = match date_arg {
            Some(s) => date::parse_date(s)?,
            None => date::today(),
        };

        //
        // 2. Parse NAME=COUNT entries
        //
        let counts = tasks
            .iter()
            .map(|t| parse_task_spec(t))
            .collect::<AppResult<Vec<_>>>()?;

        let req = SaveRequest {
            date: d,
            account_id: account.clone().unwrap_or_default(),
            counts,
        };

        //
        // 3. Validate and append
        //
        let written = SaveLogic::apply(&cfg.database, &req, &cfg.task_types)?;
        success(format!("Successfully logged {written} tasks!"));
    }

    Ok(())
}
