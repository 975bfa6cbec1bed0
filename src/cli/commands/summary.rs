use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::SummaryLogic;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_productivity, colorize_count};
use crate::utils::date;
use crate::utils::formatting::{pad_right, percent};
use unicode_width::UnicodeWidthStr;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { date: date_arg } = cmd {
        let d = match date_arg {
            Some(s) => date::parse_date(s)?,
            None => date::today(),
        };

        let summary = SummaryLogic::build(&cfg.database, d, &cfg.task_types)?;

        header("Daily Summary");
        println!("Selected Date: {}", summary.date.format("%b %d, %Y"));
        println!(
            "Productivity % Today: {}{}{}",
            color_for_productivity(summary.productivity),
            percent(summary.productivity),
            RESET
        );

        header("Today's Tasks");
        let name_w = summary
            .counts
            .iter()
            .map(|(n, _)| UnicodeWidthStr::width(n.as_str()))
            .max()
            .unwrap_or(0);
        for (name, count) in &summary.counts {
            let minutes = cfg.task_types.minutes_for(name).unwrap_or(0.0);
            println!(
                "{}  {}  ({} mins/task)",
                pad_right(name, name_w),
                colorize_count(*count, 4),
                minutes
            );
        }
    }
    Ok(())
}
