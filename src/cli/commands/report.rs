use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard::{Dashboard, DashboardLogic};
use crate::core::metrics::format_minutes_as_hours;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::{CYAN, RESET, color_for_productivity};
use crate::utils::date;
use crate::utils::formatting::{bar, bold, pad_left, pad_right, percent};
use crate::utils::table::{Column, Table};
use unicode_width::UnicodeWidthStr;

const BAR_WIDTH: usize = 30;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        filter,
        date: date_arg,
    } = cmd
    {
        let today = date::today();
        let selected = match date_arg {
            Some(s) => date::parse_date(s)?,
            None => today,
        };

        let window = date::window_ending(today, cfg.default_window_days)?;
        let task_filter = filter.to_filter(Some(window))?;

        let dashboard = DashboardLogic::build(&cfg.database, &task_filter, selected)?;

        if dashboard.is_empty() {
            info("No data available for the selected filters");
            return Ok(());
        }

        print_key_metrics(&dashboard, selected);
        print_daily_productivity(&dashboard);
        print_distribution(&dashboard);
        print_records(&dashboard);
    }
    Ok(())
}

fn print_key_metrics(dashboard: &Dashboard, selected: chrono::NaiveDate) {
    header(format!("Key Metrics ({selected})"));
    println!(
        "{CYAN}• Accounts (Today):{RESET} {}",
        bold(&dashboard.today.unique_accounts.to_string())
    );
    println!(
        "{CYAN}• Productivity % (Today):{RESET} {}{}{}",
        color_for_productivity(dashboard.today.productivity),
        percent(dashboard.today.productivity),
        RESET
    );
}

fn print_daily_productivity(dashboard: &Dashboard) {
    header("Daily Productivity");
    let max = dashboard
        .daily_series
        .iter()
        .map(|(_, p)| *p)
        .fold(100.0_f64, f64::max);

    for (d, p) in &dashboard.daily_series {
        println!(
            "{}  {}{}{} {}",
            d,
            color_for_productivity(*p),
            pad_right(&bar(*p, max, BAR_WIDTH), BAR_WIDTH),
            RESET,
            pad_left(&percent(*p), 7)
        );
    }
}

fn print_distribution(dashboard: &Dashboard) {
    header("Task Distribution");
    let max = dashboard
        .distribution
        .iter()
        .map(|(_, c)| *c)
        .max()
        .unwrap_or(0) as f64;
    let name_w = dashboard
        .distribution
        .iter()
        .map(|(n, _)| UnicodeWidthStr::width(n.as_str()))
        .max()
        .unwrap_or(0);

    for (name, count) in &dashboard.distribution {
        println!(
            "{}  {} {}",
            pad_right(name, name_w),
            pad_right(&bar(*count as f64, max, BAR_WIDTH), BAR_WIDTH),
            count
        );
    }
}

fn print_records(dashboard: &Dashboard) {
    header("Detailed Records");
    let mut table = Table::new(vec![
        Column::left("Date"),
        Column::left("Account"),
        Column::left("Task Type"),
        Column::right("Count"),
        Column::right("Time Spent"),
    ]);

    for row in &dashboard.rows {
        table.add_row(vec![
            row.date.to_string(),
            row.account_id.clone(),
            row.task_type.clone(),
            row.total_count.to_string(),
            format_minutes_as_hours(row.total_time),
        ]);
    }
    print!("{}", table.render());
}
