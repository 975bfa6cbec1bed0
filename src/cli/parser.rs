use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::models::filter::TaskFilter;
use crate::utils::date;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for prodtracker
/// CLI application to log work tasks and report productivity with SQLite
#[derive(Parser)]
#[command(
    name = "prodtracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log categorized work tasks per day and account, and report productivity against an 8-hour day",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override configuration file path
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(global = true, short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Date and account filters shared by `report` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// First date to include (YYYY-MM-DD)
    #[arg(long = "from", conflicts_with = "range")]
    pub from: Option<String>,

    /// Last date to include (YYYY-MM-DD)
    #[arg(long = "to", conflicts_with = "range")]
    pub to: Option<String>,

    /// Period or range: YYYY, YYYY-MM, YYYY-MM-DD, or START:END
    #[arg(long = "range", short = 'r')]
    pub range: Option<String>,

    /// Exact account ID to filter by
    #[arg(long = "account", short = 'a')]
    pub account: Option<String>,

    /// Ignore the default date window and include every date
    #[arg(long = "all", conflicts_with_all = ["from", "to", "range"])]
    pub all: bool,
}

impl FilterArgs {
    /// Build the query filter. `default_window` applies only when no date
    /// option was given at all.
    pub fn to_filter(&self, default_window: Option<(NaiveDate, NaiveDate)>) -> AppResult<TaskFilter> {
        let mut filter = TaskFilter::new();

        let from = date::parse_optional_date(self.from.as_ref())?;
        let to = date::parse_optional_date(self.to.as_ref())?;

        if let Some(r) = &self.range {
            let (start, end) = date::parse_range(r)?;
            filter = filter.since(start).until(end);
        } else if from.is_some() || to.is_some() {
            filter.start_date = from;
            filter.end_date = to;
        } else if !self.all
            && let Some((start, end)) = default_window
        {
            filter = filter.since(start).until(end);
        }

        if let Some(account) = &self.account {
            filter = filter.account(account);
        }
        Ok(filter)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Database maintenance
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// List the known task types and their minutes per task
    Types,

    /// Log task counts for one account on one day
    Add {
        /// Date of the work (YYYY-MM-DD), defaults to today
        date: Option<String>,

        /// Account ID the work was done on (required)
        #[arg(long = "account", short = 'a')]
        account: Option<String>,

        /// Task count as NAME=COUNT, repeatable (e.g. --task Calls=3 --task Emails=2)
        #[arg(long = "task", short = 't', value_name = "NAME=COUNT")]
        tasks: Vec<String>,
    },

    /// Performance dashboard: key metrics, daily productivity, task distribution, records
    Report {
        #[command(flatten)]
        filter: FilterArgs,

        /// Date used for the key metrics (YYYY-MM-DD), defaults to today
        #[arg(long = "date")]
        date: Option<String>,
    },

    /// Daily summary: productivity and every task type's count for one date
    Summary {
        /// Date to summarize (YYYY-MM-DD), defaults to today
        date: Option<String>,
    },

    /// Export detailed records
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },
}
