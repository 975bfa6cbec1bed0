use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::fs;
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped in test mode)
///  - the SQLite database file and its `tasks` table
pub fn handle(cfg: &Config, config_path: &Path, is_test: bool) -> AppResult<()> {
    info("Initializing prodtracker…");

    if !is_test {
        cfg.save_to(config_path)?;
        success(format!("Config file: {}", config_path.display()));
    }

    if let Some(dir) = Path::new(&cfg.database).parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }

    // Opening runs the idempotent schema setup.
    DbPool::open(&cfg.database)?;
    success(format!("Database initialized at {}", cfg.database));

    Ok(())
}
