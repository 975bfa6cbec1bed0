use crate::core::metrics;
use crate::db::pool::DbPool;
use crate::db::queries::{counts_by_date, total_time_by_date};
use crate::errors::AppResult;
use crate::models::day_summary::DaySummary;
use crate::models::task_type::TaskCatalog;
use chrono::NaiveDate;

/// Daily summary for one date (the sidebar view).
pub struct SummaryLogic;

impl SummaryLogic {
    pub fn build(db_path: &str, date: NaiveDate, catalog: &TaskCatalog) -> AppResult<DaySummary> {
        let total = {
            let pool = DbPool::open(db_path)?;
            total_time_by_date(&pool.conn, &date)?
        };

        let counts = {
            let pool = DbPool::open(db_path)?;
            counts_by_date(&pool.conn, &date)?
        };

        Ok(DaySummary {
            date,
            productivity: metrics::productivity_percent(total),
            counts: metrics::fill_missing_task_types(&counts, catalog),
        })
    }
}
