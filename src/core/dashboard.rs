use crate::core::metrics;
use crate::db::pool::DbPool;
use crate::db::queries::{query_aggregated, records_by_date};
use crate::errors::AppResult;
use crate::models::day_summary::DayMetrics;
use crate::models::filter::TaskFilter;
use crate::models::task_record::AggregatedRow;
use chrono::NaiveDate;

/// Everything the performance dashboard renders.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub rows: Vec<AggregatedRow>,
    pub daily_series: Vec<(NaiveDate, f64)>,
    pub distribution: Vec<(String, i64)>,
    /// Key metrics of the selected date, independent of the filter.
    pub today: DayMetrics,
}

impl Dashboard {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub struct DashboardLogic;

impl DashboardLogic {
    pub fn build(db_path: &str, filter: &TaskFilter, selected: NaiveDate) -> AppResult<Dashboard> {
        let rows = {
            let pool = DbPool::open(db_path)?;
            query_aggregated(&pool.conn, filter)?
        };

        let today = {
            let pool = DbPool::open(db_path)?;
            Self::day_metrics(&pool, selected)?
        };

        Ok(Dashboard {
            daily_series: metrics::daily_productivity_series(&rows),
            distribution: metrics::task_distribution(&rows),
            rows,
            today,
        })
    }

    fn day_metrics(pool: &DbPool, date: NaiveDate) -> AppResult<DayMetrics> {
        let records = records_by_date(&pool.conn, &date)?;
        if records.is_empty() {
            return Ok(DayMetrics::default());
        }

        let total_minutes: f64 = records.iter().map(|r| r.total_time).sum();
        Ok(DayMetrics {
            total_minutes,
            productivity: metrics::productivity_percent(Some(total_minutes)),
            unique_accounts: metrics::unique_accounts(&records),
        })
    }
}
