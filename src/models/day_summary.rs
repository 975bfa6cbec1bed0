use chrono::NaiveDate;
use serde::Serialize;

/// Key metrics of a single day, derived from its raw rows.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct DayMetrics {
    pub total_minutes: f64,
    pub productivity: f64,
    pub unique_accounts: usize,
}

/// Per-day summary: productivity plus every catalog type's count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub productivity: f64,
    pub counts: Vec<(String, i64)>,
}
