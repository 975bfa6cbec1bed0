// src/export/model.rs

use crate::core::metrics::format_minutes_as_hours;
use crate::models::task_record::AggregatedRow;
use serde::Serialize;

/// Flat shape of one detailed record, as written to CSV / JSON.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RecordExport {
    pub date: String,
    pub account_id: String,
    pub task_type: String,
    pub total_count: i64,
    pub total_minutes: f64,
    pub time_spent: String,
}

impl From<&AggregatedRow> for RecordExport {
    fn from(row: &AggregatedRow) -> Self {
        Self {
            date: row.date.format("%Y-%m-%d").to_string(),
            account_id: row.account_id.clone(),
            task_type: row.task_type.clone(),
            total_count: row.total_count,
            total_minutes: (row.total_time * 100.0).round() / 100.0,
            time_spent: format_minutes_as_hours(row.total_time),
        }
    }
}
