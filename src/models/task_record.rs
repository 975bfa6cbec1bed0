use chrono::NaiveDate;
use serde::Serialize;

/// A row of the `tasks` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskRecord {
    pub id: i64,
    pub date: NaiveDate,        // ⇔ tasks.date (TEXT "YYYY-MM-DD")
    pub account_id: String,     // ⇔ tasks.account_id
    pub task_type: String,      // ⇔ tasks.task_type
    pub count: i64,             // ⇔ tasks.count
    pub time_per_task: f64,     // ⇔ tasks.time_per_task (minutes)
    pub total_time: f64,        // ⇔ tasks.total_time (minutes)
}

/// A record waiting to be appended; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTaskRecord {
    pub date: NaiveDate,
    pub account_id: String,
    pub task_type: String,
    pub count: i64,
    pub time_per_task: f64,
    pub total_time: f64,
}

impl NewTaskRecord {
    /// Builds a record with `total_time = count * time_per_task`.
    pub fn new(
        date: NaiveDate,
        account_id: &str,
        task_type: &str,
        count: i64,
        time_per_task: f64,
    ) -> Self {
        Self {
            date,
            account_id: account_id.to_string(),
            task_type: task_type.to_string(),
            count,
            time_per_task,
            total_time: count as f64 * time_per_task,
        }
    }
}

/// One (date, account_id, task_type) group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedRow {
    pub date: NaiveDate,
    pub account_id: String,
    pub task_type: String,
    pub total_count: i64,
    pub total_time: f64,
}
