//! Derived metrics over store output. Pure functions, no I/O.

use crate::models::task_record::{AggregatedRow, TaskRecord};
use crate::models::task_type::TaskCatalog;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashSet};

/// One 8-hour workday, in minutes.
pub const BASELINE_MINUTES: f64 = 480.0;

/// Round to one decimal on the exact binary value, ties to even.
///
/// Scaling by 10 first would perturb values such as 1.25 before rounding.
fn round1(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

/// `total / 480 * 100`, rounded to one decimal. `None` counts as 0.
///
/// Not clamped: a day above the baseline reports more than 100%.
pub fn productivity_percent(total_minutes: Option<f64>) -> f64 {
    let total = total_minutes.unwrap_or(0.0);
    round1(total / BASELINE_MINUTES * 100.0)
}

/// Per-date productivity, ascending by date.
pub fn daily_productivity_series(rows: &[AggregatedRow]) -> Vec<(NaiveDate, f64)> {
    let mut per_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for row in rows {
        *per_day.entry(row.date).or_insert(0.0) += row.total_time;
    }

    per_day
        .into_iter()
        .map(|(date, minutes)| (date, productivity_percent(Some(minutes))))
        .collect()
}

/// Summed count per task type, in first-seen order.
pub fn task_distribution(rows: &[AggregatedRow]) -> Vec<(String, i64)> {
    let mut out: Vec<(String, i64)> = Vec::new();
    for row in rows {
        match out.iter_mut().find(|(t, _)| *t == row.task_type) {
            Some((_, total)) => *total += row.total_count,
            None => out.push((row.task_type.clone(), row.total_count)),
        }
    }
    out
}

/// Every catalog type with its count, 0 when missing from `counts`.
pub fn fill_missing_task_types(
    counts: &BTreeMap<String, i64>,
    catalog: &TaskCatalog,
) -> Vec<(String, i64)> {
    catalog
        .names()
        .map(|name| (name.to_string(), counts.get(name).copied().unwrap_or(0)))
        .collect()
}

pub fn format_minutes_as_hours(minutes: f64) -> String {
    format!("{:.1} hrs", minutes / 60.0)
}

/// Number of distinct accounts among raw rows.
pub fn unique_accounts(records: &[TaskRecord]) -> usize {
    records
        .iter()
        .map(|r| r.account_id.as_str())
        .collect::<HashSet<_>>()
        .len()
}
