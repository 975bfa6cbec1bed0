use crate::errors::{AppError, AppResult};
use crate::models::filter::TaskFilter;
use crate::models::task_record::{AggregatedRow, NewTaskRecord, TaskRecord};
use chrono::NaiveDate;
use rusqlite::{Connection, Result, Row, params, params_from_iter};
use std::collections::BTreeMap;

const DATE_FMT: &str = "%Y-%m-%d";

fn date_to_db(date: &NaiveDate) -> String {
    date.format(DATE_FMT).to_string()
}

fn date_from_row(row: &Row, idx: &str) -> Result<NaiveDate> {
    let date_str: String = row.get(idx)?;
    NaiveDate::parse_from_str(&date_str, DATE_FMT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })
}

pub fn map_record(row: &Row) -> Result<TaskRecord> {
    Ok(TaskRecord {
        id: row.get("id")?,
        date: date_from_row(row, "date")?,
        account_id: row.get("account_id")?,
        task_type: row.get("task_type")?,
        count: row.get("count")?,
        time_per_task: row.get("time_per_task")?,
        total_time: row.get("total_time")?,
    })
}

fn map_aggregated(row: &Row) -> Result<AggregatedRow> {
    Ok(AggregatedRow {
        date: date_from_row(row, "date")?,
        account_id: row.get("account_id")?,
        task_type: row.get("task_type")?,
        total_count: row.get("total_count")?,
        total_time: row.get("total_time")?,
    })
}

/// Append a batch of records in a single transaction.
///
/// Either every record is written or none is: on the first failing INSERT
/// the transaction is dropped without commit, which rolls it back.
pub fn append_tasks(conn: &mut Connection, records: &[NewTaskRecord]) -> AppResult<usize> {
    if records.is_empty() {
        return Ok(0);
    }

    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare_cached(
            "INSERT INTO tasks (date, account_id, task_type, count, time_per_task, total_time)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )?;

        for rec in records {
            stmt.execute(params![
                date_to_db(&rec.date),
                rec.account_id,
                rec.task_type,
                rec.count,
                rec.time_per_task,
                rec.total_time,
            ])?;
        }
    }
    tx.commit()?;

    log::debug!("appended {} task rows", records.len());
    Ok(records.len())
}

/// Build the WHERE clause for `filter`, numbering placeholders from ?1.
///
/// Returns an empty clause when no filter is present.
pub(crate) fn filter_clause(filter: &TaskFilter) -> (String, Vec<String>) {
    let mut wheres: Vec<String> = Vec::new();
    let mut values: Vec<String> = Vec::new();

    if let Some(start) = &filter.start_date {
        values.push(date_to_db(start));
        wheres.push(format!("date >= ?{}", values.len()));
    }
    if let Some(end) = &filter.end_date {
        values.push(date_to_db(end));
        wheres.push(format!("date <= ?{}", values.len()));
    }
    if let Some(account) = &filter.account_id {
        values.push(account.clone());
        wheres.push(format!("account_id = ?{}", values.len()));
    }

    if wheres.is_empty() {
        (String::new(), values)
    } else {
        (format!(" WHERE {}", wheres.join(" AND ")), values)
    }
}

/// Rows grouped by (date, account_id, task_type), ascending by date.
pub fn query_aggregated(conn: &Connection, filter: &TaskFilter) -> AppResult<Vec<AggregatedRow>> {
    let (clause, values) = filter_clause(filter);
    let sql = format!(
        "SELECT date, account_id, task_type,
                SUM(count) AS total_count,
                SUM(total_time) AS total_time
         FROM tasks{clause}
         GROUP BY date, account_id, task_type
         ORDER BY date ASC, account_id ASC, task_type ASC"
    );
    log::debug!("aggregated query with {} filter value(s)", values.len());

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(values.iter()), map_aggregated)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Every raw row logged for `date`, in insertion order.
pub fn records_by_date(conn: &Connection, date: &NaiveDate) -> AppResult<Vec<TaskRecord>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM tasks
         WHERE date = ?1
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([date_to_db(date)], map_record)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Summed minutes for `date`; `None` when nothing was logged that day.
pub fn total_time_by_date(conn: &Connection, date: &NaiveDate) -> AppResult<Option<f64>> {
    // SUM over zero rows yields a single NULL row.
    let total = conn.query_row(
        "SELECT SUM(total_time) FROM tasks WHERE date = ?1",
        [date_to_db(date)],
        |row| row.get::<_, Option<f64>>(0),
    )?;
    Ok(total)
}

/// task_type → summed count for `date`. Types without rows are absent.
pub fn counts_by_date(conn: &Connection, date: &NaiveDate) -> AppResult<BTreeMap<String, i64>> {
    let mut stmt = conn.prepare(
        "SELECT task_type, SUM(count) AS total_count
         FROM tasks
         WHERE date = ?1
         GROUP BY task_type",
    )?;

    let rows = stmt.query_map([date_to_db(date)], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
    })?;

    let mut out = BTreeMap::new();
    for r in rows {
        let (task_type, count) = r?;
        out.insert(task_type, count);
    }
    Ok(out)
}
