use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the `tasks` table and its index when missing.
///
/// Idempotent: existing tables and rows are left untouched.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS tasks (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            date           TEXT NOT NULL,
            account_id     TEXT NOT NULL,
            task_type      TEXT NOT NULL,
            count          INTEGER NOT NULL CHECK(count >= 0),
            time_per_task  REAL NOT NULL CHECK(time_per_task >= 0),
            total_time     REAL NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_tasks_date_account ON tasks(date, account_id);
        "#,
    )?;
    log::debug!("tasks table ready");
    Ok(())
}
