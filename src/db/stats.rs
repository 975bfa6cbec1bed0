use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension};

/// Overview of the stored log, shown by `db --info`.
#[derive(Debug, Clone, PartialEq)]
pub struct DbStats {
    pub rows: i64,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
    pub accounts: i64,
}

pub fn collect(conn: &Connection) -> AppResult<DbStats> {
    let rows: i64 = conn.query_row("SELECT COUNT(*) FROM tasks", [], |row| row.get(0))?;

    let first_date: Option<String> = conn
        .query_row(
            "SELECT date FROM tasks ORDER BY date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = conn
        .query_row(
            "SELECT date FROM tasks ORDER BY date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let accounts: i64 = conn.query_row(
        "SELECT COUNT(DISTINCT account_id) FROM tasks",
        [],
        |row| row.get(0),
    )?;

    Ok(DbStats {
        rows,
        first_date,
        last_date,
        accounts,
    })
}
