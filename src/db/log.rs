use crate::errors::AppResult;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;

/// Write an internal log line into the `log` table.
///
/// Called with the mutation's transaction, so the line is committed (or
/// discarded) together with the state change it describes.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Number of log rows for a given operation (used by `db --info`).
pub fn count_operation(conn: &Connection, operation: &str) -> AppResult<i64> {
    let n = conn.query_row(
        "SELECT COUNT(*) FROM log WHERE operation = ?1",
        [operation],
        |row| row.get(0),
    )?;
    Ok(n)
}
