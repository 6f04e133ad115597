//! Integrity check and VACUUM for `db --check` / `db --vacuum`.

use crate::errors::AppResult;
use rusqlite::Connection;

/// Problems reported by `PRAGMA integrity_check`; empty when the file is sound.
pub fn integrity_problems(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare("PRAGMA integrity_check;")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut problems = Vec::new();
    for r in rows {
        let line = r?;
        if line != "ok" {
            problems.push(line);
        }
    }
    Ok(problems)
}

/// Rebuild the file, dropping free pages. Folds the WAL back first.
pub fn vacuum(conn: &Connection) -> AppResult<()> {
    conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE); VACUUM;")?;
    Ok(())
}
