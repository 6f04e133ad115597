use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension, Result, TransactionBehavior};

const ADD_ORIGINAL_DURATION: &str = "20260301_0002_add_original_duration";

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `timers` table exists.
fn timers_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='timers'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `timers` table has the given column.
fn timers_has_column(conn: &Connection, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('timers')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `timers` table with the current schema.
fn create_timers_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS timers (
            id                        INTEGER PRIMARY KEY AUTOINCREMENT,
            baseline_seconds          INTEGER NOT NULL CHECK(baseline_seconds >= 0),
            original_duration_seconds INTEGER NOT NULL CHECK(original_duration_seconds >= 0),
            is_running                INTEGER NOT NULL DEFAULT 0 CHECK(is_running IN (0, 1)),
            anchor_time               TEXT,
            created_at                TEXT NOT NULL,
            CHECK ((is_running = 1) = (anchor_time IS NOT NULL))
        );

        CREATE INDEX IF NOT EXISTS idx_timers_created_at ON timers(created_at);
        "#,
    )?;
    Ok(())
}

/// Older databases reset every timer to a fixed duration and did not keep
/// the configured one. Add the column and back-fill it from the baseline,
/// which is the best value such rows still carry.
///
/// Returns `true` when the column was added.
fn migrate_add_original_duration(conn: &Connection) -> AppResult<bool> {
    if timers_has_column(conn, "original_duration_seconds")? {
        return Ok(false);
    }

    let fail = |e: rusqlite::Error| {
        AppError::Migration(format!("{}: {}", ADD_ORIGINAL_DURATION, e))
    };

    conn.execute_batch(
        r#"
        ALTER TABLE timers
            ADD COLUMN original_duration_seconds INTEGER NOT NULL DEFAULT 0;

        UPDATE timers SET original_duration_seconds = baseline_seconds;
        "#,
    )
    .map_err(fail)?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added original_duration_seconds to timers')",
        [ADD_ORIGINAL_DURATION],
    )
    .map_err(fail)?;

    Ok(true)
}

/// Public entry point: run all pending migrations.
///
/// Everything runs in one `BEGIN IMMEDIATE` transaction, so connections
/// opening the same database at once apply each step exactly once and a
/// failed step leaves the schema as it was. Safe to call on every open.
///
/// Returns the versions applied by this call (empty when up to date).
pub fn run_pending_migrations(conn: &mut Connection) -> AppResult<Vec<&'static str>> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    let mut applied = Vec::new();

    ensure_log_table(&tx)?;

    if !timers_table_exists(&tx)? {
        create_timers_table(&tx)?;
    } else {
        if migrate_add_original_duration(&tx)? {
            applied.push(ADD_ORIGINAL_DURATION);
        }
        tx.execute_batch("CREATE INDEX IF NOT EXISTS idx_timers_created_at ON timers(created_at);")?;
    }

    tx.commit()?;
    Ok(applied)
}
