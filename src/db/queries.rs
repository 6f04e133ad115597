use crate::errors::{AppError, AppResult};
use crate::models::timer::TimerRecord;
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

/// Timestamps are stored as RFC 3339 UTC text with millisecond precision,
/// which also keeps `ORDER BY created_at` chronological.
pub fn ts_to_db(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn ts_from_db(raw: &str) -> std::result::Result<DateTime<Utc>, AppError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| AppError::InvalidTimestamp(raw.to_string()))
}

fn conversion_failure(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

pub fn map_row(row: &Row) -> Result<TimerRecord> {
    let anchor_raw: Option<String> = row.get("anchor_time")?;
    let anchor_time = match anchor_raw {
        Some(s) => Some(ts_from_db(&s).map_err(|e| conversion_failure(4, e))?),
        None => None,
    };

    let created_raw: String = row.get("created_at")?;
    let created_at = ts_from_db(&created_raw).map_err(|e| conversion_failure(5, e))?;

    Ok(TimerRecord {
        id: row.get("id")?,
        baseline_seconds: row.get("baseline_seconds")?,
        original_duration_seconds: row.get("original_duration_seconds")?,
        is_running: row.get::<_, i32>("is_running")? == 1,
        anchor_time,
        created_at,
    })
}

/// Insert a new timer and return the id assigned by SQLite.
pub fn insert_timer(conn: &Connection, t: &TimerRecord) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO timers (baseline_seconds, original_duration_seconds, is_running, anchor_time, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            t.baseline_seconds,
            t.original_duration_seconds,
            if t.is_running { 1 } else { 0 },
            t.anchor_time.as_ref().map(ts_to_db),
            ts_to_db(&t.created_at),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_timer(conn: &Connection, id: i64) -> AppResult<Option<TimerRecord>> {
    let mut stmt = conn.prepare_cached("SELECT * FROM timers WHERE id = ?1")?;
    let timer = stmt.query_row([id], map_row).optional()?;
    Ok(timer)
}

/// Update the mutable columns of a timer.
/// `original_duration_seconds` and `created_at` are never rewritten.
pub fn update_timer(conn: &Connection, t: &TimerRecord) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE timers
         SET baseline_seconds = ?1, is_running = ?2, anchor_time = ?3
         WHERE id = ?4",
        params![
            t.baseline_seconds,
            if t.is_running { 1 } else { 0 },
            t.anchor_time.as_ref().map(ts_to_db),
            t.id,
        ],
    )?;

    if changed == 0 {
        return Err(AppError::NotFound(t.id));
    }
    Ok(())
}

/// All timers, newest first.
pub fn list_timers(conn: &Connection) -> AppResult<Vec<TimerRecord>> {
    let mut stmt = conn.prepare("SELECT * FROM timers ORDER BY created_at DESC, id DESC")?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_timers(conn: &Connection) -> AppResult<(i64, i64)> {
    let (total, running) = conn.query_row(
        "SELECT COUNT(*), COALESCE(SUM(is_running), 0) FROM timers",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;
    Ok((total, running))
}
