#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, TimeZone, Utc};
use rcountdown::{ManualClock, TimerEngine};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

pub fn rti() -> Command {
    cargo_bin_cmd!("rcountdown")
}

/// Create a unique test DB path inside the system temp dir and remove any
/// existing file (including WAL side files)
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rcountdown.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    for suffix in ["", "-wal", "-shm", "-journal"] {
        fs::remove_file(format!("{}{}", db_path, suffix)).ok();
    }
    db_path
}

/// Fixed starting instant for deterministic clocks.
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
}

pub type TestEngine = TimerEngine<Arc<ManualClock>>;

/// Fresh database + manual clock starting at `t0()`.
pub fn engine(name: &str) -> (TestEngine, Arc<ManualClock>) {
    let db_path = setup_test_db(name);
    let clock = Arc::new(ManualClock::new(t0()));
    let engine = TimerEngine::open(&db_path, Arc::clone(&clock)).expect("open engine");
    (engine, clock)
}

/// Initialize a DB through the CLI (test mode, no config file written)
pub fn init_db(db_path: &str) {
    rti()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// A database created before each timer kept its original duration:
/// one paused timer with 150 s left.
pub fn create_legacy_db(db_path: &str) {
    let conn = rusqlite::Connection::open(db_path).expect("open legacy db");
    conn.execute_batch(
        r#"
        CREATE TABLE timers (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            baseline_seconds INTEGER NOT NULL,
            is_running       INTEGER NOT NULL DEFAULT 0,
            anchor_time      TEXT,
            created_at       TEXT NOT NULL
        );
        INSERT INTO timers (baseline_seconds, is_running, anchor_time, created_at)
        VALUES (150, 0, NULL, '2026-01-10T08:00:00.000Z');
        "#,
    )
    .expect("legacy schema");
}
