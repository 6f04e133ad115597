use rcountdown::db::initialize::init_db;
use rcountdown::errors::AppError;
use rcountdown::{ManualClock, TimerEngine};
use rusqlite::Connection;
use std::sync::{Arc, Barrier};
use std::thread;

mod common;
use common::{create_legacy_db, setup_test_db, t0};

fn column_count(conn: &Connection, column: &str) -> i64 {
    conn.query_row(
        "SELECT COUNT(*) FROM pragma_table_info('timers') WHERE name = ?1",
        [column],
        |r| r.get(0),
    )
    .unwrap()
}

#[test]
fn test_legacy_db_gets_original_duration_backfilled() {
    let db_path = setup_test_db("legacy_migration");
    create_legacy_db(&db_path);

    let mut eng = TimerEngine::open(&db_path, ManualClock::new(t0())).unwrap();

    let rec = eng.get(1).unwrap();
    assert_eq!(rec.baseline_seconds, 150);
    assert_eq!(rec.original_duration_seconds, 150);

    // reset now uses the back-filled value
    assert_eq!(eng.reset(1).unwrap().remaining_seconds, 150);

    let applied: i64 = eng
        .pool()
        .conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(applied, 1);
}

#[test]
fn test_migrations_are_idempotent() {
    let db_path = setup_test_db("migrations_idempotent");
    let mut conn = Connection::open(&db_path).unwrap();

    init_db(&mut conn).unwrap();
    init_db(&mut conn).unwrap();
    init_db(&mut conn).unwrap();

    let tables: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name IN ('timers', 'log')",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(tables, 2);
}

#[test]
fn test_schema_rejects_running_row_without_anchor() {
    let db_path = setup_test_db("schema_check");
    let mut conn = Connection::open(&db_path).unwrap();
    init_db(&mut conn).unwrap();

    let res = conn.execute(
        "INSERT INTO timers (baseline_seconds, original_duration_seconds, is_running, anchor_time, created_at)
         VALUES (10, 10, 1, NULL, '2026-01-10T08:00:00.000Z')",
        [],
    );
    assert!(res.is_err());
}

#[test]
fn test_concurrent_opens_migrate_legacy_db_once() {
    for round in 0..10 {
        let db_path = setup_test_db(&format!("legacy_concurrent_{}", round));
        create_legacy_db(&db_path);

        let workers = 6;
        let barrier = Arc::new(Barrier::new(workers));
        let handles: Vec<_> = (0..workers)
            .map(|_| {
                let db_path = db_path.clone();
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    TimerEngine::open(&db_path, ManualClock::new(t0()))
                        .map(|eng| eng.get(1).map(|r| r.original_duration_seconds))
                })
            })
            .collect();

        for h in handles {
            let original = h.join().unwrap().expect("open").expect("get");
            assert_eq!(original, 150);
        }

        let conn = Connection::open(&db_path).unwrap();
        assert_eq!(column_count(&conn, "original_duration_seconds"), 1);

        let applied: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(applied, 1, "round {}", round);
    }
}

#[test]
fn test_failed_migration_leaves_schema_untouched() {
    let db_path = setup_test_db("legacy_broken");
    {
        // no baseline column to back-fill from
        let conn = Connection::open(&db_path).unwrap();
        conn.execute_batch(
            "CREATE TABLE timers (id INTEGER PRIMARY KEY, remaining_seconds INTEGER NOT NULL);",
        )
        .unwrap();
    }

    let res = TimerEngine::open(&db_path, ManualClock::new(t0()));
    assert!(matches!(res, Err(AppError::Migration(_))));

    let conn = Connection::open(&db_path).unwrap();
    assert_eq!(column_count(&conn, "original_duration_seconds"), 0);
}

#[test]
fn test_pool_with_conn_runs_migrations() {
    use rcountdown::db::migrate::run_pending_migrations;
    use rcountdown::db::pool::DbPool;

    let db_path = setup_test_db("pool_with_conn");
    create_legacy_db(&db_path);

    let mut pool = DbPool::new(&db_path).unwrap();
    let applied = pool.with_conn(run_pending_migrations).unwrap();
    assert_eq!(applied.len(), 1);

    // second pass finds nothing left to do
    let applied = pool.with_conn(run_pending_migrations).unwrap();
    assert!(applied.is_empty());
}
