use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;

mod common;
use common::{create_legacy_db, init_db, rti, setup_test_db};

fn json_of(db_path: &str, args: &[&str]) -> Value {
    let mut full = vec!["--db", db_path, "--test"];
    full.extend_from_slice(args);
    full.push("--json");

    let out = rti().args(&full).output().expect("run rcountdown");
    assert!(
        out.status.success(),
        "command {:?} failed: {}",
        args,
        String::from_utf8_lossy(&out.stderr)
    );
    serde_json::from_slice(&out.stdout).expect("valid JSON on stdout")
}

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    rti()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_start_uses_default_duration() {
    let db_path = setup_test_db("cli_default_duration");
    init_db(&db_path);

    let state = json_of(&db_path, &["start"]);
    assert_eq!(state["id"], 1);
    assert_eq!(state["remaining_seconds"], 240);
    assert_eq!(state["is_running"], true);
    assert!(state["anchor_time"].is_string());
    assert!(state["created_at"].is_string());
}

#[test]
fn test_start_with_unit_duration_and_status() {
    let db_path = setup_test_db("cli_status");
    init_db(&db_path);

    let state = json_of(&db_path, &["start", "--duration", "10m"]);
    assert_eq!(state["remaining_seconds"], 600);

    let status = json_of(&db_path, &["status", "1"]);
    let remaining = status["remaining_seconds"].as_i64().unwrap();
    assert!((595..=600).contains(&remaining), "remaining = {}", remaining);
    assert_eq!(status["is_running"], true);
    assert_eq!(status["is_finished"], false);

    rti()
        .args(["--db", &db_path, "--test", "status", "1"])
        .assert()
        .success()
        .stdout(contains("Timer #1"))
        .stdout(contains("Remaining"))
        .stdout(contains("running"));
}

#[test]
fn test_pause_resume_reset_cycle() {
    let db_path = setup_test_db("cli_cycle");
    init_db(&db_path);

    json_of(&db_path, &["start", "--duration", "90"]);

    let paused = json_of(&db_path, &["pause", "1"]);
    assert_eq!(paused["is_running"], false);
    assert!(paused["anchor_time"].is_null());
    let left = paused["remaining_seconds"].as_i64().unwrap();
    assert!((85..=90).contains(&left));

    // stop is the same operation, and pausing twice changes nothing
    let stopped = json_of(&db_path, &["stop", "1"]);
    assert_eq!(stopped["remaining_seconds"], paused["remaining_seconds"]);

    let resumed = json_of(&db_path, &["resume", "1"]);
    assert_eq!(resumed["is_running"], true);
    assert_eq!(resumed["remaining_seconds"], paused["remaining_seconds"]);

    let reset = json_of(&db_path, &["reset", "1"]);
    assert_eq!(reset["remaining_seconds"], 90);
    assert_eq!(reset["is_running"], false);

    let status = json_of(&db_path, &["status", "1"]);
    assert_eq!(status["remaining_seconds"], 90);
    assert_eq!(status["progress_percentage"], 0.0);
}

#[test]
fn test_resume_running_timer_fails() {
    let db_path = setup_test_db("cli_resume_running");
    init_db(&db_path);
    json_of(&db_path, &["start", "--duration", "30"]);

    rti()
        .args(["--db", &db_path, "--test", "resume", "1"])
        .assert()
        .failure()
        .stderr(contains("Timer with id 1 is already running"));
}

#[test]
fn test_unknown_timer_fails() {
    let db_path = setup_test_db("cli_unknown");
    init_db(&db_path);

    for cmd in ["status", "pause", "resume", "reset"] {
        rti()
            .args(["--db", &db_path, "--test", cmd, "99"])
            .assert()
            .failure()
            .stderr(contains("Timer with id 99 not found"));
    }
}

#[test]
fn test_invalid_durations_are_rejected() {
    let db_path = setup_test_db("cli_invalid_duration");
    init_db(&db_path);

    for bad in ["0", "0m", "soon"] {
        rti()
            .args(["--db", &db_path, "--test", "start", "--duration", bad])
            .assert()
            .failure()
            .stderr(contains("Invalid input"));
    }

    rti()
        .args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("No timers yet"));
}

#[test]
fn test_list_shows_newest_first() {
    let db_path = setup_test_db("cli_list");
    init_db(&db_path);

    json_of(&db_path, &["start", "--duration", "60"]);
    json_of(&db_path, &["start", "--duration", "120"]);
    json_of(&db_path, &["pause", "2"]);

    let list = json_of(&db_path, &["list"]);
    let items = list.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], 2);
    assert_eq!(items[1]["id"], 1);
    assert_eq!(items[0]["original_duration_seconds"], 120);
    assert_eq!(items[0]["live"]["is_running"], false);

    rti()
        .args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("REMAINING"))
        .stdout(contains("paused").and(contains("running")));
}

#[test]
fn test_log_print_shows_transitions() {
    let db_path = setup_test_db("cli_log");
    init_db(&db_path);

    json_of(&db_path, &["start", "--duration", "60"]);
    json_of(&db_path, &["pause", "1"]);

    rti()
        .args(["--db", &db_path, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("start"))
        .stdout(contains("pause"))
        .stdout(contains("timer #1"));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("cli_db_info");
    init_db(&db_path);
    json_of(&db_path, &["start", "--duration", "60"]);

    rti()
        .args(["--db", &db_path, "--test", "db", "--info", "--check", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Total timers"))
        .stdout(contains("Integrity check passed"))
        .stdout(contains("Vacuum completed"));
}

#[test]
fn test_json_output_stays_clean_on_legacy_db() {
    let db_path = setup_test_db("cli_legacy_json");
    create_legacy_db(&db_path);

    // the migration notice goes to stderr, stdout carries only the document
    rti()
        .args(["--db", &db_path, "--test", "list", "--json"])
        .assert()
        .success()
        .stderr(contains("Migration applied"))
        .stdout(contains("Migration applied").not());

    let status = json_of(&db_path, &["status", "1"]);
    assert_eq!(status["remaining_seconds"], 150);
}

#[test]
fn test_db_migrate_reports_up_to_date() {
    let db_path = setup_test_db("cli_db_migrate");
    init_db(&db_path);

    rti()
        .args(["--db", &db_path, "--test", "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("up to date"));
}
