//! Live status computation: a pure function of a stored record and "now".
//!
//! Nothing here touches the database. Elapsed time is folded into the stored
//! baseline only by the engine, on pause.

use crate::models::timer::{TimerRecord, TimerStatus};
use chrono::{DateTime, Utc};

/// Whole seconds between `anchor` and `now`, truncated.
/// A `now` earlier than the anchor counts as zero elapsed.
pub fn elapsed_seconds(anchor: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - anchor).num_seconds().max(0)
}

/// Remaining seconds at `now`, never negative.
pub fn live_remaining(record: &TimerRecord, now: DateTime<Utc>) -> i64 {
    match (record.is_running, record.anchor_time) {
        (true, Some(anchor)) => {
            let elapsed = elapsed_seconds(anchor, now);
            record.baseline_seconds.saturating_sub(elapsed).max(0)
        }
        _ => record.baseline_seconds.max(0),
    }
}

/// Completion in percent, clamped to [0, 100] and rounded to 2 decimals.
/// A zero-length timer is always complete.
pub fn progress_percentage(original_duration_seconds: i64, remaining_seconds: i64) -> f64 {
    if original_duration_seconds <= 0 {
        return 100.0;
    }

    let done = (original_duration_seconds - remaining_seconds) as f64;
    let pct = (done / original_duration_seconds as f64 * 100.0).clamp(0.0, 100.0);

    (pct * 100.0).round() / 100.0
}

pub fn compute_status(record: &TimerRecord, now: DateTime<Utc>) -> TimerStatus {
    let remaining = live_remaining(record, now);

    TimerStatus {
        id: record.id,
        remaining_seconds: remaining,
        is_running: record.is_running,
        is_finished: remaining == 0,
        progress_percentage: progress_percentage(record.original_duration_seconds, remaining),
    }
}
