use chrono::{DateTime, Utc};
use serde::Serialize;

/// One row of the `timers` table.
///
/// `baseline_seconds` is the remaining time frozen at the last transition
/// (creation, pause, reset). While the timer runs, the live value is derived
/// from it together with `anchor_time`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerRecord {
    pub id: i64,
    pub baseline_seconds: i64,              // ⇔ timers.baseline_seconds
    pub original_duration_seconds: i64,     // ⇔ timers.original_duration_seconds
    pub is_running: bool,                   // ⇔ timers.is_running (0/1)
    pub anchor_time: Option<DateTime<Utc>>, // ⇔ timers.anchor_time (NULL when paused)
    pub created_at: DateTime<Utc>,          // ⇔ timers.created_at
}

impl TimerRecord {
    /// A freshly started timer. The id is assigned by the store on insert.
    pub fn started(duration_seconds: i64, now: DateTime<Utc>) -> Self {
        Self {
            id: 0,
            baseline_seconds: duration_seconds,
            original_duration_seconds: duration_seconds,
            is_running: true,
            anchor_time: Some(now),
            created_at: now,
        }
    }

    /// Projection returned by every mutating operation.
    pub fn to_state(&self) -> TimerState {
        TimerState {
            id: self.id,
            remaining_seconds: self.baseline_seconds,
            is_running: self.is_running,
            anchor_time: self.anchor_time,
            created_at: self.created_at,
        }
    }
}

/// Result of start / pause / resume / reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimerState {
    pub id: i64,
    pub remaining_seconds: i64,
    pub is_running: bool,
    pub anchor_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Live view of a timer, recomputed on every query and never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimerStatus {
    pub id: i64,
    pub remaining_seconds: i64,
    pub is_running: bool,
    pub is_finished: bool,
    pub progress_percentage: f64,
}
