use serde::Serialize;

/// Phase of a timer as observed at a given instant.
///
/// Finished is never stored: a running record whose live remaining time hit
/// zero is reported as Finished while its `is_running` flag stays set.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum TimerPhase {
    Running,
    Paused,
    Finished,
}

impl TimerPhase {
    pub fn from_flags(is_running: bool, remaining_seconds: i64) -> Self {
        if remaining_seconds <= 0 {
            TimerPhase::Finished
        } else if is_running {
            TimerPhase::Running
        } else {
            TimerPhase::Paused
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimerPhase::Running => "running",
            TimerPhase::Paused => "paused",
            TimerPhase::Finished => "finished",
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, TimerPhase::Finished)
    }
}
