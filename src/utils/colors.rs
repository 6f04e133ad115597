//! ANSI color helper utilities for terminal output.

use crate::models::phase::TimerPhase;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Running → green, Paused → yellow, Finished → red.
pub fn color_for_phase(phase: TimerPhase) -> &'static str {
    match phase {
        TimerPhase::Running => GREEN,
        TimerPhase::Paused => YELLOW,
        TimerPhase::Finished => RED,
    }
}

pub fn colorize_phase(phase: TimerPhase) -> String {
    format!("{}{}{}", color_for_phase(phase), phase.as_str(), RESET)
}

/// Grey placeholder for empty values.
pub fn colorize_optional(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => format!("{GREY}--{RESET}"),
    }
}
