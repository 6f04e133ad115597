//! Duration parsing and formatting for whole-second countdowns.

use crate::errors::{AppError, AppResult};
use regex::Regex;

/// Parse a duration given as plain seconds (`240`) or with unit suffixes
/// (`90s`, `4m`, `1h30m`, `4m30s`). Returns the total in seconds.
pub fn parse_duration(input: &str) -> AppResult<i64> {
    let s = input.trim().to_lowercase();

    if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) {
        return s
            .parse::<i64>()
            .map_err(|_| AppError::InvalidInput(format!("duration out of range: {}", input)));
    }

    let re = Regex::new(r"^(?:(\d+)h)?(?:(\d+)m)?(?:(\d+)s)?$")
        .map_err(|e| AppError::Other(e.to_string()))?;

    let caps = re
        .captures(&s)
        .filter(|c| c.get(1).is_some() || c.get(2).is_some() || c.get(3).is_some())
        .ok_or_else(|| AppError::InvalidInput(format!("invalid duration: {}", input)))?;

    let part = |idx: usize, unit: i64| -> AppResult<i64> {
        match caps.get(idx) {
            Some(m) => m
                .as_str()
                .parse::<i64>()
                .ok()
                .and_then(|v| v.checked_mul(unit))
                .ok_or_else(|| AppError::InvalidInput(format!("duration out of range: {}", input))),
            None => Ok(0),
        }
    };

    let total = [part(1, 3600)?, part(2, 60)?, part(3, 1)?]
        .into_iter()
        .try_fold(0i64, |acc, v| acc.checked_add(v))
        .ok_or_else(|| AppError::InvalidInput(format!("duration out of range: {}", input)))?;

    Ok(total)
}

/// `MM:SS`, or `H:MM:SS` from one hour up.
pub fn format_seconds(secs: i64) -> String {
    let sign = if secs < 0 { "-" } else { "" };
    let s = secs.abs();
    let (h, m, sec) = (s / 3600, (s % 3600) / 60, s % 60);

    if h > 0 {
        format!("{}{}:{:02}:{:02}", sign, h, m, sec)
    } else {
        format!("{}{:02}:{:02}", sign, m, sec)
    }
}
