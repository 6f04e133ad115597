//! Human and JSON rendering of timer states and statuses.

use crate::errors::{AppError, AppResult};
use crate::models::phase::TimerPhase;
use crate::models::timer::{TimerRecord, TimerState, TimerStatus};
use crate::utils::colors::{CYAN, RESET, colorize_optional, colorize_phase};
use crate::utils::formatting::{bold, pad_right};
use crate::utils::table::{Column, Table};
use crate::utils::{format_seconds, progress_bar};
use chrono::{DateTime, Local, Utc};
use serde::Serialize;

pub fn to_json<T: Serialize>(value: &T) -> AppResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::Other(e.to_string()))
}

fn local(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}

fn label(name: &str) -> String {
    format!("{}{}{}", CYAN, pad_right(name, 10), RESET)
}

/// Result of start / pause / resume / reset.
pub fn print_state(state: &TimerState, json: bool) -> AppResult<()> {
    if json {
        println!("{}", to_json(state)?);
        return Ok(());
    }

    let phase = TimerPhase::from_flags(state.is_running, state.remaining_seconds);
    let anchor = state.anchor_time.as_ref().map(local);

    println!("{}", bold(&format!("⏱  Timer #{}", state.id)));
    println!("   {}: {}", label("Remaining"), format_seconds(state.remaining_seconds));
    println!("   {}: {}", label("State"), colorize_phase(phase));
    println!("   {}: {}", label("Since"), colorize_optional(anchor.as_deref()));
    println!("   {}: {}", label("Created"), local(&state.created_at));
    Ok(())
}

pub fn print_status(status: &TimerStatus, json: bool, bar_width: Option<usize>) -> AppResult<()> {
    if json {
        println!("{}", to_json(status)?);
        return Ok(());
    }

    let phase = TimerPhase::from_flags(status.is_running, status.remaining_seconds);

    println!("{}", bold(&format!("⏱  Timer #{}", status.id)));
    println!("   {}: {}", label("Remaining"), format_seconds(status.remaining_seconds));
    println!("   {}: {}", label("State"), colorize_phase(phase));
    match bar_width {
        Some(w) => println!(
            "   {}: {}",
            label("Progress"),
            progress_bar(status.progress_percentage, w)
        ),
        None => println!(
            "   {}: {:.2}%",
            label("Progress"),
            status.progress_percentage
        ),
    }
    if phase.is_finished() {
        println!("   🔔 Time's up!");
    }
    Ok(())
}

#[derive(Serialize)]
struct ListEntry<'a> {
    #[serde(flatten)]
    state: TimerState,
    original_duration_seconds: i64,
    live: &'a TimerStatus,
}

pub fn print_list(
    timers: &[(TimerRecord, TimerStatus)],
    json: bool,
) -> AppResult<()> {
    if json {
        let entries: Vec<ListEntry> = timers
            .iter()
            .map(|(t, st)| ListEntry {
                state: t.to_state(),
                original_duration_seconds: t.original_duration_seconds,
                live: st,
            })
            .collect();
        println!("{}", to_json(&entries)?);
        return Ok(());
    }

    if timers.is_empty() {
        println!("No timers yet. Start one with `rcountdown start`.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::right("ID"),
        Column::right("DURATION"),
        Column::right("REMAINING"),
        Column::left("STATE"),
        Column::right("PROGRESS"),
        Column::left("CREATED"),
    ]);

    for (t, st) in timers {
        table.add_row(vec![
            t.id.to_string(),
            format_seconds(t.original_duration_seconds),
            format_seconds(st.remaining_seconds),
            colorize_phase(TimerPhase::from_flags(st.is_running, st.remaining_seconds)),
            format!("{:.2}%", st.progress_percentage),
            local(&t.created_at),
        ]);
    }

    print!("{}", table.render());
    Ok(())
}
