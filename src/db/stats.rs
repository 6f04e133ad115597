use crate::db::log::count_operation;
use crate::db::pool::DbPool;
use crate::db::queries::count_timers;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TIMERS
    //
    let (total, running) = count_timers(&pool.conn)?;
    println!(
        "{}• Total timers:{} {}{}{} ({} running, {} stopped)",
        CYAN,
        RESET,
        GREEN,
        total,
        RESET,
        running,
        total - running
    );

    //
    // 3) CREATION RANGE
    //
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT created_at FROM timers ORDER BY created_at ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT created_at FROM timers ORDER BY created_at DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Created:{}", CYAN, RESET);
    println!("    first: {}", fmt_first);
    println!("    last:  {}", fmt_last);

    //
    // 4) TRANSITIONS
    //
    println!("{}• Transitions logged:{}", CYAN, RESET);
    for op in ["start", "pause", "resume", "reset"] {
        println!("    {:<7} {}", op, count_operation(&pool.conn, op)?);
    }

    println!();
    Ok(())
}
