//! Formatting utilities used for CLI outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Text progress bar, e.g. `[#######-------------]  35.00%`.
pub fn progress_bar(percentage: f64, width: usize) -> String {
    let pct = percentage.clamp(0.0, 100.0);
    let filled = ((pct / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!(
        "[{}{}] {:>6.2}%",
        "#".repeat(filled),
        "-".repeat(width - filled),
        pct
    )
}
