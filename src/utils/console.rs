// src/utils/console.rs

//! Operator-facing console output with server-style formatting.
//!
//! Regular log lines go through the `log` facade. These helpers cover the
//! pieces that are not single log records: banners, step counters, run
//! summaries and the per-entry pruning markers. They honor the facade's
//! level, so `RUST_LOG=warn` silences them too.

use std::io::Write;

use chrono::Local;

fn enabled() -> bool {
    log::log_enabled!(log::Level::Info)
}

fn format_line(tag: &str, message: &str) -> String {
    format!("[{}] [{}] {}", Local::now().format("%Y-%m-%d %H:%M:%S"), tag, message)
}

/// Log a header
pub fn header(title: &str) {
    if enabled() {
        let border = "═".repeat(60);
        println!("{}", format_line("INFO", &border));
        println!("{}", format_line("INFO", &format!("  {}", title)));
        println!("{}", format_line("INFO", &border));
    }
}

/// Log a step in a process
pub fn step(step_num: usize, total: usize, message: &str) {
    if enabled() {
        let msg = format!("[STEP {}/{}] {}", step_num, total, message);
        println!("{}", format_line("INFO", &msg));
    }
}

/// Log a summary section
pub fn summary(title: &str, items: &[(&str, String)]) {
    if enabled() {
        println!();
        println!("{}", format_line("SUMMARY", title));
        for (key, value) in items {
            println!("{}", format_line("SUMMARY", &format!("    {}: {}", key, value)));
        }
    }
}

/// Print a single progress marker without a newline (`.` kept, `x` dropped).
pub fn mark(marker: char) {
    if enabled() {
        let mut stdout = std::io::stdout().lock();
        let _ = write!(stdout, "{}", marker);
        let _ = stdout.flush();
    }
}

/// Terminate a run of markers.
pub fn end_marks() {
    if enabled() {
        println!();
    }
}
