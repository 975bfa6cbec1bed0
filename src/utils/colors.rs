//! ANSI color helper utilities for terminal output.
use crate::utils::formatting::pad_left;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Productivity color:
/// \>= 100% → green
/// \>= 50% → yellow
/// below → red
pub fn color_for_productivity(percent: f64) -> &'static str {
    if percent >= 100.0 {
        GREEN
    } else if percent >= 50.0 {
        YELLOW
    } else {
        RED
    }
}

/// Right-align a count in `width` columns, greyed out when zero.
pub fn colorize_count(count: i64, width: usize) -> String {
    let cell = pad_left(&count.to_string(), width);
    if count == 0 {
        format!("{GREY}{cell}{RESET}")
    } else {
        cell
    }
}
