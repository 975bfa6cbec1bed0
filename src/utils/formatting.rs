//! Formatting utilities used for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Left-align `s` in `width` terminal columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{s}{}", " ".repeat(width.saturating_sub(w)))
}

/// Right-align `s` in `width` terminal columns.
pub fn pad_left(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{s}", " ".repeat(width.saturating_sub(w)))
}

pub fn percent(p: f64) -> String {
    format!("{:.1}%", p)
}

/// Horizontal bar scaled so that `max` fills `width` cells.
///
/// Any positive value gets at least one cell.
pub fn bar(value: f64, max: f64, width: usize) -> String {
    if value <= 0.0 || max <= 0.0 || width == 0 {
        return String::new();
    }
    let cells = ((value / max) * width as f64).round() as usize;
    "█".repeat(cells.clamp(1, width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_counts_display_width() {
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(pad_left("7", 3), "  7");
        assert_eq!(pad_right("日本", 5), "日本 ");
        assert_eq!(pad_right("toolong", 3), "toolong");
    }

    #[test]
    fn bars_scale_to_max() {
        assert_eq!(bar(10.0, 10.0, 20).chars().count(), 20);
        assert_eq!(bar(5.0, 10.0, 20).chars().count(), 10);
        assert_eq!(bar(0.01, 10.0, 20).chars().count(), 1);
        assert_eq!(bar(0.0, 10.0, 20), "");
        assert_eq!(bar(30.0, 10.0, 20).chars().count(), 20);
    }

    #[test]
    fn percent_keeps_one_decimal() {
        assert_eq!(percent(7.9), "7.9%");
        assert_eq!(percent(0.0), "0.0%");
        assert_eq!(percent(125.0), "125.0%");
    }
}
