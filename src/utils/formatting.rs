//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Display width of `s` in terminal columns (CJK labels count double).
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Pad to `width` terminal columns; `format!("{:<w$}")` counts chars, not columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = display_width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

pub fn pad_left(s: &str, width: usize) -> String {
    let w = display_width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - w), s)
    }
}

/// One decimal place, formatted from the exact binary value: exact halves
/// go to even (`32.25` → `"32.2"`), everything else to the nearest digit.
pub fn one_decimal(v: f64) -> String {
    format!("{:.1}", v)
}

/// `0.6667` → `"66.7%"`
pub fn percent(share: f64) -> String {
    format!("{:.1}%", share * 100.0)
}

/// Blank categorical values are shown as a placeholder rather than nothing.
pub fn label_or_placeholder(label: &str) -> &str {
    if label.trim().is_empty() {
        "(blank)"
    } else {
        label
    }
}
