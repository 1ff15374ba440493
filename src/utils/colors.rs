/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Returns GREY for zero counts and CYAN otherwise, used for chart bars.
pub fn color_for_count(count: usize) -> &'static str {
    if count == 0 { GREY } else { CYAN }
}
