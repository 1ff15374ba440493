//! Horizontal bar charts for the terminal.

use crate::models::distribution::Distribution;
use crate::utils::colors::{RESET, color_for_count};
use crate::utils::formatting::{bold, display_width, label_or_placeholder, pad_left, pad_right};

const BAR: char = '█';

/// Bar length for `count`, scaled so `max` fills `width`. Non-zero counts
/// always get at least one block.
pub fn bar_length(count: usize, max: usize, width: usize) -> usize {
    if count == 0 || max == 0 {
        return 0;
    }
    ((count * width) / max).max(1)
}

/// Render `title` followed by one line per entry: label, bar, count.
pub fn render_bar_chart(title: &str, dist: &Distribution, width: usize) -> String {
    let mut out = String::new();
    out.push_str(&bold(title));
    out.push('\n');

    let label_w = dist
        .entries
        .iter()
        .map(|e| display_width(label_or_placeholder(&e.label)))
        .max()
        .unwrap_or(0);
    let count_w = dist.max_count().to_string().len();
    let max = dist.max_count();

    for e in &dist.entries {
        let bar: String = std::iter::repeat_n(BAR, bar_length(e.count, max, width)).collect();
        out.push_str(&format!(
            "  {} │{}{}{} {}\n",
            pad_right(label_or_placeholder(&e.label), label_w),
            color_for_count(e.count),
            pad_right(&bar, width),
            RESET,
            pad_left(&e.count.to_string(), count_w),
        ));
    }

    out
}
