//! Cell-width measurement for terminal layout.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::types::TextAlign;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Cut `s` to at most `max_width` cells, marking the cut with `…`.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    let Some(budget) = max_width.checked_sub(1) else {
        return String::new();
    };

    let mut used = 0;
    let mut kept: String = s
        .chars()
        .take_while(|&c| {
            used += char_width(c);
            used <= budget
        })
        .collect();
    kept.push('…');
    kept
}

/// Truncate or pad `s` to exactly `width` cells.
pub fn pad_to_width(s: &str, width: usize, align: TextAlign) -> String {
    let text = truncate_to_width(s, width);
    let slack = width.saturating_sub(display_width(&text));
    let left = align_offset(slack, align);
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(slack - left))
}

pub fn align_offset(slack: usize, align: TextAlign) -> usize {
    match align {
        TextAlign::Left => 0,
        TextAlign::Center => slack / 2,
        TextAlign::Right => slack,
    }
}
