//! Shared rendering utilities and helpers.
//!
//! Low-level pieces used across components: cursor positioning, prefix
//! highlighting with proper ANSI escape management, and word wrapping.
//! Highlighting and truncation operate on character indices, not bytes.
//!
//! # Example
//!
//! ```rust
//! use askbar::ui::helpers::{truncate_to_width, wrap_text};
//!
//! assert_eq!(wrap_text("one two three", 7), vec!["one two", "three"]);
//! assert_eq!(truncate_to_width("Healthcare reform", 8), "Healthc…");
//! ```

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Renders text with highlighted character ranges.
///
/// Highlighted sections use the theme's match highlight colors; afterwards
/// the `base_fg` color is restored so the rest of the row keeps its style.
///
/// Ranges are `(start, end)` character indices, end exclusive, sorted and
/// non-overlapping. Out-of-range ends are clamped.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, base_fg: &str) {
    if ranges.is_empty() {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end.max(start)].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(base_fg));

        current_pos = end.max(current_pos);
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

/// Greedy word wrap to `width` columns.
///
/// Words longer than `width` are hard-split. A zero width yields no lines.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > width {
            if line_len > 0 {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if line_len == 0 { word.len() } else { line_len + 1 + word.len() };
        if needed > width {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }

        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.extend(word.iter());
        line_len += word.len();
    }

    if line_len > 0 {
        lines.push(line);
    }

    lines
}

/// Cuts `text` to at most `width` characters, marking the cut with `…`.
#[must_use]
pub fn truncate_to_width(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// Display width in cells, counting one per character.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_width_and_keeps_every_word() {
        let text = "Based on recent reporting artificial intelligence is transforming";
        let lines = wrap_text(text, 20);
        assert!(lines.iter().all(|l| l.chars().count() <= 20));
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn wrap_hard_splits_long_words() {
        assert_eq!(wrap_text("abcdefgh ij", 3), vec!["abc", "def", "gh", "ij"]);
    }

    #[test]
    fn wrap_of_zero_width_or_blank_text_is_empty() {
        assert!(wrap_text("anything", 0).is_empty());
        assert!(wrap_text("   ", 10).is_empty());
    }

    #[test]
    fn truncate_leaves_short_text_alone() {
        assert_eq!(truncate_to_width("NATO", 4), "NATO");
        assert_eq!(truncate_to_width("NATO", 0), "");
        assert_eq!(truncate_to_width("NATO summit", 5), "NATO…");
    }
}
