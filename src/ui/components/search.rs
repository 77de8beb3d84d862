//! Search bar component renderer.
//!
//! Renders the bordered input box used both for the primary query and for the
//! results follow-up, with a mic button at its right end.

use super::Panel;
use crate::ui::helpers::{position_cursor, text_width};
use crate::ui::layout::{cell_rect, HitTarget, WidgetLayout};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{SearchBarInfo, SearchBarKind};

const MIC_LABEL: &str = "[mic]";
const CURSOR: char = '▏';

/// Renders the input box at `row` and returns `row + 3`.
///
/// # Layout
///
/// ```text
/// ┌──────────────────────────────┐
/// │ query▏                  [mic]│
/// └──────────────────────────────┘
/// ```
///
/// An empty query shows the placeholder dimmed. When the text is wider than
/// the box, the tail stays visible.
pub fn render_search_bar(
    row: usize,
    panel: &Panel,
    bar: &SearchBarInfo,
    theme: &Theme,
    layout: &mut WidgetLayout,
) -> usize {
    let box_width = panel.content_width();
    let inner_width = box_width.saturating_sub(2);
    let mic_width = text_width(MIC_LABEL);
    let text_width_avail = inner_width.saturating_sub(mic_width + 2);
    let col = panel.content_col();

    position_cursor(row, col);
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let (text, text_color) = if bar.query.is_empty() {
        (bar.placeholder.clone(), &theme.colors.text_dim)
    } else {
        (visible_tail(&bar.query, text_width_avail), &theme.colors.text_normal)
    };
    let cursor = if bar.focused && !bar.read_only {
        CURSOR.to_string()
    } else {
        String::new()
    };
    let shown: String = text.chars().take(text_width_avail).collect();
    let used = 1 + text_width(&shown) + text_width(&cursor);

    position_cursor(row + 1, col);
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("│");
    print!("{}", Theme::fg(text_color));
    print!(" {shown}");
    print!("{}", Theme::fg(&theme.colors.accent));
    print!("{cursor}");
    print!("{}", " ".repeat(inner_width.saturating_sub(used + mic_width)));
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{MIC_LABEL}");
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, col);
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let mic_col = col + 1 + inner_width.saturating_sub(mic_width);
    layout.push(cell_rect(row + 1, mic_col, mic_width, 1), HitTarget::Mic);

    let target = match bar.kind {
        SearchBarKind::Primary => HitTarget::SearchInput,
        SearchBarKind::FollowUp => HitTarget::FollowUpInput,
    };
    layout.push(cell_rect(row, col, box_width, 3), target);

    row + 3
}

/// Last `width` characters of `text`.
fn visible_tail(text: &str, width: usize) -> String {
    let count = text.chars().count();
    text.chars().skip(count.saturating_sub(width)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tail_keeps_the_end_of_long_input() {
        assert_eq!(visible_tail("climate change", 6), "change");
        assert_eq!(visible_tail("short", 10), "short");
    }
}
