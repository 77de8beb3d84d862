//! "Searching through …" animation line.

use super::Panel;
use crate::ui::helpers::{position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchingInfo;

/// Renders the prefix dimmed and the current word in the accent color.
pub fn render_searching(row: usize, panel: &Panel, info: &SearchingInfo, theme: &Theme) -> usize {
    let line_len = text_width(&info.prefix) + 1 + text_width(&info.word) + 3;

    position_cursor(row, panel.content_col());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{} ", info.prefix);
    print!("{}", Theme::italic());
    print!("{}", Theme::fg(&theme.colors.accent));
    print!("{}...", info.word);
    print!("{}", Theme::reset());
    print!("{}", " ".repeat(panel.content_width().saturating_sub(line_len)));

    row + 1
}
