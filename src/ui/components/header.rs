//! Header component renderer.
//!
//! Draws the panel title in bold theme colors. In the results phase the title
//! is the submitted query and the right end carries the expand toggle.

use super::Panel;
use crate::ui::helpers::{position_cursor, text_width, truncate_to_width};
use crate::ui::layout::{cell_rect, HitTarget, WidgetLayout};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

const SHOW_MORE: &str = "▾ more";
const SHOW_LESS: &str = "▴ less";

/// Renders the header row at `row` and returns the next row.
///
/// # Layout
///
/// ```text
/// TITLE .............................. [▾ more]
/// ```
///
/// The title is truncated with `…` when it would collide with the toggle.
pub fn render_header(
    row: usize,
    panel: &Panel,
    header: &HeaderInfo,
    theme: &Theme,
    layout: &mut WidgetLayout,
) -> usize {
    let width = panel.content_width();
    let toggle = header
        .expand_toggle
        .map(|expanded| if expanded { SHOW_LESS } else { SHOW_MORE });
    let toggle_width = toggle.map_or(0, |t| text_width(t) + 1);

    let title = truncate_to_width(&header.title, width.saturating_sub(toggle_width));
    let title_len = text_width(&title);

    position_cursor(row, panel.content_col());
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{title}");
    print!("{}", " ".repeat(width.saturating_sub(title_len + toggle_width)));
    print!("{}", Theme::reset());

    if let Some(toggle) = toggle {
        let toggle_len = text_width(toggle);
        let col = panel.content_col() + width.saturating_sub(toggle_len);
        position_cursor(row, col);
        print!("{}", Theme::fg(&theme.colors.accent));
        print!("{toggle}");
        print!("{}", Theme::reset());
        layout.push(cell_rect(row, col, toggle_len, 1), HitTarget::ExpandToggle);
    }

    row + 1
}
