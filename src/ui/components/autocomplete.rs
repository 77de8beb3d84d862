//! Autocomplete dropdown renderer.

use super::Panel;
use crate::ui::helpers::{position_cursor, render_highlighted_text, text_width, truncate_to_width};
use crate::ui::layout::{cell_rect, HitTarget, WidgetLayout};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::AutocompleteItem;

/// Renders one row per item with the typed prefix highlighted. Each row is
/// clickable across the full content width.
pub fn render_autocomplete(
    row: usize,
    panel: &Panel,
    items: &[AutocompleteItem],
    theme: &Theme,
    layout: &mut WidgetLayout,
) -> usize {
    let width = panel.content_width();
    let mut current_row = row;

    for item in items {
        let text = truncate_to_width(&item.text, width.saturating_sub(2));

        position_cursor(current_row, panel.content_col());
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("↳ ");
        print!("{}", Theme::fg(&theme.colors.text_normal));
        render_highlighted_text(&text, &item.highlight_ranges, theme, &theme.colors.text_normal);
        print!("{}", " ".repeat(width.saturating_sub(2 + text_width(&text))));
        print!("{}", Theme::reset());

        layout.push(
            cell_rect(current_row, panel.content_col(), width, 1),
            HitTarget::Autocomplete(item.text.clone()),
        );
        current_row += 1;
    }

    current_row
}
