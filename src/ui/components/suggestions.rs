//! Quick-pick suggestion chips and the "More" button.

use super::Panel;
use crate::ui::helpers::{position_cursor, text_width, truncate_to_width};
use crate::ui::layout::{cell_rect, HitTarget, WidgetLayout};
use crate::ui::theme::Theme;

const MORE_LABEL: &str = "More ›";

/// Renders one numbered chip per suggestion, then "More". Returns the row
/// after the button.
///
/// Chip numbers match the digit keys the plugin binds in `Idle`.
pub fn render_suggestions(
    row: usize,
    panel: &Panel,
    suggestions: &[String],
    theme: &Theme,
    layout: &mut WidgetLayout,
) -> usize {
    let width = panel.content_width();
    let col = panel.content_col();
    let mut current_row = row;

    for (idx, suggestion) in suggestions.iter().enumerate() {
        let chip = format!(" {}  {} ", idx + 1, truncate_to_width(suggestion, width.saturating_sub(6)));
        let chip_len = text_width(&chip);

        position_cursor(current_row, col);
        print!("{}", Theme::fg(&theme.colors.chip_fg));
        print!("{}", Theme::bg(&theme.colors.chip_bg));
        print!("{chip}");
        print!("{}", Theme::reset());
        print!("{}", " ".repeat(width.saturating_sub(chip_len)));

        layout.push(
            cell_rect(current_row, col, chip_len, 1),
            HitTarget::Suggestion(suggestion.clone()),
        );
        current_row += 1;
    }

    let more_len = text_width(MORE_LABEL);
    position_cursor(current_row, col);
    print!("{}", Theme::fg(&theme.colors.accent));
    print!("{MORE_LABEL}");
    print!("{}", Theme::reset());
    print!("{}", " ".repeat(width.saturating_sub(more_len)));
    layout.push(cell_rect(current_row, col, more_len, 1), HitTarget::More);

    current_row + 1
}
