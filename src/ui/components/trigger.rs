//! Collapsed trigger button renderer.

use crate::ui::helpers::{position_cursor, text_width};
use crate::ui::layout::{cell_rect, HitTarget, WidgetLayout, PANEL_MARGIN};
use crate::ui::theme::Theme;

/// Row the trigger sits on.
const TRIGGER_ROW: usize = 2;

/// Renders the pill-shaped trigger and records it as both the only region
/// and the widget boundary.
pub fn render_trigger(label: &str, theme: &Theme, layout: &mut WidgetLayout) {
    let text = format!("  {label}  ");
    let width = text_width(&text);
    let col = PANEL_MARGIN + 1;

    position_cursor(TRIGGER_ROW, col);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.trigger_fg));
    print!("{}", Theme::bg(&theme.colors.trigger_bg));
    print!("{text}");
    print!("{}", Theme::reset());

    let rect = cell_rect(TRIGGER_ROW, col, width, 1);
    layout.push(rect, HitTarget::Trigger);
    layout.set_boundary(rect);
}
