//! Composable UI component renderers.
//!
//! Each component draws one piece of the widget at a given row and returns
//! the next free row. Clickable components also record their rectangles in
//! the frame's [`WidgetLayout`].
//!
//! # Components
//!
//! - [`trigger`]: Collapsed trigger button
//! - [`header`]: Panel title, with the results expand toggle
//! - [`search`]: Search / follow-up input box with mic button
//! - [`autocomplete`]: Prefix-highlighted autocomplete rows
//! - [`suggestions`]: Quick-pick chips and the "More" button
//! - [`searching`]: "Searching through …" animation line
//! - [`answer`]: Answer text and sources
//! - [`footer`]: Keybinding hints on the last pane row
//!
//! # Layout Modes
//!
//! One layout function per presentation slot:
//!
//! - [`render_idle_mode`]: Header + Search bar + Chips + More
//! - [`render_typing_mode`]: Header + Autocomplete + Search bar
//! - [`render_searching_mode`]: Query + Animation + Read-only search bar
//! - [`render_results_mode`]: Query/Toggle + Answer + Sources + Follow-up + Chips + More

mod answer;
mod autocomplete;
mod footer;
mod header;
mod search;
mod searching;
mod suggestions;
mod trigger;

pub use footer::render_footer;
pub use trigger::render_trigger;

use crate::ui::helpers::position_cursor;
use crate::ui::layout::{cell_rect, panel_width, WidgetLayout, PANEL_MARGIN};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    AnswerInfo, AutocompleteItem, HeaderInfo, SearchBarInfo, SearchingInfo, SourcesInfo,
};

use answer::{render_answer, render_sources};
use autocomplete::render_autocomplete;
use header::render_header;
use search::render_search_bar;
use searching::render_searching;
use suggestions::render_suggestions;

/// Horizontal placement of the open panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panel {
    /// 1-indexed column of the left border.
    pub left: usize,
    /// Total width, borders included.
    pub width: usize,
}

impl Panel {
    /// Row of the top border.
    pub const TOP: usize = 1;

    #[must_use]
    pub fn for_pane(cols: usize) -> Self {
        Self {
            left: PANEL_MARGIN + 1,
            width: panel_width(cols),
        }
    }

    /// First column of content, after border and padding.
    #[must_use]
    pub const fn content_col(&self) -> usize {
        self.left + 2
    }

    #[must_use]
    pub const fn content_width(&self) -> usize {
        self.width.saturating_sub(4)
    }

    const fn right(&self) -> usize {
        self.left + self.width.saturating_sub(1)
    }
}

/// Fills one content row with spaces so stale characters disappear.
fn clear_content_row(row: usize, panel: &Panel) {
    position_cursor(row, panel.content_col());
    print!("{}", " ".repeat(panel.content_width()));
}

/// Leaves one empty content row.
fn render_blank(row: usize, panel: &Panel) -> usize {
    clear_content_row(row, panel);
    row + 1
}

/// Draws the rounded frame around rows `TOP..=bottom` and records it as the
/// widget boundary.
fn render_frame(bottom: usize, panel: &Panel, theme: &Theme, layout: &mut WidgetLayout) {
    if panel.width < 2 {
        return;
    }
    let inner = panel.width - 2;

    print!("{}", Theme::fg(&theme.colors.border));
    position_cursor(Panel::TOP, panel.left);
    print!("╭{}╮", "─".repeat(inner));

    for row in Panel::TOP + 1..bottom {
        position_cursor(row, panel.left);
        print!("│ ");
        position_cursor(row, panel.right().saturating_sub(1));
        print!(" │");
    }

    position_cursor(bottom, panel.left);
    print!("╰{}╯", "─".repeat(inner));
    print!("{}", Theme::reset());

    let height = bottom + 1 - Panel::TOP;
    layout.set_boundary(cell_rect(Panel::TOP, panel.left, panel.width, height));
}

/// Idle: title, search bar, chips, "More".
///
/// ```text
/// ╭────────────────────────╮
/// │ Ask Anything!          │
/// │                        │
/// │ ┌────────────────────┐ │
/// │ │ Ask Anything  [mic]│ │
/// │ └────────────────────┘ │
/// │                        │
/// │  1  Top Stories        │
/// │  More ›                │
/// ╰────────────────────────╯
/// ```
pub fn render_idle_mode(
    header: &HeaderInfo,
    search_bar: &SearchBarInfo,
    suggestions: &[String],
    theme: &Theme,
    cols: usize,
    layout: &mut WidgetLayout,
) {
    let panel = Panel::for_pane(cols);
    let mut row = Panel::TOP + 1;

    row = render_header(row, &panel, header, theme, layout);
    row = render_blank(row, &panel);
    row = render_search_bar(row, &panel, search_bar, theme, layout);
    row = render_blank(row, &panel);
    row = render_suggestions(row, &panel, suggestions, theme, layout);

    render_frame(row, &panel, theme, layout);
}

/// Typing: title, autocomplete rows above the focused search bar.
pub fn render_typing_mode(
    header: &HeaderInfo,
    autocomplete: &[AutocompleteItem],
    search_bar: &SearchBarInfo,
    theme: &Theme,
    cols: usize,
    layout: &mut WidgetLayout,
) {
    let panel = Panel::for_pane(cols);
    let mut row = Panel::TOP + 1;

    row = render_header(row, &panel, header, theme, layout);
    row = render_blank(row, &panel);
    if !autocomplete.is_empty() {
        row = render_autocomplete(row, &panel, autocomplete, theme, layout);
        row = render_blank(row, &panel);
    }
    row = render_search_bar(row, &panel, search_bar, theme, layout);

    render_frame(row, &panel, theme, layout);
}

/// Searching: submitted query, animation, read-only search bar.
pub fn render_searching_mode(
    header: &HeaderInfo,
    animation: &SearchingInfo,
    search_bar: &SearchBarInfo,
    theme: &Theme,
    cols: usize,
    layout: &mut WidgetLayout,
) {
    let panel = Panel::for_pane(cols);
    let mut row = Panel::TOP + 1;

    row = render_header(row, &panel, header, theme, layout);
    row = render_blank(row, &panel);
    row = render_searching(row, &panel, animation, theme);
    row = render_blank(row, &panel);
    row = render_search_bar(row, &panel, search_bar, theme, layout);

    render_frame(row, &panel, theme, layout);
}

/// Results: query with expand toggle, answer, sources when expanded,
/// follow-up bar, chips, "More".
#[allow(clippy::too_many_arguments)]
pub fn render_results_mode(
    header: &HeaderInfo,
    answer: &AnswerInfo,
    sources: Option<&SourcesInfo>,
    follow_up: &SearchBarInfo,
    suggestions: &[String],
    theme: &Theme,
    cols: usize,
    layout: &mut WidgetLayout,
) {
    let panel = Panel::for_pane(cols);
    let mut row = Panel::TOP + 1;

    row = render_header(row, &panel, header, theme, layout);
    row = render_blank(row, &panel);
    row = render_answer(row, &panel, answer, theme);
    row = render_blank(row, &panel);
    if let Some(sources) = sources {
        row = render_sources(row, &panel, sources, theme);
        row = render_blank(row, &panel);
    }
    row = render_search_bar(row, &panel, follow_up, theme, layout);
    row = render_blank(row, &panel);
    row = render_suggestions(row, &panel, suggestions, theme, layout);

    render_frame(row, &panel, theme, layout);
}
