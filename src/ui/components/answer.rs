//! Answer text and sources renderers.

use super::Panel;
use crate::ui::helpers::{position_cursor, text_width, truncate_to_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{AnswerInfo, SourcesInfo};

const LOADING_SOURCES: &str = "Loading sources...";

/// Renders pre-wrapped answer lines, plus a dimmed `…` row when cut short.
pub fn render_answer(row: usize, panel: &Panel, answer: &AnswerInfo, theme: &Theme) -> usize {
    let width = panel.content_width();
    let mut current_row = row;

    print!("{}", Theme::fg(&theme.colors.text_normal));
    for line in &answer.lines {
        position_cursor(current_row, panel.content_col());
        print!("{line}");
        print!("{}", " ".repeat(width.saturating_sub(text_width(line))));
        current_row += 1;
    }

    if answer.truncated {
        position_cursor(current_row, panel.content_col());
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("…");
        print!("{}", " ".repeat(width.saturating_sub(1)));
        current_row += 1;
    }
    print!("{}", Theme::reset());

    current_row
}

/// Renders the "Sources" label followed by either the loading line or one
/// row per source with its relevance right-aligned.
///
/// ```text
/// Sources
/// ▪ Trump impeachment                  75%
/// ```
pub fn render_sources(row: usize, panel: &Panel, sources: &SourcesInfo, theme: &Theme) -> usize {
    let width = panel.content_width();
    let col = panel.content_col();

    position_cursor(row, col);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("Sources");
    print!("{}", Theme::reset());
    print!("{}", " ".repeat(width.saturating_sub(7)));

    let mut current_row = row + 1;
    match sources {
        SourcesInfo::Loading => {
            position_cursor(current_row, col);
            print!("{}", Theme::fg(&theme.colors.accent));
            print!("{LOADING_SOURCES}");
            print!("{}", Theme::reset());
            print!("{}", " ".repeat(width.saturating_sub(text_width(LOADING_SOURCES))));
            current_row += 1;
        }
        SourcesInfo::Loaded(items) => {
            for item in items {
                let relevance_len = text_width(&item.relevance);
                let title = truncate_to_width(&item.title, width.saturating_sub(relevance_len + 3));
                let gap = width.saturating_sub(2 + text_width(&title) + relevance_len);

                position_cursor(current_row, col);
                print!("{}", Theme::fg(&theme.colors.accent));
                print!("▪ ");
                print!("{}", Theme::fg(&theme.colors.text_normal));
                print!("{title}");
                print!("{}", " ".repeat(gap));
                print!("{}", Theme::fg(&theme.colors.text_dim));
                print!("{}", item.relevance);
                print!("{}", Theme::reset());
                current_row += 1;
            }
        }
    }

    current_row
}
