//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate the selected slot to its layout
//!    function, collecting hit regions along the way
//!
//! # Example
//!
//! ```rust
//! use askbar::app::{AppState, WidgetSettings};
//! use askbar::ui::{render, HitTarget, Theme};
//! use askbar::domain::Position;
//!
//! let state = AppState::new(WidgetSettings::default(), Theme::default());
//! let layout = render(&state, 24, 80);
//! assert_eq!(layout.hit(Position::new(1, 3)), Some(HitTarget::Trigger));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::layout::WidgetLayout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{UIViewModel, WidgetView};

/// Renders the widget to stdout and returns the layout it drew.
///
/// Prints ANSI-styled output with absolute cursor positioning. Does not
/// clear the screen.
pub fn render(state: &AppState, rows: usize, cols: usize) -> WidgetLayout {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols)
}

/// Renders a view model with the layout of its slot.
fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> WidgetLayout {
    let mut layout = WidgetLayout::new();

    match &vm.view {
        WidgetView::Trigger { label } => {
            components::render_trigger(label, theme, &mut layout);
        }
        WidgetView::Idle {
            header,
            search_bar,
            suggestions,
        } => {
            components::render_idle_mode(header, search_bar, suggestions, theme, cols, &mut layout);
        }
        WidgetView::Typing {
            header,
            autocomplete,
            search_bar,
        } => {
            components::render_typing_mode(header, autocomplete, search_bar, theme, cols, &mut layout);
        }
        WidgetView::Searching {
            header,
            animation,
            search_bar,
        } => {
            components::render_searching_mode(header, animation, search_bar, theme, cols, &mut layout);
        }
        WidgetView::Results {
            header,
            answer,
            sources,
            follow_up,
            suggestions,
        } => {
            components::render_results_mode(
                header,
                answer,
                sources.as_ref(),
                follow_up,
                suggestions,
                theme,
                cols,
                &mut layout,
            );
        }
    }

    if rows > 0 {
        components::render_footer(rows, &vm.footer, theme, cols);
    }

    layout
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{WidgetPhase, WidgetSettings};
    use crate::domain::Position;
    use crate::ui::layout::HitTarget;

    fn open_state() -> AppState {
        AppState::new(
            WidgetSettings {
                initially_expanded: true,
                ..WidgetSettings::default()
            },
            Theme::default(),
        )
    }

    fn position_of(layout: &WidgetLayout, target: &HitTarget) -> Position {
        let rect = layout.region_of(target).expect("target drawn");
        Position::new(rect.y, rect.x)
    }

    #[test]
    fn idle_layout_has_input_chips_and_more_inside_boundary() {
        let state = open_state();
        let layout = render(&state, 30, 80);
        let boundary = layout.boundary.expect("boundary recorded");

        for target in [
            HitTarget::SearchInput,
            HitTarget::Mic,
            HitTarget::Suggestion("Top Stories".into()),
            HitTarget::Suggestion("Generate a new Wordle".into()),
            HitTarget::More,
        ] {
            let pos = position_of(&layout, &target);
            assert!(boundary.contains(pos), "{target:?} outside boundary");
            assert_eq!(layout.hit(pos), Some(target));
        }
    }

    #[test]
    fn mic_wins_over_the_input_box_it_sits_in() {
        let layout = render(&open_state(), 30, 80);
        let mic = position_of(&layout, &HitTarget::Mic);
        assert_eq!(layout.hit(mic), Some(HitTarget::Mic));
    }

    #[test]
    fn typing_layout_lists_autocomplete_rows() {
        let mut state = open_state();
        state.phase = WidgetPhase::Typing;
        state.set_search_text("cl");

        let layout = render(&state, 30, 80);
        let rows: Vec<_> = layout
            .regions()
            .filter_map(|(_, t)| match t {
                HitTarget::Autocomplete(text) => Some(text.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(rows, state.autocomplete_suggestions);
    }

    #[test]
    fn results_layout_has_toggle_and_follow_up() {
        let mut state = open_state();
        state.begin_search("Top Stories");
        state.complete_search();

        let layout = render(&state, 40, 80);
        assert!(layout.region_of(&HitTarget::ExpandToggle).is_some());
        assert!(layout.region_of(&HitTarget::FollowUpInput).is_some());
        assert!(layout.region_of(&HitTarget::SearchInput).is_none());
    }

    #[test]
    fn trigger_layout_boundary_is_the_button() {
        let state = AppState::new(WidgetSettings::default(), Theme::default());
        let layout = render(&state, 24, 80);
        assert_eq!(layout.boundary, layout.region_of(&HitTarget::Trigger));
        assert_eq!(layout.hit(Position::new(10, 10)), None);
    }
}
