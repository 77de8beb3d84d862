//! Event handling and phase transition logic.
//!
//! [`handle_event`] is the only code that mutates [`AppState`]. It applies one
//! [`Event`] and returns whether anything visible changed, plus the
//! [`Action`]s the controller must carry out (arming timers, notifying the
//! host). Every event is accepted in every phase; events that make no sense
//! in the current phase leave the state untouched.
//!
//! # Event Types
//!
//! - **Open/close**: `ToggleExpand`, `OutsideInteraction`
//! - **Primary input**: `FocusSearch`, `BlurSearch`, `ClickWidget`, `ChangeSearchText`
//! - **Selection**: `SelectAutocompleteSuggestion`, `ClickSuggestion`
//! - **Search lifecycle**: `SubmitQuery`, `TimerFired`
//! - **Results**: `ToggleResultsExpanded`, `ChangeFollowUpText`
//! - **Host requests**: `MoreClicked`, `MicClicked`
//!
//! # Example
//!
//! ```rust
//! use askbar::app::{handle_event, AppState, Event, WidgetPhase, WidgetSettings};
//! use askbar::ui::Theme;
//!
//! let mut state = AppState::new(WidgetSettings::default(), Theme::default());
//! let (changed, actions) = handle_event(&mut state, &Event::ToggleExpand);
//! assert!(changed && actions.is_empty());
//! assert_eq!(state.phase, WidgetPhase::Idle);
//! ```

use super::modes::{ClickTarget, WidgetPhase};
use super::timers::{Timer, TimerKind};
use crate::app::{Action, AppState};

/// Everything that can happen to a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Trigger button or explicit collapse.
    ToggleExpand,
    /// A pointer-down outside the widget while it was open.
    OutsideInteraction,
    /// The primary input gained focus.
    FocusSearch,
    /// The primary input lost focus. Informational only.
    BlurSearch,
    /// A click anywhere inside the widget, after the target's own handler.
    ClickWidget(ClickTarget),
    ChangeSearchText(String),
    SelectAutocompleteSuggestion(String),
    /// Submission of the primary input or the results follow-up.
    SubmitQuery(String),
    /// A quick-pick chip.
    ClickSuggestion(String),
    ToggleResultsExpanded,
    ChangeFollowUpText(String),
    MoreClicked,
    MicClicked,
    TimerFired(Timer),
}

/// Applies `event` to `state`.
///
/// Returns `(changed, actions)`: whether the state differs afterwards, and the
/// side effects to run in order.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event and the phase it
/// arrived in.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!(
        "handle_event",
        event_type = ?event,
        phase = state.phase.label(),
        is_open = state.is_open
    )
    .entered();

    match event {
        Event::ToggleExpand => {
            if state.is_open {
                tracing::debug!("collapsing widget");
                state.is_open = false;
            } else {
                if state.phase == WidgetPhase::Collapsed {
                    state.phase = WidgetPhase::Idle;
                }
                tracing::debug!(phase = state.phase.label(), "expanding widget");
                state.is_open = true;
            }
            (true, vec![])
        }
        Event::OutsideInteraction => {
            if !state.is_open {
                return (false, vec![]);
            }
            tracing::debug!("collapsing on outside interaction");
            state.is_open = false;
            (true, vec![])
        }
        Event::FocusSearch => match state.phase {
            WidgetPhase::Idle | WidgetPhase::Typing => {
                state.phase = WidgetPhase::Typing;
                state.refresh_autocomplete();
                (true, vec![])
            }
            _ => {
                tracing::trace!("focus ignored outside idle/typing");
                (false, vec![])
            }
        },
        Event::BlurSearch => {
            tracing::trace!("search input blurred");
            (false, vec![])
        }
        Event::ClickWidget(target) => {
            if state.phase == WidgetPhase::Typing && *target != ClickTarget::SearchInput {
                tracing::debug!("widget click away from input, leaving typing");
                state.phase = WidgetPhase::Idle;
                return (true, vec![]);
            }
            (false, vec![])
        }
        Event::ChangeSearchText(text) => {
            state.set_search_text(text);
            (true, vec![])
        }
        Event::SelectAutocompleteSuggestion(text) => {
            tracing::debug!(suggestion = %text, "autocomplete suggestion selected");
            state.search_text.clone_from(text);
            state.autocomplete_suggestions.clear();
            (true, vec![Action::NotifySuggestionSelected(text.clone())])
        }
        Event::SubmitQuery(raw) => {
            let query = raw.trim();
            if query.is_empty() {
                tracing::trace!("blank submission dropped");
                return (false, vec![]);
            }
            if !state.phase.accepts_submission() {
                tracing::trace!("submission ignored while collapsed");
                return (false, vec![]);
            }

            let token = state.begin_search(query);
            tracing::debug!(query, generation = token.value(), "search started");

            (
                true,
                vec![
                    Action::CancelStaleTimers { current: token },
                    Action::ArmTimer {
                        timer: Timer::new(TimerKind::SearchComplete, token),
                        delay: state.settings.search_delay,
                    },
                    Action::ArmTimer {
                        timer: Timer::new(TimerKind::SearchingTick, token),
                        delay: state.settings.animation_interval,
                    },
                ],
            )
        }
        Event::ClickSuggestion(text) => {
            tracing::debug!(suggestion = %text, "suggestion clicked");
            state.set_search_text(text);
            (true, vec![Action::NotifySuggestionSelected(text.clone())])
        }
        Event::ToggleResultsExpanded => {
            if state.phase != WidgetPhase::Results {
                return (false, vec![]);
            }
            state.results_expanded = !state.results_expanded;
            (true, vec![])
        }
        Event::ChangeFollowUpText(text) => {
            if state.phase != WidgetPhase::Results {
                return (false, vec![]);
            }
            state.follow_up_text.clone_from(text);
            (true, vec![])
        }
        Event::MoreClicked => {
            tracing::info!("more suggestions requested");
            (false, vec![])
        }
        Event::MicClicked => {
            tracing::info!("voice input requested");
            (false, vec![])
        }
        Event::TimerFired(timer) => handle_timer(state, *timer),
    }
}

fn handle_timer(state: &mut AppState, timer: Timer) -> (bool, Vec<Action>) {
    if timer.token != state.generation {
        tracing::debug!(
            kind = ?timer.kind,
            token = timer.token.value(),
            current = state.generation.value(),
            "stale timer ignored"
        );
        return (false, vec![]);
    }

    match (timer.kind, state.phase) {
        (TimerKind::SearchComplete, WidgetPhase::Searching) => {
            state.complete_search();
            tracing::debug!(query = %state.submitted_query, "search completed");
            (
                true,
                vec![Action::ArmTimer {
                    timer: Timer::new(TimerKind::SourcesComplete, timer.token),
                    delay: state.settings.sources_delay,
                }],
            )
        }
        (TimerKind::SourcesComplete, WidgetPhase::Results) => {
            if !state.sources_loading {
                return (false, vec![]);
            }
            state.sources_loading = false;
            tracing::debug!("sources loaded");
            (true, vec![])
        }
        (TimerKind::SearchingTick, WidgetPhase::Searching) => {
            state.searching_frame = state.searching_frame.wrapping_add(1);
            (
                true,
                vec![Action::ArmTimer {
                    timer,
                    delay: state.settings.animation_interval,
                }],
            )
        }
        (kind, phase) => {
            tracing::trace!(?kind, phase = phase.label(), "timer no longer applicable");
            (false, vec![])
        }
    }
}
