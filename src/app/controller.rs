//! The widget controller: state, timers and outside-click watcher together.
//!
//! [`WidgetController`] is what a host embeds. It exposes one method per
//! widget operation, routes pointer-downs through the
//! [`OutsideClickWatcher`], and runs the [`TimerQueue`] on a virtual clock the
//! host advances. Nothing here sleeps or spawns: a Zellij plugin advances the
//! clock from wall time, tests advance it by hand.
//!
//! # Example
//!
//! ```rust
//! use askbar::app::{WidgetController, WidgetPhase, WidgetSettings};
//! use askbar::ui::Theme;
//! use std::time::Duration;
//!
//! let mut widget = WidgetController::new(WidgetSettings::default(), Theme::default());
//! widget.toggle_expand();
//! widget.submit_query("Top Stories");
//! assert_eq!(widget.state().phase, WidgetPhase::Searching);
//!
//! widget.advance_by(Duration::from_millis(3000));
//! assert_eq!(widget.state().phase, WidgetPhase::Results);
//! ```

use super::handler::{handle_event, Event};
use super::modes::ClickTarget;
use super::outside::{OutsideClickWatcher, PointerEvent};
use super::settings::WidgetSettings;
use super::timers::TimerQueue;
use crate::app::{Action, AppState};
use crate::domain::Rect;
use crate::ui::layout::HitTarget;
use crate::ui::theme::Theme;
use std::fmt;
use std::time::Duration;

type SuggestionListener = Box<dyn FnMut(&str)>;

/// One live widget instance.
pub struct WidgetController {
    state: AppState,
    timers: TimerQueue,
    watcher: OutsideClickWatcher,
    boundary: Option<Rect>,
    now: Duration,
    on_suggestion_selected: Option<SuggestionListener>,
    torn_down: bool,
}

impl fmt::Debug for WidgetController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetController")
            .field("state", &self.state)
            .field("timers", &self.timers)
            .field("watcher", &self.watcher)
            .field("boundary", &self.boundary)
            .field("now", &self.now)
            .field("has_listener", &self.on_suggestion_selected.is_some())
            .field("torn_down", &self.torn_down)
            .finish()
    }
}

impl WidgetController {
    #[must_use]
    pub fn new(settings: WidgetSettings, theme: Theme) -> Self {
        let state = AppState::new(settings, theme);
        let mut watcher = OutsideClickWatcher::new();
        watcher.set_enabled(state.is_open);

        Self {
            state,
            timers: TimerQueue::new(),
            watcher,
            boundary: None,
            now: Duration::ZERO,
            on_suggestion_selected: None,
            torn_down: false,
        }
    }

    /// Registers the host callback fired once per picked suggestion.
    #[must_use]
    pub fn with_suggestion_listener<F>(mut self, listener: F) -> Self
    where
        F: FnMut(&str) + 'static,
    {
        self.on_suggestion_selected = Some(Box::new(listener));
        self
    }

    /// Read-only snapshot of the widget state.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Current virtual time.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    #[must_use]
    pub const fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    #[must_use]
    pub const fn watcher(&self) -> &OutsideClickWatcher {
        &self.watcher
    }

    /// Sets the rectangle outside of which a pointer-down collapses the widget.
    pub fn set_boundary(&mut self, boundary: Option<Rect>) {
        self.boundary = boundary;
    }

    #[must_use]
    pub const fn boundary(&self) -> Option<Rect> {
        self.boundary
    }

    /// Applies one event and runs its actions. Returns whether state changed.
    ///
    /// After teardown every event is dropped.
    pub fn dispatch(&mut self, event: Event) -> bool {
        if self.torn_down {
            tracing::trace!(?event, "event after teardown dropped");
            return false;
        }

        let (changed, actions) = handle_event(&mut self.state, &event);
        self.execute(actions);
        self.watcher.set_enabled(self.state.is_open);
        changed
    }

    fn execute(&mut self, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::ArmTimer { timer, delay } => {
                    self.timers.schedule(self.now + delay, timer);
                }
                Action::CancelStaleTimers { current } => {
                    self.timers.cancel_stale(current);
                }
                Action::NotifySuggestionSelected(text) => {
                    if let Some(listener) = self.on_suggestion_selected.as_mut() {
                        listener(&text);
                    }
                }
            }
        }
    }

    pub fn toggle_expand(&mut self) -> bool {
        self.dispatch(Event::ToggleExpand)
    }

    pub fn change_search_text(&mut self, text: &str) -> bool {
        self.dispatch(Event::ChangeSearchText(text.to_string()))
    }

    pub fn focus_search(&mut self) -> bool {
        self.dispatch(Event::FocusSearch)
    }

    pub fn blur_search(&mut self) -> bool {
        self.dispatch(Event::BlurSearch)
    }

    pub fn click_widget(&mut self, target: ClickTarget) -> bool {
        self.dispatch(Event::ClickWidget(target))
    }

    pub fn select_autocomplete_suggestion(&mut self, text: &str) -> bool {
        self.dispatch(Event::SelectAutocompleteSuggestion(text.to_string()))
    }

    /// Submits `text`; blank text is ignored.
    pub fn submit_query(&mut self, text: &str) -> bool {
        self.dispatch(Event::SubmitQuery(text.to_string()))
    }

    pub fn click_suggestion(&mut self, text: &str) -> bool {
        self.dispatch(Event::ClickSuggestion(text.to_string()))
    }

    pub fn toggle_results_expanded(&mut self) -> bool {
        self.dispatch(Event::ToggleResultsExpanded)
    }

    pub fn change_follow_up_text(&mut self, text: &str) -> bool {
        self.dispatch(Event::ChangeFollowUpText(text.to_string()))
    }

    pub fn handle_outside_interaction(&mut self) -> bool {
        self.dispatch(Event::OutsideInteraction)
    }

    pub fn request_more(&mut self) -> bool {
        self.dispatch(Event::MoreClicked)
    }

    pub fn request_voice_input(&mut self) -> bool {
        self.dispatch(Event::MicClicked)
    }

    /// Routes a pointer-down.
    ///
    /// Outside the boundary it goes to the watcher, which collapses an open
    /// widget. Inside, the element under the pointer handles it first and
    /// then the widget as a whole sees the click, so a click anywhere but
    /// the search input ends `Typing`. A click that reopens a folded widget
    /// never reaches the widget level, so the resumed phase survives it.
    pub fn pointer_down(&mut self, event: &PointerEvent, target: Option<HitTarget>) -> bool {
        if self.torn_down {
            return false;
        }
        let was_open = self.state.is_open;

        let mut outside = false;
        self.watcher.observe(event, self.boundary, |_| outside = true);
        if outside {
            return self.handle_outside_interaction();
        }

        let Some(target) = target else {
            return false;
        };

        tracing::trace!(?target, "pointer down inside widget");

        let (changed, click) = match target {
            HitTarget::Trigger => (self.toggle_expand(), ClickTarget::Elsewhere),
            HitTarget::SearchInput => (self.focus_search(), ClickTarget::SearchInput),
            HitTarget::Mic => (self.request_voice_input(), ClickTarget::Elsewhere),
            HitTarget::Autocomplete(text) => {
                (self.select_autocomplete_suggestion(&text), ClickTarget::Elsewhere)
            }
            HitTarget::Suggestion(text) => (self.click_suggestion(&text), ClickTarget::Elsewhere),
            HitTarget::More => (self.request_more(), ClickTarget::Elsewhere),
            HitTarget::ExpandToggle => (self.toggle_results_expanded(), ClickTarget::Elsewhere),
            HitTarget::FollowUpInput | HitTarget::Panel => (false, ClickTarget::Elsewhere),
        };

        if !was_open {
            return changed;
        }
        self.click_widget(click) || changed
    }

    /// Advances the clock by `delta`, firing every timer that falls due.
    pub fn advance_by(&mut self, delta: Duration) -> bool {
        self.advance_to(self.now + delta)
    }

    /// Advances the clock to `target`, firing due timers in deadline order.
    ///
    /// Each timer fires with the clock set to its own deadline, so timers it
    /// arms are measured from there. The clock never runs backwards.
    pub fn advance_to(&mut self, target: Duration) -> bool {
        if self.torn_down || target < self.now {
            return false;
        }

        let mut changed = false;
        while let Some((deadline, timer)) = self.timers.pop_due(target) {
            self.now = deadline;
            changed |= self.dispatch(Event::TimerFired(timer));
        }
        self.now = target;
        changed
    }

    /// When the next pending timer is due, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        if self.torn_down {
            return None;
        }
        self.timers.next_deadline()
    }

    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Cancels all timers and disarms the watcher. Later calls are no-ops.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        tracing::debug!(pending = self.timers.len(), "widget torn down");
        self.timers.clear();
        self.watcher.set_enabled(false);
        self.on_suggestion_selected = None;
        self.torn_down = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::WidgetPhase;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn open_widget() -> WidgetController {
        WidgetController::new(
            WidgetSettings {
                initially_expanded: true,
                ..WidgetSettings::default()
            },
            Theme::default(),
        )
    }

    #[test]
    fn watcher_tracks_open_flag() {
        let mut widget = WidgetController::new(WidgetSettings::default(), Theme::default());
        assert!(!widget.watcher().is_armed());
        widget.toggle_expand();
        assert!(widget.watcher().is_armed());
        widget.toggle_expand();
        assert!(!widget.watcher().is_armed());
    }

    #[test]
    fn pointer_outside_boundary_collapses() {
        let mut widget = open_widget();
        widget.set_boundary(Some(Rect::new(0, 0, 10, 5)));

        assert!(!widget.pointer_down(&PointerEvent::left(2, 2), Some(HitTarget::Panel)));
        assert!(widget.state().is_open);

        assert!(widget.pointer_down(&PointerEvent::right(20, 2), None));
        assert!(!widget.state().is_open);
        assert!(!widget.watcher().is_armed());
    }

    #[test]
    fn autocomplete_click_selects_then_leaves_typing() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut widget = open_widget().with_suggestion_listener(move |s| sink.borrow_mut().push(s.to_string()));
        widget.set_boundary(Some(Rect::new(0, 0, 40, 20)));

        widget.pointer_down(&PointerEvent::left(3, 3), Some(HitTarget::SearchInput));
        assert_eq!(widget.state().phase, WidgetPhase::Typing);
        widget.change_search_text("nat");

        widget.pointer_down(
            &PointerEvent::left(4, 3),
            Some(HitTarget::Autocomplete("NATO summit".into())),
        );
        assert_eq!(widget.state().search_text, "NATO summit");
        assert_eq!(widget.state().phase, WidgetPhase::Idle);
        assert_eq!(*seen.borrow(), vec!["NATO summit".to_string()]);
    }

    #[test]
    fn trigger_click_resumes_typing() {
        let mut widget = open_widget();
        widget.focus_search();
        widget.change_search_text("he");
        widget.handle_outside_interaction();
        widget.set_boundary(Some(Rect::new(1, 1, 16, 1)));

        assert!(widget.pointer_down(&PointerEvent::left(1, 3), Some(HitTarget::Trigger)));
        assert!(widget.state().is_open);
        assert_eq!(widget.state().phase, WidgetPhase::Typing);
        assert_eq!(widget.state().search_text, "he");
    }

    #[test]
    fn advance_to_never_goes_backwards() {
        let mut widget = open_widget();
        widget.advance_by(Duration::from_secs(5));
        assert!(!widget.advance_to(Duration::from_secs(1)));
        assert_eq!(widget.now(), Duration::from_secs(5));
    }

    #[test]
    fn chained_timers_measure_from_their_parent_deadline() {
        let mut widget = open_widget();
        widget.submit_query("q");
        widget.advance_by(Duration::from_millis(10_000));

        assert_eq!(widget.state().phase, WidgetPhase::Results);
        assert!(!widget.state().sources_loading);
        assert_eq!(widget.next_deadline(), None);
    }

    #[test]
    fn teardown_drops_everything() {
        let mut widget = open_widget();
        widget.submit_query("q");
        widget.teardown();

        assert!(widget.is_torn_down());
        assert_eq!(widget.next_deadline(), None);
        assert!(!widget.toggle_expand());
        assert!(!widget.pointer_down(&PointerEvent::left(99, 99), None));
        assert_eq!(widget.state().phase, WidgetPhase::Searching);
    }
}
