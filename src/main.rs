//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the askbar library and the Zellij plugin
//! system: it feeds keys, clicks and wall time into a [`WidgetController`],
//! keeps a single Zellij timeout armed for the controller's next deadline, and
//! remembers the last drawn layout so clicks can be hit-tested.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, build the controller
//! 2. **Subscribe**: `Key`, `Mouse`, `Timer`, `BeforeClose`
//! 3. **Update**: Advance the virtual clock to wall time, then apply the event
//! 4. **Render**: Draw the widget and record its hit regions and boundary
//! 5. **Close**: Tear the controller down
//!
//! # Keybindings
//!
//! Closed:
//! - `Enter`/`Space`/`/`: Open
//!
//! Idle:
//! - `/`/`Tab`: Focus the search input
//! - `1`-`3`: Pick a suggestion chip
//! - Any other character: Focus and start typing
//! - `Enter`: Search
//! - `Esc`: Collapse
//!
//! Typing:
//! - `Tab`: Accept the first autocomplete item
//! - `Enter`: Search
//! - `Esc`: Leave the input
//!
//! Results:
//! - Characters/`Backspace`: Edit the follow-up
//! - `Enter`: Search the follow-up
//! - `Tab`: Expand or shrink the answer
//! - `Esc`: Collapse

#![allow(clippy::multiple_crate_versions)]

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::time::Duration;
use zellij_tile::prelude::*;

use askbar::app::HostTimeout;
use askbar::ui::WidgetLayout;
use askbar::{ClickTarget, Config, PointerEvent, WidgetController, WidgetPhase};

register_plugin!(State);

/// Plugin state wrapper.
///
/// Wraps the library's controller with Zellij-specific concerns: the wall
/// clock, the armed timeout and the last rendered layout.
struct State {
    controller: WidgetController,

    /// Hit regions from the most recent render.
    layout: WidgetLayout,

    /// Wall-clock origin of the controller's virtual clock.
    started_at: DateTime<Utc>,

    /// The pending Zellij timeout.
    timeout: HostTimeout,
}

impl Default for State {
    fn default() -> Self {
        Self {
            controller: askbar::initialize(&Config::default()),
            layout: WidgetLayout::new(),
            started_at: Utc::now(),
            timeout: HostTimeout::new(),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        askbar::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(?config, "parsed configuration");
        self.controller = askbar::initialize(&config);
        self.started_at = Utc::now();
        self.timeout.clear();

        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::Timer,
            EventType::BeforeClose,
        ]);

        tracing::debug!("plugin load complete");
    }

    /// Handles incoming Zellij events. Returns `true` if the UI should
    /// re-render.
    fn update(&mut self, event: Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let now = self.elapsed();
        let mut should_render = self.controller.advance_to(now);

        should_render |= match event {
            Event::Key(ref key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Timer(_) => {
                self.timeout.clear();
                false
            }
            Event::BeforeClose => {
                self.controller.teardown();
                self.timeout.clear();
                return false;
            }
            _ => false,
        };

        self.rearm_timer(now);
        should_render
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.layout = askbar::ui::render(self.controller.state(), rows, cols);
        self.controller.set_boundary(self.layout.boundary);
    }
}

impl State {
    fn elapsed(&self) -> Duration {
        (Utc::now() - self.started_at).to_std().unwrap_or_default()
    }

    /// Arms a Zellij timeout if the controller now needs waking sooner than
    /// the one already pending.
    fn rearm_timer(&mut self, now: Duration) {
        if let Some(wait) = self.timeout.rearm(self.controller.next_deadline(), now) {
            tracing::trace!(wait_ms = wait.as_millis(), "arming timeout");
            set_timeout(wait.as_secs_f64());
        }
    }

    fn get_event_name(event: &Event) -> String {
        match event {
            Event::Key(key) => format!("Key({:?})", key.bare_key),
            Event::Mouse(mouse) => format!("Mouse({mouse:?})"),
            Event::Timer(_) => "Timer".to_string(),
            Event::BeforeClose => "BeforeClose".to_string(),
            _ => "Other".to_string(),
        }
    }

    fn handle_mouse(&mut self, mouse: Mouse) -> bool {
        let (line, col, left) = match mouse {
            Mouse::LeftClick(line, col) => (line, col, true),
            Mouse::RightClick(line, col) => (line, col, false),
            _ => return false,
        };
        let Ok(row) = usize::try_from(line) else {
            return false;
        };

        let pointer = if left {
            PointerEvent::left(row, col)
        } else {
            PointerEvent::right(row, col)
        };
        let target = self.layout.hit(pointer.position);
        tracing::debug!(?pointer, ?target, "pointer down");

        self.controller.pointer_down(&pointer, target)
    }

    /// Maps a key to widget operations for the current phase.
    fn handle_key(&mut self, key: &KeyWithModifier) -> bool {
        if key.has_modifiers(&[KeyModifier::Ctrl]) || key.has_modifiers(&[KeyModifier::Alt]) {
            return false;
        }

        let state = self.controller.state();
        if !state.is_open {
            return match key.bare_key {
                BareKey::Enter | BareKey::Char(' ' | '/') => self.controller.toggle_expand(),
                _ => false,
            };
        }

        let phase = state.phase;
        let search_text = state.search_text.clone();
        let follow_up = state.follow_up_text.clone();

        if let (WidgetPhase::Idle, BareKey::Char(c)) = (phase, key.bare_key) {
            if let Some(chip) = self.chip_for(c) {
                return self.controller.click_suggestion(&chip);
            }
        }

        match (phase, key.bare_key) {
            (WidgetPhase::Typing, BareKey::Esc) => {
                self.controller.click_widget(ClickTarget::Elsewhere)
            }
            (_, BareKey::Esc) => self.controller.toggle_expand(),

            (WidgetPhase::Idle, BareKey::Char('/') | BareKey::Tab) => self.controller.focus_search(),
            (WidgetPhase::Idle, BareKey::Char(c)) => {
                let focused = self.controller.focus_search();
                self.controller.change_search_text(&format!("{search_text}{c}")) || focused
            }
            (WidgetPhase::Typing, BareKey::Char(c)) => {
                self.controller.change_search_text(&format!("{search_text}{c}"))
            }
            (WidgetPhase::Idle | WidgetPhase::Typing, BareKey::Backspace) => {
                let mut text = search_text;
                text.pop();
                self.controller.change_search_text(&text)
            }
            (WidgetPhase::Idle | WidgetPhase::Typing, BareKey::Enter) => {
                self.controller.submit_query(&search_text)
            }
            (WidgetPhase::Typing, BareKey::Tab) => {
                let first = self.controller.state().autocomplete_suggestions.first().cloned();
                first.is_some_and(|text| self.controller.select_autocomplete_suggestion(&text))
            }

            (WidgetPhase::Results, BareKey::Char(c)) => {
                self.controller.change_follow_up_text(&format!("{follow_up}{c}"))
            }
            (WidgetPhase::Results, BareKey::Backspace) => {
                let mut text = follow_up;
                text.pop();
                self.controller.change_follow_up_text(&text)
            }
            (WidgetPhase::Results, BareKey::Enter) => self.controller.submit_query(&follow_up),
            (WidgetPhase::Results, BareKey::Tab) => self.controller.toggle_results_expanded(),

            _ => false,
        }
    }

    /// The suggestion chip numbered `c`, counting from 1.
    fn chip_for(&self, c: char) -> Option<String> {
        let index = c.to_digit(10)?.checked_sub(1)?;
        self.controller
            .state()
            .settings
            .suggestions
            .get(usize::try_from(index).ok()?)
            .cloned()
    }
}
