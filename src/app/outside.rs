//! Outside-click detection for the open widget.
//!
//! The watcher is a gate, not a listener registry: the host feeds it every
//! pointer-down it sees and the watcher decides whether that interaction
//! counts as "outside". While disarmed it never reports anything, and since
//! it keeps no queue, re-arming cannot replay clicks that happened in
//! between.

use crate::domain::{Position, Rect};

/// Mouse button of a pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
}

/// A pointer-down at a cell position relative to the plugin pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub button: PointerButton,
    pub position: Position,
}

impl PointerEvent {
    #[must_use]
    pub const fn left(row: usize, col: usize) -> Self {
        Self {
            button: PointerButton::Left,
            position: Position::new(row, col),
        }
    }

    #[must_use]
    pub const fn right(row: usize, col: usize) -> Self {
        Self {
            button: PointerButton::Right,
            position: Position::new(row, col),
        }
    }
}

/// Reports pointer-downs that land outside a boundary, only while armed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutsideClickWatcher {
    armed: bool,
}

impl OutsideClickWatcher {
    /// A disarmed watcher.
    #[must_use]
    pub const fn new() -> Self {
        Self { armed: false }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.armed != enabled {
            tracing::trace!(armed = enabled, "outside-click watcher toggled");
        }
        self.armed = enabled;
    }

    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.armed
    }

    /// Checks one pointer-down against `boundary`.
    ///
    /// When armed and the boundary is unknown or does not contain the event,
    /// calls `on_outside` once with the event and returns `true`. Any button
    /// counts.
    ///
    /// ```
    /// use askbar::app::{OutsideClickWatcher, PointerEvent};
    /// use askbar::domain::Rect;
    ///
    /// let mut watcher = OutsideClickWatcher::new();
    /// let boundary = Some(Rect::new(0, 0, 10, 5));
    /// let click = PointerEvent::left(8, 3);
    ///
    /// assert!(!watcher.observe(&click, boundary, |_| {}));
    /// watcher.set_enabled(true);
    /// assert!(watcher.observe(&click, boundary, |_| {}));
    /// ```
    pub fn observe<F>(&self, event: &PointerEvent, boundary: Option<Rect>, on_outside: F) -> bool
    where
        F: FnOnce(&PointerEvent),
    {
        if !self.armed {
            return false;
        }

        let outside = boundary.map_or(true, |rect| !rect.contains(event.position));
        if outside {
            tracing::debug!(
                row = event.position.row,
                col = event.position.col,
                has_boundary = boundary.is_some(),
                "outside interaction"
            );
            on_outside(event);
        }
        outside
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disarmed_watcher_never_fires() {
        let watcher = OutsideClickWatcher::new();
        let mut calls = 0;
        let fired = watcher.observe(&PointerEvent::left(50, 50), None, |_| calls += 1);
        assert!(!fired);
        assert_eq!(calls, 0);
    }

    #[test]
    fn inside_clicks_are_ignored() {
        let mut watcher = OutsideClickWatcher::new();
        watcher.set_enabled(true);
        let boundary = Some(Rect::new(0, 0, 10, 10));
        assert!(!watcher.observe(&PointerEvent::left(5, 5), boundary, |_| {}));
    }

    #[test]
    fn unset_boundary_treats_everything_as_outside() {
        let mut watcher = OutsideClickWatcher::new();
        watcher.set_enabled(true);
        let mut seen = None;
        assert!(watcher.observe(&PointerEvent::right(0, 0), None, |e| seen = Some(*e)));
        assert_eq!(seen, Some(PointerEvent::right(0, 0)));
    }

    #[test]
    fn disarming_stops_reports_immediately() {
        let mut watcher = OutsideClickWatcher::new();
        watcher.set_enabled(true);
        watcher.set_enabled(false);
        assert!(!watcher.is_armed());
        assert!(!watcher.observe(&PointerEvent::left(99, 99), None, |_| {}));
    }
}
