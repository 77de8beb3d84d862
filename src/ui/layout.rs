//! Hit regions recorded while drawing a frame.
//!
//! Zellij reports mouse clicks as bare cell coordinates, so every clickable
//! element registers its rectangle here as it is drawn. The plugin keeps the
//! last [`WidgetLayout`] around and resolves clicks against it; the overall
//! widget rectangle doubles as the boundary for outside-click detection.

use crate::domain::{Position, Rect};

/// Left margin of the widget, in cells.
pub const PANEL_MARGIN: usize = 1;

/// Widest the open panel will grow, border included.
pub const PANEL_MAX_WIDTH: usize = 72;

/// Border plus one cell of padding on each side.
const PANEL_CHROME_WIDTH: usize = 4;

/// Total width of the open panel for a pane `cols` wide.
#[must_use]
pub fn panel_width(cols: usize) -> usize {
    cols.saturating_sub(PANEL_MARGIN * 2).min(PANEL_MAX_WIDTH)
}

/// Text width available inside the open panel.
///
/// ```
/// use askbar::ui::layout::content_width;
///
/// assert_eq!(content_width(200), 68);
/// assert_eq!(content_width(3), 0);
/// ```
#[must_use]
pub fn content_width(cols: usize) -> usize {
    panel_width(cols).saturating_sub(PANEL_CHROME_WIDTH)
}

/// A clickable element of the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    /// The collapsed trigger button.
    Trigger,
    /// The primary search input.
    SearchInput,
    /// Microphone button at the end of a search bar.
    Mic,
    /// An autocomplete row.
    Autocomplete(String),
    /// A quick-pick suggestion chip.
    Suggestion(String),
    More,
    /// Results expand/collapse button.
    ExpandToggle,
    /// The results follow-up input.
    FollowUpInput,
    /// Inside the widget, on nothing in particular.
    Panel,
}

/// Boundary and clickable regions of the last drawn frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetLayout {
    /// The whole widget, trigger or panel.
    pub boundary: Option<Rect>,
    regions: Vec<(Rect, HitTarget)>,
}

impl WidgetLayout {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a clickable region. Earlier regions win on overlap.
    pub fn push(&mut self, rect: Rect, target: HitTarget) {
        if rect.width > 0 && rect.height > 0 {
            self.regions.push((rect, target));
        }
    }

    pub fn set_boundary(&mut self, boundary: Rect) {
        self.boundary = Some(boundary);
    }

    /// Resolves a click position to the element under it.
    ///
    /// Returns `None` outside the widget and [`HitTarget::Panel`] for
    /// positions inside it that hit no registered region.
    #[must_use]
    pub fn hit(&self, pos: Position) -> Option<HitTarget> {
        if let Some((_, target)) = self.regions.iter().find(|(rect, _)| rect.contains(pos)) {
            return Some(target.clone());
        }

        self.boundary
            .filter(|b| b.contains(pos))
            .map(|_| HitTarget::Panel)
    }

    pub fn regions(&self) -> impl Iterator<Item = &(Rect, HitTarget)> {
        self.regions.iter()
    }

    /// Rectangle of the first region for `target`, if drawn.
    #[must_use]
    pub fn region_of(&self, target: &HitTarget) -> Option<Rect> {
        self.regions
            .iter()
            .find(|(_, t)| t == target)
            .map(|(rect, _)| *rect)
    }
}

/// Cell rectangle for something drawn at a 1-indexed cursor position.
#[must_use]
pub const fn cell_rect(row: usize, col: usize, width: usize, height: usize) -> Rect {
    Rect::new(col.saturating_sub(1), row.saturating_sub(1), width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_prefers_regions_then_panel_then_none() {
        let mut layout = WidgetLayout::new();
        layout.set_boundary(Rect::new(0, 0, 20, 10));
        layout.push(Rect::new(2, 2, 5, 1), HitTarget::More);

        assert_eq!(layout.hit(Position::new(2, 3)), Some(HitTarget::More));
        assert_eq!(layout.hit(Position::new(5, 5)), Some(HitTarget::Panel));
        assert_eq!(layout.hit(Position::new(12, 5)), None);
    }

    #[test]
    fn regions_outside_the_boundary_still_resolve() {
        let mut layout = WidgetLayout::new();
        layout.push(Rect::new(0, 0, 4, 1), HitTarget::Trigger);
        assert_eq!(layout.hit(Position::new(0, 1)), Some(HitTarget::Trigger));
        assert_eq!(layout.hit(Position::new(1, 1)), None);
    }

    #[test]
    fn empty_regions_are_not_recorded() {
        let mut layout = WidgetLayout::new();
        layout.push(Rect::new(0, 0, 0, 1), HitTarget::Mic);
        assert_eq!(layout.regions().count(), 0);
    }

    #[test]
    fn cell_rect_converts_from_one_indexed() {
        assert_eq!(cell_rect(3, 5, 2, 1), Rect::new(4, 2, 2, 1));
    }

    #[test]
    fn content_width_caps_at_panel_max() {
        assert_eq!(panel_width(80), PANEL_MAX_WIDTH);
        assert_eq!(content_width(40), 34);
    }
}
