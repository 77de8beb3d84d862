//! Cell-grid geometry used for hit-testing pointer events.
//!
//! Coordinates are zero-based terminal cells relative to the plugin pane,
//! matching what Zellij reports for mouse events.

/// A cell position (row, column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// An axis-aligned rectangle of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    #[must_use]
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self { x, y, width, height }
    }

    /// Whether `pos` lies within the rectangle. Empty rectangles contain nothing.
    ///
    /// ```
    /// use askbar::domain::{Position, Rect};
    ///
    /// let rect = Rect::new(2, 1, 10, 3);
    /// assert!(rect.contains(Position::new(1, 2)));
    /// assert!(!rect.contains(Position::new(4, 2)));
    /// assert!(!rect.contains(Position::new(1, 12)));
    /// ```
    #[must_use]
    pub const fn contains(&self, pos: Position) -> bool {
        pos.col >= self.x
            && pos.col < self.x + self.width
            && pos.row >= self.y
            && pos.row < self.y + self.height
    }

    #[must_use]
    pub const fn bottom(&self) -> usize {
        self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sized_rect_contains_nothing() {
        let rect = Rect::new(3, 3, 0, 0);
        assert!(!rect.contains(Position::new(3, 3)));
    }

    #[test]
    fn edges_are_half_open() {
        let rect = Rect::new(0, 0, 2, 2);
        assert!(rect.contains(Position::new(0, 0)));
        assert!(rect.contains(Position::new(1, 1)));
        assert!(!rect.contains(Position::new(2, 1)));
        assert!(!rect.contains(Position::new(1, 2)));
    }
}
