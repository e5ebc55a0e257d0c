//! Document data model: border segments, the line set and highlights.

mod highlight;
mod line;
mod line_set;

pub use highlight::{Highlight, HighlightKind, HighlightList};
pub use line::{Line, LineKey, Orientation};
pub use line_set::{LineBounds, LineSet, LineStatistics};

/// A cell position `(x, y)` on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn in_bounds(&self, width: i32, height: i32) -> bool {
        (0..width).contains(&self.x) && (0..height).contains(&self.y)
    }

    /// The border above the cell.
    pub fn top(&self) -> LineKey {
        LineKey::horizontal(self.x, self.y)
    }

    /// The border below the cell.
    pub fn bottom(&self) -> LineKey {
        LineKey::horizontal(self.x, self.y + 1)
    }

    /// The border left of the cell.
    pub fn left(&self) -> LineKey {
        LineKey::vertical(self.x, self.y)
    }

    /// The border right of the cell.
    pub fn right(&self) -> LineKey {
        LineKey::vertical(self.x + 1, self.y)
    }
}
