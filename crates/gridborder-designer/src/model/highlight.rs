//! Row and column highlights with last-write-wins resolution.

use serde::{Deserialize, Serialize};

use gridborder_core::Color;

/// Whether a highlight covers a row or a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HighlightKind {
    #[serde(rename = "row")]
    Row,
    #[serde(rename = "col")]
    Col,
}

/// A colored row or column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    #[serde(rename = "type")]
    pub kind: HighlightKind,
    pub index: i32,
    pub color: Color,
    /// Milliseconds since the Unix epoch. Later wins.
    pub timestamp: i64,
}

impl Highlight {
    pub fn new(kind: HighlightKind, index: i32, color: Color, timestamp: i64) -> Self {
        Self {
            kind,
            index,
            color,
            timestamp,
        }
    }

    /// Whether this highlight paints cell `(cell_x, cell_y)`.
    pub fn covers(&self, cell_x: i32, cell_y: i32) -> bool {
        match self.kind {
            HighlightKind::Row => self.index == cell_y,
            HighlightKind::Col => self.index == cell_x,
        }
    }

    fn in_bounds(&self, width: i32, height: i32) -> bool {
        match self.kind {
            HighlightKind::Row => (0..height).contains(&self.index),
            HighlightKind::Col => (0..width).contains(&self.index),
        }
    }
}

/// Ordered list of highlights, at most one per `(kind, index)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightList {
    entries: Vec<Highlight>,
}

impl HighlightList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a list from persisted entries, keeping only the newest
    /// entry per `(kind, index)`.
    pub fn from_entries(entries: impl IntoIterator<Item = Highlight>) -> Self {
        let mut list = Self::new();
        for entry in entries {
            match list.find(entry.kind, entry.index) {
                Some(existing) if existing.timestamp >= entry.timestamp => {}
                _ => list.apply(entry),
            }
        }
        list
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Highlight> + '_ {
        self.entries.iter()
    }

    pub fn find(&self, kind: HighlightKind, index: i32) -> Option<&Highlight> {
        self.entries
            .iter()
            .find(|h| h.kind == kind && h.index == index)
    }

    /// Replaces any entry for the same row/column and appends `highlight`.
    pub fn apply(&mut self, highlight: Highlight) {
        self.entries
            .retain(|h| !(h.kind == highlight.kind && h.index == highlight.index));
        self.entries.push(highlight);
    }

    /// Returns whether an entry was removed.
    pub fn remove(&mut self, kind: HighlightKind, index: i32) -> bool {
        let before = self.entries.len();
        self.entries.retain(|h| !(h.kind == kind && h.index == index));
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Effective highlight color of a cell: the newest entry covering its
    /// row or column.
    pub fn color_at(&self, cell_x: i32, cell_y: i32) -> Option<Color> {
        let mut winner: Option<&Highlight> = None;
        for entry in self.entries.iter().filter(|h| h.covers(cell_x, cell_y)) {
            match winner {
                Some(best) if entry.timestamp <= best.timestamp => {}
                _ => winner = Some(entry),
            }
        }
        winner.map(|h| h.color)
    }

    /// Shifts rows by `dy` and columns by `dx`, dropping entries that
    /// leave a `width` x `height` grid. Returns the number dropped.
    pub(crate) fn translate_and_clip(&mut self, dx: i32, dy: i32, width: i32, height: i32) -> usize {
        let before = self.entries.len();
        self.entries.retain_mut(|entry| {
            let shift = match entry.kind {
                HighlightKind::Row => dy,
                HighlightKind::Col => dx,
            };
            match entry.index.checked_add(shift) {
                Some(index) => {
                    entry.index = index;
                    entry.in_bounds(width, height)
                }
                None => false,
            }
        });
        before - self.entries.len()
    }
}
