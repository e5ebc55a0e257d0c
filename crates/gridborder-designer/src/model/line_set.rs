//! Sparse storage for drawn border segments.

use std::collections::BTreeMap;

use gridborder_core::Color;

use super::{Line, LineKey, Orientation};

/// Bounding box over the `(x, y)` of every stored segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineBounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

/// Summary of a line set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineStatistics {
    pub horizontal: usize,
    pub vertical: usize,
    pub total: usize,
    /// `None` when the set is empty.
    pub bounds: Option<LineBounds>,
}

/// The set of drawn border segments, at most one per key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineSet {
    lines: BTreeMap<LineKey, Color>,
}

impl LineSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn has(&self, key: &LineKey) -> bool {
        self.lines.contains_key(key)
    }

    pub fn get(&self, key: &LineKey) -> Option<Line> {
        self.lines.get(key).map(|color| Line::new(*key, *color))
    }

    /// Inserts the segment unless it is already present. Returns whether
    /// the set changed.
    pub fn add(&mut self, key: LineKey, color: Color) -> bool {
        if self.lines.contains_key(&key) {
            return false;
        }
        self.lines.insert(key, color);
        true
    }

    /// Removes the segment. Returns whether it was present.
    pub fn remove(&mut self, key: &LineKey) -> bool {
        self.lines.remove(key).is_some()
    }

    /// Inserts an absent segment or recolors a present one whose color
    /// differs. Never removes.
    pub fn toggle(&mut self, key: LineKey, color: Color) -> bool {
        match self.lines.get_mut(&key) {
            Some(existing) if *existing == color => false,
            Some(existing) => {
                *existing = color;
                true
            }
            None => {
                self.lines.insert(key, color);
                true
            }
        }
    }

    /// Inserts every segment with `color`, recoloring those already
    /// present. Returns the number of segments that changed.
    pub fn add_many<I>(&mut self, keys: I, color: Color) -> usize
    where
        I: IntoIterator<Item = LineKey>,
    {
        keys.into_iter()
            .filter(|key| self.lines.insert(*key, color) != Some(color))
            .count()
    }

    /// Removes every listed segment. Returns the number removed.
    pub fn remove_many<'a, I>(&mut self, keys: I) -> usize
    where
        I: IntoIterator<Item = &'a LineKey>,
    {
        keys.into_iter()
            .filter(|key| self.lines.remove(*key).is_some())
            .count()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Segments in key order.
    pub fn iter(&self) -> impl Iterator<Item = Line> + '_ {
        self.lines.iter().map(|(key, color)| Line::new(*key, *color))
    }

    pub fn keys(&self) -> impl Iterator<Item = &LineKey> + '_ {
        self.lines.keys()
    }

    pub fn statistics(&self) -> LineStatistics {
        let mut stats = LineStatistics::default();
        for key in self.lines.keys() {
            match key.orientation {
                Orientation::Horizontal => stats.horizontal += 1,
                Orientation::Vertical => stats.vertical += 1,
            }
            stats.bounds = Some(match stats.bounds {
                None => LineBounds {
                    min_x: key.x,
                    min_y: key.y,
                    max_x: key.x,
                    max_y: key.y,
                },
                Some(b) => LineBounds {
                    min_x: b.min_x.min(key.x),
                    min_y: b.min_y.min(key.y),
                    max_x: b.max_x.max(key.x),
                    max_y: b.max_y.max(key.y),
                },
            });
        }
        stats.total = stats.horizontal + stats.vertical;
        stats
    }

    /// Moves every segment by `(dx, dy)` and drops those that fall outside
    /// a `width` x `height` grid. Returns the number dropped.
    pub(crate) fn translate_and_clip(&mut self, dx: i32, dy: i32, width: i32, height: i32) -> usize {
        let before = self.lines.len();
        self.lines = std::mem::take(&mut self.lines)
            .into_iter()
            .filter_map(|(key, color)| Some((key.translated(dx, dy)?, color)))
            .filter(|(key, _)| key.in_bounds(width, height))
            .collect();
        before - self.lines.len()
    }
}

impl FromIterator<Line> for LineSet {
    fn from_iter<T: IntoIterator<Item = Line>>(iter: T) -> Self {
        Self {
            lines: iter.into_iter().map(|line| (line.key, line.color)).collect(),
        }
    }
}
