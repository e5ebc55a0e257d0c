use serde::{Deserialize, Serialize};
use std::fmt;

use gridborder_core::Color;

/// Which way a border segment runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Runs along a row boundary, between vertically adjacent cells.
    Horizontal,
    /// Runs along a column boundary, between horizontally adjacent cells.
    Vertical,
}

impl Orientation {
    /// Short code used in serialized line keys.
    pub fn code(&self) -> char {
        match self {
            Self::Horizontal => 'h',
            Self::Vertical => 'v',
        }
    }

    /// The other orientation.
    pub fn perpendicular(&self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

/// Identity of a border segment.
///
/// A horizontal key `(x, y)` is the border above cell `(x, y)` (row boundary
/// `y`, cell column `x`). A vertical key `(x, y)` is the border left of cell
/// `(x, y)` (column boundary `x`, cell row `y`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineKey {
    pub orientation: Orientation,
    pub x: i32,
    pub y: i32,
}

impl LineKey {
    pub fn new(x: i32, y: i32, orientation: Orientation) -> Self {
        Self { orientation, x, y }
    }

    pub fn horizontal(x: i32, y: i32) -> Self {
        Self::new(x, y, Orientation::Horizontal)
    }

    pub fn vertical(x: i32, y: i32) -> Self {
        Self::new(x, y, Orientation::Vertical)
    }

    /// Whether the segment exists on a `width` x `height` grid.
    pub fn in_bounds(&self, width: i32, height: i32) -> bool {
        match self.orientation {
            Orientation::Horizontal => {
                (0..width).contains(&self.x) && (0..=height).contains(&self.y)
            }
            Orientation::Vertical => {
                (0..=width).contains(&self.x) && (0..height).contains(&self.y)
            }
        }
    }

    /// The same segment moved by `(dx, dy)`, or `None` if a coordinate
    /// overflows.
    pub fn translated(&self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self::new(
            self.x.checked_add(dx)?,
            self.y.checked_add(dy)?,
            self.orientation,
        ))
    }

    /// Key text used by the import/export format, e.g. `3,4,h`.
    pub fn to_key_string(&self) -> String {
        format!("{},{},{}", self.x, self.y, self.orientation.code())
    }
}

impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", self.orientation, self.x, self.y)
    }
}

/// A drawn border segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    pub key: LineKey,
    pub color: Color,
}

impl Line {
    pub fn new(key: LineKey, color: Color) -> Self {
        Self { key, color }
    }

    pub fn x(&self) -> i32 {
        self.key.x
    }

    pub fn y(&self) -> i32 {
        self.key.y
    }

    pub fn orientation(&self) -> Orientation {
        self.key.orientation
    }
}
