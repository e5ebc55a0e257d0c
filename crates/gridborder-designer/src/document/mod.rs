//! The editable document: grid dimensions, border lines, highlights and
//! the active color.
//!
//! [`Document`] is the only mutation surface for the line set and the
//! highlight list. Every operation validates first and mutates second, so
//! a failed call leaves the document untouched. Undo/redo lives outside
//! the core and works on [`DocumentSnapshot`]s.
//!
//! This module is split into submodules:
//! - `lines`: line edits, fill, extension and row/column bulk edits
//! - `highlights`: row/column highlights
//! - `transform`: resizing
//! - `file_io`: save/load through the JSON format

mod file_io;
mod highlights;
mod lines;
mod transform;

use chrono::Utc;
use gridborder_core::constants::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};
use gridborder_core::{Color, GridError};
use tracing::debug;

use crate::model::{HighlightList, LineSet, LineStatistics};

/// A grid border diagram.
#[derive(Debug, Clone)]
pub struct Document {
    width: i32,
    height: i32,
    lines: LineSet,
    highlights: HighlightList,
    active_color: Color,
    revision: u64,
    last_timestamp: i64,
}

/// Full, equality-comparable copy of a document's content.
///
/// Serializes to the import/export format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSnapshot {
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) lines: LineSet,
    pub(crate) highlights: HighlightList,
    pub(crate) active_color: Color,
}

impl DocumentSnapshot {
    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn lines(&self) -> &LineSet {
        &self.lines
    }

    pub fn highlights(&self) -> &HighlightList {
        &self.highlights
    }

    pub fn active_color(&self) -> Color {
        self.active_color
    }
}

impl Document {
    /// Creates an empty `width` x `height` document.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            lines: LineSet::new(),
            highlights: HighlightList::new(),
            active_color: Color::default(),
            revision: 0,
            last_timestamp: 0,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn lines(&self) -> &LineSet {
        &self.lines
    }

    pub fn highlights(&self) -> &HighlightList {
        &self.highlights
    }

    pub fn active_color(&self) -> Color {
        self.active_color
    }

    pub fn set_active_color(&mut self, color: Color) {
        if self.active_color != color {
            debug!("Active color {} -> {}", self.active_color, color);
            self.active_color = color;
            self.touch();
        }
    }

    /// Counter bumped by every mutation that changed something.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn statistics(&self) -> LineStatistics {
        self.lines.statistics()
    }

    /// Removes all lines and highlights. Dimensions and color are kept.
    pub fn reset(&mut self) {
        if self.lines.is_empty() && self.highlights.is_empty() {
            return;
        }
        debug!(
            "Reset document ({} lines, {} highlights)",
            self.lines.len(),
            self.highlights.len()
        );
        self.lines.clear();
        self.highlights.clear();
        self.touch();
    }

    pub fn snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot {
            width: self.width,
            height: self.height,
            lines: self.lines.clone(),
            highlights: self.highlights.clone(),
            active_color: self.active_color,
        }
    }

    /// Replaces the whole content with `snapshot`.
    pub fn restore(&mut self, snapshot: DocumentSnapshot) {
        debug!(
            "Restoring {}x{} document with {} lines",
            snapshot.width,
            snapshot.height,
            snapshot.lines.len()
        );
        let newest = snapshot
            .highlights
            .iter()
            .map(|h| h.timestamp)
            .max()
            .unwrap_or(0);
        self.width = snapshot.width;
        self.height = snapshot.height;
        self.lines = snapshot.lines;
        self.highlights = snapshot.highlights;
        self.active_color = snapshot.active_color;
        self.last_timestamp = self.last_timestamp.max(newest);
        self.touch();
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    /// Wall-clock milliseconds, strictly increasing across calls.
    fn next_timestamp(&mut self) -> i64 {
        let now = Utc::now().timestamp_millis();
        self.last_timestamp = now.max(self.last_timestamp + 1);
        self.last_timestamp
    }
}

impl Default for Document {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            lines: LineSet::new(),
            highlights: HighlightList::new(),
            active_color: Color::default(),
            revision: 0,
            last_timestamp: 0,
        }
    }
}

impl From<DocumentSnapshot> for Document {
    fn from(snapshot: DocumentSnapshot) -> Self {
        let mut document = Document::default();
        document.restore(snapshot);
        document.revision = 0;
        document
    }
}

pub(crate) fn check_dimensions(width: i32, height: i32) -> Result<(), GridError> {
    if width < 1 || height < 1 {
        return Err(GridError::InvalidDimensions {
            width: i64::from(width),
            height: i64::from(height),
        });
    }
    Ok(())
}
