//! Row and column highlights on the document.

use gridborder_core::{Color, GridError};
use tracing::debug;

use super::Document;
use crate::model::{Highlight, HighlightKind};

impl Document {
    /// Highlights a row or column with `color`, replacing any previous
    /// highlight of the same row or column.
    pub fn apply_highlight(
        &mut self,
        kind: HighlightKind,
        index: i32,
        color: Color,
    ) -> Result<(), GridError> {
        self.check_highlight(kind, index)?;
        let timestamp = self.next_timestamp();
        debug!("Highlight {:?} {} with {}", kind, index, color);
        self.highlights
            .apply(Highlight::new(kind, index, color, timestamp));
        self.touch();
        Ok(())
    }

    /// Returns whether a highlight was removed.
    pub fn remove_highlight(&mut self, kind: HighlightKind, index: i32) -> bool {
        let removed = self.highlights.remove(kind, index);
        if removed {
            debug!("Removed highlight {:?} {}", kind, index);
            self.touch();
        }
        removed
    }

    /// Highlights with the active color, or removes the highlight when it
    /// already has that color. Returns whether the row or column is
    /// highlighted afterwards.
    pub fn toggle_highlight(&mut self, kind: HighlightKind, index: i32) -> Result<bool, GridError> {
        self.check_highlight(kind, index)?;
        let same_color = self
            .highlights
            .find(kind, index)
            .is_some_and(|h| h.color == self.active_color);
        if same_color {
            self.remove_highlight(kind, index);
            Ok(false)
        } else {
            self.apply_highlight(kind, index, self.active_color)?;
            Ok(true)
        }
    }

    /// Effective highlight color of cell `(cell_x, cell_y)`.
    pub fn highlight_at(&self, cell_x: i32, cell_y: i32) -> Option<Color> {
        self.highlights.color_at(cell_x, cell_y)
    }

    fn check_highlight(&self, kind: HighlightKind, index: i32) -> Result<(), GridError> {
        let (limit, x, y) = match kind {
            HighlightKind::Row => (self.height, 0, index),
            HighlightKind::Col => (self.width, index, 0),
        };
        if (0..limit).contains(&index) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds { x, y })
        }
    }
}
