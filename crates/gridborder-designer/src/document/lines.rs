//! Line edits on the document.

use gridborder_core::GridError;
use tracing::debug;

use super::Document;
use crate::model::{Cell, LineKey, Orientation};
use crate::ops::{self, FillRegion};

impl Document {
    pub fn has_line(&self, key: &LineKey) -> bool {
        self.lines.has(key)
    }

    /// Draws `key` with the active color unless it is already drawn.
    pub fn add_line(&mut self, key: LineKey) -> Result<bool, GridError> {
        self.check_line(&key)?;
        let changed = self.lines.add(key, self.active_color);
        if changed {
            debug!("Added line {}", key);
            self.touch();
        }
        Ok(changed)
    }

    /// Erases `key`. Returns whether it was drawn.
    pub fn remove_line(&mut self, key: LineKey) -> Result<bool, GridError> {
        self.check_line(&key)?;
        let changed = self.lines.remove(&key);
        if changed {
            debug!("Removed line {}", key);
            self.touch();
        }
        Ok(changed)
    }

    /// Draws `key`, or recolors it when drawn in another color. Never
    /// erases.
    pub fn toggle_line(&mut self, key: LineKey) -> Result<bool, GridError> {
        self.check_line(&key)?;
        let changed = self.lines.toggle(key, self.active_color);
        if changed {
            debug!("Toggled line {} with {}", key, self.active_color);
            self.touch();
        }
        Ok(changed)
    }

    /// Draws every in-bounds key with the active color, recoloring those
    /// already drawn. Returns the number of segments that changed.
    pub fn add_lines<I>(&mut self, keys: I) -> usize
    where
        I: IntoIterator<Item = LineKey>,
    {
        let (width, height) = (self.width, self.height);
        let changed = self.lines.add_many(
            keys.into_iter().filter(|key| key.in_bounds(width, height)),
            self.active_color,
        );
        if changed > 0 {
            debug!("Added {} lines", changed);
            self.touch();
        }
        changed
    }

    /// Erases every listed key. Returns the number erased.
    pub fn remove_lines<'a, I>(&mut self, keys: I) -> usize
    where
        I: IntoIterator<Item = &'a LineKey>,
    {
        let changed = self.lines.remove_many(keys);
        if changed > 0 {
            debug!("Removed {} lines", changed);
            self.touch();
        }
        changed
    }

    /// Fills the closed region around `cell` by drawing its border.
    ///
    /// Nothing is drawn when the region is open.
    pub fn fill_at(&mut self, cell: Cell) -> Result<FillRegion, GridError> {
        let region = ops::flood_fill(&self.lines, self.width, self.height, cell)?;
        let changed = self
            .lines
            .add_many(region.borders.iter().copied(), self.active_color);
        debug!(
            "Filled {} cells from ({}, {}), {} segments changed",
            region.cells, cell.x, cell.y, changed
        );
        if changed > 0 {
            self.touch();
        }
        Ok(region)
    }

    /// Extends `key` to the nearest parallel segment on its boundary.
    ///
    /// Returns the number of segments that changed, or
    /// [`GridError::NoTarget`] when there is nothing to connect to.
    pub fn extend_line(&mut self, key: LineKey) -> Result<usize, GridError> {
        self.check_line(&key)?;
        let path = ops::extension_path(&self.lines, key, self.width, self.height);
        if path.is_empty() {
            return Err(GridError::NoTarget);
        }
        let changed = self.lines.add_many(path, self.active_color);
        if changed > 0 {
            debug!("Extended line {} by {} segments", key, changed);
            self.touch();
        }
        Ok(changed)
    }

    /// Draws every horizontal segment on row boundary `y`.
    pub fn fill_row(&mut self, y: i32) -> Result<usize, GridError> {
        self.check_boundary(Orientation::Horizontal, y)?;
        Ok(self.add_lines(ops::full_row(y, self.width)))
    }

    /// Erases every horizontal segment on row boundary `y`.
    pub fn erase_row(&mut self, y: i32) -> Result<usize, GridError> {
        self.check_boundary(Orientation::Horizontal, y)?;
        let keys = ops::full_row(y, self.width);
        Ok(self.remove_lines(&keys))
    }

    /// Draws every vertical segment on column boundary `x`.
    pub fn fill_column(&mut self, x: i32) -> Result<usize, GridError> {
        self.check_boundary(Orientation::Vertical, x)?;
        Ok(self.add_lines(ops::full_column(x, self.height)))
    }

    /// Erases every vertical segment on column boundary `x`.
    pub fn erase_column(&mut self, x: i32) -> Result<usize, GridError> {
        self.check_boundary(Orientation::Vertical, x)?;
        let keys = ops::full_column(x, self.height);
        Ok(self.remove_lines(&keys))
    }

    fn check_line(&self, key: &LineKey) -> Result<(), GridError> {
        if key.in_bounds(self.width, self.height) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds { x: key.x, y: key.y })
        }
    }

    fn check_boundary(&self, orientation: Orientation, index: i32) -> Result<(), GridError> {
        let (limit, x, y) = match orientation {
            Orientation::Horizontal => (self.height, 0, index),
            Orientation::Vertical => (self.width, index, 0),
        };
        if (0..=limit).contains(&index) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds { x, y })
        }
    }
}
