//! Resizing the grid.

use gridborder_core::GridError;
use tracing::{debug, warn};

use super::Document;
use crate::ops::{self, ResizePlan, SideDeltas};

impl Document {
    /// Grows or shrinks each side of the grid. Content moves with the top
    /// and left edges; anything that falls off the new grid is dropped.
    ///
    /// Returns the number of lines dropped.
    pub fn resize_sides(&mut self, deltas: SideDeltas) -> Result<usize, GridError> {
        let plan = ops::plan_sides(self.width, self.height, deltas)?;
        Ok(self.apply_resize(plan))
    }

    /// Resizes to `width` x `height`, keeping the content centered.
    ///
    /// Returns the number of lines dropped.
    pub fn resize_to(&mut self, width: i32, height: i32) -> Result<usize, GridError> {
        let plan = ops::plan_centered(self.width, self.height, width, height)?;
        Ok(self.apply_resize(plan))
    }

    fn apply_resize(&mut self, plan: ResizePlan) -> usize {
        if plan.width == self.width
            && plan.height == self.height
            && plan.shift_x == 0
            && plan.shift_y == 0
        {
            return 0;
        }
        debug!(
            "Resize {}x{} -> {}x{}, shift ({}, {})",
            self.width, self.height, plan.width, plan.height, plan.shift_x, plan.shift_y
        );
        let dropped_lines =
            self.lines
                .translate_and_clip(plan.shift_x, plan.shift_y, plan.width, plan.height);
        let dropped_highlights =
            self.highlights
                .translate_and_clip(plan.shift_x, plan.shift_y, plan.width, plan.height);
        if dropped_lines > 0 || dropped_highlights > 0 {
            warn!(
                "Resize dropped {} lines and {} highlights",
                dropped_lines, dropped_highlights
            );
        }
        self.width = plan.width;
        self.height = plan.height;
        self.touch();
        dropped_lines
    }
}
