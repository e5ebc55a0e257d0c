//! Viewport and coordinate transformation for canvas rendering.
//!
//! Handles conversion between pixel coordinates (screen space) and grid
//! coordinates (cell space). Manages pan and zoom with proper coordinate
//! mapping. The viewport is session state: it is never stored with the
//! document.
//!
//! Screen space has (0,0) at the top-left of the canvas. The first
//! [`LABEL_GUTTER`] pixels on the left and on the top hold the row and
//! column labels, so grid (0,0) sits at `(GUTTER + offset_x, GUTTER + offset_y)`.

use std::fmt;

use gridborder_core::constants::{
    DEFAULT_CELL_SIZE, LABEL_GUTTER, MAX_CELL_SIZE, MIN_CELL_SIZE, ZOOM_STEP,
};

/// A position on the canvas in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &ScreenPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn midpoint(&self, other: &ScreenPoint) -> ScreenPoint {
        ScreenPoint::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// A real-valued position in cell units. Integer values lie on borders.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GridPoint {
    pub x: f64,
    pub y: f64,
}

impl GridPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Converts screen pixels to grid coordinates.
///
/// Formula:
/// ```text
/// grid_x = (screen_x - GUTTER - offset_x) / cell_size
/// grid_y = (screen_y - GUTTER - offset_y) / cell_size
/// ```
pub fn screen_to_grid(
    screen_x: f64,
    screen_y: f64,
    offset_x: f64,
    offset_y: f64,
    cell_size: f64,
) -> GridPoint {
    GridPoint::new(
        (screen_x - LABEL_GUTTER - offset_x) / cell_size,
        (screen_y - LABEL_GUTTER - offset_y) / cell_size,
    )
}

/// Converts grid coordinates to screen pixels. Inverse of [`screen_to_grid`].
pub fn grid_to_screen(
    grid_x: f64,
    grid_y: f64,
    offset_x: f64,
    offset_y: f64,
    cell_size: f64,
) -> ScreenPoint {
    ScreenPoint::new(
        grid_x * cell_size + LABEL_GUTTER + offset_x,
        grid_y * cell_size + LABEL_GUTTER + offset_y,
    )
}

/// Represents the viewport transformation state (cell size and pan).
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    offset_x: f64,
    offset_y: f64,
    cell_size: f64,
    min_cell_size: f64,
    max_cell_size: f64,
    canvas_width: f64,
    canvas_height: f64,
}

impl Viewport {
    /// Creates a new viewport for a canvas of the given pixel size.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            cell_size: DEFAULT_CELL_SIZE,
            min_cell_size: MIN_CELL_SIZE,
            max_cell_size: MAX_CELL_SIZE,
            canvas_width,
            canvas_height,
        }
    }

    /// Replaces the zoom limits and re-clamps the current cell size.
    pub fn with_limits(mut self, min_cell_size: f64, max_cell_size: f64) -> Self {
        debug_assert!(
            min_cell_size > 0.0 && min_cell_size <= max_cell_size,
            "invalid cell size limits {min_cell_size}..{max_cell_size}"
        );
        self.min_cell_size = min_cell_size;
        self.max_cell_size = max_cell_size;
        self.cell_size = self.cell_size.clamp(min_cell_size, max_cell_size);
        self
    }

    /// Gets the canvas width.
    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    /// Gets the canvas height.
    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Sets the canvas dimensions (typically called when window resizes).
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    /// Whether a screen point lies on the canvas.
    pub fn contains(&self, point: &ScreenPoint) -> bool {
        point.x >= 0.0 && point.y >= 0.0 && point.x < self.canvas_width && point.y < self.canvas_height
    }

    /// Gets the current cell size in pixels.
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    pub fn min_cell_size(&self) -> f64 {
        self.min_cell_size
    }

    pub fn max_cell_size(&self) -> f64 {
        self.max_cell_size
    }

    /// Sets the cell size, clamped to the zoom limits.
    pub fn set_cell_size(&mut self, cell_size: f64) {
        if cell_size.is_finite() {
            self.cell_size = cell_size.clamp(self.min_cell_size, self.max_cell_size);
        }
    }

    /// Gets the pan offset (X coordinate).
    pub fn offset_x(&self) -> f64 {
        self.offset_x
    }

    /// Gets the pan offset (Y coordinate).
    pub fn offset_y(&self) -> f64 {
        self.offset_y
    }

    /// Sets the pan offset.
    pub fn set_offset(&mut self, x: f64, y: f64) {
        self.offset_x = x;
        self.offset_y = y;
    }

    /// Pans by a delta amount in pixels.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    pub fn screen_to_grid(&self, point: ScreenPoint) -> GridPoint {
        screen_to_grid(point.x, point.y, self.offset_x, self.offset_y, self.cell_size)
    }

    pub fn grid_to_screen(&self, point: GridPoint) -> ScreenPoint {
        grid_to_screen(point.x, point.y, self.offset_x, self.offset_y, self.cell_size)
    }

    /// Changes the cell size while keeping the grid position under `anchor`
    /// at the same screen position.
    ///
    /// Useful for "zoom to cursor" and pinch zoom.
    pub fn zoom_at(&mut self, anchor: ScreenPoint, new_cell_size: f64) {
        if !new_cell_size.is_finite() {
            return;
        }
        let grid = self.screen_to_grid(anchor);
        self.cell_size = new_cell_size.clamp(self.min_cell_size, self.max_cell_size);

        // anchor = grid * cell_size + GUTTER + offset  =>  offset = anchor - GUTTER - grid * cell_size
        self.offset_x = anchor.x - LABEL_GUTTER - grid.x * self.cell_size;
        self.offset_y = anchor.y - LABEL_GUTTER - grid.y * self.cell_size;
    }

    /// Zooms in at a screen point (maintaining cursor position).
    pub fn zoom_in_at(&mut self, anchor: ScreenPoint) {
        self.zoom_at(anchor, self.cell_size * ZOOM_STEP);
    }

    /// Zooms out at a screen point (maintaining cursor position).
    pub fn zoom_out_at(&mut self, anchor: ScreenPoint) {
        self.zoom_at(anchor, self.cell_size / ZOOM_STEP);
    }

    /// Fits a `width` x `height` grid into the canvas area right of and
    /// below the label gutters, leaving `padding` pixels on every side, and
    /// centers it.
    pub fn fit_grid(&mut self, width: i32, height: i32, padding: f64) {
        if width < 1 || height < 1 {
            return;
        }
        let available_width = self.canvas_width - LABEL_GUTTER - padding * 2.0;
        let available_height = self.canvas_height - LABEL_GUTTER - padding * 2.0;
        if available_width <= 0.0 || available_height <= 0.0 {
            return;
        }

        let fit_x = available_width / f64::from(width);
        let fit_y = available_height / f64::from(height);
        self.cell_size = fit_x.min(fit_y).clamp(self.min_cell_size, self.max_cell_size);

        let content_width = f64::from(width) * self.cell_size;
        let content_height = f64::from(height) * self.cell_size;
        self.offset_x = (self.canvas_width - LABEL_GUTTER - content_width) / 2.0;
        self.offset_y = (self.canvas_height - LABEL_GUTTER - content_height) / 2.0;
    }

    /// Resets viewport to default state (default cell size, no pan).
    pub fn reset(&mut self) {
        self.cell_size = DEFAULT_CELL_SIZE.clamp(self.min_cell_size, self.max_cell_size);
        self.offset_x = 0.0;
        self.offset_y = 0.0;
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cell: {:.1}px | Pan: ({:.1}, {:.1})",
            self.cell_size, self.offset_x, self.offset_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1200.0, 800.0)
    }
}
