//! Shared constants for geometry and interaction.

use std::time::Duration;

/// Width in pixels of the row-number gutter on the left and the
/// column-number gutter on the top of the canvas.
pub const LABEL_GUTTER: f64 = 30.0;

/// Smallest allowed cell size in pixels.
pub const MIN_CELL_SIZE: f64 = 10.0;

/// Largest allowed cell size in pixels.
pub const MAX_CELL_SIZE: f64 = 100.0;

/// Cell size of a fresh viewport.
pub const DEFAULT_CELL_SIZE: f64 = 25.0;

/// Multiplier applied by a single zoom step.
pub const ZOOM_STEP: f64 = 1.2;

/// Hit tolerance for mouse-class pointers, in fractions of a cell.
pub const POINTER_TOLERANCE: f64 = 0.25;

/// Hit tolerance for touch input, in fractions of a cell.
pub const TOUCH_TOLERANCE: f64 = 0.33;

/// Time a single touch waits for a second finger before it may draw.
pub const DRAW_DELAY: Duration = Duration::from_millis(80);

/// Hold time that turns a stationary touch into an erase gesture.
pub const LONG_PRESS: Duration = Duration::from_millis(500);

/// Movement in pixels a touch may make and still count as stationary.
pub const TOUCH_JITTER: f64 = 10.0;

/// Maximum gap between two taps of a double tap.
pub const DOUBLE_TAP_WINDOW: Duration = Duration::from_millis(300);

/// Maximum distance in pixels between two taps of a double tap.
pub const DOUBLE_TAP_DISTANCE: f64 = 30.0;

/// Maximum duration of a multi-finger undo/redo tap.
pub const MULTI_TAP_WINDOW: Duration = Duration::from_millis(250);

/// Accumulated drag distance in pixels before the drag direction is decided.
pub const DIRECTION_THRESHOLD: f64 = 6.0;

/// Ratio by which one axis must dominate the other to bias hit testing.
pub const DIRECTION_DOMINANCE: f64 = 1.5;

/// Grid size of a new document.
pub const DEFAULT_GRID_WIDTH: i32 = 20;

/// Grid size of a new document.
pub const DEFAULT_GRID_HEIGHT: i32 = 20;

/// Current import/export format version.
pub const DOCUMENT_VERSION: i64 = 1;
