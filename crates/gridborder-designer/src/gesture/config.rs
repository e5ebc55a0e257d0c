use std::time::Duration;

use gridborder_core::constants::{
    DIRECTION_DOMINANCE, DIRECTION_THRESHOLD, DOUBLE_TAP_DISTANCE, DOUBLE_TAP_WINDOW, DRAW_DELAY,
    LONG_PRESS, MULTI_TAP_WINDOW, POINTER_TOLERANCE, TOUCH_JITTER, TOUCH_TOLERANCE,
};

/// Tunables for the gesture state machine.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureConfig {
    /// Hit tolerance for mouse-class pointers, in fractions of a cell.
    pub pointer_tolerance: f64,
    /// Hit tolerance for touch input, in fractions of a cell.
    pub touch_tolerance: f64,
    /// Time a single touch waits for a second finger before drawing.
    pub draw_delay: Duration,
    /// Hold time that turns a stationary touch into an erase.
    pub long_press: Duration,
    /// Movement in pixels a touch may make and still count as stationary.
    pub touch_jitter: f64,
    pub double_tap_window: Duration,
    pub double_tap_distance: f64,
    /// Maximum duration of a multi-finger undo/redo tap.
    pub multi_tap_window: Duration,
    /// Drag distance in pixels before the drag direction is decided.
    pub direction_threshold: f64,
    /// Ratio by which one axis must dominate to bias hit testing.
    pub direction_dominance: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            pointer_tolerance: POINTER_TOLERANCE,
            touch_tolerance: TOUCH_TOLERANCE,
            draw_delay: DRAW_DELAY,
            long_press: LONG_PRESS,
            touch_jitter: TOUCH_JITTER,
            double_tap_window: DOUBLE_TAP_WINDOW,
            double_tap_distance: DOUBLE_TAP_DISTANCE,
            multi_tap_window: MULTI_TAP_WINDOW,
            direction_threshold: DIRECTION_THRESHOLD,
            direction_dominance: DIRECTION_DOMINANCE,
        }
    }
}
