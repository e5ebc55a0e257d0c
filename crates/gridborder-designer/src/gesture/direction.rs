//! Drag direction heuristic.
//!
//! Dragging along a row should only touch horizontal borders even when the
//! pointer wobbles close to a column boundary. The tracker accumulates
//! movement since the last processed hit and, once enough has built up,
//! picks the dominant axis as the preferred border orientation.

use crate::model::Orientation;
use crate::viewport::ScreenPoint;

#[derive(Debug, Clone)]
pub struct DirectionTracker {
    threshold: f64,
    dominance: f64,
    last: Option<ScreenPoint>,
    dx: f64,
    dy: f64,
    bias: Option<Orientation>,
}

impl DirectionTracker {
    pub fn new(threshold: f64, dominance: f64) -> Self {
        Self {
            threshold,
            dominance,
            last: None,
            dx: 0.0,
            dy: 0.0,
            bias: None,
        }
    }

    /// Starts a new drag at `origin` with no preference.
    pub fn reset(&mut self, origin: ScreenPoint) {
        self.last = Some(origin);
        self.dx = 0.0;
        self.dy = 0.0;
        self.bias = None;
    }

    /// Adds the movement to `point` and returns the current preference.
    pub fn update(&mut self, point: ScreenPoint) -> Option<Orientation> {
        if let Some(last) = self.last {
            self.dx += point.x - last.x;
            self.dy += point.y - last.y;
        }
        self.last = Some(point);

        let (ax, ay) = (self.dx.abs(), self.dy.abs());
        if ax.hypot(ay) >= self.threshold {
            if ax >= ay * self.dominance {
                self.bias = Some(Orientation::Horizontal);
            } else if ay >= ax * self.dominance {
                self.bias = Some(Orientation::Vertical);
            }
        }
        self.bias
    }

    pub fn bias(&self) -> Option<Orientation> {
        self.bias
    }

    /// Restarts accumulation after a hit was acted on. The preference
    /// stays until movement decides otherwise.
    pub fn mark_processed(&mut self) {
        self.dx = 0.0;
        self.dy = 0.0;
    }
}
