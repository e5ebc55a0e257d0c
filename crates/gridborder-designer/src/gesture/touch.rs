//! Touch input: delayed drawing, long-press erase, taps, double-tap fill,
//! multi-finger undo/redo and two-finger pan/zoom.

use std::collections::BTreeMap;
use std::time::Duration;

use tracing::{debug, trace};

use super::{
    GestureContext, GestureEffect, GestureMachine, GestureState, TimerKind, Tool, TouchId,
};
use crate::viewport::ScreenPoint;

#[derive(Debug, Clone, Copy)]
struct TouchPoint {
    start: ScreenPoint,
    current: ScreenPoint,
}

/// Two-finger reference used for incremental pinch and pan.
#[derive(Debug, Clone, Copy)]
struct Pinch {
    midpoint: ScreenPoint,
    distance: f64,
}

#[derive(Debug, Clone, Copy)]
struct Tap {
    position: ScreenPoint,
    at: Duration,
}

#[derive(Debug, Default)]
pub(super) struct TouchTracker {
    touches: BTreeMap<TouchId, TouchPoint>,
    started_at: Duration,
    /// Most fingers down at once during this gesture.
    max_touches: usize,
    /// Some finger went beyond the jitter threshold.
    moved: bool,
    delay_elapsed: bool,
    pinch: Option<Pinch>,
    last_tap: Option<Tap>,
}

impl TouchTracker {
    fn single(&self) -> Option<TouchPoint> {
        match self.touches.len() {
            1 => self.touches.values().next().copied(),
            _ => None,
        }
    }

    fn current_pinch(&self) -> Option<Pinch> {
        let mut points = self.touches.values();
        let a = points.next()?.current;
        let b = points.next()?.current;
        Some(Pinch {
            midpoint: a.midpoint(&b),
            distance: a.distance_to(&b),
        })
    }
}

impl GestureMachine {
    pub(super) fn on_touch_start(
        &mut self,
        id: TouchId,
        position: ScreenPoint,
        at: Duration,
        effects: &mut Vec<GestureEffect>,
    ) {
        if self.pointer.is_active() {
            return;
        }
        let point = TouchPoint {
            start: position,
            current: position,
        };
        self.touch.touches.insert(id, point);
        self.touch.max_touches = self.touch.max_touches.max(self.touch.touches.len());

        if self.touch.touches.len() == 1 {
            self.touch.started_at = at;
            self.touch.moved = false;
            self.touch.delay_elapsed = false;
            self.touch.pinch = None;
            self.begin_stroke(GestureState::Pending, position);
            self.timers
                .schedule(TimerKind::DrawDelay, at + self.config.draw_delay, effects);
            self.timers
                .schedule(TimerKind::LongPress, at + self.config.long_press, effects);
            return;
        }

        if self.state != GestureState::PanZoom {
            self.timers.cancel_all(effects);
            self.last_hit = None;
            self.set_state(GestureState::PanZoom);
        }
        self.touch.pinch = self.touch.current_pinch();
    }

    pub(super) fn on_touch_move(
        &mut self,
        id: TouchId,
        position: ScreenPoint,
        at: Duration,
        ctx: &mut GestureContext<'_>,
        effects: &mut Vec<GestureEffect>,
    ) {
        let Some(point) = self.touch.touches.get_mut(&id) else {
            return;
        };
        let previous = point.current;
        point.current = position;
        if point.start.distance_to(&position) > self.config.touch_jitter {
            self.touch.moved = true;
        }

        match self.state {
            GestureState::Pending => {
                let delay_over =
                    self.touch.delay_elapsed || at >= self.touch.started_at + self.config.draw_delay;
                if delay_over && self.touch.moved {
                    self.start_touch_drawing(ctx, effects);
                }
            }
            GestureState::Drawing | GestureState::Erasing => {
                self.direction.update(position);
                self.stroke_at(position, self.config.touch_tolerance, ctx);
            }
            GestureState::PanZoom => match (self.touch.pinch, self.touch.current_pinch()) {
                (Some(before), Some(after)) => {
                    ctx.viewport.pan_by(
                        after.midpoint.x - before.midpoint.x,
                        after.midpoint.y - before.midpoint.y,
                    );
                    if before.distance > 0.0 && after.distance > 0.0 {
                        let size = ctx.viewport.cell_size() * after.distance / before.distance;
                        ctx.viewport.zoom_at(after.midpoint, size);
                    }
                    self.touch.pinch = Some(after);
                }
                _ => ctx
                    .viewport
                    .pan_by(position.x - previous.x, position.y - previous.y),
            },
            _ => {}
        }
    }

    pub(super) fn on_touch_end(
        &mut self,
        id: TouchId,
        at: Duration,
        ctx: &mut GestureContext<'_>,
        effects: &mut Vec<GestureEffect>,
    ) {
        let Some(point) = self.touch.touches.remove(&id) else {
            return;
        };

        if !self.touch.touches.is_empty() {
            if self.state == GestureState::PanZoom {
                self.touch.pinch = self.touch.current_pinch();
            }
            return;
        }

        let quick = at.saturating_sub(self.touch.started_at) <= self.config.multi_tap_window;
        if self.touch.max_touches >= 2 {
            if quick && !self.touch.moved {
                let effect = if self.touch.max_touches == 2 {
                    GestureEffect::Undo
                } else {
                    GestureEffect::Redo
                };
                debug!("{}-finger tap: {:?}", self.touch.max_touches, effect);
                effects.push(effect);
            }
        } else if self.state == GestureState::Pending && !self.touch.moved {
            self.tap(point.current, at, ctx, effects);
        }

        self.touch.max_touches = 0;
        self.touch.pinch = None;
        self.end_gesture(effects);
    }

    pub(super) fn on_touch_cancel(&mut self, effects: &mut Vec<GestureEffect>) {
        if self.touch.touches.is_empty() {
            return;
        }
        debug!("Touch cancelled");
        let last_tap = self.touch.last_tap;
        self.touch = Default::default();
        self.touch.last_tap = last_tap;
        self.end_gesture(effects);
    }

    pub(super) fn on_timer(
        &mut self,
        kind: TimerKind,
        at: Duration,
        ctx: &mut GestureContext<'_>,
        effects: &mut Vec<GestureEffect>,
    ) {
        trace!("Timer {:?} at {:?}", kind, at);
        if self.state != GestureState::Pending {
            return;
        }
        match kind {
            TimerKind::DrawDelay => {
                self.touch.delay_elapsed = true;
                if self.touch.moved && self.touch.single().is_some() {
                    self.start_touch_drawing(ctx, effects);
                }
            }
            TimerKind::LongPress => {
                let Some(point) = self.touch.single() else {
                    return;
                };
                if self.touch.moved {
                    return;
                }
                self.timers.cancel_all(effects);
                effects.push(GestureEffect::Haptic);
                self.begin_stroke(GestureState::Erasing, point.current);

                let target = self.target_at(point.current, self.config.touch_tolerance, ctx);
                if !self.click_label(target, true, ctx) {
                    self.stroke_at(point.current, self.config.touch_tolerance, ctx);
                }
            }
        }
    }

    /// `Pending` -> `Drawing`: edit at the start point, then at the
    /// current one.
    fn start_touch_drawing(&mut self, ctx: &mut GestureContext<'_>, effects: &mut Vec<GestureEffect>) {
        let Some(point) = self.touch.single() else {
            return;
        };
        self.timers.cancel_all(effects);
        let state = match self.tool {
            Tool::Draw => GestureState::Drawing,
            Tool::Eraser => GestureState::Erasing,
        };
        self.begin_stroke(state, point.start);
        self.stroke_at(point.start, self.config.touch_tolerance, ctx);
        self.direction.update(point.current);
        self.stroke_at(point.current, self.config.touch_tolerance, ctx);
    }

    /// A quick single-finger tap.
    fn tap(
        &mut self,
        position: ScreenPoint,
        at: Duration,
        ctx: &mut GestureContext<'_>,
        effects: &mut Vec<GestureEffect>,
    ) {
        let erase = self.tool == Tool::Eraser;
        let target = self.target_at(position, self.config.touch_tolerance, ctx);

        if let Some(key) = target.line_key() {
            self.touch.last_tap = None;
            self.click_line(key, erase, ctx);
            return;
        }
        if self.click_label(target, erase, ctx) {
            self.touch.last_tap = None;
            return;
        }

        let double = self.touch.last_tap.is_some_and(|prev| {
            at.saturating_sub(prev.at) <= self.config.double_tap_window
                && prev.position.distance_to(&position) <= self.config.double_tap_distance
        });
        if double {
            self.touch.last_tap = None;
            if !erase {
                self.fill_at_point(position, ctx, effects);
            }
        } else {
            self.touch.last_tap = Some(Tap { position, at });
        }
    }
}
