//! Mouse-class pointer input.

use tracing::{debug, trace};

use super::{
    GestureContext, GestureEffect, GestureMachine, GestureState, Modifiers, PointerButton, Tool,
};
use crate::viewport::ScreenPoint;

#[derive(Debug, Default)]
pub(super) struct PointerTracker {
    /// A pointer gesture owns the current state.
    active: bool,
    last: Option<ScreenPoint>,
}

impl PointerTracker {
    pub(super) fn is_active(&self) -> bool {
        self.active
    }
}

impl GestureMachine {
    pub(super) fn on_pointer_down(
        &mut self,
        position: ScreenPoint,
        button: PointerButton,
        modifiers: Modifiers,
        ctx: &mut GestureContext<'_>,
        effects: &mut Vec<GestureEffect>,
    ) {
        if self.state != GestureState::Idle {
            trace!("Pointer down ignored in {:?}", self.state);
            return;
        }

        if button == PointerButton::Middle {
            self.pointer = PointerTracker {
                active: true,
                last: Some(position),
            };
            self.set_state(GestureState::Panning);
            return;
        }

        let erase = button == PointerButton::Secondary || self.tool == Tool::Eraser;
        let target = self.target_at(position, self.config.pointer_tolerance, ctx);

        if !erase && modifiers.shift {
            if let Some(key) = target.line_key() {
                if let Err(err) = ctx.document.extend_line(key) {
                    debug!("Extension from {} ignored: {}", key, err);
                }
            }
            return;
        }
        if !erase && modifiers.command() {
            self.fill_at_point(position, ctx, effects);
            return;
        }
        if self.click_label(target, erase, ctx) {
            return;
        }

        self.pointer = PointerTracker {
            active: true,
            last: Some(position),
        };
        let state = if erase {
            GestureState::Erasing
        } else {
            GestureState::Drawing
        };
        self.begin_stroke(state, position);
        self.stroke_at(position, self.config.pointer_tolerance, ctx);
    }

    pub(super) fn on_pointer_move(&mut self, position: ScreenPoint, ctx: &mut GestureContext<'_>) {
        if !self.pointer.active {
            return;
        }
        match self.state {
            GestureState::Drawing | GestureState::Erasing => {
                self.direction.update(position);
                self.stroke_at(position, self.config.pointer_tolerance, ctx);
            }
            GestureState::Panning => {
                if let Some(last) = self.pointer.last {
                    ctx.viewport.pan_by(position.x - last.x, position.y - last.y);
                }
            }
            _ => {}
        }
        self.pointer.last = Some(position);
    }

    pub(super) fn on_pointer_up(&mut self, effects: &mut Vec<GestureEffect>) {
        if !self.pointer.active {
            return;
        }
        self.pointer = PointerTracker::default();
        self.end_gesture(effects);
    }

    /// Plain wheel pans; with the command modifier it zooms at the cursor.
    pub(super) fn on_wheel(
        &mut self,
        position: ScreenPoint,
        delta_x: f64,
        delta_y: f64,
        modifiers: Modifiers,
        ctx: &mut GestureContext<'_>,
    ) {
        if modifiers.command() {
            if delta_y < 0.0 {
                ctx.viewport.zoom_in_at(position);
            } else if delta_y > 0.0 {
                ctx.viewport.zoom_out_at(position);
            }
        } else {
            ctx.viewport.pan_by(-delta_x, -delta_y);
        }
    }
}
