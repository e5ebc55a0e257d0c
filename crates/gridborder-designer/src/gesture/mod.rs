//! Gesture state machine: turns pointer and touch events into document
//! edits and viewport changes.
//!
//! The machine is synchronous and deterministic. Every event carries its
//! own timestamp and timers are plain data: the machine asks the host to
//! schedule or cancel them through [`GestureEffect`]s, and the host feeds
//! them back as [`InputEvent::TimerFired`] or through
//! [`GestureMachine::poll_timers`].
//!
//! ```text
//! Idle ──down/touch──> Pending ──delay+move──> Drawing ──up──> Idle
//!                         │ └────long press──> Erasing ──up──> Idle
//!                         └──second finger──> PanZoom ──lift all──> Idle
//! Idle ──middle button──> Panning ──up──> Idle
//! ```
//!
//! This module is split into submodules:
//! - `pointer`: mouse-class input
//! - `touch`: touch input, taps and pinch
//! - `direction`: drag direction heuristic
//! - `timers`: cancelable timers

mod config;
mod direction;
mod effects;
mod events;
mod pointer;
mod timers;
mod touch;

pub use config::GestureConfig;
pub use direction::DirectionTracker;
pub use effects::GestureEffect;
pub use events::{InputEvent, Modifiers, PointerButton, TouchId};
pub use timers::{TimerId, TimerKind};

use std::time::Duration;

use gridborder_core::GridError;
use tracing::debug;

use crate::document::Document;
use crate::hit_test::{cell_at, hit_test, hit_test_biased, HitTarget};
use crate::model::{HighlightKind, LineKey};
use crate::viewport::{ScreenPoint, Viewport};
use pointer::PointerTracker;
use timers::TimerQueue;
use touch::TouchTracker;

/// What the machine is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GestureState {
    #[default]
    Idle,
    /// One finger down, intent not known yet.
    Pending,
    Drawing,
    Erasing,
    /// Middle-button drag.
    Panning,
    /// Two or more fingers.
    PanZoom,
}

/// The active tool for the primary button and single-finger touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tool {
    #[default]
    Draw,
    Eraser,
}

/// Mutable state a gesture may act on.
pub struct GestureContext<'a> {
    pub document: &'a mut Document,
    pub viewport: &'a mut Viewport,
}

impl<'a> GestureContext<'a> {
    pub fn new(document: &'a mut Document, viewport: &'a mut Viewport) -> Self {
        Self { document, viewport }
    }
}

/// The gesture state machine.
#[derive(Debug)]
pub struct GestureMachine {
    config: GestureConfig,
    tool: Tool,
    state: GestureState,
    timers: TimerQueue,
    direction: DirectionTracker,
    last_hit: Option<LineKey>,
    pointer: PointerTracker,
    touch: TouchTracker,
}

impl GestureMachine {
    pub fn new(config: GestureConfig) -> Self {
        let direction =
            DirectionTracker::new(config.direction_threshold, config.direction_dominance);
        Self {
            config,
            tool: Tool::default(),
            state: GestureState::Idle,
            timers: TimerQueue::default(),
            direction,
            last_hit: None,
            pointer: PointerTracker::default(),
            touch: TouchTracker::default(),
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        debug!("Tool {:?}", tool);
        self.tool = tool;
    }

    /// When the earliest scheduled timer is due, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// Handles one input event.
    pub fn handle(&mut self, event: InputEvent, ctx: &mut GestureContext<'_>) -> Vec<GestureEffect> {
        let revision = ctx.document.revision();
        let viewport = ctx.viewport.clone();
        let mut effects = Vec::new();

        match event {
            InputEvent::PointerDown {
                position,
                button,
                modifiers,
                ..
            } => self.on_pointer_down(position, button, modifiers, ctx, &mut effects),
            InputEvent::PointerMove { position, .. } => self.on_pointer_move(position, ctx),
            InputEvent::PointerUp { .. } | InputEvent::PointerLeave { .. } => {
                self.on_pointer_up(&mut effects)
            }
            InputEvent::Wheel {
                position,
                delta_x,
                delta_y,
                modifiers,
                ..
            } => self.on_wheel(position, delta_x, delta_y, modifiers, ctx),
            InputEvent::TouchStart { id, position, at } => {
                self.on_touch_start(id, position, at, &mut effects)
            }
            InputEvent::TouchMove { id, position, at } => {
                self.on_touch_move(id, position, at, ctx, &mut effects)
            }
            InputEvent::TouchEnd { id, at } => self.on_touch_end(id, at, ctx, &mut effects),
            InputEvent::TouchCancel { .. } => self.on_touch_cancel(&mut effects),
            InputEvent::TimerFired { id, at } => match self.timers.take(id) {
                Some(kind) => self.on_timer(kind, at, ctx, &mut effects),
                None => debug!("Ignoring stale timer {:?}", id),
            },
        }

        Self::finish(ctx, revision, &viewport, effects)
    }

    /// Fires every timer due at `now`, earliest first.
    pub fn poll_timers(&mut self, now: Duration, ctx: &mut GestureContext<'_>) -> Vec<GestureEffect> {
        let revision = ctx.document.revision();
        let viewport = ctx.viewport.clone();
        let mut effects = Vec::new();
        while let Some(kind) = self.timers.pop_due(now) {
            self.on_timer(kind, now, ctx, &mut effects);
        }
        Self::finish(ctx, revision, &viewport, effects)
    }

    /// Abandons any gesture in progress, e.g. on teardown.
    pub fn cancel(&mut self) -> Vec<GestureEffect> {
        let mut effects = Vec::new();
        self.end_gesture(&mut effects);
        self.pointer = PointerTracker::default();
        self.touch = TouchTracker::default();
        effects
    }

    fn finish(
        ctx: &GestureContext<'_>,
        revision: u64,
        viewport: &Viewport,
        mut effects: Vec<GestureEffect>,
    ) -> Vec<GestureEffect> {
        if ctx.document.revision() != revision {
            effects.push(GestureEffect::DocumentChanged);
        }
        if *ctx.viewport != *viewport {
            effects.push(GestureEffect::ViewportChanged);
        }
        effects
    }

    fn set_state(&mut self, state: GestureState) {
        if self.state != state {
            debug!("Gesture {:?} -> {:?}", self.state, state);
            self.state = state;
        }
    }

    /// Enters `Drawing` or `Erasing` with a fresh drag at `origin`.
    fn begin_stroke(&mut self, state: GestureState, origin: ScreenPoint) {
        self.set_state(state);
        self.direction.reset(origin);
        self.last_hit = None;
    }

    fn end_gesture(&mut self, effects: &mut Vec<GestureEffect>) {
        self.timers.cancel_all(effects);
        self.last_hit = None;
        self.set_state(GestureState::Idle);
    }

    /// Edits the line under `point` if it differs from the last one.
    fn stroke_at(&mut self, point: ScreenPoint, tolerance: f64, ctx: &mut GestureContext<'_>) {
        let doc = &mut *ctx.document;
        let target = hit_test_biased(
            point,
            &*ctx.viewport,
            doc.width(),
            doc.height(),
            tolerance,
            self.direction.bias(),
        );
        let Some(key) = target.line_key() else {
            return;
        };
        if self.last_hit == Some(key) {
            return;
        }
        self.last_hit = Some(key);
        self.direction.mark_processed();

        let result = match self.state {
            GestureState::Drawing => doc.toggle_line(key),
            GestureState::Erasing => doc.remove_line(key),
            _ => return,
        };
        if let Err(err) = result {
            debug!("Stroke at {} ignored: {}", key, err);
        }
    }

    /// Acts on a click or tap that landed on a label or tail. Returns
    /// whether `target` was one.
    fn click_label(&mut self, target: HitTarget, erase: bool, ctx: &mut GestureContext<'_>) -> bool {
        let doc = &mut *ctx.document;
        let result = match target {
            HitTarget::RowNumber(y) => highlight(doc, HighlightKind::Row, y, erase),
            HitTarget::ColNumber(x) => highlight(doc, HighlightKind::Col, x, erase),
            HitTarget::RowTail(y) if erase => doc.erase_row(y).map(drop),
            HitTarget::RowTail(y) => doc.fill_row(y).map(drop),
            HitTarget::ColTail(x) if erase => doc.erase_column(x).map(drop),
            HitTarget::ColTail(x) => doc.fill_column(x).map(drop),
            _ => return false,
        };
        if let Err(err) = result {
            debug!("Label click on {:?} ignored: {}", target, err);
        }
        true
    }

    /// Single click or tap on a line: draw it, or erase it with `erase`.
    fn click_line(&mut self, key: LineKey, erase: bool, ctx: &mut GestureContext<'_>) {
        let result = if erase {
            ctx.document.remove_line(key)
        } else {
            ctx.document.toggle_line(key)
        };
        if let Err(err) = result {
            debug!("Click on {} ignored: {}", key, err);
        }
    }

    /// Flood fills the cell under `point`. An open contour is reported,
    /// anything else is dropped silently.
    fn fill_at_point(
        &mut self,
        point: ScreenPoint,
        ctx: &mut GestureContext<'_>,
        effects: &mut Vec<GestureEffect>,
    ) {
        let (width, height) = (ctx.document.width(), ctx.document.height());
        let Some(cell) = cell_at(point, &*ctx.viewport, width, height) else {
            return;
        };
        match ctx.document.fill_at(cell) {
            Ok(region) => debug!("Filled {} cells", region.cells),
            Err(err @ GridError::ContourOpen { .. }) => {
                debug!("Fill refused: {}", err);
                effects.push(GestureEffect::FillFailed(err));
            }
            Err(err) => debug!("Fill ignored: {}", err),
        }
    }

    fn target_at(&self, point: ScreenPoint, tolerance: f64, ctx: &GestureContext<'_>) -> HitTarget {
        hit_test(
            point,
            &*ctx.viewport,
            ctx.document.width(),
            ctx.document.height(),
            tolerance,
        )
    }
}

impl Default for GestureMachine {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

fn highlight(
    doc: &mut Document,
    kind: HighlightKind,
    index: i32,
    erase: bool,
) -> Result<(), GridError> {
    if erase {
        doc.remove_highlight(kind, index);
        Ok(())
    } else {
        doc.toggle_highlight(kind, index).map(drop)
    }
}
