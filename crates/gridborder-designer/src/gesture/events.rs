//! Input events consumed by the gesture state machine.

use std::time::Duration;

use super::timers::TimerId;
use crate::viewport::ScreenPoint;

/// Identifies one finger for the lifetime of a touch.
pub type TouchId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Keyboard modifiers held during a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::NONE
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::NONE
        }
    }

    /// Ctrl, or Cmd on platforms where that is the command key.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// A low-level input event. `at` is the time since the session started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown {
        position: ScreenPoint,
        button: PointerButton,
        modifiers: Modifiers,
        at: Duration,
    },
    PointerMove {
        position: ScreenPoint,
        at: Duration,
    },
    PointerUp {
        position: ScreenPoint,
        at: Duration,
    },
    PointerLeave {
        at: Duration,
    },
    /// Scroll wheel or trackpad scroll, in pixels.
    Wheel {
        position: ScreenPoint,
        delta_x: f64,
        delta_y: f64,
        modifiers: Modifiers,
        at: Duration,
    },
    TouchStart {
        id: TouchId,
        position: ScreenPoint,
        at: Duration,
    },
    TouchMove {
        id: TouchId,
        position: ScreenPoint,
        at: Duration,
    },
    TouchEnd {
        id: TouchId,
        at: Duration,
    },
    TouchCancel {
        at: Duration,
    },
    TimerFired {
        id: TimerId,
        at: Duration,
    },
}

impl InputEvent {
    pub fn at(&self) -> Duration {
        match *self {
            InputEvent::PointerDown { at, .. }
            | InputEvent::PointerMove { at, .. }
            | InputEvent::PointerUp { at, .. }
            | InputEvent::PointerLeave { at }
            | InputEvent::Wheel { at, .. }
            | InputEvent::TouchStart { at, .. }
            | InputEvent::TouchMove { at, .. }
            | InputEvent::TouchEnd { at, .. }
            | InputEvent::TouchCancel { at }
            | InputEvent::TimerFired { at, .. } => at,
        }
    }
}
