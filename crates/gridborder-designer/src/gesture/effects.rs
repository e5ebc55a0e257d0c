use std::time::Duration;

use gridborder_core::GridError;

use super::timers::{TimerId, TimerKind};

/// Something the host has to act on after an event was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureEffect {
    /// The document changed; redraw and persist per host policy.
    DocumentChanged,
    /// Pan or zoom changed; redraw.
    ViewportChanged,
    /// A fill was refused. Nothing was applied.
    FillFailed(GridError),
    Undo,
    Redo,
    /// Vibrate, when the device can.
    Haptic,
    /// Deliver `TimerFired { id }` at `deadline`, or call `poll_timers`.
    ScheduleTimer {
        id: TimerId,
        kind: TimerKind,
        deadline: Duration,
    },
    /// A previously scheduled timer must not be delivered.
    CancelTimer { id: TimerId },
}
