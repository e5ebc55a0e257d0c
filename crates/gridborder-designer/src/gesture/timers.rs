//! Cancelable timers owned by the gesture state machine.
//!
//! Every scheduled timer gets a fresh id. Cancelled or already fired ids
//! are forgotten, so a late delivery of one is ignored.

use std::time::Duration;

use super::effects::GestureEffect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

impl TimerId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// A single touch may start drawing.
    DrawDelay,
    /// A stationary touch turns into an erase.
    LongPress,
}

#[derive(Debug, Clone, Copy)]
struct Scheduled {
    id: TimerId,
    kind: TimerKind,
    deadline: Duration,
}

#[derive(Debug, Default)]
pub(crate) struct TimerQueue {
    next_id: u64,
    scheduled: Vec<Scheduled>,
}

impl TimerQueue {
    pub fn schedule(
        &mut self,
        kind: TimerKind,
        deadline: Duration,
        effects: &mut Vec<GestureEffect>,
    ) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.scheduled.push(Scheduled { id, kind, deadline });
        effects.push(GestureEffect::ScheduleTimer { id, kind, deadline });
        id
    }

    pub fn cancel_all(&mut self, effects: &mut Vec<GestureEffect>) {
        for timer in self.scheduled.drain(..) {
            effects.push(GestureEffect::CancelTimer { id: timer.id });
        }
    }

    /// Removes a live timer. `None` for unknown or stale ids.
    pub fn take(&mut self, id: TimerId) -> Option<TimerKind> {
        let index = self.scheduled.iter().position(|t| t.id == id)?;
        Some(self.scheduled.remove(index).kind)
    }

    /// Removes and returns the earliest timer due at `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<TimerKind> {
        let index = self
            .scheduled
            .iter()
            .enumerate()
            .filter(|(_, t)| t.deadline <= now)
            .min_by_key(|(_, t)| t.deadline)
            .map(|(i, _)| i)?;
        Some(self.scheduled.remove(index).kind)
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduled.iter().map(|t| t.deadline).min()
    }

}
