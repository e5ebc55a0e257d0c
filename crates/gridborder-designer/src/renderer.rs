//! Redraw scheduling.
//!
//! The core does not paint. It tells the host when a frame is needed and
//! coalesces any number of mutations between two frames into one redraw.
//! At most one frame request is outstanding at a time.

use tracing::trace;

/// Identifies one frame request made to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// The host's animation-frame facility.
pub trait FrameHost {
    /// Asks for a callback on the next frame. The host later calls
    /// [`FrameScheduler::on_frame`] with the returned handle.
    fn request_frame(&mut self) -> FrameHandle;

    /// Drops a pending request.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Dirty flag plus at most one pending frame request.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    dirty: bool,
    pending: Option<FrameHandle>,
    frames_drawn: u64,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    /// Marks the view dirty and requests a frame unless one is pending.
    pub fn request_redraw(&mut self, host: &mut impl FrameHost) {
        self.dirty = true;
        if self.pending.is_none() {
            let handle = host.request_frame();
            trace!("Requested frame {:?}", handle);
            self.pending = Some(handle);
        }
    }

    /// Cancels the pending request, if any, and requests a new one.
    pub fn reschedule(&mut self, host: &mut impl FrameHost) {
        if let Some(handle) = self.pending.take() {
            host.cancel_frame(handle);
        }
        self.dirty = true;
        self.pending = Some(host.request_frame());
    }

    /// Called by the host when frame `handle` fires. Returns whether the
    /// renderer should draw now.
    pub fn on_frame(&mut self, handle: FrameHandle) -> bool {
        if self.pending != Some(handle) {
            trace!("Ignoring stale frame {:?}", handle);
            return false;
        }
        self.pending = None;
        let draw = std::mem::take(&mut self.dirty);
        if draw {
            self.frames_drawn += 1;
        }
        draw
    }

    /// Drops the pending request, e.g. on teardown.
    pub fn cancel(&mut self, host: &mut impl FrameHost) {
        if let Some(handle) = self.pending.take() {
            host.cancel_frame(handle);
        }
        self.dirty = false;
    }
}
