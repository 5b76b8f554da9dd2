use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::{
    animation::animator::{Animator, FrameOutcome},
    foundation::error::{AnimError, AnimResult},
    host::element::StyleTarget,
};

/// Clock plus "call me before the next repaint" primitive.
///
/// Every [`FrameHost::request_frame`] grants exactly one later call to
/// [`Animator::tick`]; the host decides when that happens.
pub trait FrameHost {
    /// Monotonic timestamp in milliseconds.
    fn now_ms(&self) -> f64;

    /// Ask for one tick before the next repaint.
    fn request_frame(&self);
}

#[derive(Debug, Default)]
struct FrameRequests(Cell<usize>);

impl FrameRequests {
    fn push(&self) {
        self.0.set(self.0.get() + 1);
    }

    fn take(&self) -> bool {
        let pending = self.0.get();
        if pending == 0 {
            return false;
        }
        self.0.set(pending - 1);
        true
    }

    fn pending(&self) -> usize {
        self.0.get()
    }
}

#[derive(Debug, Default)]
struct ManualState {
    now_ms: Cell<f64>,
    requests: FrameRequests,
}

/// Deterministic host: time only moves when told to, frames only fire when asked.
#[derive(Clone, Debug, Default)]
pub struct ManualFrames {
    inner: Rc<ManualState>,
}

impl ManualFrames {
    /// Host at time zero with no pending frames.
    pub fn new() -> Self {
        Self::default()
    }

    /// Jump the clock to `ms`.
    pub fn set_now(&self, ms: f64) {
        self.inner.now_ms.set(ms);
    }

    /// Move the clock forward by `ms`.
    pub fn advance(&self, ms: f64) {
        self.inner.now_ms.set(self.inner.now_ms.get() + ms);
    }

    /// Frames requested but not yet fired.
    pub fn pending(&self) -> usize {
        self.inner.requests.pending()
    }

    /// Fire one pending frame into `animator`; `None` when nothing was requested.
    pub fn fire<E: StyleTarget>(
        &self,
        animator: &mut Animator<E>,
    ) -> AnimResult<Option<FrameOutcome>> {
        if !self.inner.requests.take() {
            return Ok(None);
        }
        animator.tick().map(Some)
    }

    /// Advance by `step_ms` and fire until no frame is pending. Returns the
    /// number of frames fired.
    pub fn run_until_idle<E: StyleTarget>(
        &self,
        animator: &mut Animator<E>,
        step_ms: f64,
    ) -> AnimResult<usize> {
        if !(step_ms.is_finite() && step_ms > 0.0) {
            return Err(AnimError::validation("frame step must be > 0"));
        }
        let mut fired = 0;
        while self.pending() > 0 {
            self.advance(step_ms);
            self.fire(animator)?;
            fired += 1;
        }
        Ok(fired)
    }
}

impl FrameHost for ManualFrames {
    fn now_ms(&self) -> f64 {
        self.inner.now_ms.get()
    }

    fn request_frame(&self) {
        self.inner.requests.push();
    }
}

#[derive(Debug)]
struct RealtimeState {
    origin: Instant,
    requests: FrameRequests,
}

/// Wall-clock host for headless playback on the current thread.
#[derive(Clone, Debug)]
pub struct RealtimeFrames {
    inner: Rc<RealtimeState>,
}

impl Default for RealtimeFrames {
    fn default() -> Self {
        Self::new()
    }
}

impl RealtimeFrames {
    /// Host whose clock starts now.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RealtimeState {
                origin: Instant::now(),
                requests: FrameRequests::default(),
            }),
        }
    }

    /// Sleep `frame_interval` before each granted frame and tick `animator`
    /// until it stops requesting frames. Returns the number of frames fired.
    pub fn drive_blocking<E: StyleTarget>(
        &self,
        animator: &mut Animator<E>,
        frame_interval: Duration,
    ) -> AnimResult<usize> {
        let mut fired = 0;
        while self.inner.requests.take() {
            std::thread::sleep(frame_interval);
            animator.tick()?;
            fired += 1;
        }
        tracing::debug!(fired, "realtime frame loop drained");
        Ok(fired)
    }
}

impl FrameHost for RealtimeFrames {
    fn now_ms(&self) -> f64 {
        self.inner.origin.elapsed().as_secs_f64() * 1000.0
    }

    fn request_frame(&self) {
        self.inner.requests.push();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/frames.rs"]
mod tests;
