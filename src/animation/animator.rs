use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use std::sync::Arc;

use crate::{
    animation::descriptor::{AnimOptions, AnimationDescriptor, DescriptorPatch},
    animation::ease::EasingRegistry,
    foundation::error::{AnimError, AnimResult},
    foundation::value::{StyleValue, parse_float},
    host::element::StyleTarget,
    host::frames::FrameHost,
};

/// Lifecycle callback; receives the bound element, if any.
///
/// Listeners are compared by `Rc` identity when unregistering. They get no
/// handle to the animator, so chaining the queue from a `complete` listener
/// is not possible; drive the next `run` from the host when
/// [`Animator::tick`] returns [`FrameOutcome::Completed`].
pub type Listener<E> = Rc<dyn Fn(Option<&E>)>;

/// Wrap a closure as a [`Listener`].
pub fn listener<E>(f: impl Fn(Option<&E>) + 'static) -> Listener<E> {
    Rc::new(f)
}

/// Point in an animation's lifecycle where listeners run.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// After start values are captured, before the first frame.
    Begin,
    /// After every interpolated frame.
    Moving,
    /// After target values are written and the descriptor is dequeued.
    Complete,
}

impl Phase {
    /// All phases in lifecycle order.
    pub const ALL: [Phase; 3] = [Phase::Begin, Phase::Moving, Phase::Complete];

    /// Lowercase name (`"begin"`, `"moving"`, `"complete"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Begin => "begin",
            Self::Moving => "moving",
            Self::Complete => "complete",
        }
    }
}

impl FromStr for Phase {
    type Err = AnimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| AnimError::validation(format!("unknown lifecycle phase '{s}'")))
    }
}

/// What a single [`Animator::tick`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Not running; the tick had no effect.
    Idle,
    /// Interpolated one frame and requested the next.
    Moving,
    /// Duration elapsed; targets written and the descriptor dequeued.
    Completed,
}

struct Listeners<E> {
    begin: Vec<Listener<E>>,
    moving: Vec<Listener<E>>,
    complete: Vec<Listener<E>>,
}

impl<E> Default for Listeners<E> {
    fn default() -> Self {
        Self {
            begin: Vec::new(),
            moving: Vec::new(),
            complete: Vec::new(),
        }
    }
}

impl<E> Listeners<E> {
    fn get(&self, phase: Phase) -> &Vec<Listener<E>> {
        match phase {
            Phase::Begin => &self.begin,
            Phase::Moving => &self.moving,
            Phase::Complete => &self.complete,
        }
    }

    fn get_mut(&mut self, phase: Phase) -> &mut Vec<Listener<E>> {
        match phase {
            Phase::Begin => &mut self.begin,
            Phase::Moving => &mut self.moving,
            Phase::Complete => &mut self.complete,
        }
    }
}

/// Queue-driven style animator bound to at most one element.
///
/// The front of the queue is the active descriptor. [`Animator::run`] starts
/// it and requests a frame from the [`FrameHost`]; the host then calls
/// [`Animator::tick`] once per granted frame. Completion dequeues the active
/// descriptor but does not start the next one: call `run` again to advance,
/// typically when `tick` reports [`FrameOutcome::Completed`].
///
/// At most one frame is outstanding at a time. A frame requested before
/// [`Animator::stop`] is reused by a following `run` instead of starting a
/// second loop.
pub struct Animator<E> {
    element: Option<E>,
    queue: VecDeque<AnimationDescriptor>,
    listeners: Listeners<E>,
    running: bool,
    start_ms: f64,
    elapsed_ms: f64,
    run_duration_ms: f64,
    frame_requested: bool,
    frames: Box<dyn FrameHost>,
    registry: Arc<EasingRegistry>,
}

/// Build an [`Animator`] with the standard easing registry.
pub fn create_animator<E: StyleTarget>(
    target: impl IntoIterator<Item = E>,
    options: AnimOptions,
    frames: impl FrameHost + 'static,
) -> Animator<E> {
    Animator::new(target, options, frames)
}

impl<E: StyleTarget> Animator<E> {
    /// Bind to the first element of `target` (none binds nothing and turns
    /// style access into no-ops) and queue `options`.
    pub fn new(
        target: impl IntoIterator<Item = E>,
        options: AnimOptions,
        frames: impl FrameHost + 'static,
    ) -> Self {
        Self::with_registry(target, options, frames, EasingRegistry::shared_standard())
    }

    /// Like [`Animator::new`], resolving easings against `registry`.
    pub fn with_registry(
        target: impl IntoIterator<Item = E>,
        options: AnimOptions,
        frames: impl FrameHost + 'static,
        registry: Arc<EasingRegistry>,
    ) -> Self {
        let element = target.into_iter().next();
        if element.is_none() {
            tracing::debug!("animator created without an element");
        }
        let mut animator = Self {
            element,
            queue: VecDeque::new(),
            listeners: Listeners::default(),
            running: false,
            start_ms: 0.0,
            elapsed_ms: 0.0,
            run_duration_ms: 0.0,
            frame_requested: false,
            frames: Box::new(frames),
            registry,
        };
        animator.add_queue(options);
        animator
    }

    /// The bound element.
    pub fn element(&self) -> Option<&E> {
        self.element.as_ref()
    }

    /// Whether a run is in flight.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Host timestamp captured by the last [`Animator::begin`].
    pub fn start_ms(&self) -> f64 {
        self.start_ms
    }

    /// Elapsed time measured by the last tick.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// Number of queued descriptors, the active one included.
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// The active (front) descriptor.
    pub fn active(&self) -> Option<&AnimationDescriptor> {
        self.queue.front()
    }

    /// Number of listeners registered for `phase`.
    pub fn listener_count(&self, phase: Phase) -> usize {
        self.listeners.get(phase).len()
    }

    /// Normalize `options` and append them to the queue.
    pub fn add_queue(&mut self, options: AnimOptions) -> &mut Self {
        let descriptor = AnimationDescriptor::from_options(options, &self.registry);
        if descriptor.ease.is_none() {
            tracing::debug!(easing = ?descriptor.easing_id, "queued animation has no easing");
        }
        self.queue.push_back(descriptor);
        tracing::debug!(queue_len = self.queue.len(), "animation queued");
        self
    }

    /// Drop every queued descriptor without notifying listeners.
    pub fn clear_queue(&mut self) -> &mut Self {
        tracing::debug!(dropped = self.queue.len(), "animation queue cleared");
        self.queue.clear();
        self
    }

    /// Drop the active descriptor.
    pub fn shift_queue(&mut self) -> &mut Self {
        self.queue.pop_front();
        self
    }

    /// Abandon the active animation: no completion write, no `complete` listeners.
    pub fn stop(&mut self) -> &mut Self {
        tracing::debug!(was_running = self.running, "animation stopped");
        self.running = false;
        self.shift_queue()
    }

    /// Register `listener` for `phase`.
    pub fn on(&mut self, phase: Phase, listener: Listener<E>) -> &mut Self {
        self.listeners.get_mut(phase).push(listener);
        self
    }

    /// Remove every occurrence of `listener` from `phase`, or all listeners
    /// of `phase` when `None`.
    pub fn un(&mut self, phase: Phase, listener: Option<&Listener<E>>) -> &mut Self {
        let list = self.listeners.get_mut(phase);
        match listener {
            Some(target) => list.retain(|l| !Rc::ptr_eq(l, target)),
            None => list.clear(),
        }
        self
    }

    /// Update the active descriptor in place.
    pub fn set(&mut self, patch: DescriptorPatch) -> AnimResult<&mut Self> {
        let active = self.queue.front_mut().ok_or_else(AnimError::empty_queue)?;
        active.apply(patch, &self.registry);
        Ok(self)
    }

    /// Start the active descriptor and request the first frame.
    ///
    /// The loop's end time is fixed here; a later duration patch changes the
    /// curve but not when the run completes.
    #[tracing::instrument(skip(self), fields(queue_len = self.queue.len()))]
    pub fn run(&mut self) -> AnimResult<&mut Self> {
        let active = self.queue.front().ok_or_else(AnimError::empty_queue)?;
        if active.ease.is_none() {
            return Err(active.missing_easing());
        }
        self.begin()?;
        if let Some(active) = self.queue.front() {
            self.run_duration_ms = active.duration_ms;
        }
        tracing::debug!(duration_ms = self.run_duration_ms, "animation started");
        self.request_frame();
        Ok(self)
    }

    /// Mark running, capture the start time, fill missing start values from
    /// the element's computed style (0 when unreadable) and notify `begin`.
    pub fn begin(&mut self) -> AnimResult<&mut Self> {
        let active = self.queue.front_mut().ok_or_else(AnimError::empty_queue)?;
        self.running = true;
        self.start_ms = self.frames.now_ms();
        self.elapsed_ms = 0.0;

        let missing: Vec<String> = active
            .to
            .keys()
            .filter(|name| !active.from.contains_key(*name))
            .cloned()
            .collect();
        for name in missing {
            let current = self
                .element
                .as_ref()
                .and_then(|el| el.computed_style(&name))
                .and_then(|css| parse_float(&css))
                .unwrap_or(0.0);
            active.from.insert(name, StyleValue::Number(current));
        }

        self.trigger(Phase::Begin);
        Ok(self)
    }

    /// Write the interpolated value of every numeric property at the current
    /// elapsed time and notify `moving`.
    pub fn moving(&mut self) -> AnimResult<&mut Self> {
        let active = self.queue.front().ok_or_else(AnimError::empty_queue)?;
        let frame = active.sample(self.elapsed_ms)?;
        if let Some(el) = &self.element {
            el.set_styles(&frame);
        }
        self.trigger(Phase::Moving);
        Ok(self)
    }

    /// Stop, write the exact target values, dequeue the active descriptor and
    /// notify `complete`.
    pub fn complete(&mut self) -> AnimResult<&mut Self> {
        self.running = false;
        let finished = self.queue.pop_front().ok_or_else(AnimError::empty_queue)?;
        if let Some(el) = &self.element {
            el.set_styles(&finished.to);
        }
        tracing::debug!(remaining = self.queue.len(), "animation complete");
        self.trigger(Phase::Complete);
        Ok(self)
    }

    /// Handle one granted frame.
    pub fn tick(&mut self) -> AnimResult<FrameOutcome> {
        self.frame_requested = false;
        if !self.running {
            tracing::trace!("tick while idle");
            return Ok(FrameOutcome::Idle);
        }
        if self.queue.is_empty() {
            tracing::warn!("queue emptied during a run; stopping");
            self.running = false;
            return Ok(FrameOutcome::Idle);
        }

        self.elapsed_ms = self.frames.now_ms() - self.start_ms;
        if self.elapsed_ms > self.run_duration_ms {
            self.complete()?;
            return Ok(FrameOutcome::Completed);
        }

        tracing::trace!(elapsed_ms = self.elapsed_ms, "frame");
        if let Err(err) = self.moving().map(|_| ()) {
            self.running = false;
            return Err(err);
        }
        self.request_frame();
        Ok(FrameOutcome::Moving)
    }

    fn request_frame(&mut self) {
        if self.frame_requested {
            return;
        }
        self.frame_requested = true;
        self.frames.request_frame();
    }

    fn trigger(&self, phase: Phase) {
        for listener in self.listeners.get(phase) {
            listener(self.element.as_ref());
        }
    }
}

impl<E> fmt::Debug for Animator<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animator")
            .field("bound", &self.element.is_some())
            .field("queue", &self.queue)
            .field("running", &self.running)
            .field("frame_requested", &self.frame_requested)
            .field("start_ms", &self.start_ms)
            .field("elapsed_ms", &self.elapsed_ms)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/animator.rs"]
mod tests;
